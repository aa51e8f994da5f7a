//! Movie data models as returned by TMDB.

use serde::{Deserialize, Deserializer, Serialize};

/// One entry of the upcoming movies listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// TMDB ID.
    pub id: u64,
    /// Display title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Release date (YYYY-MM-DD), empty when unknown.
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
    /// Poster path fragment, e.g. "/abc.jpg".
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Overview/synopsis.
    #[serde(default)]
    pub overview: Option<String>,
    /// Original language code.
    #[serde(default)]
    pub original_language: Option<String>,
    /// User rating (0-10).
    #[serde(default)]
    pub vote_average: Option<f64>,
}

impl MovieSummary {
    /// Create a summary with only the fields the listing needs.
    pub fn new(id: u64, title: &str, release_date: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            release_date: release_date.to_string(),
            ..Default::default()
        }
    }
}

/// A page of the upcoming movies listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpcomingPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<MovieSummary>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u32>,
}

/// Full movie record from the detail endpoint.
///
/// Every field is optional: TMDB omits or nulls plenty of them for
/// unreleased titles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieDetail {
    pub id: Option<u64>,
    pub imdb_id: Option<String>,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub original_language: Option<String>,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub status: Option<String>,
    pub release_date: Option<String>,
    pub homepage: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub adult: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub video: bool,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    pub budget: Option<u64>,
    pub revenue: Option<u64>,
    pub popularity: Option<f64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u64>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub belongs_to_collection: Option<CollectionRef>,
    #[serde(deserialize_with = "null_as_default")]
    pub genres: Vec<Genre>,
    #[serde(deserialize_with = "null_as_default")]
    pub spoken_languages: Vec<SpokenLanguage>,
    #[serde(deserialize_with = "null_as_default")]
    pub origin_country: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub production_companies: Vec<ProductionCompany>,
    #[serde(deserialize_with = "null_as_default")]
    pub production_countries: Vec<ProductionCountry>,
}

/// Genre.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
}

/// Spoken language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpokenLanguage {
    #[serde(default)]
    pub english_name: Option<String>,
    #[serde(default)]
    pub iso_639_1: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Production company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductionCompany {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub origin_country: Option<String>,
}

/// Production country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductionCountry {
    #[serde(default)]
    pub iso_3166_1: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Parent collection (franchise) reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionRef {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
