//! Display formatting helpers.

use crate::models::config::ImageConfig;
use crate::models::movie::SpokenLanguage;

/// Shown for any absent value.
pub const PLACEHOLDER: &str = "-";

/// Local fallback for listing posters.
pub const NO_IMAGE: &str = "/no-image.png";

const NO_POSTER: &str = "https://placehold.co/500x750?text=No+Poster";
const NO_BACKDROP: &str = "https://placehold.co/1200x500?text=No+Backdrop";
const NO_COLLECTION_POSTER: &str = "https://placehold.co/240x360?text=No+Poster";

/// Text value or placeholder; empty strings count as absent.
pub fn or_placeholder(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

/// Numeric value or placeholder; zero counts as absent.
pub fn number_or_placeholder<T: std::fmt::Display + PartialEq + Default>(value: Option<T>) -> String {
    match value {
        Some(v) if v != T::default() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Whole US dollars with thousands separators, e.g. `$200,000,000`.
pub fn format_currency(value: Option<u64>) -> String {
    match value {
        Some(v) if v > 0 => format!("${}", group_thousands(v)),
        _ => PLACEHOLDER.to_string(),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Minutes as `Xh Ym`.
pub fn format_runtime(minutes: Option<u32>) -> String {
    match minutes {
        Some(m) if m > 0 => format!("{}h {}m", m / 60, m % 60),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Join the present, non-empty names with `, `.
pub fn format_list<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let joined: Vec<&str> = names
        .into_iter()
        .flatten()
        .filter(|n| !n.is_empty())
        .collect();
    if joined.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        joined.join(", ")
    }
}

/// Languages as `English (en), Français (fr)`.
pub fn format_languages(languages: &[SpokenLanguage]) -> String {
    if languages.is_empty() {
        return PLACEHOLDER.to_string();
    }
    languages
        .iter()
        .map(|lang| {
            let name = lang
                .english_name
                .as_deref()
                .filter(|n| !n.is_empty())
                .or(lang.name.as_deref().filter(|n| !n.is_empty()));
            format!(
                "{} ({})",
                or_placeholder(name),
                or_placeholder(lang.iso_639_1.as_deref())
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn image_url(base: &str, path: Option<&str>, fallback: &str) -> String {
    match path.filter(|p| !p.is_empty()) {
        Some(p) => format!("{}{}", base, p),
        None => fallback.to_string(),
    }
}

/// Poster URL for a listing card.
pub fn card_poster_url(images: &ImageConfig, path: Option<&str>) -> String {
    image_url(&images.poster_base_url, path, NO_IMAGE)
}

/// Poster URL for the detail view.
pub fn poster_url(images: &ImageConfig, path: Option<&str>) -> String {
    image_url(&images.poster_base_url, path, NO_POSTER)
}

/// Backdrop URL for the detail view.
pub fn backdrop_url(images: &ImageConfig, path: Option<&str>) -> String {
    image_url(&images.backdrop_base_url, path, NO_BACKDROP)
}

/// Poster URL for a parent collection.
pub fn collection_poster_url(images: &ImageConfig, path: Option<&str>) -> String {
    image_url(&images.poster_base_url, path, NO_COLLECTION_POSTER)
}

/// Truncate to `max` characters with an ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        format!("{}...", s.chars().take(max.saturating_sub(3)).collect::<String>())
    } else {
        s.to_string()
    }
}
