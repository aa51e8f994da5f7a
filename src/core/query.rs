//! Search and sort over the canonical upcoming collection.
//!
//! [`derive_displayed`] is a pure function: it never touches its input and
//! always rebuilds the displayed list from scratch.

use crate::models::{MovieSummary, QueryParameters, SortOption};
use chrono::{DateTime, NaiveDate};
use feruca::{Collator, Locale, Tailoring};
use std::cmp::Ordering;

/// Derive the displayed collection: filter by title, then sort.
pub fn derive_displayed(canonical: &[MovieSummary], params: &QueryParameters) -> Vec<MovieSummary> {
    let mut result: Vec<MovieSummary> = if params.search_term.is_empty() {
        canonical.to_vec()
    } else {
        let needle = params.search_term.to_lowercase();
        canonical
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    };

    // `sort_by` is stable, so equal keys keep their filtered order.
    match params.sort_option {
        SortOption::None => {}
        SortOption::TitleAsc => {
            let mut collator = title_collator();
            result.sort_by(|a, b| collator.collate(a.title.as_str(), b.title.as_str()));
        }
        SortOption::TitleDesc => {
            let mut collator = title_collator();
            result.sort_by(|a, b| collator.collate(b.title.as_str(), a.title.as_str()));
        }
        SortOption::DateAsc => result.sort_by(|a, b| compare_dates(&a.release_date, &b.release_date)),
        SortOption::DateDesc => result.sort_by(|a, b| compare_dates(&b.release_date, &a.release_date)),
    }

    result
}

/// Root-locale Unicode collator with punctuation and spaces significant.
///
/// Tertiary strength with a code point tie-break, so only identical titles
/// compare equal.
fn title_collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, true)
}

/// Locale-aware title ordering.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    title_collator().collate(a, b)
}

/// Parse a release date. Accepts `YYYY-MM-DD` and RFC 3339 timestamps.
pub fn parse_release_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|d| d.date_naive()))
}

/// Ascending release date ordering.
///
/// Unparsable dates are equal to each other and greater than every valid
/// date: last when ascending, first when the comparison is reversed.
pub fn compare_dates(a: &str, b: &str) -> Ordering {
    match (parse_release_date(a), parse_release_date(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
