//! Per-institution markup parsers.
//!
//! Each parser walks its board's candidate nodes, drops anything outside the
//! lookback window or missing a date/title, and reports how many candidates
//! it saw so callers can tell an empty board from a changed layout.

pub mod ncku;
pub mod ntu;
pub mod nycu;

use crate::domain::model::Announcement;
use crate::utils::error::{DigestError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use scraper::{ElementRef, Selector};

#[derive(Debug, Default)]
pub struct Extraction {
    pub candidates: usize,
    pub announcements: Vec<Announcement>,
}

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| DigestError::MarkupError {
        message: format!("invalid selector {:?}: {:?}", css, e),
    })
}

/// Trimmed text content with zero-width spaces removed.
pub(crate) fn clean_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .replace('\u{200b}', "")
        .trim()
        .to_string()
}

pub(crate) fn parse_date(raw: &str, format: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw, format) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::debug!("Skipping candidate with unparsable date {:?}: {}", raw, e);
            None
        }
    }
}

pub(crate) fn parse_datetime_date(raw: &str, format: &str) -> Option<NaiveDate> {
    match NaiveDateTime::parse_from_str(raw, format) {
        Ok(datetime) => Some(datetime.date()),
        Err(e) => {
            tracing::debug!("Skipping candidate with unparsable timestamp {:?}: {}", raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_clean_text_strips_zero_width_spaces() {
        let fragment = Html::parse_fragment("<span>\u{200b} 2025-03-18\u{200b} </span>");
        let span = fragment.select(&selector("span").unwrap()).next().unwrap();

        assert_eq!(clean_text(span), "2025-03-18");
    }

    #[test]
    fn test_invalid_selector_is_markup_error() {
        let err = selector("li[").unwrap_err();
        assert!(matches!(err, DigestError::MarkupError { .. }));
    }

    #[test]
    fn test_parse_helpers_reject_wrong_format() {
        assert!(parse_date("2025.03.18", "%Y-%m-%d").is_none());
        assert_eq!(
            parse_date("2025.03.18", "%Y.%m.%d"),
            NaiveDate::from_ymd_opt(2025, 3, 18)
        );
        assert_eq!(
            parse_datetime_date("2025-03-18 09:30", "%Y-%m-%d %H:%M"),
            NaiveDate::from_ymd_opt(2025, 3, 18)
        );
        assert!(parse_datetime_date("2025-03-18", "%Y-%m-%d %H:%M").is_none());
    }
}
