use super::{clean_text, parse_datetime_date, selector, Extraction};
use crate::core::window::LookbackWindow;
use crate::domain::model::{Announcement, Category, Institution};
use crate::utils::error::Result;
use scraper::Html;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Announcements are list items carrying an `h2` link and a `<time datetime>`.
pub fn extract(
    document: &Html,
    category: Category,
    window: &LookbackWindow,
) -> Result<Extraction> {
    let item_selector = selector("li.announcement-item")?;
    let title_selector = selector("h2 a")?;
    let time_selector = selector("time")?;

    let mut extraction = Extraction::default();

    for item in document.select(&item_selector) {
        extraction.candidates += 1;

        let title = item
            .select(&title_selector)
            .next()
            .map(clean_text)
            .filter(|t| !t.is_empty());

        let posted_date = item
            .select(&time_selector)
            .next()
            .and_then(|time| time.value().attr("datetime"))
            .and_then(|raw| parse_datetime_date(raw.trim(), DATETIME_FORMAT));

        let (Some(title), Some(posted_date)) = (title, posted_date) else {
            continue;
        };
        if !window.contains(posted_date) {
            continue;
        }

        extraction.announcements.push(Announcement {
            institution: Institution::Nycu,
            title,
            posted_date,
            category,
            link: None,
        });
    }

    Ok(extraction)
}
