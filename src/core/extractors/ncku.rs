use super::{clean_text, parse_date, selector, Extraction};
use crate::core::window::LookbackWindow;
use crate::domain::model::{Announcement, Category, Institution};
use crate::utils::error::Result;
use scraper::Html;

const DATE_FORMAT: &str = "%Y.%m.%d";

/// Prepended to root-relative announcement links.
pub const ORIGIN: &str = "https://www.csie.ncku.edu.tw";

/// Announcements are `li.li-title` entries with a link and a right-floated date.
pub fn extract(
    document: &Html,
    category: Category,
    window: &LookbackWindow,
) -> Result<Extraction> {
    let item_selector = selector("li.li-title")?;
    let link_selector = selector("a")?;
    let date_selector = selector("small.float-right")?;

    let mut extraction = Extraction::default();

    for item in document.select(&item_selector) {
        extraction.candidates += 1;

        let Some(anchor) = item.select(&link_selector).next() else {
            continue;
        };
        let title = clean_text(anchor);
        if title.is_empty() {
            continue;
        }

        let Some(posted_date) = item
            .select(&date_selector)
            .next()
            .and_then(|small| parse_date(&clean_text(small), DATE_FORMAT))
        else {
            continue;
        };
        if !window.contains(posted_date) {
            continue;
        }

        let link = anchor
            .value()
            .attr("href")
            .map(|href| absolutize(ORIGIN, href));

        extraction.announcements.push(Announcement {
            institution: Institution::Ncku,
            title,
            posted_date,
            category,
            link,
        });
    }

    Ok(extraction)
}

/// Root-relative hrefs get the department origin; anything else is kept as is.
pub fn absolutize(origin: &str, href: &str) -> String {
    if href.starts_with('/') {
        format!("{}{}", origin.trim_end_matches('/'), href)
    } else {
        href.to_string()
    }
}
