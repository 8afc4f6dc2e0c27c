use super::{clean_text, parse_date, selector, Extraction};
use crate::core::window::LookbackWindow;
use crate::domain::model::{Announcement, Category, Institution};
use crate::utils::error::Result;
use scraper::Html;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Announcements are table rows with a post-date cell and a content cell.
pub fn extract(
    document: &Html,
    category: Category,
    window: &LookbackWindow,
) -> Result<Extraction> {
    let row_selector = selector("tr")?;
    let date_selector = selector("td.i-annc__postdate")?;
    let title_selector = selector("td.i-annc__content a.i-annc__title")?;

    let mut extraction = Extraction::default();

    for row in document.select(&row_selector) {
        let Some(date_cell) = row.select(&date_selector).next() else {
            continue;
        };
        extraction.candidates += 1;

        let Some(posted_date) = parse_date(&clean_text(date_cell), DATE_FORMAT) else {
            continue;
        };
        if !window.contains(posted_date) {
            continue;
        }

        let Some(title_link) = row.select(&title_selector).next() else {
            continue;
        };
        let title = clean_text(title_link);
        if title.is_empty() {
            continue;
        }

        extraction.announcements.push(Announcement {
            institution: Institution::Ntu,
            title,
            posted_date,
            category,
            link: None,
        });
    }

    Ok(extraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn window() -> LookbackWindow {
        LookbackWindow::ending_yesterday(NaiveDate::from_ymd_opt(2025, 3, 20).unwrap())
    }

    fn row(date: &str, title: Option<&str>) -> String {
        let content = match title {
            Some(t) => format!(r#"<a class="i-annc__title" href="/x">{}</a>"#, t),
            None => "<span>no link</span>".to_string(),
        };
        format!(
            r#"<tr><td class="i-annc__postdate">{}</td><td class="i-annc__content">{}</td></tr>"#,
            date, content
        )
    }

    fn page(rows: &[String]) -> Html {
        Html::parse_document(&format!(
            "<html><body><table><tr><th>Date</th><th>Title</th></tr>{}</table></body></html>",
            rows.join("")
        ))
    }

    #[test]
    fn test_keeps_rows_inside_window() {
        let document = page(&[
            row("2025-03-19", Some("Seminar X")),
            row("\u{200b}2025-03-18\u{200b}", Some("Workshop Y")),
            row("2025-03-17", Some("Too old")),
            row("2025-03-20", Some("Today")),
        ]);

        let extraction = extract(&document, Category::Activity, &window()).unwrap();

        let titles: Vec<_> = extraction
            .announcements
            .iter()
            .map(|a| a.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Seminar X", "Workshop Y"]);
        assert_eq!(extraction.candidates, 4);
        assert!(extraction
            .announcements
            .iter()
            .all(|a| a.institution == Institution::Ntu && a.link.is_none()));
    }

    #[test]
    fn test_skips_missing_title_and_bad_date() {
        let document = page(&[
            row("2025-03-19", None),
            row("2025/03/19", Some("Wrong format")),
            row("2025-03-19", Some("   ")),
            row("2025-03-19", Some("Kept")),
        ]);

        let extraction = extract(&document, Category::Recruitment, &window()).unwrap();

        assert_eq!(extraction.announcements.len(), 1);
        assert_eq!(extraction.announcements[0].title, "Kept");
        assert_eq!(extraction.announcements[0].category, Category::Recruitment);
    }

    #[test]
    fn test_page_without_rows_has_no_candidates() {
        let document = Html::parse_document("<html><body><p>maintenance</p></body></html>");
        let extraction = extract(&document, Category::Activity, &window()).unwrap();

        assert_eq!(extraction.candidates, 0);
        assert!(extraction.announcements.is_empty());
    }
}
