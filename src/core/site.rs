use crate::config::REQUEST_TIMEOUT;
use crate::core::extractors::{self, Extraction};
use crate::core::window::LookbackWindow;
use crate::domain::model::{Category, Institution};
use crate::domain::ports::FetchProfile;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use chrono::NaiveDate;
use scraper::Html;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// One department with its activity and recruitment boards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub institution: Institution,
    pub activity_url: String,
    pub recruit_url: String,
}

impl Site {
    pub fn new(
        institution: Institution,
        activity_url: impl Into<String>,
        recruit_url: impl Into<String>,
    ) -> Self {
        Self {
            institution,
            activity_url: activity_url.into(),
            recruit_url: recruit_url.into(),
        }
    }

    pub fn production(institution: Institution) -> Self {
        match institution {
            Institution::Ntu => Self::new(
                institution,
                "https://www.csie.ntu.edu.tw/zh_tw/Announcements/Announcement9",
                "https://www.csie.ntu.edu.tw/zh_tw/Announcements/Announcement10",
            ),
            Institution::Nycu => Self::new(
                institution,
                "https://www.cs.nycu.edu.tw/announcements/activity",
                "https://www.cs.nycu.edu.tw/announcements/corporation",
            ),
            Institution::Ncku => Self::new(
                institution,
                "https://www.csie.ncku.edu.tw/zh-hant/news/speeches",
                "https://www.csie.ncku.edu.tw/zh-hant/news/jobs",
            ),
        }
    }

    /// All production sites in digest display order.
    pub fn all_production() -> Vec<Site> {
        Institution::ALL.into_iter().map(Self::production).collect()
    }

    pub fn name(&self) -> &'static str {
        self.institution.name()
    }

    /// Exact match against the activity board; everything else is recruitment.
    pub fn category_for(&self, url: &str) -> Category {
        if url == self.activity_url {
            Category::Activity
        } else {
            Category::Recruitment
        }
    }

    pub fn endpoint(&self, category: Category) -> &str {
        match category {
            Category::Activity => &self.activity_url,
            Category::Recruitment => &self.recruit_url,
        }
    }

    pub fn fetch_profile(&self) -> FetchProfile {
        let user_agent = match self.institution {
            Institution::Nycu => Some(BROWSER_USER_AGENT),
            Institution::Ntu | Institution::Ncku => None,
        };
        FetchProfile {
            user_agent,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Parses a board page fetched from `url` and keeps announcements
    /// posted inside the window ending the day before `today`.
    pub fn extract(&self, markup: &str, url: &str, today: NaiveDate) -> Result<Extraction> {
        let window = LookbackWindow::ending_yesterday(today);
        let category = self.category_for(url);
        let document = Html::parse_document(markup);

        match self.institution {
            Institution::Ntu => extractors::ntu::extract(&document, category, &window),
            Institution::Nycu => extractors::nycu::extract(&document, category, &window),
            Institution::Ncku => extractors::ncku::extract(&document, category, &window),
        }
    }
}

impl Validate for Site {
    fn validate(&self) -> Result<()> {
        validate_url(&format!("{}.activity_url", self.name()), &self.activity_url)?;
        validate_url(&format!("{}.recruit_url", self.name()), &self.recruit_url)?;
        Ok(())
    }
}
