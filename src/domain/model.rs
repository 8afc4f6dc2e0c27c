use chrono::NaiveDate;
use std::fmt;

/// Departments whose announcement boards are scraped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Institution {
    Ntu,
    Nycu,
    Ncku,
}

impl Institution {
    /// Display order used by the digest.
    pub const ALL: [Institution; 3] = [Institution::Ntu, Institution::Nycu, Institution::Ncku];

    pub fn name(&self) -> &'static str {
        match self {
            Institution::Ntu => "NTU",
            Institution::Nycu => "NYCU",
            Institution::Ncku => "NCKU",
        }
    }
}

impl fmt::Display for Institution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Activity,
    Recruitment,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Activity => f.write_str("activity"),
            Category::Recruitment => f.write_str("recruitment"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub institution: Institution,
    pub title: String,
    pub posted_date: NaiveDate,
    pub category: Category,
    pub link: Option<String>,
}
