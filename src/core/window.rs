use chrono::{Days, NaiveDate};

/// Inclusive two-day span ending the day before the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookbackWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl LookbackWindow {
    pub fn ending_yesterday(today: NaiveDate) -> Self {
        let end = today.checked_sub_days(Days::new(1)).unwrap_or(today);
        let start = end.checked_sub_days(Days::new(1)).unwrap_or(end);
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_covers_two_days_before_today() {
        let window = LookbackWindow::ending_yesterday(date(2025, 3, 20));

        assert_eq!(window.start, date(2025, 3, 18));
        assert_eq!(window.end, date(2025, 3, 19));
        assert!(window.contains(date(2025, 3, 18)));
        assert!(window.contains(date(2025, 3, 19)));
        assert!(!window.contains(date(2025, 3, 17)));
        assert!(!window.contains(date(2025, 3, 20)));
    }

    #[test]
    fn test_window_crosses_month_and_year_boundaries() {
        let window = LookbackWindow::ending_yesterday(date(2025, 1, 1));

        assert_eq!(window.start, date(2024, 12, 30));
        assert_eq!(window.end, date(2024, 12, 31));

        let leap = LookbackWindow::ending_yesterday(date(2024, 3, 1));
        assert_eq!(leap.start, date(2024, 2, 28));
        assert_eq!(leap.end, date(2024, 2, 29));
    }
}
