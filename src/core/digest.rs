use crate::core::site::Site;
use crate::domain::model::{Announcement, Category};

const ACTIVITY_HEADING: &str = "昨日活動訊息：";
const RECRUITMENT_HEADING: &str = "昨日徵才訊息：";
const DIVIDER: &str = "------------------------";
const NONE_MARKER: &str = "無";
const BULLET: &str = "⭐";
const SEE_MORE: &str = "看更多：";

/// Renders the two-section digest, iterating `sites` in the given order.
/// Records keep their accumulated order within each site.
pub fn format_digest(records: &[Announcement], sites: &[Site]) -> String {
    let mut message = String::new();

    push_section(&mut message, ACTIVITY_HEADING, Category::Activity, records, sites);
    message.push_str(DIVIDER);
    message.push('\n');
    push_section(
        &mut message,
        RECRUITMENT_HEADING,
        Category::Recruitment,
        records,
        sites,
    );

    message
}

fn push_section(
    message: &mut String,
    heading: &str,
    category: Category,
    records: &[Announcement],
    sites: &[Site],
) {
    message.push_str(heading);
    message.push('\n');

    for site in sites {
        message.push_str(&format!("【{}】", site.name()));

        let mut matching = records
            .iter()
            .filter(|r| r.institution == site.institution && r.category == category)
            .peekable();

        if matching.peek().is_none() {
            message.push_str(NONE_MARKER);
            message.push('\n');
        } else {
            message.push('\n');
            for record in matching {
                message.push_str(BULLET);
                message.push_str(&record.title);
                message.push('\n');
            }
        }

        message.push_str(SEE_MORE);
        message.push_str(site.endpoint(category));
        message.push('\n');
    }
}
