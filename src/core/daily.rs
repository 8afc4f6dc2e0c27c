use crate::core::digest::format_digest;
use crate::core::extractors::Extraction;
use crate::core::site::Site;
use crate::domain::model::{Announcement, Category};
use crate::domain::ports::{Clock, PageFetcher, PushChannel};
use crate::utils::error::{ErrorCategory, Result};

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub digest: String,
    pub records: usize,
    pub delivered: bool,
}

/// Scrapes every board in sequence, formats the digest and broadcasts it.
pub struct DailyRun<F: PageFetcher, P: PushChannel, C: Clock> {
    fetcher: F,
    channel: P,
    clock: C,
    sites: Vec<Site>,
}

impl<F: PageFetcher, P: PushChannel, C: Clock> DailyRun<F, P, C> {
    pub fn new(fetcher: F, channel: P, clock: C, sites: Vec<Site>) -> Self {
        Self {
            fetcher,
            channel,
            clock,
            sites,
        }
    }

    pub async fn run(&self) -> RunOutcome {
        tracing::info!("🚀 Starting daily scraping task");

        // 爬取六個公告頁
        let records = self.collect().await;
        tracing::info!("Collected {} announcements in total", records.len());

        // 組合訊息
        let digest = format_digest(&records, &self.sites);
        tracing::debug!("Digest:\n{}", digest);

        // 推播，失敗只記錄
        let delivered = match self.channel.broadcast(&digest).await {
            Ok(()) => {
                tracing::info!("✅ Digest message sent successfully");
                true
            }
            Err(e) => {
                tracing::error!(
                    "❌ Error sending digest message: {} (Category: {:?})",
                    e,
                    e.category()
                );
                false
            }
        };

        RunOutcome {
            digest,
            records: records.len(),
            delivered,
        }
    }

    /// Site-major, activity board before recruitment board.
    pub async fn collect(&self) -> Vec<Announcement> {
        let mut all = Vec::new();
        for site in &self.sites {
            for category in [Category::Activity, Category::Recruitment] {
                all.extend(self.scrape(site, site.endpoint(category)).await);
            }
        }
        all
    }

    /// Never fails: fetch and parse errors are logged and yield nothing.
    pub async fn scrape(&self, site: &Site, url: &str) -> Vec<Announcement> {
        match self.try_scrape(site, url).await {
            Ok(extraction) => {
                if extraction.candidates == 0 {
                    tracing::warn!(
                        "⚠️ No announcement entries found on {} ({}); the page layout may have changed",
                        site.name(),
                        url
                    );
                }
                tracing::info!(
                    "Scraped {} announcements from {} ({} candidates)",
                    extraction.announcements.len(),
                    site.name(),
                    extraction.candidates
                );
                extraction.announcements
            }
            Err(e) => {
                match e.category() {
                    ErrorCategory::Network => {
                        tracing::error!("🌐 Error fetching {} from {}: {}", site.name(), url, e)
                    }
                    ErrorCategory::Parse => {
                        tracing::error!("🧩 Error parsing {} page {}: {}", site.name(), url, e)
                    }
                    other => tracing::error!(
                        "❌ Error scraping {} ({:?}): {}",
                        site.name(),
                        other,
                        e
                    ),
                }
                Vec::new()
            }
        }
    }

    async fn try_scrape(&self, site: &Site, url: &str) -> Result<Extraction> {
        tracing::debug!("Fetching {} board: {}", site.name(), url);
        let markup = self.fetcher.fetch(url, &site.fetch_profile()).await?;
        let today = self.clock.today();
        site.extract(&markup, url, today)
    }
}
