use anyhow::Context;
use clap::Parser;
use csie_digest::core::PushChannel;
use csie_digest::utils::{logger, validation::Validate};
use csie_digest::{
    CliConfig, DailyRun, HttpFetcher, LineChannel, LineConfig, Site, StdoutChannel, SystemClock,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    // 讀取推播憑證，未執行任務時也必須存在
    let line_config = if config.needs_credentials() {
        match LineConfig::from_env() {
            Ok(line_config) => Some(line_config),
            Err(e) => {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
        }
    } else {
        None
    };

    if !config.daily_task {
        tracing::info!("No task requested; pass --daily-task to scrape and broadcast");
        return Ok(());
    }

    // 驗證公告頁網址
    let sites = Site::all_production();
    for site in &sites {
        site.validate()
            .with_context(|| format!("invalid board URLs for {}", site.name()))?;
    }

    // 選擇推播管道並執行
    match line_config {
        Some(line_config) => run_daily(LineChannel::new(&line_config), sites).await,
        None => run_daily(StdoutChannel, sites).await,
    }

    Ok(())
}

async fn run_daily<P: PushChannel>(channel: P, sites: Vec<Site>) {
    let run = DailyRun::new(HttpFetcher::new(), channel, SystemClock, sites);
    let outcome = run.run().await;

    tracing::info!(
        "Daily task finished: {} announcements, delivered: {}",
        outcome.records,
        outcome.delivered
    );
}
