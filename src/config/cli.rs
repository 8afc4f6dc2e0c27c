use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "csie-digest")]
#[command(about = "Broadcast yesterday's CSIE department announcements")]
pub struct CliConfig {
    #[arg(long, help = "Run the daily task")]
    pub daily_task: bool,

    #[arg(long, help = "Print the digest instead of broadcasting it")]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Whether the run needs push-channel credentials.
    pub fn needs_credentials(&self) -> bool {
        !self.dry_run
    }
}
