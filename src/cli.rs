use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::types::StatusGroup;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Compact,
}

#[derive(Parser)]
#[command(name = "svu-admin")]
#[command(about = "Operator console for SVU student project requests", version)]
#[command(after_help = "EXAMPLES:
    svu-admin dashboard                 Watch the board and send offers
    svu-admin projects --group pending  List pending requests
    svu-admin project 7                 Show request details
    svu-admin offer 7 --price \"50,000 SYP\" --delivery 2024-05-01")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json, compact)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Suppress success messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show debug logs and detailed error information
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Backend base URL (overrides API_PROXY_TARGET and the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

impl Cli {
    /// Get the effective output format, considering --json flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive board that refreshes on a timer
    #[command(
        alias = "d",
        after_help = "EXAMPLES:
    svu-admin dashboard
    svu-admin dashboard --interval 30"
    )]
    Dashboard(DashboardArgs),
    /// List projects grouped by status
    #[command(
        alias = "ls",
        after_help = "EXAMPLES:
    svu-admin projects
    svu-admin projects --group offered
    svu-admin projects --json"
    )]
    Projects {
        /// Show a single lane
        #[arg(long, short, value_enum)]
        group: Option<StatusGroup>,
    },
    /// Show project details
    #[command(after_help = "EXAMPLES:
    svu-admin project 7")]
    Project {
        /// Project id
        id: i64,
    },
    /// Send a price and delivery offer for a pending project
    #[command(after_help = "EXAMPLES:
    svu-admin offer 7 --price \"50,000 SYP\" --delivery 2024-05-01")]
    Offer(OfferArgs),
    /// Override a project's status
    #[command(after_help = "EXAMPLES:
    svu-admin status 7 finished")]
    Status {
        /// Project id
        id: i64,
        /// New status tag
        status: String,
    },
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    svu-admin completions bash > ~/.bash_completion.d/svu-admin
    svu-admin completions zsh > ~/.zfunc/_svu-admin")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    Init,
}

#[derive(Args)]
pub struct DashboardArgs {
    /// Seconds between automatic refreshes (default from config, else 10)
    #[arg(long, short)]
    pub interval: Option<u64>,
}

#[derive(Args)]
pub struct OfferArgs {
    /// Project id
    pub id: i64,

    /// Offered price (e.g. "50,000 SYP")
    #[arg(long, short)]
    pub price: String,

    /// Delivery date (e.g. 2024-05-01)
    #[arg(long, short)]
    pub delivery: String,
}
