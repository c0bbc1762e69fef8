//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for pipeline results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Classification, knowledge outcome, routing and ticket
    Full,
    /// Only the answer or the ticket summary
    Brief,
    /// JSON output
    Json,
}

impl From<OutputFormat> for triage_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => triage_domain::OutputFormat::Full,
            OutputFormat::Brief => triage_domain::OutputFormat::Brief,
            OutputFormat::Json => triage_domain::OutputFormat::Json,
        }
    }
}

/// Reporting window for `stats`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatsPeriod {
    /// Since midnight UTC
    Today,
    /// The last seven days
    Week,
    /// Since the first day of the month, 00:00 UTC
    Month,
    /// Every recorded inquiry
    All,
}

impl From<StatsPeriod> for triage_domain::ReportPeriod {
    fn from(period: StatsPeriod) -> Self {
        match period {
            StatsPeriod::Today => triage_domain::ReportPeriod::Today,
            StatsPeriod::Week => triage_domain::ReportPeriod::Week,
            StatsPeriod::Month => triage_domain::ReportPeriod::Month,
            StatsPeriod::All => triage_domain::ReportPeriod::All,
        }
    }
}

/// CLI arguments for infra-triage
#[derive(Parser, Debug)]
#[command(name = "infra-triage")]
#[command(author, version, about = "Infrastructure inquiry triage - answer from the knowledge base or route a ticket")]
#[command(long_about = r#"
infra-triage answers infrastructure questions from a curated knowledge base
and drafts a routed support ticket when it cannot.

Each inquiry runs through:
1. Classification: urgency, category and ticket need
2. Knowledge search: only very close matches are used to answer
3. Routing: keyword scoring, with a model fallback
4. Ticket drafting: summary, description, labels and priority

Configuration files are loaded from (in priority order):
1. TRIAGE_* environment variables
2. --config <path>     Explicit config file
3. ./triage.toml       Project-level config
4. ~/.config/infra-triage/config.toml   Global config

Example:
  infra-triage ask "How do I restart a pod?"
  infra-triage ask "our postgres is down in prod" --environment prod --submit
  infra-triage batch questions.txt --concurrency 4
  infra-triage stats --period month --recent 5
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write logs to this file as well
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one inquiry through the pipeline
    ///
    /// Knowledge base embeddings are reused between runs (see
    /// `[knowledge] embeddings_path`). Search results are cached in memory for
    /// the current run only; use `batch` to share them across questions.
    Ask(AskArgs),

    /// Run every line of a file as a separate inquiry
    Batch {
        /// File with one question per line
        file: PathBuf,

        /// Inquiries processed at the same time
        #[arg(long, default_value_t = 4)]
        concurrency: usize,

        /// Submit drafted tickets to the tracker
        #[arg(long)]
        submit: bool,

        /// Output format
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },

    /// Summarize recorded inquiries
    Stats {
        #[arg(long, value_enum, default_value = "all")]
        period: StatsPeriod,

        /// List this many of the newest inquiries (0 to skip)
        #[arg(long, default_value_t = 10)]
        recent: usize,
    },

    /// Show the status of a submitted ticket
    Status {
        /// Tracker ticket id, e.g. INFRA-123
        ticket_id: String,
    },

    /// Check the model endpoint, knowledge base and tracker
    Check,
}

#[derive(clap::Args, Debug)]
pub struct AskArgs {
    /// The question to triage
    pub question: String,

    /// Requester identifier recorded with the inquiry
    #[arg(long, default_value = "cli")]
    pub requester: String,

    /// Channel identifier recorded with the inquiry
    #[arg(long, default_value = "cli")]
    pub channel: String,

    /// Affected environment (e.g. prod, staging)
    #[arg(long)]
    pub environment: Option<String>,

    /// Requested deadline, free text
    #[arg(long)]
    pub deadline: Option<String>,

    /// Submit the drafted ticket to the tracker
    #[arg(long)]
    pub submit: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}
