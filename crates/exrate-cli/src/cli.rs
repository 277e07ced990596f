//! CLI argument definitions for exrate.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `CURRENCIES...` | built-in list | Currency codes to look up |
//! | `--format` | `text` | Output format (text, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--base-url` | `EXRATE_CNB_BASE_URL` or `https://api.cnb.cz` | CNB API base URL |
//! | `--timeout-ms` | `EXRATE_TIMEOUT_MS` or `5000` | Timeout for each remote feed |
//! | `--log-format` | `EXRATE_LOG_FORMAT` or `text` | Log output on stderr (text, json) |
//!
//! # Examples
//!
//! ```bash
//! # Rates for the default currency list
//! exrate
//!
//! # A couple of currencies as JSON
//! exrate usd eur --format json --pretty
//! ```

use clap::{Parser, ValueEnum};

/// Czech National Bank exchange rates against CZK.
#[derive(Debug, Parser)]
#[command(
    name = "exrate",
    author,
    version,
    about = "Czech National Bank exchange rates against CZK",
    long_about = "Fetches the CNB daily and monthly rate feeds concurrently, merges them and \
prints the rates of the requested currencies against CZK.\n\
\n\
Exit codes: 0 success, 3 rate lookup failed (including malformed currency codes), any other non-zero value is an unexpected failure."
)]
pub struct Cli {
    /// Currency codes to look up (e.g. USD EUR). Defaults to the built-in list.
    pub currencies: Vec<String>,

    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Base URL of the CNB API.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Timeout in milliseconds applied to both remote feeds.
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Log output format on stderr.
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}
