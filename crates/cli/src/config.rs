//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use vibo_invoicing::DocumentTheme;
use vibo_observability::LogFormat;
use vibo_plans::Tier;

#[derive(Debug, Parser)]
#[command(name = "vibo-invoice", version, about = "Render Russian invoices and spell amounts")]
pub struct Cli {
    /// Log output format (json or pretty).
    #[arg(long, env = "VIBO_LOG_FORMAT", default_value = "pretty", value_parser = parse_log_format, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render an invoice request (JSON) to a standalone HTML page.
    Render {
        /// Invoice request file.
        #[arg(long, short)]
        input: PathBuf,
        /// Where to write the HTML; stdout when omitted.
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Theme used when the request does not name one.
        #[arg(long, env = "VIBO_THEME", default_value = "cyber", value_parser = parse_theme)]
        theme: DocumentTheme,
        /// Ignore the request's own theme and use `--theme`.
        #[arg(long)]
        force_theme: bool,
    },
    /// Spell an amount in rubles, e.g. `1234.56`.
    Words {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// List paid plans; with `--tier`, show what that tier unlocks.
    Plans {
        #[arg(long, value_parser = parse_tier)]
        tier: Option<Tier>,
    },
}

fn parse_theme(value: &str) -> Result<DocumentTheme, String> {
    value.parse().map_err(|err: vibo_core::DomainError| err.to_string())
}

fn parse_tier(value: &str) -> Result<Tier, String> {
    value.parse().map_err(|err: vibo_core::DomainError| err.to_string())
}

fn parse_log_format(value: &str) -> Result<LogFormat, String> {
    value.parse()
}
