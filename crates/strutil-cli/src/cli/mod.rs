//! CLI for the strutil text utilities.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use strutil_core::config;

use commands::{decode_requested, run_demo, run_group, run_params, run_query};

/// Top-level CLI for strutil.
#[derive(Debug, Parser)]
#[command(name = "strutil")]
#[command(about = "strutil: query-parameter extraction and thousands grouping", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the value of one query parameter (empty line if absent).
    Query {
        /// URL whose query string is searched; it is not validated.
        url: String,
        /// Parameter name.
        key: String,
        /// URI-decode the value (overrides decode_by_default).
        #[arg(long, conflicts_with = "raw")]
        decode: bool,
        /// Print the value as-is (overrides decode_by_default).
        #[arg(long)]
        raw: bool,
    },

    /// Print every query parameter of a URL as JSON.
    Params {
        /// URL whose query string is split.
        url: String,
    },

    /// Insert a separator every three digits from the right.
    Group {
        /// Digit string to group.
        digits: String,
        /// Reject input containing anything but ASCII digits.
        #[arg(long)]
        strict: bool,
        /// Separator character (defaults to the configured one, ",").
        #[arg(long, value_name = "CHAR")]
        separator: Option<char>,
    },

    /// Run the built-in example calls.
    Demo,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Query {
                url,
                key,
                decode,
                raw,
            } => {
                run_query(&url, &key, decode_requested(decode, raw, &cfg))?;
            }
            CliCommand::Params { url } => run_params(&url)?,
            CliCommand::Group {
                digits,
                strict,
                separator,
            } => run_group(&digits, strict, separator.unwrap_or(cfg.separator))?,
            CliCommand::Demo => run_demo()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
