//! CLI for the thunder link decoder.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use thunder_core::config;
use thunder_core::EmptyPayloadPolicy;

use commands::{run_config_path, run_decode, run_encode};

/// Top-level CLI for the thunder link decoder.
#[derive(Debug, Parser)]
#[command(name = "thunder")]
#[command(about = "Decode thunder:// download links into plain URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Decode thunder:// links (arguments, --input file, or stdin; one per line).
    Decode(DecodeArgs),

    /// Build thunder:// links from plain URLs.
    Encode {
        /// URLs to wrap.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Print the config and log file locations.
    ConfigPath,
}

#[derive(Debug, Clone, Default, Args)]
pub struct DecodeArgs {
    /// Links to decode. When empty, links are read from --input or stdin.
    pub links: Vec<String>,

    /// Read links from this file instead of stdin.
    #[arg(short, long, value_name = "FILE", conflicts_with = "links")]
    pub input: Option<PathBuf>,

    /// Copy the decoded URLs to the clipboard.
    #[arg(long)]
    pub copy: bool,

    /// Open each decoded URL in the default browser.
    #[arg(long)]
    pub open: bool,

    /// Save the decoded URLs to FILE (the configured extension, "txt" by default, is appended when missing).
    #[arg(short = 'o', long = "save", value_name = "FILE")]
    pub save: Option<PathBuf>,

    /// How to treat links whose envelope is empty (AAZZ); overrides config.
    #[arg(long, value_enum, value_name = "POLICY")]
    pub empty_payload: Option<EmptyPayloadArg>,
}

/// CLI spelling of [`EmptyPayloadPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmptyPayloadArg {
    /// Decode to an empty URL.
    Accept,
    /// Report invalid link content.
    Reject,
}

impl From<EmptyPayloadArg> for EmptyPayloadPolicy {
    fn from(arg: EmptyPayloadArg) -> Self {
        match arg {
            EmptyPayloadArg::Accept => EmptyPayloadPolicy::Accept,
            EmptyPayloadArg::Reject => EmptyPayloadPolicy::Reject,
        }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Decode(args) => run_decode(&args, &cfg)?,
            CliCommand::Encode { urls } => run_encode(&urls)?,
            CliCommand::ConfigPath => run_config_path()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
