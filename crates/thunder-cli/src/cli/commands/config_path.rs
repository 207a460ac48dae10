//! `thunder config-path` – show where config and logs live.

use anyhow::Result;
use thunder_core::{config, logging};

pub fn run_config_path() -> Result<()> {
    println!("config: {}", config::config_path()?.display());
    println!("log:    {}", logging::log_file_path()?.display());
    Ok(())
}
