//! `thunder encode <url>...` – wrap plain URLs as thunder links.

use anyhow::Result;
use std::io::{self, Write};
use thunder_core::encode_link;

pub fn run_encode(urls: &[String]) -> Result<()> {
    let mut out = io::stdout().lock();
    for url in urls {
        writeln!(out, "{}", encode_link(url))?;
    }
    Ok(())
}
