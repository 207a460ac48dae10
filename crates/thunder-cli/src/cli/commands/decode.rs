//! `thunder decode` – batch-convert links, then optionally save, copy, open.

use crate::cli::DecodeArgs;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read, Write};
use thunder_core::actions::{copy_results, open_results, save_results, COPY_HOLDS_SELECTION};
use thunder_core::config::ThunderConfig;
use thunder_core::input::prepare_lines;
use thunder_core::{BatchResult, Decoder, EmptyPayloadPolicy};

pub fn run_decode(args: &DecodeArgs, cfg: &ThunderConfig) -> Result<()> {
    let batch = decode_into(args, cfg, &mut io::stdout().lock())?;
    eprintln!("{}", batch.summary());
    run_actions(args, cfg, &batch)
}

/// Decodes the requested links and writes one display line per link to `out`.
pub(crate) fn decode_into<W: Write>(
    args: &DecodeArgs,
    cfg: &ThunderConfig,
    out: &mut W,
) -> Result<BatchResult> {
    let text = read_input(args)?;
    let lines = prepare_lines(&text)?;

    let policy = args
        .empty_payload
        .map(EmptyPayloadPolicy::from)
        .unwrap_or(cfg.empty_payload);
    let batch = Decoder::new(policy).decode_batch(&lines);

    for line in batch.render_lines() {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(batch)
}

fn read_input(args: &DecodeArgs) -> Result<String> {
    if !args.links.is_empty() {
        return Ok(args.links.join("\n"));
    }
    if let Some(path) = &args.input {
        return fs::read_to_string(path).with_context(|| format!("read {}", path.display()));
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("read links from stdin")?;
    Ok(text)
}

fn run_actions(args: &DecodeArgs, cfg: &ThunderConfig, batch: &BatchResult) -> Result<()> {
    let wants_action = args.save.is_some() || args.copy || args.open;
    if !wants_action {
        return Ok(());
    }
    if !batch.has_results() {
        eprintln!("Warning: no conversion results available; nothing to save, copy, or open");
        return Ok(());
    }

    if let Some(path) = &args.save {
        let written = save_results(path, batch, &cfg.save_extension)?;
        eprintln!("Results saved to {}", written.display());
    }
    if args.open {
        let report = open_results(batch, cfg.skip_non_url_on_open)?;
        eprintln!("Opening {} links in browser", report.opened);
        for url in &report.skipped {
            eprintln!("Warning: skipped (not an absolute URL): {:?}", url);
        }
        for url in &report.failed {
            eprintln!("Warning: could not open {}", url);
        }
    }
    // Last: on Linux this blocks until another program owns the selection.
    if args.copy {
        if COPY_HOLDS_SELECTION {
            eprintln!(
                "Copying {} links to clipboard; keeping them available until another program takes over (Ctrl-C to stop)",
                batch.success_count()
            );
        }
        let count = copy_results(batch)?;
        eprintln!("Copied {} links to clipboard", count);
    }
    Ok(())
}
