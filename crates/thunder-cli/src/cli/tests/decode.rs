use crate::cli::commands::decode_into;
use crate::cli::{DecodeArgs, EmptyPayloadArg};
use std::fs;
use thunder_core::config::ThunderConfig;
use thunder_core::EmptyPayloadPolicy;

const EMPTY_ENVELOPE: &str = "thunder://QUFaWg==";
const GOOD: &str = "thunder://QUFodHRwOi8veC9hWlo=";

fn decode(args: &DecodeArgs, cfg: &ThunderConfig) -> (String, thunder_core::BatchResult) {
    let mut out = Vec::new();
    let batch = decode_into(args, cfg, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), batch)
}

#[test]
fn decode_prints_one_line_per_link() {
    let args = DecodeArgs {
        links: vec![GOOD.to_string(), "  http://example.com ".to_string()],
        ..Default::default()
    };
    let (out, batch) = decode(&args, &ThunderConfig::default());
    assert_eq!(
        out,
        "http://x/a\n# Error: http://example.com - must start with thunder://\n"
    );
    assert_eq!(batch.success_count(), 1);
    assert_eq!(batch.error_count(), 1);
}

#[test]
fn decode_reads_input_file_and_skips_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("links.txt");
    fs::write(&path, format!("\n{GOOD}\n\n   \nthunder://!!!\n")).unwrap();
    let args = DecodeArgs {
        input: Some(path),
        ..Default::default()
    };
    let (out, batch) = decode(&args, &ThunderConfig::default());
    assert_eq!(batch.len(), 2);
    assert_eq!(
        out,
        "http://x/a\n# Error: thunder://!!! - invalid thunder link format\n"
    );
}

#[test]
fn decode_rejects_blank_input() {
    let args = DecodeArgs {
        links: vec!["   ".to_string()],
        ..Default::default()
    };
    let mut out = Vec::new();
    let err = decode_into(&args, &ThunderConfig::default(), &mut out).unwrap_err();
    assert_eq!(err.to_string(), "no valid input links");
    assert!(out.is_empty());
}

#[test]
fn decode_missing_input_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let args = DecodeArgs {
        input: Some(dir.path().join("absent.txt")),
        ..Default::default()
    };
    let mut out = Vec::new();
    let err = decode_into(&args, &ThunderConfig::default(), &mut out).unwrap_err();
    assert!(format!("{:#}", err).contains("absent.txt"));
}

#[test]
fn empty_envelope_policy_from_config_and_flag() {
    let args = DecodeArgs {
        links: vec![EMPTY_ENVELOPE.to_string()],
        ..Default::default()
    };
    let (_, batch) = decode(&args, &ThunderConfig::default());
    assert_eq!(batch.success_count(), 1);

    let strict_cfg = ThunderConfig {
        empty_payload: EmptyPayloadPolicy::Reject,
        ..Default::default()
    };
    let (out, batch) = decode(&args, &strict_cfg);
    assert_eq!(batch.error_count(), 1);
    assert_eq!(
        out,
        "# Error: thunder://QUFaWg== - invalid thunder link content\n"
    );

    let flagged = DecodeArgs {
        empty_payload: Some(EmptyPayloadArg::Reject),
        ..args.clone()
    };
    let (_, batch) = decode(&flagged, &ThunderConfig::default());
    assert_eq!(batch.error_count(), 1);

    let relaxed = DecodeArgs {
        empty_payload: Some(EmptyPayloadArg::Accept),
        ..args
    };
    let (out, batch) = decode(&relaxed, &strict_cfg);
    assert_eq!(batch.success_count(), 1);
    assert_eq!(out, "\n");
}
