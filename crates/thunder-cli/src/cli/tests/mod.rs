//! CLI tests: argument parsing and the decode command.

use super::{Cli, CliCommand, DecodeArgs};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

pub(super) fn parse_decode(args: &[&str]) -> DecodeArgs {
    match parse(args) {
        CliCommand::Decode(decode) => decode,
        other => panic!("expected Decode, got {:?}", other),
    }
}

mod decode;
