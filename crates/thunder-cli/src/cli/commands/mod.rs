//! CLI command handlers, one file per command.

mod config_path;
mod decode;
mod encode;

pub use config_path::run_config_path;
pub use decode::run_decode;
pub use encode::run_encode;

#[cfg(test)]
pub(crate) use decode::decode_into;
