//! Core of the thunder link decoder: link decoding, batch conversion, and the
//! follow-on actions (save, copy, open) that consume a batch.

pub mod actions;
pub mod batch;
pub mod config;
pub mod input;
pub mod link;
pub mod logging;

pub use batch::{decode_batch, BatchResult, LineOutcome};
pub use link::{decode_link, encode_link, DecodedUrl, Decoder, EmptyPayloadPolicy, LinkError};
