//! Helpers for building links independently of the crate's own encoder.

pub mod links;
