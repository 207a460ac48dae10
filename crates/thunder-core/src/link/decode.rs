//! The per-line decode pipeline: prefix, pattern, base64, UTF-8, envelope,
//! percent-decoding.

use super::error::{DecodeFailure, LinkError, MalformedReason};
use super::{DecodedUrl, ENVELOPE_END, ENVELOPE_START, SCHEME_PREFIX};
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use percent_encoding::percent_decode_str;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Standard alphabet over data characters only; padding is resolved by
/// [`payload_bytes`]. Non-zero trailing bits are accepted because link
/// generators in the wild emit them.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone),
);

const PAD: char = '=';

/// Lenient base64 padding, as link producers emit it.
///
/// A `=` only counts once a quantum holds at least two data characters; the
/// first complete pad sequence ends the payload and anything after it is
/// ignored. Stray `=` elsewhere are skipped. Without a terminating pad
/// sequence the data must fill whole quanta.
fn payload_bytes(payload: &str) -> Result<Vec<u8>, DecodeFailure> {
    let mut data = String::with_capacity(payload.len());
    let mut pads = 0;
    let mut terminated = false;
    for c in payload.chars() {
        if c == PAD {
            pads += 1;
            let quad_pos = data.len() % 4;
            if quad_pos >= 2 && quad_pos + pads >= 4 {
                terminated = true;
                break;
            }
            continue;
        }
        pads = 0;
        data.push(c);
    }

    if !terminated {
        match data.len() % 4 {
            0 => {}
            1 => {
                return Err(DecodeFailure::Base64(format!(
                    "{} data characters cannot be 1 more than a multiple of 4",
                    data.len()
                )))
            }
            _ => return Err(DecodeFailure::Base64("incorrect padding".to_string())),
        }
    }

    PAYLOAD_ENGINE
        .decode(&data)
        .map_err(|e| DecodeFailure::Base64(e.to_string()))
}

fn link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^thunder://[A-Za-z0-9+/=]+$").expect("thunder link pattern compiles")
    })
}

/// What to do with a link whose envelope holds nothing (`AAZZ`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyPayloadPolicy {
    /// Decode to an empty URL.
    #[default]
    Accept,
    /// Report the line as [`LinkError::ContentInvalid`].
    Reject,
}

/// Stateless decoder; only carries the empty-payload policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decoder {
    empty_payload: EmptyPayloadPolicy,
}

impl Decoder {
    pub fn new(empty_payload: EmptyPayloadPolicy) -> Self {
        Self { empty_payload }
    }

    pub fn empty_payload(&self) -> EmptyPayloadPolicy {
        self.empty_payload
    }

    /// Decodes one line, stopping at the first failing check.
    pub fn decode_link(&self, line: &str) -> Result<DecodedUrl, LinkError> {
        let payload = line
            .strip_prefix(SCHEME_PREFIX)
            .ok_or(MalformedReason::MissingPrefix)?;
        if !link_pattern().is_match(line) {
            return Err(MalformedReason::InvalidFormat.into());
        }

        let bytes = payload_bytes(payload)?;
        let text = String::from_utf8(bytes).map_err(|_| DecodeFailure::NonUtf8)?;

        let inner = text
            .strip_prefix(ENVELOPE_START)
            .and_then(|rest| rest.strip_suffix(ENVELOPE_END))
            .ok_or(LinkError::ContentInvalid)?;
        if inner.is_empty() && self.empty_payload == EmptyPayloadPolicy::Reject {
            return Err(LinkError::ContentInvalid);
        }

        let url = percent_decode_str(inner)
            .decode_utf8()
            .map_err(|_| DecodeFailure::PercentNonUtf8)?;
        Ok(DecodedUrl::new(url.into_owned()))
    }
}

/// Decodes one line with the default policy.
pub fn decode_link(line: &str) -> Result<DecodedUrl, LinkError> {
    Decoder::default().decode_link(line)
}
