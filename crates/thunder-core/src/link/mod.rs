//! Thunder link model: decoding `thunder://` links into plain URLs and back.
//!
//! A link is `thunder://` followed by standard base64 of `AA<percent-encoded URL>ZZ`.

mod decode;
mod encode;
mod error;

pub use decode::{decode_link, Decoder, EmptyPayloadPolicy};
pub use encode::encode_link;
pub use error::{DecodeFailure, LinkError, MalformedReason};

use std::fmt;

/// Scheme prefix every link must start with (case-sensitive).
pub const SCHEME_PREFIX: &str = "thunder://";
const ENVELOPE_START: &str = "AA";
const ENVELOPE_END: &str = "ZZ";

/// Percent-decoded payload of a valid link. Not checked to be a well-formed
/// URL; see [`DecodedUrl::is_absolute_url`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecodedUrl(String);

impl DecodedUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// True if the payload parses as an absolute URL with a scheme.
    pub fn is_absolute_url(&self) -> bool {
        url::Url::parse(&self.0).is_ok()
    }
}

impl fmt::Display for DecodedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DecodedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_check() {
        assert!(DecodedUrl::new("https://example.com/file.zip").is_absolute_url());
        assert!(DecodedUrl::new("ftp://mirror.example.org/x.iso").is_absolute_url());
        assert!(!DecodedUrl::new("").is_absolute_url());
        assert!(!DecodedUrl::new("/relative/path").is_absolute_url());
    }

    #[test]
    fn display_is_raw_url() {
        let url = DecodedUrl::new("https://example.com/a b");
        assert_eq!(url.to_string(), "https://example.com/a b");
        assert_eq!(url.into_string(), "https://example.com/a b");
    }
}
