//! Builds thunder links from plain URLs.

use super::{ENVELOPE_END, ENVELOPE_START, SCHEME_PREFIX};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except unreserved marks and URL delimiters gets escaped.
/// `%` stays in the set so decoding always restores the input exactly.
const PAYLOAD_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/')
    .remove(b':')
    .remove(b'?')
    .remove(b'#')
    .remove(b'[')
    .remove(b']')
    .remove(b'@')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// Wraps `url` in the `AA`/`ZZ` envelope, base64-encodes it and adds the
/// scheme prefix.
///
/// ```
/// use thunder_core::link::{decode_link, encode_link};
///
/// let link = encode_link("https://example.com/a b.zip");
/// assert_eq!(decode_link(&link).unwrap().as_str(), "https://example.com/a b.zip");
/// ```
pub fn encode_link(url: &str) -> String {
    let escaped = utf8_percent_encode(url, PAYLOAD_ESCAPE);
    let envelope = format!("{ENVELOPE_START}{escaped}{ENVELOPE_END}");
    format!("{SCHEME_PREFIX}{}", STANDARD.encode(envelope))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::decode_link;

    #[test]
    fn matches_known_link() {
        assert_eq!(
            encode_link("https://example.com/a b.zip"),
            "thunder://QUFodHRwczovL2V4YW1wbGUuY29tL2ElMjBiLnppcFpa"
        );
        assert_eq!(encode_link(""), "thunder://QUFaWg==");
    }

    #[test]
    fn decode_restores_input() {
        let samples = [
            "https://dow.dowlzi.com/20220317/43_8749336c/蜘蛛侠：英雄无归.mp4",
            "ftp://host/path?q=1&r=a+b#frag",
            "literal %41 percent",
            "tab\tand\nnewline",
            "AAZZ",
        ];
        for url in samples {
            let link = encode_link(url);
            assert_eq!(decode_link(&link).unwrap().as_str(), url, "link {link}");
        }
    }
}
