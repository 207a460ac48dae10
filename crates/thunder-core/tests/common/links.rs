use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// `thunder://` + base64 of arbitrary decoded text (envelope not added).
pub fn raw_link(decoded: &[u8]) -> String {
    format!("thunder://{}", STANDARD.encode(decoded))
}

/// Wraps an already percent-encoded payload in the envelope.
pub fn enveloped(percent_encoded: &str) -> String {
    raw_link(format!("AA{percent_encoded}ZZ").as_bytes())
}
