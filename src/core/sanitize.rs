// src/core/sanitize.rs
use url::Url;

use crate::error::ParseError;

/// Drop any leading currency marker ("£", "Â£", "$ ") and keep the number text.
pub fn strip_currency(s: &str) -> String {
    s.trim()
        .trim_start_matches(|c: char| !(c.is_ascii_digit() || c == '-' || c == '.'))
        .to_string()
}

/// Resolve `href` against `base` (which should end in '/').
pub fn resolve(base: &str, href: &str) -> Result<String, ParseError> {
    let base = Url::parse(base).map_err(|e| ParseError::BadUrl(format!("{base}: {e}")))?;
    base.join(href)
        .map(String::from)
        .map_err(|e| ParseError::BadUrl(format!("{href}: {e}")))
}
