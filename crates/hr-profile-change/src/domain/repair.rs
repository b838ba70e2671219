//! # Payload Defect Repair
//!
//! Encoded changes are stored as text and travel through layers that can
//! mangle them: stray line breaks from copy-paste, padded separators from
//! hand-edited tooling. This module repairs exactly those known defects,
//! in a fixed order, before the strict parse in `codec`.
//!
//! It is a repair pass, not a parser. Each rule is purely textual and does
//! not know about quoting, so a value that legitimately contains line
//! breaks or spaced punctuation around `:` comes out altered. That
//! tradeoff is accepted in exchange for recovering the common corruption
//! shape; widening the rules would change which malformed payloads are
//! accepted.

use once_cell::sync::Lazy;
use regex::Regex;

static QUOTED_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""\s*,\s*""#).expect("quoted separator pattern compiles"));

static KEY_VALUE_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*:\s*").expect("key/value separator pattern compiles"));

/// Remove every line-break character (nothing is inserted in their place),
/// then trim outer whitespace.
pub fn strip_line_breaks(raw: &str) -> String {
    raw.replace(['\r', '\n'], "").trim().to_string()
}

/// Collapse a quoted value, comma, quoted key sequence with padding
/// (`"  ,  "`) to the tight form (`","`).
pub fn collapse_quoted_separators(raw: &str) -> String {
    QUOTED_SEPARATOR.replace_all(raw, "\",\"").into_owned()
}

/// Remove whitespace surrounding key/value separators, so `"field" : "x"`
/// becomes `"field":"x"`.
pub fn tighten_key_value_separators(raw: &str) -> String {
    KEY_VALUE_SEPARATOR.replace_all(raw, ":").into_owned()
}

/// Run the full repair pipeline in order.
pub fn repair_payload(raw: &str) -> String {
    let repaired = strip_line_breaks(raw);
    let repaired = collapse_quoted_separators(&repaired);
    tighten_key_value_separators(&repaired)
}
