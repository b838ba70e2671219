//! # Change Codec
//!
//! Serialization of a proposed `(field, newValue)` pair into the text
//! stored inside a change request, and the tolerant decode applied at
//! review time: defect repair first (see `repair`), strict parse second.

use serde::{Deserialize, Serialize};

use super::errors::ChangeRequestError;
use super::repair;
use super::value_objects::FieldValue;

/// The stored shape: exactly two keys, nothing else recognized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct EncodedChange {
    field: String,
    #[serde(rename = "newValue")]
    new_value: FieldValue,
}

/// Serialize a proposed change for storage inside a request.
///
/// No allow-list check happens here: an unknown field name is stored
/// verbatim and only rejected when a reviewer attempts to approve it.
pub fn encode_change(field: &str, value: &FieldValue) -> String {
    serde_json::json!({ "field": field, "newValue": value }).to_string()
}

/// Parse a stored change, repairing known formatting defects first.
///
/// # Errors
/// `MalformedPayload` when the repaired text is still not an object with
/// exactly the keys `field` (string) and `newValue` (string or number).
/// The caller must not infer a pair from a failed decode and must not
/// mutate the request or the profile.
pub fn decode_change(raw: &str) -> Result<(String, FieldValue), ChangeRequestError> {
    let repaired = repair::repair_payload(raw);
    let parsed: EncodedChange = serde_json::from_str(&repaired).map_err(|source| {
        ChangeRequestError::MalformedPayload {
            detail: source.to_string(),
        }
    })?;
    Ok((parsed.field, parsed.new_value))
}
