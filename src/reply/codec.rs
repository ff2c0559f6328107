//! Transcript message codec.
//!
//! The rendering layer only accepts plain strings, so machine-readable
//! payloads travel embedded in the message text after a literal marker
//! token, with arbitrary human-readable text allowed around the JSON. The
//! decoder locates the marker by substring search and extracts the object
//! with a brace-depth scan that is aware of string literals and escapes, so
//! braces inside quoted strings never terminate extraction and trailing
//! prose after the object is tolerated.

use super::payload::CardPayload;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Marker for a single payload: `::card::{...}`.
pub const CARD_MARKER: &str = "::card::";
/// Marker for a payload list: `::card-multi::{"items":[...]}`.
pub const CARD_MULTI_MARKER: &str = "::card-multi::";

#[derive(Debug, Serialize, Deserialize)]
struct MultiEnvelope {
    items: Vec<Value>,
}

/// Serialize payloads into one transcript message. A lone payload with no
/// lead-in uses the single-payload form; everything else uses the multi
/// form, each item embedding its own lead-in.
pub fn encode(payloads: &[CardPayload]) -> serde_json::Result<String> {
    if let [single] = payloads {
        if single.lead_in().is_empty() {
            return Ok(format!("{CARD_MARKER}{}", serde_json::to_string(single)?));
        }
    }

    let items = payloads
        .iter()
        .map(serde_json::to_value)
        .collect::<serde_json::Result<Vec<Value>>>()?;
    let envelope = serde_json::to_string(&MultiEnvelope { items })?;
    Ok(format!("{CARD_MULTI_MARKER}{envelope}"))
}

/// Reconstruct payloads from a transcript message. Never errors: a message
/// without a marker, with unparseable JSON, or with only unrecognized items
/// decodes to an empty list and the caller falls back to plain-text
/// rendering.
pub fn decode(message: &str) -> Vec<CardPayload> {
    if let Some(wrapper) = extract_json_after_marker(message, CARD_MULTI_MARKER) {
        let Some(items) = wrapper.get("items").and_then(Value::as_array) else {
            return Vec::new();
        };
        // Unrecognized or missing `type` fields skip the item, not the batch.
        return items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect();
    }

    if let Some(object) = extract_json_after_marker(message, CARD_MARKER) {
        if let Ok(payload) = serde_json::from_value::<CardPayload>(object) {
            return vec![payload];
        }
    }

    Vec::new()
}

/// Extract the first JSON object after `marker`, tolerating trailing text.
/// Brace depth is tracked through string literals and escape sequences; the
/// scan works on bytes because every delimiter is ASCII.
pub(crate) fn extract_json_after_marker(text: &str, marker: &str) -> Option<Value> {
    let idx = text.find(marker)?;
    let after = &text[idx + marker.len()..];
    let start = after.find('{')?;

    let bytes = after.as_bytes();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &byte) in bytes.iter().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return serde_json::from_str(&after[start..=i]).ok();
                }
            }
            _ => {}
        }
    }
    None
}
