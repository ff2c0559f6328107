//! Salvage parsing for oracle replies.
//!
//! The oracle is instructed to answer with a bare JSON array, but real
//! replies arrive wrapped in prose, truncated mid-stream, or as bare
//! category strings. Recovery runs in stages, each feeding the next on
//! failure: direct parse → bracket-substring extraction → truncation
//! repair. Individual elements that fail are dropped; the batch survives.

use serde_json::Value;

/// A raw `{natural, card}` pair as the oracle produced it, before category
/// normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawClassification {
    pub natural: String,
    pub card: String,
}

/// Extract classification pairs from a reply using every salvage stage.
/// Returns an empty vec when nothing is recoverable.
pub fn parse_reply(raw: &str) -> Vec<RawClassification> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }

    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        if let Some(items) = elements_from(&value) {
            return items;
        }
    }

    // The oracle wrapped the array in prose: take the first `[` through the
    // last `]` and try again.
    if let Some(slice) = bracket_substring(raw) {
        if let Ok(value) = serde_json::from_str::<Value>(slice) {
            if let Some(items) = elements_from(&value) {
                return items;
            }
        }
    }

    // Truncated mid-array (typical when the reply hit max_tokens): close the
    // bracket and keep whatever elements parse.
    if raw.starts_with('[') && !raw.ends_with(']') {
        let repaired = format!("{raw}]");
        if let Ok(value) = serde_json::from_str::<Value>(&repaired) {
            if let Some(items) = elements_from(&value) {
                return items;
            }
        }
        // A dangling comma or half-written element keeps the whole array
        // from parsing; retry without the trailing fragment.
        if let Some(idx) = raw.rfind('}') {
            let repaired = format!("{}]", &raw[..=idx]);
            if let Ok(value) = serde_json::from_str::<Value>(&repaired) {
                if let Some(items) = elements_from(&value) {
                    return items;
                }
            }
        }
    }

    Vec::new()
}

/// Strip the oracle's one-word reply down to a candidate category name:
/// first whitespace token, alphabetic characters only, lowercased.
pub fn parse_single_word(raw: &str) -> String {
    raw.split_whitespace()
        .next()
        .unwrap_or("")
        .chars()
        .filter(char::is_ascii_alphabetic)
        .collect::<String>()
        .to_ascii_lowercase()
}

fn bracket_substring(raw: &str) -> Option<&str> {
    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    (end > start).then(|| &raw[start..=end])
}

/// Convert a parsed JSON array into raw pairs. Two accepted element shapes:
/// `{natural, card}` objects and bare category strings (backward
/// compatibility, empty lead-in). Anything else is dropped element-wise.
fn elements_from(value: &Value) -> Option<Vec<RawClassification>> {
    let array = value.as_array()?;
    Some(
        array
            .iter()
            .filter_map(|element| match element {
                Value::Object(map) => {
                    let card = map.get("card").and_then(Value::as_str).unwrap_or("").trim();
                    if card.is_empty() {
                        return None;
                    }
                    let natural = map
                        .get("natural")
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .trim();
                    Some(RawClassification {
                        natural: natural.to_string(),
                        card: card.to_string(),
                    })
                }
                Value::String(card) => Some(RawClassification {
                    natural: String::new(),
                    card: card.trim().to_string(),
                }),
                _ => None,
            })
            .collect(),
    )
}
