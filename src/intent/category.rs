use serde::{Deserialize, Serialize};
use strum::Display;

/// Closed set of card categories a query can resolve to.
///
/// Unrecognized values never leave the normalization boundary - they are
/// dropped, not propagated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Me,
    Projects,
    Skills,
    Experience,
    Contact,
    Resume,
    Education,
    Achievements,
}

impl Category {
    /// All categories in display order, as embedded in oracle prompts.
    pub const ALL: [Category; 8] = [
        Category::Me,
        Category::Projects,
        Category::Skills,
        Category::Experience,
        Category::Contact,
        Category::Resume,
        Category::Education,
        Category::Achievements,
    ];

    /// Fold a raw category string (oracle output, synonyms, mixed case,
    /// stray punctuation) into a canonical category.
    ///
    /// Idempotent: a canonical name always normalizes to itself.
    pub fn normalize(raw: &str) -> Option<Category> {
        let folded: String = raw
            .trim()
            .trim_matches(|c: char| !c.is_ascii_alphanumeric())
            .to_ascii_lowercase();

        match folded.as_str() {
            "me" => Some(Category::Me),
            "project" | "projects" | "work" => Some(Category::Projects),
            "skill" | "skills" => Some(Category::Skills),
            "experience" | "experiences" => Some(Category::Experience),
            "contact" | "contacts" => Some(Category::Contact),
            "resume" | "cv" => Some(Category::Resume),
            "education" | "degree" | "studies" => Some(Category::Education),
            "achievement" | "achievements" | "awards" => Some(Category::Achievements),
            _ => None,
        }
    }

    /// The oracle prompt's category menu: `Me, Projects, Skills, ...`.
    pub fn prompt_menu() -> String {
        Category::ALL
            .iter()
            .map(|c| {
                let name = c.to_string();
                let mut chars = name.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => name,
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One resolved intent: a short natural-language lead-in (may be empty) and
/// the card category it introduces. Order is significant end-to-end - it is
/// the order cards appear in the reply. Wire names follow the oracle
/// contract: `natural` and `card`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationItem {
    #[serde(rename = "natural", default)]
    pub lead_in: String,
    #[serde(rename = "card")]
    pub category: Category,
}

impl ClassificationItem {
    pub fn new(lead_in: impl Into<String>, category: Category) -> Self {
        Self {
            lead_in: lead_in.into(),
            category,
        }
    }

    /// An item with no lead-in text, as produced by the single-intent and
    /// heuristic fallback stages.
    pub fn bare(category: Category) -> Self {
        Self {
            lead_in: String::new(),
            category,
        }
    }
}
