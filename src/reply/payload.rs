//! Card payloads: the unit the renderer consumes.
//!
//! A closed tagged union - one variant per category - so the decode and
//! render boundaries get exhaustive matching from the compiler instead of
//! ad-hoc `type` string checks. Wire shape: internally tagged on `type`,
//! lead-in under the `natural` key (omitted when empty).

use crate::content::{
    Achievement, Contact, ContentStore, Education, Experience, Personal, Project, SkillGroup,
};
use crate::intent::{Category, ClassificationItem};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CardPayload {
    Me {
        #[serde(rename = "natural", default, skip_serializing_if = "String::is_empty")]
        lead_in: String,
        #[serde(default)]
        personal: Personal,
    },
    Projects {
        #[serde(rename = "natural", default, skip_serializing_if = "String::is_empty")]
        lead_in: String,
        #[serde(default)]
        projects: Vec<Project>,
    },
    Skills {
        #[serde(rename = "natural", default, skip_serializing_if = "String::is_empty")]
        lead_in: String,
        #[serde(default)]
        skills: Vec<SkillGroup>,
    },
    Experience {
        #[serde(rename = "natural", default, skip_serializing_if = "String::is_empty")]
        lead_in: String,
        #[serde(default)]
        experience: Vec<Experience>,
    },
    Contact {
        #[serde(rename = "natural", default, skip_serializing_if = "String::is_empty")]
        lead_in: String,
        #[serde(default)]
        contact: Contact,
    },
    Resume {
        #[serde(rename = "natural", default, skip_serializing_if = "String::is_empty")]
        lead_in: String,
        #[serde(default)]
        resume: String,
    },
    Education {
        #[serde(rename = "natural", default, skip_serializing_if = "String::is_empty")]
        lead_in: String,
        #[serde(default)]
        education: Vec<Education>,
    },
    Achievements {
        #[serde(rename = "natural", default, skip_serializing_if = "String::is_empty")]
        lead_in: String,
        #[serde(default)]
        achievements: Vec<Achievement>,
    },
}

impl CardPayload {
    pub fn category(&self) -> Category {
        match self {
            CardPayload::Me { .. } => Category::Me,
            CardPayload::Projects { .. } => Category::Projects,
            CardPayload::Skills { .. } => Category::Skills,
            CardPayload::Experience { .. } => Category::Experience,
            CardPayload::Contact { .. } => Category::Contact,
            CardPayload::Resume { .. } => Category::Resume,
            CardPayload::Education { .. } => Category::Education,
            CardPayload::Achievements { .. } => Category::Achievements,
        }
    }

    pub fn lead_in(&self) -> &str {
        match self {
            CardPayload::Me { lead_in, .. }
            | CardPayload::Projects { lead_in, .. }
            | CardPayload::Skills { lead_in, .. }
            | CardPayload::Experience { lead_in, .. }
            | CardPayload::Contact { lead_in, .. }
            | CardPayload::Resume { lead_in, .. }
            | CardPayload::Education { lead_in, .. }
            | CardPayload::Achievements { lead_in, .. } => lead_in,
        }
    }

    /// Populate the variant for one resolved intent with that category's
    /// full document slice. A category with no authored content still yields
    /// a payload (empty container) so the renderer can show an empty state.
    pub fn build(item: &ClassificationItem, store: &ContentStore) -> CardPayload {
        let lead_in = item.lead_in.clone();
        match item.category {
            Category::Me => CardPayload::Me {
                lead_in,
                personal: store.personal().clone(),
            },
            Category::Projects => CardPayload::Projects {
                lead_in,
                projects: store.projects().to_vec(),
            },
            Category::Skills => CardPayload::Skills {
                lead_in,
                skills: store.skills().to_vec(),
            },
            Category::Experience => CardPayload::Experience {
                lead_in,
                experience: store.experience().to_vec(),
            },
            Category::Contact => CardPayload::Contact {
                lead_in,
                contact: store.contact().clone(),
            },
            Category::Resume => CardPayload::Resume {
                lead_in,
                resume: store.resume_url().to_string(),
            },
            Category::Education => CardPayload::Education {
                lead_in,
                education: store.education().to_vec(),
            },
            Category::Achievements => CardPayload::Achievements {
                lead_in,
                achievements: store.achievements().to_vec(),
            },
        }
    }
}

/// Build payloads for every resolved intent, preserving order.
pub fn build_payloads(items: &[ClassificationItem], store: &ContentStore) -> Vec<CardPayload> {
    items
        .iter()
        .map(|item| CardPayload::build(item, store))
        .collect()
}
