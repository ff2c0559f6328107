//! Read-only accessor over the pre-authored profile document.
//!
//! The document is an opaque data source keyed by category name; the core
//! never generates content, it only selects slices of this document. Every
//! key defaults to an empty container so a missing category resolves to an
//! empty payload rather than an error.

use crate::error::ContentError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ── Document model ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Personal {
    pub name: String,
    pub age: String,
    pub location: String,
    pub description: String,
    pub profile_image: String,
    /// URL of the downloadable resume; the `resume` card's whole content.
    pub resume: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub category: String,
    pub date: String,
    pub description: String,
    pub thumbnail: String,
    pub images: Vec<ProjectImage>,
    pub tech_stack: Vec<String>,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectImage {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub name: String,
    pub handle: String,
    pub email: String,
    pub socials: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub duration: String,
    pub score: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievement {
    pub title: String,
    pub details: Vec<String>,
    pub links: Vec<Link>,
}

/// The whole on-disk document. Absent keys deserialize to empty containers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDocument {
    pub personal: Personal,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<Experience>,
    pub contact: Contact,
    pub education: Vec<Education>,
    pub achievements: Vec<Achievement>,
    pub interests: Vec<String>,
}

// ── Store ────────────────────────────────────────────────────────

/// Read-only view over one loaded profile document.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    doc: ProfileDocument,
}

impl ContentStore {
    /// Load the document from disk. Called once per query; there is no
    /// caching requirement beyond process lifetime.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        if !path.exists() {
            return Err(ContentError::NotFound(path.display().to_string()));
        }
        let raw = fs::read_to_string(path)?;
        let doc: ProfileDocument = serde_json::from_str(&raw)?;
        Ok(Self { doc })
    }

    pub fn from_document(doc: ProfileDocument) -> Self {
        Self { doc }
    }

    pub fn personal(&self) -> &Personal {
        &self.doc.personal
    }

    pub fn projects(&self) -> &[Project] {
        &self.doc.projects
    }

    pub fn skills(&self) -> &[SkillGroup] {
        &self.doc.skills
    }

    pub fn experience(&self) -> &[Experience] {
        &self.doc.experience
    }

    pub fn contact(&self) -> &Contact {
        &self.doc.contact
    }

    pub fn education(&self) -> &[Education] {
        &self.doc.education
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.doc.achievements
    }

    pub fn resume_url(&self) -> &str {
        &self.doc.personal.resume
    }
}
