//! Domain record types
//!
//! Shared between the seed data and the web frontend:
//! - ProjectRecord: a portfolio project shown in the gallery
//! - ExperienceItem: one entry on the experience timeline
//! - SkillItem / SkillGroup: entries for the skills grid
//! - CourseItem: a certification card
//! - Profile: the site owner's identity and contact details

use serde::{Deserialize, Serialize};

/// A single portfolio project.
///
/// `tags` are display-only labels; `categories` drive gallery filtering and
/// are never empty for a valid record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub icon: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub live_url: String,
    pub code_url: String,
    pub details: Vec<String>,
}

/// One entry on the experience timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceItem {
    pub id: u32,
    pub role: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub description: Vec<String>,
    pub skills: Vec<String>,
}

/// Skill grouping for the skills grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillGroup {
    Technical,
    Domain,
    Tools,
}

impl SkillGroup {
    pub fn label(&self) -> &'static str {
        match self {
            SkillGroup::Technical => "Technical Skills",
            SkillGroup::Domain => "Domain Skills",
            SkillGroup::Tools => "Tools & Software",
        }
    }
}

/// One skill badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillItem {
    pub name: String,
    pub group: SkillGroup,
    pub icon: String,
}

/// A completed course or certification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseItem {
    pub id: u32,
    pub title: String,
    pub provider: String,
    pub date: String,
    pub certificate_url: String,
    pub description: String,
    pub skills: Vec<String>,
}

/// A highlight card in the about section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Highlight {
    pub title: String,
    pub blurb: String,
    pub icon: String,
}

/// Site owner identity, bio and contact details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub journey: Vec<String>,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub resume_url: String,
    pub portrait_url: String,
}
