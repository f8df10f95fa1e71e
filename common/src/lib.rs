//! Portfolio Common Library
//!
//! Framework-free domain logic shared with the web frontend: the project
//! catalog with its filter and selection state, contact form validation, and
//! the static seed data.

pub mod catalog;
pub mod contact;
pub mod data;
pub mod error;
pub mod types;

pub use catalog::{Catalog, FilterState, SelectionState, ALL_CATEGORY};
pub use contact::ContactSubmission;
pub use error::{Error, Result};
pub use types::{
    CourseItem, ExperienceItem, Highlight, Profile, ProjectRecord, SkillGroup, SkillItem,
};
