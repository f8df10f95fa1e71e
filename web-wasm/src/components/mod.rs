pub mod about;
pub mod courses;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod scroll_to_top;
pub mod skills;
