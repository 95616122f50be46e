pub mod about;
pub mod features;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod join_guide;
pub mod logo;
pub mod navbar;
pub mod reveal;
pub mod rules;
pub mod section_heading;
