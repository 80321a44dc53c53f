//! Request handlers for the Outreach CMS API

pub mod common;
pub mod courses;
pub mod events;
pub mod health;
pub mod laws;
pub mod lectures;
pub mod legal_cases;
pub mod opportunities;
pub mod settings;
pub mod stats;
pub mod subscribers;
pub mod testimonials;
pub mod upload;
