//! Wire contract with the prize-assignment endpoint: what gets posted and how its plain-text
//! replies are read.

pub use form::*;
pub use reply::*;

mod form;
mod reply;

/// Apps Script deployment the campaign form posts to.
pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbxYMJpkHqRhgMDMbY6ILkIlngnRzORBFciCETx5W0rHX99IOIGFzTGGY2rz5Mffdww2/exec";

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
