//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are mounted by the route outlet only after the access gate has
//! agreed. Protected pages receive the signed-in identity as a prop and never
//! check the session themselves.
//!
//! Each page owns its form and list signals. Input validation lives in pure
//! functions next to the component so it can be tested without a DOM.

pub mod become_startup;
pub mod campaign_detail;
pub mod create_campaign;
pub mod dashboard;
pub mod how_it_works;
pub mod landing;
pub mod login;
pub mod my_dashboard;
pub mod not_found;
pub mod register;
pub mod settings;
pub mod startup_portal;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

/// Message shown when a required form field is blank.
pub const MISSING_FIELDS: &str = "Please fill in all required fields";

/// `None` for blank input, otherwise the trimmed text.
pub fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Async fetch state for a page section.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loadable<T> {
    /// `Ready` on success, otherwise `Failed(message)`. Load failures show a
    /// fixed page message; the cause only goes to the log.
    pub fn from_result(result: Result<T, crate::net::error::ApiError>, message: &str) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => {
                log::warn!("{message} ({e})");
                Self::Failed(message.to_owned())
            }
        }
    }
}
