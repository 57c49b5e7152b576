//! Reusable view components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from context (`RwSignal<SessionState>`,
//! `StoredValue<ApiClient>`) and take page data as props.

pub mod campaign_card;
pub mod form_field;
pub mod line_chart;
pub mod navbar;
pub mod progress_bar;
pub mod stat_counter;
