//! Networking modules for the StartEase REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the wire schema, and `error`
//! turns failures into the messages pages display.

pub mod api;
pub mod error;
pub mod types;
