//! Client-side routing with access control.
//!
//! SYSTEM CONTEXT
//! ==============
//! `table` is the ordered list of routes and their access rules, `gate`
//! decides what a path shows for a given session, and `outlet` renders that
//! decision inside the Leptos router.
//!
//! The decision logic is pure so every access rule can be tested without a
//! browser; `outlet` is the only part that touches Leptos.

pub mod gate;
pub mod outlet;
pub mod table;
