//! Pure helpers shared by pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is a plain function of its inputs (the clock is passed in)
//! so the numbers pages display can be tested natively.

pub mod chart;
pub mod counter;
pub mod format;
pub mod funding;
