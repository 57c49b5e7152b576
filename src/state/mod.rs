//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The only app-wide state is the session. Page data (campaign lists, form
//! fields) lives in signals owned by each page and is dropped on unmount.

pub mod session;
