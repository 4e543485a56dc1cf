//! Shared wire types for the analytics dashboard frontend.
//!
//! Everything the UI exchanges with the remote reports service lives here:
//! report schemas and paged data, widget definitions and their series, and
//! the chat endpoint payloads. The modules are plain serde types plus the
//! response-shape normalization applied at the network boundary, so all
//! logic in this crate is testable off the browser.

pub mod chat;
pub mod reports;
pub mod shared;
pub mod widgets;
