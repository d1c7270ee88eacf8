//! Linkify domain core.
//!
//! Pure domain types and logic shared by the repository and API layers:
//! widget/content/size types, the grid placement engine, the layout
//! persistence controller (behind a storage port), slug rules, and the
//! social platform registry. This crate has zero internal dependencies.

pub mod content;
pub mod error;
pub mod layout;
pub mod layout_update;
pub mod slug;
pub mod social;
pub mod types;
pub mod widget;
