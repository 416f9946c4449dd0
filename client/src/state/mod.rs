//! View-model state for pages and chrome.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `creation`, `story`, etc.) so each page
//! depends on one small model. Models are plain structs; pages wrap them in
//! `RwSignal` and keep them for the lifetime of the route.

pub mod blog;
pub mod chat;
pub mod community;
pub mod creation;
pub mod faq;
pub mod forms;
pub mod groups;
pub mod media;
pub mod membership;
pub mod psych;
pub mod story;
pub mod ui;
