//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared chrome (header, footer, logo) and widgets
//! reused by several pages. They read shell state from Leptos context and
//! take page state as props.

pub mod chat_panel;
pub mod footer;
pub mod header;
pub mod logo;
pub mod page_hero;
pub mod status_page;
