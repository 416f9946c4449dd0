//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Every helper is a no-op outside the `hydrate` build so the same code
//! renders on the server and runs under native tests.

pub mod dark_mode;
pub mod delay;
pub mod error_hooks;
pub mod legacy_hash;
