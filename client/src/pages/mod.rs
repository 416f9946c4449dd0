//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its mock data and local state and delegates shared chrome
//! and widgets to `components`. Nothing here talks to a server.

pub mod about;
pub mod blog;
pub mod chat;
pub mod community;
pub mod companion;
pub mod contact;
pub mod create;
pub mod digital_human;
pub mod features;
pub mod game;
pub mod groups;
pub mod help;
pub mod home;
pub mod legal;
pub mod login;
pub mod media;
pub mod membership;
pub mod profile;
pub mod psych_test;
pub mod register;
pub mod settings;
pub mod status;
