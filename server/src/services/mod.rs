//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules define the collaborator seams (`auth`, `content`) and own
//! the little logic that sits in front of them, so route handlers can stay
//! focused on protocol translation and cookie plumbing.

pub mod auth;
pub mod content;
