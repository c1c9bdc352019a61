//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the admin chrome (gate, sidebar, dialogs) and wrap the
//! rich-text editor. Pages compose them and own the screen state.

pub mod confirm_dialog;
pub mod rich_text;
pub mod session_gate;
pub mod sidebar;
