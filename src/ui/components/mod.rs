//! UI Components
//!
//! The two modal dialog widgets this crate provides.
//!
//! # Components
//!
//! - `prompt_dialog.rs` - Single-line text input with live validation
//! - `message_dialog.rs` - Message with image and 1-3 action buttons

mod message_dialog;
pub(crate) mod prompt_dialog;

pub use message_dialog::MessageDialog;
pub use prompt_dialog::PromptDialog;
