//! UI module tests
//!
//! Tests for the display-free parts of the dialog layer: the pure
//! edit helpers feeding keystroke validation and the prompt's
//! commit/cancel outcome mapping. Widget behaviour itself (focus,
//! default activation, the modal grab) belongs to GTK and is not
//! exercised here.

#[cfg(test)]
mod modal_tests;
#[cfg(test)]
mod prompt_dialog_tests;
