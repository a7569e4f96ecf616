//! Prompt dialog tests
//!
//! Tests for the commit/cancel outcome mapping: only a confirmed
//! dialog produces the entered text; cancellation and dismissal both
//! produce nothing.

use crate::ui::components::prompt_dialog::{outcome, PromptResponse};

#[test]
fn test_confirm_yields_entered_text() {
    let result = outcome(Some(PromptResponse::Confirm), "Attila");
    assert_eq!(result.as_deref(), Some("Attila"));
}

#[test]
fn test_confirm_yields_empty_field_as_is() {
    // Confirming an empty field commits the empty string, not None
    let result = outcome(Some(PromptResponse::Confirm), "");
    assert_eq!(result.as_deref(), Some(""));
}

#[test]
fn test_cancel_yields_none() {
    assert_eq!(outcome(Some(PromptResponse::Cancel), "typed but discarded"), None);
}

#[test]
fn test_dismissal_yields_none() {
    // Window closed without any response recorded (X button, Escape)
    assert_eq!(outcome(None, "typed but discarded"), None);
}
