//! Keystroke validation predicate
//!
//! The prompt dialog filters edits before they commit: on every insertion
//! or deletion the prospective full field value is computed and passed
//! through [`accepts`]. A rejected edit is simply undone by the widget
//! layer; already-valid content is never touched.
//!
//! The predicate is a pure function so it can be tested exhaustively
//! without a display server.

use crate::core::types::ValidationMode;

/// Decides whether a prospective field value is acceptable
///
/// The empty string is accepted in every mode, so the user can always
/// clear the field and retype. Non-empty values are accepted when they
/// parse under the selected numeric grammar: `i64` for integer mode,
/// `f64` for float mode (sign, decimal point and exponent included).
pub fn accepts(mode: ValidationMode, proposed: &str) -> bool {
    if proposed.is_empty() {
        return true;
    }
    match mode {
        ValidationMode::None => true,
        ValidationMode::Integer => proposed.parse::<i64>().is_ok(),
        ValidationMode::Float => proposed.parse::<f64>().is_ok(),
    }
}
