//! src/core/types.rs
//!
//! Core type definitions for the dialog kit
//!
//! This module defines the plain-data types shared by both dialogs:
//! - `ValidationMode`: live keystroke validation selector for the prompt
//! - `DialogOptions`: title, size, button width and default button
//! - `ButtonLabels`: the 1-3 action buttons of a message dialog
//! - `MessageButton`: which button closed a message dialog
//!
//! All types are display-free so they can be constructed and tested
//! without a running GTK instance.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::DialogError;

/// Live validation applied to the prompt dialog's entry field
///
/// Exactly one mode is active per dialog. The predicate itself lives in
/// [`crate::core::validate::accepts`]; this enum only selects it.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ValidationMode {
    /// Accept any text
    #[default]
    None,
    /// Accept only text that parses as a signed integer
    Integer,
    /// Accept only text that parses as a floating-point number
    Float,
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::None => write!(f, "none"),
            ValidationMode::Integer => write!(f, "integer"),
            ValidationMode::Float => write!(f, "float"),
        }
    }
}

/// Window-level options shared by both dialogs
///
/// `size` of `None` lets GTK size the window to its contents.
/// `button_width` is a uniform width request (logical pixels) applied to
/// every action button. `default_button` is 1-based: it names the button
/// that receives default activation (Enter) when the dialog opens.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DialogOptions {
    /// Window title; `None` leaves the title empty
    pub title: Option<String>,
    /// Fixed (width, height) in pixels; `None` auto-sizes
    pub size: Option<(i32, i32)>,
    /// Uniform width request for the action buttons
    pub button_width: i32,
    /// 1-based index of the button holding default activation
    pub default_button: u8,
}

impl Default for DialogOptions {
    fn default() -> Self {
        Self {
            title: None,
            size: None,
            button_width: 90,
            default_button: 1,
        }
    }
}

impl DialogOptions {
    /// Creates options with the given title and defaults for the rest
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// Labels for the 1-3 action buttons of a message dialog
///
/// Button 1 is mandatory; buttons 2 and 3 are optional and a `None` slot
/// renders no button at all. Buttons are displayed left to right in
/// declaration order.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ButtonLabels {
    first: String,
    second: Option<String>,
    third: Option<String>,
}

impl ButtonLabels {
    /// A single-button dialog (e.g. just "Ok")
    pub fn one(first: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: None,
            third: None,
        }
    }

    /// A two-button dialog (e.g. "Yes" / "No")
    pub fn two(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: Some(second.into()),
            third: None,
        }
    }

    /// A three-button dialog (e.g. "Yes" / "No" / "Save as")
    pub fn three(
        first: impl Into<String>,
        second: impl Into<String>,
        third: impl Into<String>,
    ) -> Self {
        Self {
            first: first.into(),
            second: Some(second.into()),
            third: Some(third.into()),
        }
    }

    /// Builds labels from optional slots (button 1 is always present)
    ///
    /// Either optional slot may be suppressed independently; a dialog
    /// with buttons 1 and 3 but no button 2 is legal.
    pub fn from_optional(
        first: impl Into<String>,
        second: Option<String>,
        third: Option<String>,
    ) -> Self {
        Self {
            first: first.into(),
            second,
            third,
        }
    }

    /// Returns the label at the 1-based index, if that button is present
    pub fn get(&self, index: u8) -> Option<&str> {
        match index {
            1 => Some(self.first.as_str()),
            2 => self.second.as_deref(),
            3 => self.third.as_deref(),
            _ => None,
        }
    }

    /// True if the 1-based index names a present button
    pub fn has(&self, index: u8) -> bool {
        self.get(index).is_some()
    }

    /// Number of present buttons (1-3)
    pub fn count(&self) -> u8 {
        1 + u8::from(self.second.is_some()) + u8::from(self.third.is_some())
    }

    /// Iterates present buttons as `(index, label)` in display order
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> {
        (1..=3).filter_map(|i| self.get(i).map(|label| (i, label)))
    }

    /// Checks that a configured default button actually exists
    ///
    /// A default index outside 1..=3, or one naming a suppressed button,
    /// is a caller contract violation and fails fast at construction.
    pub fn validate_default(&self, default_button: u8) -> Result<(), DialogError> {
        if !(1..=3).contains(&default_button) {
            return Err(DialogError::DefaultOutOfRange(default_button));
        }
        if !self.has(default_button) {
            return Err(DialogError::MissingDefaultButton(default_button));
        }
        Ok(())
    }
}

/// Which button closed a message dialog
///
/// Carries the same 1-based numbering as `ButtonLabels`; a dismissed
/// dialog (Escape, window close) yields no `MessageButton` at all.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum MessageButton {
    /// Button 1 (the commit path)
    First,
    /// Button 2
    Second,
    /// Button 3
    Third,
}

impl MessageButton {
    /// The 1-based button index (1, 2 or 3)
    pub fn index(self) -> u8 {
        match self {
            MessageButton::First => 1,
            MessageButton::Second => 2,
            MessageButton::Third => 3,
        }
    }

    /// Maps a 1-based index back to a button, if in range
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(MessageButton::First),
            2 => Some(MessageButton::Second),
            3 => Some(MessageButton::Third),
            _ => None,
        }
    }
}

impl fmt::Display for MessageButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "button{}", self.index())
    }
}
