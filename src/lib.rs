// Copyright 2025 bakri (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Modal Dialog Kit
//!
//! Modal prompt and message dialogs for GTK4 applications.
//!
//! # Features
//!
//! - **Prompt dialog:** Single-line text input with OK/Cancel
//! - **Live validation:** Optional integer/float keystroke filtering
//! - **Message dialog:** Text beside a decorative image, 1-3 buttons
//! - **Default activation:** Any present button can hold Enter
//! - **Blocking API:** `show_and_wait` returns the outcome directly
//!
//! # Architecture
//!
//! - **`core`:** Display-free logic (types, validation, errors)
//! - **`ui`:** GTK4 widgets and the shared modal lifecycle
//!
//! Dialogs run on the single GTK thread; showing one pumps a nested
//! main context so the calling code blocks while the dialog window
//! stays responsive. The result is finalised exactly once, by the
//! first terminal action (button, Enter, Escape or window close).
//!
//! # Examples
//!
//! ## Asking for a number
//!
//! ```no_run
//! use modal_dialog_kit::{DialogOptions, PromptDialog, ValidationMode};
//! # let parent: gtk4::Window = unimplemented!();
//!
//! let options = DialogOptions::titled("Quantity");
//! let dialog = PromptDialog::new(
//!     &parent,
//!     "How many copies?",
//!     "1",
//!     ValidationMode::Integer,
//!     &options,
//! )?;
//!
//! match dialog.show_and_wait() {
//!     Some(value) => println!("Entered: {}", value),
//!     None => println!("Cancelled"),
//! }
//! # Ok::<(), modal_dialog_kit::DialogError>(())
//! ```
//!
//! ## Asking a yes/no/save-as question
//!
//! ```no_run
//! use modal_dialog_kit::{ButtonLabels, DialogOptions, MessageDialog};
//! # let parent: gtk4::Window = unimplemented!();
//!
//! let labels = ButtonLabels::three("Yes", "No", "Save as");
//! let mut options = DialogOptions::titled("Save file...");
//! options.default_button = 3;
//!
//! let dialog = MessageDialog::new(
//!     &parent,
//!     "The file already exists!\n\nWould you like to update the file?",
//!     &labels,
//!     &options,
//! )?;
//!
//! match dialog.show_and_wait() {
//!     Some(button) => println!("Closed by {}", button),
//!     None => println!("Dismissed"),
//! }
//! # Ok::<(), modal_dialog_kit::DialogError>(())
//! ```

pub mod core;
pub mod ui;

// Re-export commonly used types for convenience
pub use crate::core::{ButtonLabels, DialogError, DialogOptions, MessageButton, ValidationMode};
pub use crate::ui::{MessageDialog, PromptDialog};
