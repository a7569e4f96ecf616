// Copyright 2025 Eric Jingryd (tidynest@proton.me)
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

//! GTK4 dialog widgets
//!
//! # Module Structure
//!
//! ```text
//! ui/
//! ├── mod.rs          // This file - exports
//! ├── modal.rs        // Shared modal lifecycle and edit helpers
//! └── components/     // The dialog widgets
//! ```
//!
//! Both dialogs share the lifecycle in `modal.rs`: construct, present
//! modal, pump a nested main context until one terminal action records
//! the result, close, return to the blocked caller.

pub mod components;
pub(crate) mod modal;

pub use components::{MessageDialog, PromptDialog};

#[cfg(test)]
mod tests;
