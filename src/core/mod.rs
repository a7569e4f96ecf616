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

//! src/core/mod.rs
//!
//! Core dialog logic module
//!
//! This module contains everything about the dialogs that does not need
//! a display server:
//! - Plain-data types (options, button labels, outcomes)
//! - The keystroke validation predicate
//! - Construction-time error definitions
//!
//! Keeping this logic isolated from the GTK layer allows comprehensive
//! unit testing in headless environments.

pub mod error;
pub mod types;
pub mod validate;

pub use error::DialogError;
pub use types::*;
pub use validate::accepts;

#[cfg(test)]
mod tests;
