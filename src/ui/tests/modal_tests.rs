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

//! Modal helper tests
//!
//! The insert/delete helpers compute the prospective field value for
//! GTK's pre-commit editable signals. Together with the validation
//! predicate they decide whether a keystroke commits, so the tests
//! cover both the helpers alone and simulated typing sequences.

use crate::core::types::ValidationMode;
use crate::core::validate::accepts;
use crate::ui::modal::{apply_delete, apply_insert};

#[test]
fn test_apply_insert_at_end() {
    assert_eq!(apply_insert("12", "3", 2), "123");
}

#[test]
fn test_apply_insert_at_start() {
    assert_eq!(apply_insert("25", "-", 0), "-25");
}

#[test]
fn test_apply_insert_in_middle() {
    assert_eq!(apply_insert("15", ".", 1), "1.5");
}

#[test]
fn test_apply_insert_multiple_chars() {
    // Paste inserts a whole string at once
    assert_eq!(apply_insert("1", "e10", 1), "1e10");
}

#[test]
fn test_apply_insert_into_empty() {
    assert_eq!(apply_insert("", "7", 0), "7");
}

#[test]
fn test_apply_insert_position_clamped() {
    // GTK should never report a position past the end, but clamp anyway
    assert_eq!(apply_insert("ab", "c", 99), "abc");
}

#[test]
fn test_apply_insert_char_offsets() {
    // Positions are character offsets, not byte offsets
    assert_eq!(apply_insert("héllo", "X", 2), "héXllo");
}

#[test]
fn test_apply_delete_range() {
    assert_eq!(apply_delete("12345", 1, 3), "145");
}

#[test]
fn test_apply_delete_negative_end_means_rest() {
    assert_eq!(apply_delete("12345", 2, -1), "12");
}

#[test]
fn test_apply_delete_all() {
    assert_eq!(apply_delete("123", 0, -1), "");
}

#[test]
fn test_apply_delete_empty_range() {
    assert_eq!(apply_delete("123", 2, 2), "123");
    assert_eq!(apply_delete("123", 3, 1), "123");
}

#[test]
fn test_apply_delete_end_clamped() {
    assert_eq!(apply_delete("123", 1, 99), "1");
}

#[test]
fn test_apply_delete_char_offsets() {
    assert_eq!(apply_delete("héllo", 1, 2), "hllo");
}

#[test]
fn test_typing_digits_into_integer_field() {
    // Simulate typing "42" one keystroke at a time
    let mut field = String::new();
    for (position, key) in [(0, "4"), (1, "2")] {
        let proposed = apply_insert(&field, key, position);
        assert!(accepts(ValidationMode::Integer, &proposed));
        field = proposed;
    }
    assert_eq!(field, "42");
}

#[test]
fn test_rejected_keystroke_leaves_field_unchanged() {
    // A letter into an integer field: the proposed value is rejected,
    // so the widget stops the emission and the field keeps its text
    let field = "12";
    let proposed = apply_insert(field, "a", 2);
    assert!(!accepts(ValidationMode::Integer, &proposed));
    assert_eq!(field, "12");
}

#[test]
fn test_decimal_point_rejected_in_integer_field() {
    let proposed = apply_insert("3", ".", 1);
    assert!(!accepts(ValidationMode::Integer, &proposed));
}

#[test]
fn test_decimal_point_accepted_in_float_field() {
    let proposed = apply_insert("3", ".", 1);
    assert!(accepts(ValidationMode::Float, &proposed));

    let proposed = apply_insert("3.", "5", 2);
    assert!(accepts(ValidationMode::Float, &proposed));
}

#[test]
fn test_second_decimal_point_rejected() {
    let proposed = apply_insert("3.5", ".", 3);
    assert!(!accepts(ValidationMode::Float, &proposed));
}

#[test]
fn test_delete_that_breaks_the_number_is_rejected() {
    // Deleting the mantissa of "1e5" would leave "e5"
    let proposed = apply_delete("1e5", 0, 1);
    assert!(!accepts(ValidationMode::Float, &proposed));
}

#[test]
fn test_select_all_delete_is_always_allowed() {
    // Clearing the whole field is the escape hatch for retyping
    let proposed = apply_delete("1e5", 0, -1);
    assert!(accepts(ValidationMode::Float, &proposed));
    assert!(accepts(ValidationMode::Integer, &proposed));
}
