//! Core module tests
//!
//! Contains test suites for the display-free dialog logic:
//! - Keystroke validation predicate tests
//! - Type tests (options, button labels, outcomes)
