//! Integration tests for draggable.
//!
//! These tests verify the interaction between multiple components
//! and test complete workflows end-to-end.

mod constraint_tests;
