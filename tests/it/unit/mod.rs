//! Unit tests for draggable.

mod document_tests;
