//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices,
//! reducing linking overhead from 3x to 1x.
//!
//! Structure:
//! - helpers: Shared fixture document and pointer helpers
//! - integration: Drag flows through document-level listeners
//! - unit: Single-component unit tests

mod integration;
mod unit;
