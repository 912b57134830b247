//! Integration tests for drive-article-validator
//!
//! These tests run the complete validation pipeline end-to-end with
//! realistic Google Docs exports and unusual inputs.

mod drive_exports;
mod edge_cases;
