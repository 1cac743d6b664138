//! Single test binary entry point.
//!
//! Structure:
//! - helpers: Scene builder and assertion helpers
//! - integration: Multi-component workflow tests
//! - unit: Single-component unit tests

mod integration;
