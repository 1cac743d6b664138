//! Integration tests for the canvas core.
//!
//! These tests drive a whole scene through input events and check the
//! resulting membership, depth and geometry.

mod drag_workflow_tests;
