//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `scenarios.rs` - Placement and clash walkthroughs
//! - `clone.rs` - Clone independence
//! - `display.rs` - Rendered grid text
//! - `proptest.rs` - Property-based tests
