//! Property-based tests for resolution and listing guarantees

mod resolve;
