//! Utility modules for browser and DOM operations.
//!
//! Provides:
//! - [`dom`] - Window/document access, listeners, scrolling, focus and class helpers

pub mod dom;
