//! Page managers.
//!
//! Each manager wires one piece of `folio_core` state to browser events and
//! timers. They are started once, in order, by the app startup sequence.

pub mod accessibility;
pub mod easter_eggs;
pub mod error;
pub mod loading;
pub mod navigation;
pub mod performance;
pub mod theme;
