//! Browser-independent state for the folio front end.
//!
//! Each module owns one piece of page behaviour as plain data plus the
//! rules that change it. The Leptos layer wires these to DOM events and
//! timers; nothing in here touches the browser, so everything is testable
//! natively.
//!
//! - [`typing`] - Typing animation state machine and registry
//! - [`reveal`] - One-shot scroll reveal tracking
//! - [`filter`] - Project filter
//! - [`form`] - Contact form validation and submit state
//! - [`theme`] - Theme preference and storage
//! - [`nav`] - Active section and mobile menu
//! - [`perf`] - Frame-rate sampling
//! - [`anim`] - Throttle, debounce, easing, counters
//! - [`content`] - Site content model

pub mod anim;
pub mod content;
pub mod error;
pub mod filter;
pub mod form;
pub mod keys;
pub mod loading;
pub mod matrix;
pub mod nav;
pub mod notify;
pub mod perf;
pub mod reveal;
pub mod theme;
pub mod trail;
pub mod typing;

pub use content::SiteContent;
pub use error::{ContentError, FormError, StoreError, TypingError};
pub use filter::ProjectFilter;
pub use theme::{Appearance, ThemePreference};
pub use typing::{TypingEffect, TypingFrame, TypingId, TypingPhase, TypingRegistry, TypingTiming};
