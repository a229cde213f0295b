//! UI components built with Leptos.
//!
//! - [`navbar`] - Fixed navigation bar, mobile menu and skip link
//! - [`hero`] - Landing section with the typing headline
//! - [`sections`] - About, skills, experience and projects
//! - [`contact`] - Contact form with inline validation
//! - [`effects`] - Cursor trail, matrix rain and AI-mode overlay
//! - [`hooks`] - Typing, reveal and counter hooks shared by sections
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod contact;
pub mod effects;
pub mod footer;
pub mod hero;
pub mod hooks;
pub mod icons;
pub mod loading;
pub mod navbar;
pub mod notifications;
pub mod sections;

pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use loading::LoadingScreen;
pub use navbar::{Navbar, SkipLink};
pub use notifications::NotificationStack;
pub use sections::{About, Experience, Projects, Skills};
