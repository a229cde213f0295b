//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Site content is loaded at compile time using `include_str!`.

// =============================================================================
// Content
// =============================================================================

/// Site content document (profile, sections, skills, projects).
pub const SITE_CONTENT: &str = include_str!("../assets/content/site.toml");

// =============================================================================
// Loading Screen
// =============================================================================

/// Minimum time the loading screen stays visible, in milliseconds.
pub const MIN_LOADING_MS: f64 = 1200.0;

/// Duration of the loading screen fade-out before it is removed.
pub const LOADING_FADE_MS: u32 = 500;

// =============================================================================
// Navigation
// =============================================================================

/// Height of the fixed navbar; section tops are offset by this much.
pub const NAV_OFFSET_PX: f64 = 80.0;

/// Minimum interval between scroll handler runs.
pub const SCROLL_THROTTLE_MS: f64 = 100.0;

/// Delay after the last resize event before layout is re-evaluated.
pub const RESIZE_DEBOUNCE_MS: u32 = 150;

/// Widths at or above this are treated as desktop (mobile menu closes).
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// DOM id of the collapsible navigation menu.
pub const NAV_MENU_ID: &str = "nav-menu";

/// Name of the CustomEvent fired when the mobile menu opens or closes.
pub const MENU_TOGGLE_EVENT: &str = "menutoggle";

/// DOM id of the main content region (skip-link target).
pub const MAIN_ID: &str = "main";

// =============================================================================
// Animation
// =============================================================================

/// Scroll reveal and decorative effect timings (milliseconds).
pub mod animation {
    /// Delay before a revealed skill bar starts filling.
    pub const SKILL_FILL_DELAY_MS: u32 = 200;
    /// How long a timeline marker pulses after being revealed.
    pub const TIMELINE_PULSE_MS: u32 = 1000;
    /// Duration of stat counters counting up.
    pub const COUNTER_DURATION_MS: f64 = 2000.0;
    /// Hero background parallax speed (fraction of scroll distance).
    pub const PARALLAX_SPEED: f64 = 0.5;
    /// Root margin for the reveal IntersectionObserver.
    pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
}

// =============================================================================
// Contact Form
// =============================================================================

/// Simulated network latency for contact form submission.
pub const SIMULATED_SUBMIT_MS: u32 = 2000;

/// How long a toast notification stays on screen.
pub const NOTIFICATION_TIMEOUT_MS: u32 = 5000;

/// Maximum toasts shown at once.
pub const MAX_NOTIFICATIONS: usize = 3;

// =============================================================================
// Easter Eggs
// =============================================================================

/// Matrix rain settings.
pub mod matrix {
    /// How long the rain runs once triggered.
    pub const DURATION_MS: u32 = 10_000;
    /// Frame interval.
    pub const FRAME_MS: u32 = 50;
    /// Glyph size in pixels.
    pub const FONT_SIZE: f64 = 16.0;
}

/// Cursor trail settings.
pub mod trail {
    /// Number of positions kept.
    pub const LENGTH: usize = 12;
    /// Time for a dot to fade out completely.
    pub const LIFETIME_MS: f64 = 500.0;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
