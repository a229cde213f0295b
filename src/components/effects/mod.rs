//! Decorative overlays. None of them run while motion is reduced.
//!
//! - [`CursorTrail`] - Fading dots following the pointer
//! - [`MatrixRain`] - Falling glyphs after the Konami code
//! - [`AiModeOverlay`] - Panel toggled by typing `aimode`

mod ai_mode;
mod cursor_trail;
mod matrix_rain;

pub use ai_mode::AiModeOverlay;
pub use cursor_trail::CursorTrail;
pub use matrix_rain::MatrixRain;
