//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowDown as ArrowDown, LuCircleAlert as Error, LuCircleCheck as Success,
        LuDownload as Download, LuExternalLink as ExternalLink, LuGithub as Code,
        LuInfo as Info, LuMail as Mail, LuMapPin as Location, LuMenu as Menu, LuMoon as Moon,
        LuSend as Send, LuSun as Sun, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowDown as ArrowDown, BsBoxArrowUpRight as ExternalLink,
        BsCheckCircleFill as Success, BsDownload as Download, BsEnvelope as Mail,
        BsExclamationCircleFill as Error, BsGeoAltFill as Location, BsGithub as Code,
        BsInfoCircleFill as Info, BsList as Menu, BsMoonStarsFill as Moon, BsSend as Send,
        BsSunFill as Sun, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(ARROW_DOWN, ArrowDown);
themed_icon!(CLOSE, Close);
themed_icon!(CODE, Code);
themed_icon!(DOWNLOAD, Download);
themed_icon!(ERROR, Error);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(INFO, Info);
themed_icon!(LOCATION, Location);
themed_icon!(MAIL, Mail);
themed_icon!(MENU, Menu);
themed_icon!(MOON, Moon);
themed_icon!(SEND, Send);
themed_icon!(SUCCESS, Success);
themed_icon!(SUN, Sun);
