//! Navigation state: active section, scrolled navbar and mobile menu.

/// Scroll offset past which the navbar switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Vertical extent of a page section in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Returns the id of the section the reader is currently in.
///
/// `offset` is the fixed navbar height; a section becomes active once its
/// top edge reaches the bottom of the navbar. Sections are expected in
/// document order.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds], offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| scroll_y >= s.top - offset)
        .map(|s| s.id.as_str())
}

/// What changed after a navigation update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavChange {
    pub active_changed: bool,
    pub scrolled_changed: bool,
}

/// Notification sent whenever the mobile menu opens or closes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuToggle {
    pub open: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    active: Option<String>,
    menu_open: bool,
    scrolled: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Recomputes scroll-derived state.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionBounds], offset: f64) -> NavChange {
        let active = active_section(scroll_y, sections, offset).map(str::to_string);
        let scrolled = scroll_y > SCROLLED_THRESHOLD;

        let change = NavChange {
            active_changed: active != self.active,
            scrolled_changed: scrolled != self.scrolled,
        };
        self.active = active;
        self.scrolled = scrolled;
        change
    }

    /// Marks a section active directly (nav link click).
    pub fn select(&mut self, id: &str) {
        self.active = Some(id.to_string());
    }

    pub fn toggle_menu(&mut self) -> MenuToggle {
        self.menu_open = !self.menu_open;
        MenuToggle {
            open: self.menu_open,
        }
    }

    /// Closes the menu. Returns a notification only if it was open.
    pub fn close_menu(&mut self) -> Option<MenuToggle> {
        if self.menu_open {
            self.menu_open = false;
            Some(MenuToggle { open: false })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        [("home", 0.0), ("about", 800.0), ("projects", 1600.0), ("contact", 2600.0)]
            .iter()
            .map(|(id, top)| SectionBounds {
                id: id.to_string(),
                top: *top,
                height: 800.0,
            })
            .collect()
    }

    #[test]
    fn test_active_section() {
        let s = sections();
        assert_eq!(active_section(0.0, &s, 80.0), Some("home"));
        assert_eq!(active_section(719.0, &s, 80.0), Some("home"));
        assert_eq!(active_section(720.0, &s, 80.0), Some("about"));
        assert_eq!(active_section(5000.0, &s, 80.0), Some("contact"));
    }

    #[test]
    fn test_active_section_above_first() {
        let mut s = sections();
        s[0].top = 300.0;
        assert_eq!(active_section(0.0, &s, 80.0), None);
    }

    #[test]
    fn test_on_scroll_reports_changes() {
        let s = sections();
        let mut nav = NavState::new();

        let change = nav.on_scroll(10.0, &s, 80.0);
        assert!(change.active_changed);
        assert!(!change.scrolled_changed);

        let change = nav.on_scroll(100.0, &s, 80.0);
        assert!(!change.active_changed);
        assert!(change.scrolled_changed);
        assert!(nav.is_scrolled());
    }

    #[test]
    fn test_menu_toggle() {
        let mut nav = NavState::new();
        assert_eq!(nav.close_menu(), None);
        assert_eq!(nav.toggle_menu(), MenuToggle { open: true });
        assert!(nav.is_menu_open());
        assert_eq!(nav.close_menu(), Some(MenuToggle { open: false }));
        assert!(!nav.is_menu_open());
    }
}
