//! Mobile navigation toggle.

use serde::Serialize;

use crate::surface::Surface;

/// Open/closed state of the mobile navigation panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MenuState {
    /// Whether the toggle control is wired up
    pub enabled: bool,
    pub open: bool,
}

impl MenuState {
    /// Flip the panel. Returns the new state; a disabled toggle does nothing.
    pub fn toggle(&mut self) -> bool {
        if self.enabled {
            self.open = !self.open;
        }
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Value of the toggle's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

/// Wire the menu toggle to the navigation panel.
pub fn setup_menu_toggle<U: Surface + ?Sized>(surface: &mut U) {
    surface.enable_menu_toggle();
}
