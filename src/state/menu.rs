//! Mobile navigation menu state machine.
//!
//! DESIGN
//! ======
//! Two states, closed (initial) and open, surfaced as the `mobile-open`
//! marker class on the nav container. Transitions are discrete methods so
//! the machine is testable without any DOM: the hamburger flips, a tab
//! click always closes, an outside click closes only an open menu.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Open/closed state of the mobile navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Hamburger click: flip between open and closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Tab link click: unconditional close (no-op when already closed).
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Document-level click. `inside_nav` / `inside_toggle` report whether
    /// the click target sat within the nav container or the hamburger
    /// control. Closes only an open menu, and only for a genuinely
    /// outside click.
    pub fn outside_click(&mut self, inside_nav: bool, inside_toggle: bool) {
        if self.open && !inside_nav && !inside_toggle {
            self.open = false;
        }
    }

    /// Class list for the nav container; `mobile-open` is the marker.
    #[must_use]
    pub fn nav_class(self) -> &'static str {
        if self.open { "nav-tabs mobile-open" } else { "nav-tabs" }
    }
}
