//! Mobile menu toggle.

/// Visibility of the full-screen navigation overlay on narrow viewports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// Overlay hidden, hamburger icon shown.
    #[default]
    Closed,
    /// Overlay shown, close icon shown.
    Open,
}

impl MenuState {
    /// Hamburger/close button click.
    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    /// Dismiss the overlay; a no-op when already closed.
    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }

    /// Whether the overlay is rendered.
    pub const fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }
}

impl From<bool> for MenuState {
    fn from(open: bool) -> Self {
        if open { MenuState::Open } else { MenuState::Closed }
    }
}
