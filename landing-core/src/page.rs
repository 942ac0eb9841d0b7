//! Page state: the active section and the mobile menu.

use crate::menu::MenuState;
use crate::navigator::{NavigationOutcome, Navigator};
use crate::section::SectionId;
use crate::tracker::ScrollTracker;
use crate::viewport::Viewport;

/// All mutable state of the landing page.
///
/// The active section always names a registered section; it starts at
/// [`SectionId::Hero`] and only moves when the tracker finds a section under
/// the activation line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageState {
    active: SectionId,
    menu: MenuState,
}

impl PageState {
    /// Section highlighted in the navigation bar.
    pub const fn active(&self) -> SectionId {
        self.active
    }

    /// Mobile menu visibility.
    pub const fn menu(&self) -> MenuState {
        self.menu
    }

    /// Whether the navigation entry for `id` gets the highlight style.
    pub fn is_highlighted(&self, id: SectionId) -> bool {
        self.active == id
    }

    /// Re-run the tracker after a scroll event.
    ///
    /// Returns `true` only when the active section changed, so callers can
    /// skip notifying observers otherwise.
    pub fn observe_scroll(&mut self, tracker: &ScrollTracker, viewport: &impl Viewport) -> bool {
        match tracker.current_section(viewport) {
            Some(current) if current != self.active => {
                tracing::debug!(from = %self.active, to = %current, "active section changed");
                self.active = current;
                true
            }
            _ => false,
        }
    }

    /// Navigate to `target`, closing the menu.
    pub fn navigate(
        &mut self,
        navigator: &Navigator,
        target: SectionId,
        viewport: &impl Viewport,
    ) -> NavigationOutcome {
        navigator.navigate(target, viewport, &mut self.menu)
    }

    /// Hamburger/close button click.
    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }
}
