//! Navigation to a section.

use crate::config::{ScrollMode, SpyConfig};
use crate::menu::MenuState;
use crate::section::SectionId;
use crate::viewport::Viewport;

/// What a navigation request did to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// A scroll towards the section was requested.
    Scrolled,
    /// No element carries the section id; the viewport was left alone.
    Missing,
}

/// Scrolls sections into view and dismisses the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    mode: ScrollMode,
}

impl From<&SpyConfig> for Navigator {
    fn from(config: &SpyConfig) -> Self {
        Self::new(config.scroll_behavior)
    }
}

impl Navigator {
    /// Navigator scrolling with `mode`.
    pub const fn new(mode: ScrollMode) -> Self {
        Self { mode }
    }

    /// Scroll behaviour used for every request.
    pub const fn mode(&self) -> ScrollMode {
        self.mode
    }

    /// Bring `target` into view and close the menu.
    ///
    /// The menu is closed whether or not the section exists.
    pub fn navigate(
        &self,
        target: SectionId,
        viewport: &impl Viewport,
        menu: &mut MenuState,
    ) -> NavigationOutcome {
        let outcome = if viewport.scroll_into_view(target, self.mode) {
            NavigationOutcome::Scrolled
        } else {
            NavigationOutcome::Missing
        };
        menu.close();
        tracing::debug!(section = %target, ?outcome, "navigated");
        outcome
    }
}
