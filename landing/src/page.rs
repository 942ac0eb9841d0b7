//! Reactive wrapper around [`PageState`].

use aipilot_landing_core::{
    NavigationOutcome, Navigator, PageState, ScrollSubscription, ScrollTracker, SectionId,
    SpyConfig,
};
use leptos::ev;
use leptos::prelude::*;

use crate::dom::DomViewport;

/// Copyable handle shared by every component that reads or drives the page
/// state.
#[derive(Clone, Copy)]
pub struct Page {
    state: RwSignal<PageState>,
    tracker: ScrollTracker,
    navigator: Navigator,
}

impl Page {
    pub fn new(config: &SpyConfig) -> Self {
        Self {
            state: RwSignal::new(PageState::default()),
            tracker: ScrollTracker::from(config),
            navigator: Navigator::from(config),
        }
    }

    /// Subscribe to window scroll events for the lifetime of the current
    /// owner. The listener is removed when the owner is cleaned up.
    pub fn track_scroll(self) {
        let handle = window_event_listener(ev::scroll, move |_| self.observe_scroll());
        let subscription = ScrollSubscription::new(move || handle.remove());
        on_cleanup(move || subscription.release());
    }

    /// Re-run the tracker. Subscribers are notified only when the active
    /// section actually changed.
    pub fn observe_scroll(&self) {
        let tracker = self.tracker;
        self.state
            .maybe_update(|state| state.observe_scroll(&tracker, &DomViewport::current()));
    }

    /// Scroll to `target` and close the mobile menu.
    pub fn navigate(&self, target: SectionId) -> Option<NavigationOutcome> {
        let navigator = self.navigator;
        self.state.try_maybe_update(|state| {
            let before = *state;
            let outcome = state.navigate(&navigator, target, &DomViewport::current());
            (*state != before, outcome)
        })
    }

    pub fn toggle_menu(&self) {
        self.state.update(PageState::toggle_menu);
    }

    pub fn active(&self) -> SectionId {
        self.state.with(PageState::active)
    }

    pub fn is_highlighted(&self, id: SectionId) -> bool {
        self.state.with(|state| state.is_highlighted(id))
    }

    pub fn menu_open(&self) -> bool {
        self.state.with(|state| state.menu().is_open())
    }

    /// Current state without subscribing.
    pub fn snapshot(&self) -> PageState {
        self.state.get_untracked()
    }
}
