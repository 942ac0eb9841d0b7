//! Browser-backed [`Viewport`].

use aipilot_landing_core::{ScrollMode, SectionId, SectionRect, Viewport};
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions};

/// Looks sections up by DOM id on every call, so elements that are not
/// mounted simply read as absent.
pub struct DomViewport {
    document: Option<Document>,
}

impl DomViewport {
    /// Viewport of the current window. Without a window every section reads
    /// as missing.
    pub fn current() -> Self {
        Self {
            document: web_sys::window().and_then(|window| window.document()),
        }
    }

    fn element(&self, id: SectionId) -> Option<Element> {
        self.document.as_ref()?.get_element_by_id(id.as_str())
    }
}

impl Viewport for DomViewport {
    fn section_rect(&self, id: SectionId) -> Option<SectionRect> {
        let rect = self.element(id)?.get_bounding_client_rect();
        Some(SectionRect::new(rect.top(), rect.bottom()))
    }

    fn scroll_into_view(&self, id: SectionId, mode: ScrollMode) -> bool {
        let Some(element) = self.element(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(scroll_behavior(mode));
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

fn scroll_behavior(mode: ScrollMode) -> ScrollBehavior {
    match mode {
        ScrollMode::Smooth => ScrollBehavior::Smooth,
        ScrollMode::Instant => ScrollBehavior::Instant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_scroll_modes() {
        assert_eq!(scroll_behavior(ScrollMode::Smooth), ScrollBehavior::Smooth);
        assert_eq!(scroll_behavior(ScrollMode::Instant), ScrollBehavior::Instant);
    }
}
