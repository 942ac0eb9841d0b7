//! The seam between page logic and the host environment.
//!
//! Sections are looked up by id on every use instead of being held by
//! reference, so an element that is not mounted (yet) is simply `None`.

use std::fmt;

use crate::config::ScrollMode;
use crate::section::SectionId;

/// Vertical extent of a section element, in CSS pixels relative to the
/// viewport top (the `top`/`bottom` of `getBoundingClientRect`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    /// Distance from the viewport top to the element's top edge.
    pub top: f64,
    /// Distance from the viewport top to the element's bottom edge.
    pub bottom: f64,
}

impl SectionRect {
    /// Build a rect from its edges.
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether the horizontal line `y` falls within the element, edges
    /// included.
    pub fn spans(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// Geometry and scrolling as provided by the rendering host.
pub trait Viewport {
    /// Bounding rect of the section's element, or `None` when no element
    /// carries that id.
    fn section_rect(&self, id: SectionId) -> Option<SectionRect>;

    /// Scroll so the section's top aligns with the viewport top.
    /// Returns `false` (and leaves the viewport alone) when the element is
    /// missing.
    fn scroll_into_view(&self, id: SectionId, mode: ScrollMode) -> bool;
}

impl<V: Viewport + ?Sized> Viewport for &V {
    fn section_rect(&self, id: SectionId) -> Option<SectionRect> {
        (**self).section_rect(id)
    }

    fn scroll_into_view(&self, id: SectionId, mode: ScrollMode) -> bool {
        (**self).scroll_into_view(id, mode)
    }
}

/// Guard over a registered scroll listener.
///
/// The listener is deregistered exactly once: by [`release`](Self::release)
/// or, failing that, when the guard is dropped.
pub struct ScrollSubscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl ScrollSubscription {
    /// Wrap the host's deregistration callback.
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Deregister the listener now.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
            tracing::debug!("scroll listener released");
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_subscription() -> (ScrollSubscription, Arc<AtomicUsize>) {
        let releases = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&releases);
        let sub = ScrollSubscription::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (sub, releases)
    }

    #[test]
    fn spans_includes_both_edges() {
        let rect = SectionRect::new(100.0, 400.0);
        assert!(rect.spans(100.0));
        assert!(rect.spans(400.0));
        assert!(rect.spans(250.0));
        assert!(!rect.spans(99.5));
        assert!(!rect.spans(400.5));
    }

    #[test]
    fn explicit_release_runs_once() {
        let (sub, releases) = counting_subscription();
        sub.release();
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_releases_listener() {
        let (sub, releases) = counting_subscription();
        assert_eq!(releases.load(Ordering::SeqCst), 0);
        drop(sub);
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn debug_reports_active_state() {
        let (sub, _releases) = counting_subscription();
        assert_eq!(format!("{sub:?}"), "ScrollSubscription { active: true }");
    }
}
