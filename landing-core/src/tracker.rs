//! Scroll-spy.
//!
//! A section is "current" when the activation line crosses it. Sections are
//! scanned in registry order and the first hit wins; when nothing is hit the
//! caller keeps whatever was active before.

use crate::config::{DEFAULT_ACTIVATION_LINE, SpyConfig};
use crate::section::SectionId;
use crate::viewport::Viewport;

/// Finds the section under the activation line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    activation_line: f64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_LINE)
    }
}

impl From<&SpyConfig> for ScrollTracker {
    fn from(config: &SpyConfig) -> Self {
        Self::new(config.activation_line)
    }
}

impl ScrollTracker {
    /// Tracker with an activation line `activation_line` pixels below the
    /// viewport top.
    pub const fn new(activation_line: f64) -> Self {
        Self { activation_line }
    }

    /// Offset of the activation line from the viewport top.
    pub const fn activation_line(&self) -> f64 {
        self.activation_line
    }

    /// First section, in registry order, whose element spans the activation
    /// line. Sections without an element are skipped.
    pub fn current_section(&self, viewport: &impl Viewport) -> Option<SectionId> {
        SectionId::ALL.into_iter().find(|&id| {
            viewport
                .section_rect(id)
                .is_some_and(|rect| rect.spans(self.activation_line))
        })
    }
}
