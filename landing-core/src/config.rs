//! Scroll-spy settings.
//!
//! Read from the optional `[spy]` table of the embedded site TOML; every
//! field falls back to its default.

use serde::{Deserialize, Serialize};

/// Pixels below the viewport top where a section counts as "being read".
pub const DEFAULT_ACTIVATION_LINE: f64 = 100.0;

/// How a navigation click moves the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollMode {
    /// Animated scroll, the browser's native `behavior: "smooth"`.
    #[default]
    Smooth,
    /// Jump straight to the target.
    Instant,
}

/// Scroll tracker and navigator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpyConfig {
    /// Offset from the viewport top, in CSS pixels, of the activation line.
    pub activation_line: f64,
    /// Scroll behaviour used by navigation.
    pub scroll_behavior: ScrollMode,
}

impl Default for SpyConfig {
    fn default() -> Self {
        Self {
            activation_line: DEFAULT_ACTIVATION_LINE,
            scroll_behavior: ScrollMode::Smooth,
        }
    }
}
