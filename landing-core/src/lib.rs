//! # aipilot-landing-core
//!
//! Everything the AIPilotSmarteasy landing page does beyond static markup,
//! without touching the DOM.
//!
//! The browser crate (`aipilot-landing`) owns rendering and event wiring.
//! This crate owns the decisions:
//!
//! - [`section`] - the ordered registry of page sections
//! - [`tracker`] - scroll-spy: which section sits under the activation line
//! - [`navigator`] - smooth navigation to a section
//! - [`menu`] - the mobile menu toggle
//! - [`page`] - the page state tying the three together
//! - [`viewport`] - the seam to the host environment (geometry, scrolling,
//!   scroll subscriptions)
//! - [`content`] / [`config`] - the marketing copy and tracker settings,
//!   loaded from TOML embedded in the binary
//!
//! ## Quick Start
//!
//! ```rust
//! use aipilot_landing_core::{
//!     PageState, ScrollMode, ScrollTracker, SectionId, SectionRect, Viewport,
//! };
//!
//! struct Fixed;
//!
//! impl Viewport for Fixed {
//!     fn section_rect(&self, id: SectionId) -> Option<SectionRect> {
//!         (id == SectionId::Features).then(|| SectionRect::new(50.0, 500.0))
//!     }
//!
//!     fn scroll_into_view(&self, _id: SectionId, _mode: ScrollMode) -> bool {
//!         false
//!     }
//! }
//!
//! let mut page = PageState::default();
//! assert!(page.observe_scroll(&ScrollTracker::default(), &Fixed));
//! assert_eq!(page.active(), SectionId::Features);
//! ```
//!
//! ---
//!
//! Built by the AIPilot team (c)2023

#![warn(missing_docs)]

pub mod config;
pub mod content;
pub mod error;
pub mod menu;
pub mod navigator;
pub mod page;
pub mod section;
pub mod tracker;
pub mod viewport;

pub use config::{ScrollMode, SpyConfig};
pub use content::{Feature, SiteContent, Testimonial};
pub use error::{Error, Result};
pub use menu::MenuState;
pub use navigator::{NavigationOutcome, Navigator};
pub use page::PageState;
pub use section::SectionId;
pub use tracker::ScrollTracker;
pub use viewport::{ScrollSubscription, SectionRect, Viewport};
