//! Section registry.
//!
//! The page has five addressable regions. Their order is the scan order of
//! the scroll tracker, so it decides ties when two sections straddle the
//! activation line at once.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the fixed page regions, tagged in the DOM by [`SectionId::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    /// Full-height intro with the call to action.
    #[default]
    Hero,
    /// Feature cards.
    Features,
    /// Product illustration.
    HowItWorks,
    /// Customer quotes.
    Testimonials,
    /// Email and website links.
    Contact,
}

impl SectionId {
    /// Every section, in registry (document) order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::Features,
        SectionId::HowItWorks,
        SectionId::Testimonials,
        SectionId::Contact,
    ];

    /// Sections reachable from the navigation bar and the mobile menu.
    /// The hero is reached through the brand link instead.
    pub const NAVIGABLE: [SectionId; 4] = [
        SectionId::Features,
        SectionId::HowItWorks,
        SectionId::Testimonials,
        SectionId::Contact,
    ];

    /// DOM `id` attribute of the section element.
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Features => "features",
            SectionId::HowItWorks => "how-it-works",
            SectionId::Testimonials => "testimonials",
            SectionId::Contact => "contact",
        }
    }

    /// Whether the section gets a navigation entry.
    pub const fn is_navigable(self) -> bool {
        !matches!(self, SectionId::Hero)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::UnknownSection(s.to_string()))
    }
}
