//! Error types.
//!
//! Nothing on the scroll or click path can fail: a section without an
//! element is skipped or ignored. Errors only come from parsing section ids
//! and loading the site content.

use crate::section::SectionId;

/// Errors raised while parsing identifiers or loading site content.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A string did not name any registered section.
    #[error("unknown section identifier `{0}`")]
    UnknownSection(String),

    /// The site content TOML could not be deserialized.
    #[error("failed to parse site content: {0}")]
    Content(#[from] toml::de::Error),

    /// The hero is reached through the brand link, not the navigation bar.
    #[error("the hero section cannot have a navigation entry")]
    HeroInNavigation,

    /// A section was given more than one navigation label.
    #[error("section `{0}` has more than one navigation entry")]
    DuplicateNavigation(SectionId),

    /// A navigable section has no label, so its button would render empty.
    #[error("section `{0}` has no navigation entry")]
    MissingNavigation(SectionId),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
