//! Site content.
//!
//! All marketing copy, links and image references live in
//! `content/site.toml`, compiled into the binary. Nothing here carries
//! behaviour; the records are display data in display order.

use std::collections::HashSet;

use serde::Deserialize;

use crate::config::SpyConfig;
use crate::error::{Error, Result};
use crate::section::SectionId;

const EMBEDDED_SITE: &str = include_str!("../content/site.toml");

/// Everything the page renders.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    /// Scroll-spy settings.
    #[serde(default)]
    pub spy: SpyConfig,
    /// Header logo and name.
    pub brand: Brand,
    /// Navigation labels for every navigable section.
    pub nav: Vec<NavEntry>,
    /// Hero section copy.
    pub hero: Hero,
    /// Feature cards.
    pub features: FeatureSection,
    /// Product illustration.
    pub how_it_works: HowItWorks,
    /// Customer quotes.
    pub testimonials: TestimonialSection,
    /// Contact details.
    pub contact: Contact,
    /// Footer copy and legal links.
    pub footer: Footer,
}

/// Header branding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Brand {
    /// Product name.
    pub name: String,
    /// Logo image URL.
    pub logo: String,
    /// Logo alt text.
    pub logo_alt: String,
}

/// Label of one navigation button.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavEntry {
    /// Section the button scrolls to.
    pub section: SectionId,
    /// Button text.
    pub label: String,
}

/// Hero section copy.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hero {
    /// Main heading.
    pub headline: String,
    /// Sub heading.
    pub tagline: String,
    /// Call-to-action button text.
    pub cta: String,
    /// Section the call-to-action scrolls to.
    #[serde(default = "default_cta_target")]
    pub cta_target: SectionId,
    /// Background image URL.
    pub background: String,
}

fn default_cta_target() -> SectionId {
    SectionId::Features
}

/// Feature section heading and cards.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeatureSection {
    /// Section heading.
    pub heading: String,
    /// Cards, in display order.
    pub items: Vec<Feature>,
}

/// One feature card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    /// Emoji shown above the title.
    pub icon: String,
    /// Card title.
    pub title: String,
    /// Card body.
    pub description: String,
}

/// "How it works" illustration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HowItWorks {
    /// Section heading.
    pub heading: String,
    /// Image URL.
    pub image: String,
    /// Image alt text.
    pub image_alt: String,
    /// Intrinsic image width in pixels.
    pub image_width: u32,
    /// Intrinsic image height in pixels.
    pub image_height: u32,
}

/// Testimonial section heading and quotes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestimonialSection {
    /// Section heading.
    pub heading: String,
    /// Quotes, in display order.
    pub items: Vec<Testimonial>,
}

/// One customer quote.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial {
    /// Customer name.
    pub name: String,
    /// Customer job title.
    pub role: String,
    /// The quote itself, without quotation marks.
    pub comment: String,
}

impl Testimonial {
    /// Placeholder avatar showing the first character of the name.
    pub fn avatar_url(&self) -> String {
        let initial = self.name.chars().next().map(String::from).unwrap_or_default();
        format!("/placeholder.svg?text={initial}&width=40&height=40")
    }
}

/// Contact section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contact {
    /// Section heading.
    pub heading: String,
    /// Invitation to get in touch.
    pub blurb: String,
    /// Text before the address.
    pub email_label: String,
    /// Contact address.
    pub email: String,
    /// External website, opened in a new tab.
    pub website: String,
    /// Website link text.
    pub website_label: String,
}

impl Contact {
    /// `mailto:` link for the contact address.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Footer copy.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Footer {
    /// Copyright line.
    pub copyright: String,
    /// Legal links.
    #[serde(default)]
    pub links: Vec<FooterLink>,
}

/// A footer hyperlink.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FooterLink {
    /// Link text.
    pub label: String,
    /// Target URL.
    pub href: String,
}

impl SiteContent {
    /// Content compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_toml(EMBEDDED_SITE)
    }

    /// Parse and validate site content.
    pub fn from_toml(source: &str) -> Result<Self> {
        let content: SiteContent = toml::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    /// Label of the navigation button for `id`.
    pub fn nav_label(&self, id: SectionId) -> Option<&str> {
        self.nav
            .iter()
            .find(|entry| entry.section == id)
            .map(|entry| entry.label.as_str())
    }

    /// Navigation buttons in registry order, whatever order the TOML lists
    /// them in.
    pub fn navigation(&self) -> Vec<(SectionId, String)> {
        SectionId::NAVIGABLE
            .into_iter()
            .filter_map(|id| self.nav_label(id).map(|label| (id, label.to_string())))
            .collect()
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.nav {
            if !entry.section.is_navigable() {
                return Err(Error::HeroInNavigation);
            }
            if !seen.insert(entry.section) {
                return Err(Error::DuplicateNavigation(entry.section));
            }
        }
        match SectionId::NAVIGABLE.into_iter().find(|id| !seen.contains(id)) {
            Some(missing) => Err(Error::MissingNavigation(missing)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScrollMode;
    use pretty_assertions::assert_eq;

    fn with_nav(nav: &str) -> String {
        EMBEDDED_SITE
            .split("[[nav]]")
            .next()
            .map(|head| head.to_string())
            .unwrap_or_default()
            + nav
            + &EMBEDDED_SITE[EMBEDDED_SITE.find("[hero]").unwrap_or(0)..]
    }

    #[test]
    fn embedded_content_loads() {
        let content = SiteContent::embedded().unwrap();
        assert_eq!(content.brand.name, "AIPilotSmarteasy");
        assert_eq!(content.features.items.len(), 3);
        assert_eq!(content.testimonials.items.len(), 3);
        assert_eq!(content.footer.links.len(), 2);
        assert_eq!(content.hero.cta_target, SectionId::Features);
        assert_eq!(content.spy, SpyConfig::default());
    }

    #[test]
    fn navigation_follows_registry_order() {
        let content = SiteContent::embedded().unwrap();
        let ids: Vec<SectionId> = content.navigation().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, SectionId::NAVIGABLE.to_vec());
        assert_eq!(content.nav_label(SectionId::HowItWorks), Some("작동 방식"));
        assert_eq!(content.nav_label(SectionId::Hero), None);
    }

    #[test]
    fn avatar_uses_first_character() {
        let testimonial = Testimonial {
            name: "김철수".into(),
            role: "프로젝트 매니저".into(),
            comment: "좋아요".into(),
        };
        assert_eq!(
            testimonial.avatar_url(),
            "/placeholder.svg?text=김&width=40&height=40"
        );
    }

    #[test]
    fn mailto_link() {
        let content = SiteContent::embedded().unwrap();
        assert_eq!(content.contact.mailto(), "mailto:contact@aipilot.com");
    }

    #[test]
    fn rejects_hero_navigation() {
        let source = with_nav("[[nav]]\nsection = \"hero\"\nlabel = \"홈\"\n\n");
        assert!(matches!(
            SiteContent::from_toml(&source),
            Err(Error::HeroInNavigation)
        ));
    }

    #[test]
    fn rejects_duplicate_navigation() {
        let source = with_nav(
            "[[nav]]\nsection = \"features\"\nlabel = \"a\"\n\n[[nav]]\nsection = \"features\"\nlabel = \"b\"\n\n",
        );
        assert!(matches!(
            SiteContent::from_toml(&source),
            Err(Error::DuplicateNavigation(SectionId::Features))
        ));
    }

    #[test]
    fn rejects_missing_navigation() {
        let source = with_nav("[[nav]]\nsection = \"features\"\nlabel = \"기능\"\n\n");
        assert!(matches!(
            SiteContent::from_toml(&source),
            Err(Error::MissingNavigation(SectionId::HowItWorks))
        ));
    }

    #[test]
    fn rejects_unknown_section_in_navigation() {
        let source = with_nav("[[nav]]\nsection = \"pricing\"\nlabel = \"가격\"\n\n");
        assert!(matches!(
            SiteContent::from_toml(&source),
            Err(Error::Content(_))
        ));
    }

    #[test]
    fn spy_table_is_optional() {
        let source = EMBEDDED_SITE.replace(
            "scroll_behavior = \"smooth\"",
            "scroll_behavior = \"instant\"",
        );
        let content = SiteContent::from_toml(&source).unwrap();
        assert_eq!(content.spy.scroll_behavior, ScrollMode::Instant);

        let without_spy = &EMBEDDED_SITE[EMBEDDED_SITE.find("[brand]").unwrap_or(0)..];
        let content = SiteContent::from_toml(without_spy).unwrap();
        assert_eq!(content.spy, SpyConfig::default());
    }
}
