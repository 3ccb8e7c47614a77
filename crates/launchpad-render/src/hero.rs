//! Hero section.

use serde::Serialize;

use launchpad_content::{non_empty, CallToAction, HeroConfig};

use crate::surface::Surface;

/// Alt text used when neither `imageAlt` nor a headline is configured.
pub const DEFAULT_IMAGE_ALT: &str = "Hero media";

/// What the hero section should show. `None` hides the element,
/// except the headline, which keeps the markup text when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeroView {
    pub kicker: Option<String>,
    pub headline: Option<String>,
    pub subheading: Option<String>,
    pub image: Option<HeroImage>,
    pub primary_cta: Option<CtaView>,
    pub secondary_cta: Option<CtaView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroImage {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CtaView {
    pub label: String,
    pub href: String,
}

impl HeroView {
    /// Decide each hero element independently from the configuration.
    pub fn from_config(config: Option<&HeroConfig>) -> Self {
        let Some(config) = config else {
            return Self::default();
        };

        let image = non_empty(config.image.as_deref()).map(|src| HeroImage {
            src: src.to_string(),
            alt: config
                .image_alt
                .as_deref()
                .or(config.headline.as_deref())
                .unwrap_or(DEFAULT_IMAGE_ALT)
                .to_string(),
        });

        Self {
            kicker: text(&config.kicker),
            headline: text(&config.headline),
            subheading: text(&config.subheading),
            image,
            primary_cta: CtaView::from_config(config.primary_cta.as_ref()),
            secondary_cta: CtaView::from_config(config.secondary_cta.as_ref()),
        }
    }
}

impl CtaView {
    /// A CTA is shown only when it has both a label and a target.
    fn from_config(cta: Option<&CallToAction>) -> Option<Self> {
        let cta = cta?;
        let label = non_empty(cta.label.as_deref())?;
        let href = non_empty(cta.href.as_deref())?;
        Some(Self {
            label: label.to_string(),
            href: href.to_string(),
        })
    }
}

fn text(value: &Option<String>) -> Option<String> {
    non_empty(value.as_deref()).map(str::to_string)
}

/// Populate the hero section for a page.
pub fn populate_hero<U: Surface + ?Sized>(surface: &mut U, hero: Option<&HeroConfig>) {
    surface.render_hero(&HeroView::from_config(hero));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, DEFAULT_HEADLINE};
    use pretty_assertions::assert_eq;

    fn cta(label: Option<&str>, href: Option<&str>) -> CallToAction {
        CallToAction {
            label: label.map(str::to_string),
            href: href.map(str::to_string),
        }
    }

    #[test]
    fn populates_every_element() {
        let config = HeroConfig {
            kicker: Some("New".into()),
            headline: Some("Ship it".into()),
            subheading: Some("Fast".into()),
            image: Some("/hero.png".into()),
            image_alt: Some("Rocket".into()),
            primary_cta: Some(cta(Some("Start"), Some("#contact"))),
            secondary_cta: Some(cta(Some("Docs"), Some("/docs"))),
        };
        let mut doc = Document::new();

        populate_hero(&mut doc, Some(&config));

        let hero = doc.hero.as_ref().unwrap();
        assert_eq!(hero.kicker.text, "New");
        assert!(!hero.kicker.hidden);
        assert_eq!(hero.title.text, "Ship it");
        assert_eq!(hero.subtitle.text, "Fast");
        assert_eq!(hero.image.src.as_deref(), Some("/hero.png"));
        assert_eq!(hero.image.alt.as_deref(), Some("Rocket"));
        assert!(!hero.image.hidden);
        assert_eq!(hero.primary_cta.label, "Start");
        assert_eq!(hero.primary_cta.href.as_deref(), Some("#contact"));
        assert!(!hero.secondary_cta.hidden);
    }

    #[test]
    fn missing_fields_hide_their_elements_only() {
        let config = HeroConfig {
            headline: Some("Ship it".into()),
            primary_cta: Some(cta(Some("Start"), None)),
            ..Default::default()
        };
        let mut doc = Document::new();

        populate_hero(&mut doc, Some(&config));

        let hero = doc.hero.as_ref().unwrap();
        assert!(hero.kicker.hidden);
        assert_eq!(hero.kicker.text, "");
        assert_eq!(hero.title.text, "Ship it");
        assert!(!hero.title.hidden);
        assert!(hero.subtitle.hidden);
        assert!(hero.image.hidden);
        assert!(hero.primary_cta.hidden);
        assert!(hero.secondary_cta.hidden);
    }

    #[test]
    fn absent_hero_keeps_markup_headline() {
        let mut doc = Document::new();

        populate_hero(&mut doc, None);

        let hero = doc.hero.as_ref().unwrap();
        assert_eq!(hero.title.text, DEFAULT_HEADLINE);
        assert!(hero.kicker.hidden);
        assert!(hero.image.hidden);
    }

    #[test]
    fn image_alt_falls_back_to_headline_then_default() {
        let with_headline = HeroView::from_config(Some(&HeroConfig {
            headline: Some("Ship it".into()),
            image: Some("/a.png".into()),
            ..Default::default()
        }));
        assert_eq!(with_headline.image.unwrap().alt, "Ship it");

        let bare = HeroView::from_config(Some(&HeroConfig {
            image: Some("/a.png".into()),
            ..Default::default()
        }));
        assert_eq!(bare.image.unwrap().alt, DEFAULT_IMAGE_ALT);
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let view = HeroView::from_config(Some(&HeroConfig {
            kicker: Some(String::new()),
            secondary_cta: Some(cta(Some(""), Some("/x"))),
            ..Default::default()
        }));

        assert_eq!(view, HeroView::default());
    }
}
