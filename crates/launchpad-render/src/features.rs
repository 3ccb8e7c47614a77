//! Feature card grid.

use serde::Serialize;

use launchpad_content::Feature;

use crate::surface::Surface;

/// Shown in place of the grid when no features are configured.
pub const EMPTY_FEATURES_MESSAGE: &str =
    "Add entries to content/site.json to highlight product differentiators.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCard {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Contents of the feature grid: either cards or the placeholder message.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeaturesView {
    pub cards: Vec<FeatureCard>,
    pub empty_message: Option<String>,
}

impl FeaturesView {
    pub fn from_features(features: &[Feature]) -> Self {
        if features.is_empty() {
            return Self {
                cards: Vec::new(),
                empty_message: Some(EMPTY_FEATURES_MESSAGE.to_string()),
            };
        }

        let cards = features
            .iter()
            .map(|f| FeatureCard {
                icon: f.icon.clone().unwrap_or_default(),
                title: f.title.clone().unwrap_or_default(),
                description: f.description.clone().unwrap_or_default(),
            })
            .collect();

        Self {
            cards,
            empty_message: None,
        }
    }
}

/// Rebuild the feature grid.
pub fn render_features<U: Surface + ?Sized>(surface: &mut U, features: &[Feature]) {
    surface.render_features(&FeaturesView::from_features(features));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    #[test]
    fn renders_cards_in_order() {
        let features = vec![
            Feature {
                icon: Some("*".into()),
                title: Some("Fast".into()),
                description: Some("Very".into()),
            },
            Feature {
                title: Some("Cheap".into()),
                ..Default::default()
            },
        ];
        let mut doc = Document::new();

        render_features(&mut doc, &features);

        let view = doc.features.as_ref().unwrap();
        assert_eq!(view.cards.len(), 2);
        assert_eq!(view.cards[0].title, "Fast");
        assert_eq!(view.cards[1].title, "Cheap");
        assert_eq!(view.cards[1].icon, "");
        assert!(view.empty_message.is_none());
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let mut doc = Document::new();

        render_features(&mut doc, &[]);

        let view = doc.features.as_ref().unwrap();
        assert!(view.cards.is_empty());
        assert_eq!(view.empty_message.as_deref(), Some(EMPTY_FEATURES_MESSAGE));
    }
}
