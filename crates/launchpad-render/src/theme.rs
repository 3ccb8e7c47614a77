//! Theme custom properties.

use serde_json::Value;

use launchpad_content::Theme;

use crate::surface::Surface;

/// Set `--<key>` on the document root for every theme entry.
///
/// Values are passed through untouched; non-string values use their JSON text.
pub fn apply_theme<U: Surface + ?Sized>(surface: &mut U, theme: Option<&Theme>) {
    let Some(theme) = theme else {
        return;
    };

    for (key, value) in theme {
        let value = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        surface.set_root_property(&format!("--{}", key), &value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{CssProperty, Document};
    use pretty_assertions::assert_eq;

    #[test]
    fn sets_custom_properties_in_order() {
        let theme: Theme =
            serde_json::from_str(r##"{"brand":"#4f46e5","radius":12,"font":"Inter"}"##).unwrap();
        let mut doc = Document::new();

        apply_theme(&mut doc, Some(&theme));

        assert_eq!(
            doc.root_properties,
            vec![
                CssProperty::new("--brand", "#4f46e5"),
                CssProperty::new("--radius", "12"),
                CssProperty::new("--font", "Inter"),
            ]
        );
    }

    #[test]
    fn missing_theme_is_a_no_op() {
        let mut doc = Document::new();

        apply_theme(&mut doc, None);
        apply_theme(&mut doc, Some(&Theme::new()));

        assert!(doc.root_properties.is_empty());
    }
}
