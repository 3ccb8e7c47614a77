//! Document title and site-name placeholders.

use launchpad_content::{non_empty, SiteInfo};

use crate::surface::{PageContext, Surface};

/// Apply the site name to the title and every site-name placeholder.
pub fn update_site_brand<U: Surface + ?Sized>(
    surface: &mut U,
    site: Option<&SiteInfo>,
    page: &PageContext,
) {
    let Some(name) = non_empty(site.and_then(|s| s.name.as_deref())) else {
        return;
    };

    surface.set_title(&page_title(name, page));
    surface.set_site_name(name);
}

/// `Name` on the home page, `Name · Page` elsewhere.
pub fn page_title(name: &str, page: &PageContext) -> String {
    if page.is_home() {
        name.to_string()
    } else {
        format!("{} · {}", name, capitalize(page.page()))
    }
}

/// Capitalize first letter of a string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
