//! In-memory model of the page template.
//!
//! `Document` holds the state of every region the page template declares and
//! implements [`Surface`], so the population pipeline can run without a
//! browser. [`TemplateEngine`](crate::templates::TemplateEngine) turns it
//! into HTML.

use serde::Serialize;

use crate::contact::{ContactForm, ContactSection, ContactView, FormField};
use crate::content::ContentBody;
use crate::features::FeaturesView;
use crate::footer::FooterView;
use crate::hero::HeroView;
use crate::menu::MenuState;
use crate::nav::NavLink;
use crate::surface::Surface;

/// Title of the template before any configuration is applied.
pub const DEFAULT_TITLE: &str = "LaunchPad Sites";

/// Hero headline of the template before any configuration is applied.
pub const DEFAULT_HEADLINE: &str = "Launch your site";

/// Heading of the error article that replaces the page on failure.
pub const ERROR_HEADING: &str = "Configuration error";

/// Which regions the page template declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slots {
    pub nav: bool,
    pub menu_toggle: bool,
    pub page_section: bool,
    pub hero: bool,
    pub features: bool,
    pub page_content: bool,
    pub contact: bool,
    pub contact_form: bool,
    pub footer: bool,
}

impl Default for Slots {
    fn default() -> Self {
        Self {
            nav: true,
            menu_toggle: true,
            page_section: true,
            hero: true,
            features: true,
            page_content: true,
            contact: true,
            contact_form: true,
            footer: true,
        }
    }
}

/// A custom property set on the document root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssProperty {
    pub name: String,
    pub value: String,
}

impl CssProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A text element that can be hidden.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextElement {
    pub text: String,
    pub hidden: bool,
}

impl TextElement {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            hidden: false,
        }
    }

    /// Show `text`, or clear and hide the element.
    fn show_or_hide(&mut self, text: Option<&String>) {
        self.text = text.cloned().unwrap_or_default();
        self.hidden = text.is_none();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImageElement {
    pub src: Option<String>,
    pub alt: Option<String>,
    pub hidden: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LinkElement {
    pub label: String,
    pub href: Option<String>,
    pub hidden: bool,
}

impl LinkElement {
    fn show_or_hide(&mut self, cta: Option<(&str, &str)>) {
        match cta {
            Some((label, href)) => {
                self.label = label.to_string();
                self.href = Some(href.to_string());
                self.hidden = false;
            }
            None => self.hidden = true,
        }
    }
}

/// Navigation panel with its menu toggle.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NavRegion {
    pub links: Vec<NavLink>,
    pub menu: MenuState,
    pub has_toggle: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroRegion {
    pub kicker: TextElement,
    pub title: TextElement,
    pub subtitle: TextElement,
    pub image: ImageElement,
    pub primary_cta: LinkElement,
    pub secondary_cta: LinkElement,
}

impl Default for HeroRegion {
    fn default() -> Self {
        Self {
            kicker: TextElement::default(),
            title: TextElement::new(DEFAULT_HEADLINE),
            subtitle: TextElement::default(),
            image: ImageElement::default(),
            primary_cta: LinkElement::default(),
            secondary_cta: LinkElement::default(),
        }
    }
}

impl HeroRegion {
    fn apply(&mut self, view: &HeroView) {
        self.kicker.show_or_hide(view.kicker.as_ref());

        if let Some(headline) = &view.headline {
            self.title.text = headline.clone();
        }

        self.subtitle.show_or_hide(view.subheading.as_ref());

        match &view.image {
            Some(image) => {
                self.image.src = Some(image.src.clone());
                self.image.alt = Some(image.alt.clone());
                self.image.hidden = false;
            }
            None => self.image.hidden = true,
        }

        self.primary_cta.show_or_hide(
            view.primary_cta
                .as_ref()
                .map(|c| (c.label.as_str(), c.href.as_str())),
        );
        self.secondary_cta.show_or_hide(
            view.secondary_cta
                .as_ref()
                .map(|c| (c.label.as_str(), c.href.as_str())),
        );
    }
}

/// Where the error article was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorTarget {
    PageSection,
    Main,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDisplay {
    pub message: String,
    pub target: ErrorTarget,
}

/// The page template and the state of each of its regions.
///
/// A region is `None` when the template does not declare it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub slots: Slots,
    pub root_properties: Vec<CssProperty>,
    pub title: String,
    pub site_name: String,
    pub nav: Option<NavRegion>,
    pub hero: Option<HeroRegion>,
    pub features: Option<FeaturesView>,
    pub content: Option<ContentBody>,
    pub contact: Option<ContactSection>,
    pub footer: Option<FooterView>,
    pub error: Option<ErrorDisplay>,
}

impl Document {
    /// The standard page template with every region present.
    pub fn new() -> Self {
        Self::with_slots(Slots::default())
    }

    /// A template declaring only the given regions.
    pub fn with_slots(slots: Slots) -> Self {
        let contact = slots.contact.then(|| {
            ContactSection::new(slots.contact_form.then(|| ContactForm::new(default_fields())))
        });

        Self {
            slots,
            root_properties: Vec::new(),
            title: DEFAULT_TITLE.to_string(),
            site_name: DEFAULT_TITLE.to_string(),
            nav: slots.nav.then(|| NavRegion {
                has_toggle: slots.menu_toggle,
                ..NavRegion::default()
            }),
            hero: slots.hero.then(HeroRegion::default),
            features: None,
            content: None,
            contact,
            footer: None,
            error: None,
        }
    }

    /// The contact form, when the template has one.
    pub fn contact_form_mut(&mut self) -> Option<&mut ContactForm> {
        self.contact.as_mut().and_then(|c| c.form.as_mut())
    }

    /// Activate the menu toggle. Returns whether the panel is now open.
    pub fn toggle_menu(&mut self) -> bool {
        match &mut self.nav {
            Some(nav) => nav.menu.toggle(),
            None => false,
        }
    }

    /// Follow the navigation link at `index`: the mobile panel closes and
    /// the link's href is returned for the browser to navigate to.
    pub fn follow_nav_link(&mut self, index: usize) -> Option<String> {
        let nav = self.nav.as_mut()?;
        let href = nav.links.get(index)?.link.href.clone();
        if nav.has_toggle {
            nav.menu.close();
        }
        Some(href)
    }

    /// The error shown in place of the page, if any.
    pub fn error(&self) -> Option<&ErrorDisplay> {
        self.error.as_ref()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Controls of the standard contact form.
fn default_fields() -> Vec<FormField> {
    vec![
        FormField::input("name", "Name", "text"),
        FormField::input("email", "Email", "email"),
        FormField::input("company", "Company", "text"),
        FormField::textarea("message", "How can we help?"),
    ]
}

impl Surface for Document {
    fn set_root_property(&mut self, name: &str, value: &str) {
        match self.root_properties.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.value = value.to_string(),
            None => self.root_properties.push(CssProperty::new(name, value)),
        }
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_site_name(&mut self, name: &str) {
        self.site_name = name.to_string();
    }

    fn render_nav(&mut self, links: &[NavLink]) {
        if let Some(nav) = &mut self.nav {
            nav.links = links.to_vec();
        }
    }

    fn render_hero(&mut self, hero: &HeroView) {
        if let Some(region) = &mut self.hero {
            region.apply(hero);
        }
    }

    fn render_features(&mut self, features: &FeaturesView) {
        if self.slots.features {
            self.features = Some(features.clone());
        }
    }

    fn render_footer(&mut self, footer: &FooterView) {
        if self.slots.footer {
            self.footer = Some(footer.clone());
        }
    }

    fn render_content(&mut self, body: &ContentBody) {
        if self.slots.page_content {
            self.content = Some(body.clone());
        }
    }

    fn render_contact(&mut self, contact: &ContactView) {
        if let Some(section) = &mut self.contact {
            section.configure(contact);
        }
    }

    fn enable_menu_toggle(&mut self) {
        if let Some(nav) = &mut self.nav {
            nav.menu.enabled = nav.has_toggle;
        }
    }

    fn show_error(&mut self, message: &str) {
        let target = if self.slots.page_section {
            ErrorTarget::PageSection
        } else {
            ErrorTarget::Main
        };

        self.error = Some(ErrorDisplay {
            message: message.to_string(),
            target,
        });
    }
}
