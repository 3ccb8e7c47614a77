//! Template engine for serializing a populated page.

use minijinja::{context, Environment};

use crate::contact::MISSING_ENDPOINT_MESSAGE;
use crate::document::{Document, ERROR_HEADING};
use crate::surface::PageContext;

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in page templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        for (name, source) in [
            ("base.html", BASE_TEMPLATE),
            ("page.html", PAGE_TEMPLATE),
            ("nav.html", NAV_TEMPLATE),
            ("footer.html", FOOTER_TEMPLATE),
            ("error.html", ERROR_TEMPLATE),
        ] {
            env.add_template_owned(name.to_string(), source.to_string())
                .expect("built-in templates are valid");
        }

        Self { env }
    }

    /// Render a populated document as a complete HTML page.
    pub fn render_document(
        &self,
        document: &Document,
        page: &PageContext,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("page.html")?;

        tmpl.render(context! {
            page => page.page(),
            slots => &document.slots,
            root_properties => &document.root_properties,
            title => &document.title,
            site_name => &document.site_name,
            nav => &document.nav,
            hero => &document.hero,
            features => &document.features,
            content => &document.content,
            contact => &document.contact,
            footer => &document.footer,
            error => &document.error,
            error_heading => ERROR_HEADING,
            menu_script => MENU_SCRIPT,
            missing_endpoint => MISSING_ENDPOINT_MESSAGE,
            contact_script => CONTACT_SCRIPT,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en"{% if root_properties %} style="{% for p in root_properties %}{{ p.name }}: {{ p.value }};{% if not loop.last %} {% endif %}{% endfor %}"{% endif %}>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  <link rel="stylesheet" href="/css/styles.css">
</head>
<body data-page="{{ page }}">
  <header class="site-header">
    <div class="container">
      <a href="/" class="brand" data-site-name>{{ site_name }}</a>
      {% include "nav.html" %}
    </div>
  </header>
  <main>
    {% block main %}{% endblock %}
  </main>
  {% include "footer.html" %}
  {% if nav and nav.menu.enabled %}<script>{{ menu_script | safe }}</script>{% endif %}
  {% if contact and contact.form and contact.form.armed %}<script>{{ contact_script | safe }}</script>{% endif %}
</body>
</html>"##;

const PAGE_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block main %}
{% if error and error.target == "main" %}
{% include "error.html" %}
{% else %}
{% if slots.page_section %}<div data-page-section>{% endif %}
{% if error %}
{% include "error.html" %}
{% else %}
{% if hero %}
<section class="hero">
  <div class="container">
    <p class="kicker{% if hero.kicker.hidden %} hidden{% endif %}" data-hero-kicker>{{ hero.kicker.text }}</p>
    <h1 data-hero-title>{{ hero.title.text }}</h1>
    <p class="subtitle{% if hero.subtitle.hidden %} hidden{% endif %}" data-hero-subtitle>{{ hero.subtitle.text }}</p>
    <div class="hero-actions">
      <a class="button primary{% if hero.primary_cta.hidden %} hidden{% endif %}" data-primary-cta{% if hero.primary_cta.href %} href="{{ hero.primary_cta.href }}"{% endif %}>{{ hero.primary_cta.label }}</a>
      <a class="button secondary{% if hero.secondary_cta.hidden %} hidden{% endif %}" data-secondary-cta{% if hero.secondary_cta.href %} href="{{ hero.secondary_cta.href }}"{% endif %}>{{ hero.secondary_cta.label }}</a>
    </div>
    <img class="hero-image{% if hero.image.hidden %} hidden{% endif %}" data-hero-image{% if hero.image.src %} src="{{ hero.image.src }}"{% endif %}{% if hero.image.alt %} alt="{{ hero.image.alt }}"{% endif %}>
  </div>
</section>
{% endif %}
{% if slots.features %}
<section class="features">
  <div class="container">
    <div class="feature-grid" data-features-list>
    {% if features %}
      {% if features.empty_message %}<p class="feature-empty">{{ features.empty_message }}</p>{% endif %}
      {% for card in features.cards %}
      <article class="feature-card">
        <div class="feature-icon">{{ card.icon }}</div>
        <h3>{{ card.title }}</h3>
        <p>{{ card.description }}</p>
      </article>
      {% endfor %}
    {% endif %}
    </div>
  </div>
</section>
{% endif %}
{% if slots.page_content %}
<section class="page-content">
  <div class="container">
    <article class="prose" data-page-content>
    {% if content %}{% if content.kind == "html" %}{{ content.value | safe }}{% else %}{{ content.value }}{% endif %}{% endif %}
    </article>
  </div>
</section>
{% endif %}
{% if contact %}
<section class="contact" id="contact" data-contact>
  <div class="container">
    <h2 data-contact-headline>{{ contact.headline }}</h2>
    <p data-contact-subheading>{{ contact.subheading }}</p>
    {% if contact.form %}
    <form class="contact-form" data-contact-form{% if contact.form.endpoint %} data-endpoint="{{ contact.form.endpoint }}"{% endif %} data-missing-endpoint="{{ missing_endpoint }}" data-pending="{{ contact.form.messages.pending }}" data-success="{{ contact.form.messages.success }}" data-error="{{ contact.form.messages.error }}">
      {% for field in contact.form.fields %}
      <label>
        <span>{{ field.label }}</span>
        {% if field.multiline %}<textarea name="{{ field.name }}" rows="4">{{ field.value }}</textarea>{% else %}<input type="{{ field.input_type }}" name="{{ field.name }}" value="{{ field.value }}">{% endif %}
      </label>
      {% endfor %}
      <button type="submit" class="button primary"{% if contact.form.submitting %} disabled{% endif %}>Send</button>
    </form>
    {% endif %}
    <p class="contact-status{% if contact.status.kind != "neutral" %} {{ contact.status.kind }}{% endif %}" data-contact-status role="status">{{ contact.status.text }}</p>
  </div>
</section>
{% endif %}
{% endif %}
{% if slots.page_section %}</div>{% endif %}
{% endif %}
{% endblock %}"##;

const NAV_TEMPLATE: &str = r##"{% if nav %}
{% if nav.has_toggle %}<button class="menu-toggle" type="button" data-menu-toggle aria-expanded="{{ "true" if nav.menu.open else "false" }}" aria-label="Toggle navigation">Menu</button>{% endif %}
<nav class="site-nav{% if nav.menu.open %} open{% endif %}" data-nav>
  <ul class="nav-list" data-nav-list>
  {% for item in nav.links %}
    <li><a class="nav-link{% if item.active %} active{% endif %}" href="{{ item.href }}"{% if item.target %} target="{{ item.target }}" rel="{{ item.rel }}"{% endif %}>{{ item.label }}</a></li>
  {% endfor %}
  </ul>
</nav>
{% endif %}"##;

const FOOTER_TEMPLATE: &str = r##"{% if slots.footer %}
<footer class="site-footer">
  <div class="container">
    <p data-footer-copy>{{ footer.copy if footer else "" }}</p>
    <ul class="footer-links" data-footer-links>
    {% if footer %}{% for link in footer.links %}
      <li><a href="{{ link.href }}"{% if link.target %} target="{{ link.target }}" rel="{{ link.rel }}"{% endif %}>{{ link.label }}</a></li>
    {% endfor %}{% endif %}
    </ul>
  </div>
</footer>
{% endif %}"##;

const ERROR_TEMPLATE: &str = r##"<section class="page-content">
  <div class="container">
    <article class="prose">
      <h1>{{ error_heading }}</h1>
      <p>{{ error.message }}</p>
    </article>
  </div>
</section>"##;

/// Submits the contact form as JSON, mirroring `ContactSection::submit`.
const CONTACT_SCRIPT: &str = r#"
(function () {
  var form = document.querySelector('[data-contact-form]');
  var status = document.querySelector('[data-contact-status]');
  if (!form || !status) return;
  var button = form.querySelector('button[type="submit"]');
  var submitting = false;

  function show(text, kind) {
    status.textContent = text;
    status.className = kind ? 'contact-status ' + kind : 'contact-status';
  }

  form.addEventListener('submit', function (event) {
    event.preventDefault();
    if (submitting) return;

    var endpoint = form.dataset.endpoint;
    if (!endpoint) {
      show(form.dataset.missingEndpoint, 'error');
      return;
    }

    var payload = {};
    new FormData(form).forEach(function (value, key) {
      payload[key] = value;
    });

    submitting = true;
    if (button) button.disabled = true;
    show(form.dataset.pending, '');

    fetch(endpoint, {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(payload)
    })
      .then(function (response) {
        if (!response.ok) {
          throw new Error('Request failed with status ' + response.status);
        }
        form.reset();
        show(form.dataset.success, 'success');
      })
      .catch(function (error) {
        console.error(error);
        show(form.dataset.error, 'error');
      })
      .then(function () {
        submitting = false;
        if (button) button.disabled = false;
      });
  });
})();
"#;

/// Wires the menu toggle and closes the panel when a link is followed.
const MENU_SCRIPT: &str = r#"
(function () {
  var toggle = document.querySelector('[data-menu-toggle]');
  var nav = document.querySelector('[data-nav]');
  if (!toggle || !nav) return;
  toggle.addEventListener('click', function () {
    var open = nav.classList.toggle('open');
    toggle.setAttribute('aria-expanded', String(open));
  });
  nav.querySelectorAll('a').forEach(function (link) {
    link.addEventListener('click', function () {
      nav.classList.remove('open');
      toggle.setAttribute('aria-expanded', 'false');
    });
  });
})();
"#;
