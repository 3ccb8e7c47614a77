//! Contact form submission command.

use anyhow::{bail, Context, Result};
use launchpad_render::{Document, HttpFormTransport, PageContext, Renderer, SubmitOutcome};
use url::Url;

use crate::config::ConfigFile;

/// Run the contact command: populate the page, fill its form and submit it.
pub async fn run(
    config: &ConfigFile,
    page: &str,
    source: Option<Url>,
    fields: &[String],
) -> Result<()> {
    let loader = super::content_loader(&config.site.root, source);
    let context = PageContext::for_page(page);
    let mut document = Document::new();

    Renderer::default()
        .initialise(&loader, &mut document, &context)
        .await
        .with_context(|| format!("Failed to load page {}", page))?;

    let form = document
        .contact_form_mut()
        .context("The page has no contact form")?;
    for field in fields {
        let (name, value) = parse_field(field)?;
        if !form.set_field(name, value) {
            bail!("Unknown form field {:?}", name);
        }
    }

    let Some(section) = document.contact.as_mut() else {
        bail!("The page has no contact section");
    };
    let outcome = section.submit(&HttpFormTransport::new()).await;

    match outcome {
        SubmitOutcome::Sent => {
            tracing::info!("{}", section.status.text);
            Ok(())
        }
        SubmitOutcome::Failed | SubmitOutcome::MissingEndpoint => {
            bail!("{}", section.status.text)
        }
        SubmitOutcome::Pending | SubmitOutcome::Unavailable => {
            bail!("The contact form is not ready to submit")
        }
    }
}

/// Split `FIELD=VALUE`; the value may itself contain `=`.
fn parse_field(field: &str) -> Result<(&str, &str)> {
    match field.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        _ => bail!("Expected FIELD=VALUE, got {:?}", field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_equals() {
        assert_eq!(parse_field("name=Ada").unwrap(), ("name", "Ada"));
        assert_eq!(parse_field("message=a=b").unwrap(), ("message", "a=b"));
        assert_eq!(parse_field("company=").unwrap(), ("company", ""));
    }

    #[test]
    fn rejects_missing_name() {
        assert!(parse_field("=x").is_err());
        assert!(parse_field("name").is_err());
    }
}
