//! Contact section and form submission.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};

use launchpad_content::ContactConfig;

use crate::surface::Surface;

pub const DEFAULT_HEADLINE: &str = "Book a call";
pub const DEFAULT_PENDING_MESSAGE: &str = "Sending…";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Thanks! We will be in touch shortly.";
pub const DEFAULT_ERROR_MESSAGE: &str = "We could not send your request. Please try again later.";

/// Shown when the form is submitted without an endpoint.
pub const MISSING_ENDPOINT_MESSAGE: &str =
    "Set contact.endpoint in content/site.json to enable submissions.";

/// Status messages shown while and after submitting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessages {
    pub pending: String,
    pub success: String,
    pub error: String,
}

impl Default for ContactMessages {
    fn default() -> Self {
        Self {
            pending: DEFAULT_PENDING_MESSAGE.to_string(),
            success: DEFAULT_SUCCESS_MESSAGE.to_string(),
            error: DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Resolved contact configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactView {
    pub headline: String,
    pub subheading: String,
    pub endpoint: String,
    pub messages: ContactMessages,
}

impl ContactView {
    pub fn from_config(contact: Option<&ContactConfig>) -> Self {
        let Some(contact) = contact else {
            return Self::from_config(Some(&ContactConfig::default()));
        };

        Self {
            headline: or_default(&contact.headline, DEFAULT_HEADLINE),
            subheading: or_default(&contact.subheading, ""),
            endpoint: or_default(&contact.endpoint, ""),
            messages: ContactMessages {
                pending: or_default(&contact.pending_message, DEFAULT_PENDING_MESSAGE),
                success: or_default(&contact.success_message, DEFAULT_SUCCESS_MESSAGE),
                error: or_default(&contact.error_message, DEFAULT_ERROR_MESSAGE),
            },
        }
    }
}

fn or_default(value: &Option<String>, default: &str) -> String {
    value.clone().unwrap_or_else(|| default.to_string())
}

/// Populate the contact section and arm its form.
pub fn configure_contact<U: Surface + ?Sized>(surface: &mut U, contact: Option<&ContactConfig>) {
    surface.render_contact(&ContactView::from_config(contact));
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    #[default]
    Neutral,
    Success,
    Error,
}

/// The form's status line.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactStatus {
    pub text: String,
    pub kind: StatusKind,
}

impl ContactStatus {
    fn set(&mut self, text: &str, kind: StatusKind) {
        self.text = text.to_string();
        self.kind = kind;
    }

    /// CSS classes of the status element.
    pub fn class(&self) -> &'static str {
        match self.kind {
            StatusKind::Neutral => "contact-status",
            StatusKind::Success => "contact-status success",
            StatusKind::Error => "contact-status error",
        }
    }
}

/// A named form control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub input_type: String,
    pub multiline: bool,
    pub value: String,
}

impl FormField {
    pub fn input(name: &str, label: &str, input_type: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            input_type: input_type.to_string(),
            multiline: false,
            value: String::new(),
        }
    }

    pub fn textarea(name: &str, label: &str) -> Self {
        Self {
            multiline: true,
            ..Self::input(name, label, "text")
        }
    }
}

/// The contact form and its submission state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactForm {
    pub fields: Vec<FormField>,
    pub endpoint: String,
    pub messages: ContactMessages,

    /// Whether a submit handler has been installed
    pub armed: bool,

    /// Whether a submission is in flight; the submit control is disabled meanwhile
    pub submitting: bool,
}

impl ContactForm {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            endpoint: String::new(),
            messages: ContactMessages::default(),
            armed: false,
            submitting: false,
        }
    }

    /// Set a field's value. Returns `false` when the form has no such field.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.value = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Field values as a flat JSON object.
    pub fn payload(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), Value::String(f.value.clone())))
            .collect()
    }

    fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }
}

/// A submission ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    pub endpoint: String,
    pub payload: Value,
}

/// Result of asking the form to submit.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Send this request, then report back with `finish_submit`
    Send(SubmitRequest),

    /// No endpoint is configured; the hint has been shown
    MissingEndpoint,

    /// A previous submission has not finished yet
    Pending,

    /// The section has no form, or it was never configured
    Unavailable,
}

/// Final outcome of `ContactSection::submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
    MissingEndpoint,
    Pending,
    Unavailable,
}

/// Errors that can occur while sending a submission.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Failed to submit form: endpoint answered {0}")]
    Status(u16),

    #[error("Failed to submit form: {0}")]
    Http(#[from] reqwest::Error),
}

/// Delivers form submissions.
#[async_trait]
pub trait FormTransport: Send + Sync {
    /// POST `payload` as JSON to `endpoint`.
    async fn post_json(&self, endpoint: &str, payload: &Value) -> Result<(), SubmitError>;
}

/// Sends submissions over HTTP.
#[derive(Debug, Clone, Default)]
pub struct HttpFormTransport {
    client: reqwest::Client,
}

impl HttpFormTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FormTransport for HttpFormTransport {
    async fn post_json(&self, endpoint: &str, payload: &Value) -> Result<(), SubmitError> {
        let response = self.client.post(endpoint).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }

        Ok(())
    }
}

/// The contact section: copy, status line and optional form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSection {
    pub headline: String,
    pub subheading: String,
    pub status: ContactStatus,
    pub form: Option<ContactForm>,
}

impl ContactSection {
    pub fn new(form: Option<ContactForm>) -> Self {
        Self {
            headline: DEFAULT_HEADLINE.to_string(),
            subheading: String::new(),
            status: ContactStatus::default(),
            form,
        }
    }

    /// Apply copy, clear the status line and arm the form.
    pub fn configure(&mut self, view: &ContactView) {
        self.headline = view.headline.clone();
        self.subheading = view.subheading.clone();
        self.status = ContactStatus::default();

        if let Some(form) = &mut self.form {
            form.endpoint = view.endpoint.clone();
            form.messages = view.messages.clone();
            form.armed = true;
        }
    }

    /// Start a submission.
    pub fn begin_submit(&mut self) -> Submission {
        let Some(form) = self.form.as_mut().filter(|f| f.armed) else {
            return Submission::Unavailable;
        };

        if form.submitting {
            return Submission::Pending;
        }

        if form.endpoint.is_empty() {
            self.status.set(MISSING_ENDPOINT_MESSAGE, StatusKind::Error);
            return Submission::MissingEndpoint;
        }

        let request = SubmitRequest {
            endpoint: form.endpoint.clone(),
            payload: Value::Object(form.payload()),
        };
        form.submitting = true;
        self.status.set(&form.messages.pending, StatusKind::Neutral);

        Submission::Send(request)
    }

    /// Record how a submission started with `begin_submit` ended.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        form.submitting = false;

        match result {
            Ok(()) => {
                form.reset();
                self.status.set(&form.messages.success, StatusKind::Success);
            }
            Err(e) => {
                tracing::error!("{}", e);
                self.status.set(&form.messages.error, StatusKind::Error);
            }
        }
    }

    /// Submit the form through `transport`.
    pub async fn submit<T: FormTransport + ?Sized>(&mut self, transport: &T) -> SubmitOutcome {
        let request = match self.begin_submit() {
            Submission::Send(request) => request,
            Submission::MissingEndpoint => return SubmitOutcome::MissingEndpoint,
            Submission::Pending => return SubmitOutcome::Pending,
            Submission::Unavailable => return SubmitOutcome::Unavailable,
        };

        let result = transport
            .post_json(&request.endpoint, &request.payload)
            .await;
        let outcome = if result.is_ok() {
            SubmitOutcome::Sent
        } else {
            SubmitOutcome::Failed
        };

        self.finish_submit(result);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Records requests and answers with a fixed status.
    struct Recorder {
        status: u16,
        sent: Mutex<Vec<(String, Value)>>,
    }

    impl Recorder {
        fn answering(status: u16) -> Self {
            Self {
                status,
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<(String, Value)> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl FormTransport for Recorder {
        async fn post_json(&self, endpoint: &str, payload: &Value) -> Result<(), SubmitError> {
            self.sent
                .lock()
                .unwrap()
                .push((endpoint.to_string(), payload.clone()));
            if (200..300).contains(&self.status) {
                Ok(())
            } else {
                Err(SubmitError::Status(self.status))
            }
        }
    }

    fn configured(endpoint: Option<&str>) -> Document {
        let mut doc = Document::new();
        configure_contact(
            &mut doc,
            Some(&ContactConfig {
                endpoint: endpoint.map(str::to_string),
                success_message: Some("Got it".into()),
                ..Default::default()
            }),
        );
        let form = doc.contact_form_mut().unwrap();
        form.set_field("name", "Ada");
        form.set_field("email", "ada@example.com");
        doc
    }

    #[test]
    fn applies_defaults() {
        let view = ContactView::from_config(None);

        assert_eq!(view.headline, DEFAULT_HEADLINE);
        assert_eq!(view.subheading, "");
        assert_eq!(view.endpoint, "");
        assert_eq!(view.messages, ContactMessages::default());
    }

    #[test]
    fn configuring_clears_status() {
        let mut doc = configured(None);
        doc.contact.as_mut().unwrap().begin_submit();

        configure_contact(&mut doc, None);

        let contact = doc.contact.as_ref().unwrap();
        assert_eq!(contact.status, ContactStatus::default());
        assert_eq!(contact.status.class(), "contact-status");
    }

    #[tokio::test]
    async fn missing_endpoint_shows_hint_without_sending() {
        let mut doc = configured(None);
        let transport = Recorder::answering(200);

        let outcome = doc.contact.as_mut().unwrap().submit(&transport).await;

        assert_eq!(outcome, SubmitOutcome::MissingEndpoint);
        assert!(transport.sent().is_empty());
        let status = &doc.contact.as_ref().unwrap().status;
        assert_eq!(status.text, MISSING_ENDPOINT_MESSAGE);
        assert_eq!(status.kind, StatusKind::Error);
    }

    #[tokio::test]
    async fn success_clears_fields() {
        let mut doc = configured(Some("https://forms.example.com/acme"));
        let transport = Recorder::answering(201);

        let outcome = doc.contact.as_mut().unwrap().submit(&transport).await;

        assert_eq!(outcome, SubmitOutcome::Sent);
        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "https://forms.example.com/acme");
        assert_eq!(sent[0].1["name"], "Ada");
        assert_eq!(sent[0].1["email"], "ada@example.com");
        assert_eq!(sent[0].1["message"], "");

        let contact = doc.contact.as_ref().unwrap();
        assert_eq!(contact.status.text, "Got it");
        assert_eq!(contact.status.class(), "contact-status success");
        assert_eq!(contact.form.as_ref().unwrap().value("name"), Some(""));
    }

    #[tokio::test]
    async fn failure_preserves_fields() {
        let mut doc = configured(Some("https://forms.example.com/acme"));
        let transport = Recorder::answering(500);

        let outcome = doc.contact.as_mut().unwrap().submit(&transport).await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        let contact = doc.contact.as_ref().unwrap();
        assert_eq!(contact.status.text, DEFAULT_ERROR_MESSAGE);
        assert_eq!(contact.status.kind, StatusKind::Error);
        assert_eq!(contact.form.as_ref().unwrap().value("name"), Some("Ada"));
        assert!(!contact.form.as_ref().unwrap().submitting);
    }

    #[test]
    fn pending_submission_blocks_another() {
        let mut doc = configured(Some("https://forms.example.com/acme"));
        let contact = doc.contact.as_mut().unwrap();

        let first = contact.begin_submit();
        assert!(matches!(first, Submission::Send(_)));
        assert_eq!(contact.status.text, DEFAULT_PENDING_MESSAGE);
        assert!(contact.form.as_ref().unwrap().submitting);

        assert_eq!(contact.begin_submit(), Submission::Pending);

        contact.finish_submit(Ok(()));
        assert!(matches!(contact.begin_submit(), Submission::Send(_)));
    }

    #[test]
    fn unconfigured_form_does_not_submit() {
        let mut doc = Document::new();

        assert_eq!(
            doc.contact.as_mut().unwrap().begin_submit(),
            Submission::Unavailable
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let mut doc = configured(None);

        assert!(!doc.contact_form_mut().unwrap().set_field("fax", "123"));
    }
}
