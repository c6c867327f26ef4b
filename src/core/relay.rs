//! Third-party form relay client.
//!
//! A submission is a single JSON POST.  The relay's response contract is not
//! ours: a 2xx means delivered, anything else is a rejection whose body may
//! carry `{"errors": [{"message": "..."}]}`.

use std::time::Duration;

use serde::Deserialize;

use super::contact::{endpoint_configured, Submission};
use crate::error::RelayError;

/// Anything that can deliver a contact form submission.
pub trait FormRelay: Send {
    fn submit(&self, submission: &Submission) -> Result<(), RelayError>;
}

#[derive(Debug, Deserialize)]
struct RelayErrors {
    #[serde(default)]
    errors: Vec<RelayErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct RelayErrorEntry {
    message: Option<String>,
}

/// Message of the first entry in a rejection body.  Later entries are never
/// consulted.
pub fn rejection_message(body: &str) -> Option<String> {
    let parsed: RelayErrors = serde_json::from_str(body).ok()?;
    parsed
        .errors
        .into_iter()
        .next()
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
}

/// Blocking HTTP relay (Formspree-compatible).
pub struct HttpRelay {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

}

impl FormRelay for HttpRelay {
    fn submit(&self, submission: &Submission) -> Result<(), RelayError> {
        if !endpoint_configured(&self.endpoint) {
            return Err(RelayError::EndpointNotConfigured);
        }

        let resp = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(submission)
            .send()
            .map_err(|e| RelayError::Network(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = resp.text().unwrap_or_default();
        tracing::warn!("form relay returned status {status}");
        Err(RelayError::Rejected {
            status: status.as_u16(),
            message: rejection_message(&body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_message() {
        let body = r#"{"errors":[{"code":"TYPE_EMAIL","message":"should be an email"},{"message":"second"}]}"#;
        assert_eq!(rejection_message(body).as_deref(), Some("should be an email"));
    }

    #[test]
    fn only_the_first_entry_counts() {
        let body = r#"{"errors":[{"code":"X"},{"message":"second"}]}"#;
        assert_eq!(rejection_message(body), None);
    }

    #[test]
    fn tolerates_odd_bodies() {
        assert_eq!(rejection_message(""), None);
        assert_eq!(rejection_message("<html>"), None);
        assert_eq!(rejection_message(r#"{"errors":[]}"#), None);
        assert_eq!(rejection_message(r#"{"error":"x"}"#), None);
        assert_eq!(rejection_message(r#"{"errors":[{"message":"  "}]}"#), None);
    }

    #[test]
    fn placeholder_endpoint_short_circuits() {
        let relay = HttpRelay::new("https://formspree.io/f/YOUR_FORM_ID");
        let submission = Submission {
            name: "a".into(),
            email: "a@b.c".into(),
            message: "m".into(),
            project_type: "p".into(),
            budget: "b".into(),
            company: None,
            phone: None,
            newsletter: None,
        };
        assert_eq!(
            relay.submit(&submission),
            Err(RelayError::EndpointNotConfigured)
        );
    }
}
