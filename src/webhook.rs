use crate::error::{ChangelogsError, Result};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use url::Url;

/// Posts the JSON summary of a run to the configured webhook
pub struct WebhookCaller {
    client: Client,
    url: Url,
}

impl WebhookCaller {
    pub fn new(webhook_url: &str) -> Result<Self> {
        let url = Self::validate_webhook_url(webhook_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("composer-changelogs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ChangelogsError::Webhook(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, url })
    }

    /// Sends `payload` as a plain text body and returns the response body.
    pub fn call(&self, payload: &str) -> Result<String> {
        if std::env::var("CHANGELOGS_VERBOSE").is_ok() {
            eprintln!("[VERBOSE] Posting summary to {}", self.url);
        }

        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "text/plain")
            .body(payload.to_string())
            .send()
            .map_err(|e| ChangelogsError::Webhook(format!("Request to {} failed: {e}", self.url)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChangelogsError::Webhook(format!("HTTP {status} from {}", self.url)));
        }

        response
            .text()
            .map_err(|e| ChangelogsError::Webhook(format!("Failed to read response: {e}")))
    }

    fn validate_webhook_url(webhook_url: &str) -> Result<Url> {
        let parsed = Url::parse(webhook_url)
            .map_err(|_| ChangelogsError::Config(format!("Invalid webhook URL: {webhook_url}")))?;

        match parsed.scheme() {
            "https" | "http" => Ok(parsed),
            scheme => Err(ChangelogsError::Config(format!(
                "Unsupported webhook scheme: {scheme}"
            ))),
        }
    }
}
