use serde_json::json;

use super::{Mailer, OutboundEmail, SendError};
use crate::config::MailConfig;

const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const SEND_URL: &str = "https://gmail.googleapis.com/gmail/v1/users/me/messages/send";

/// Gmail REST API mailer (https://developers.google.com/gmail/api/reference/rest).
///
/// Each send is a two-step call: exchange the refresh token for a short-lived
/// access token, then POST the base64url-encoded raw message. Access tokens
/// are not cached; send volume here is a handful of inquiries a day.
pub struct GmailMailer {
    config: MailConfig,
}

impl GmailMailer {
    pub fn new(config: MailConfig) -> Self {
        GmailMailer { config }
    }

    fn access_token(&self, client: &reqwest::blocking::Client) -> Result<String, SendError> {
        let resp = client
            .post(TOKEN_URL)
            .form(&[
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("refresh_token", self.config.refresh_token.as_str()),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .map_err(|e| SendError::Network(format!("token request failed: {}", e)))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().unwrap_or_default();
            return Err(SendError::Auth(format!("token endpoint returned {}: {}", status, text)));
        }

        let token_json: serde_json::Value = resp
            .json()
            .map_err(|e| SendError::Auth(format!("token parse error: {}", e)))?;

        token_json
            .get("access_token")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| SendError::Auth("no access_token in response".into()))
    }
}

impl Mailer for GmailMailer {
    fn send(&self, email: &OutboundEmail) -> Result<(), SendError> {
        if !self.config.is_complete() {
            return Err(SendError::Auth("Gmail credentials not configured".into()));
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| SendError::Network(format!("HTTP client error: {}", e)))?;

        let access_token = self.access_token(&client)?;

        let resp = client
            .post(SEND_URL)
            .bearer_auth(access_token)
            .json(&json!({ "raw": email.encode() }))
            .send()
            .map_err(|e| SendError::Network(format!("send request failed: {}", e)))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().unwrap_or_default();
            return Err(SendError::Api(format!("messages/send returned {}: {}", status, text)));
        }

        Ok(())
    }
}
