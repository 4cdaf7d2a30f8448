use std::env;

/// Gmail API credentials and the sender address.
///
/// Read from the environment once at boot and handed to the mailer
/// explicitly, so nothing in the send path touches process state.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// OAuth2 client identifier for the Google Cloud project.
    pub client_id: String,
    /// OAuth2 client secret.
    pub client_secret: String,
    /// Long-lived refresh token, exchanged for short-lived access tokens.
    pub refresh_token: String,
    /// Address inquiries are sent from. Also the recipient: the operator
    /// mails the notification to its own inbox.
    pub from_email: String,
}

impl MailConfig {
    pub fn from_env() -> Self {
        let var = |key: &str| env::var(key).unwrap_or_default();
        MailConfig {
            client_id: var("GOOGLE_CLIENT_ID"),
            client_secret: var("GOOGLE_CLIENT_SECRET"),
            refresh_token: var("GOOGLE_REFRESH_TOKEN"),
            from_email: var("FROM_EMAIL"),
        }
    }

    /// True when every credential needed for a send attempt is present.
    pub fn is_complete(&self) -> bool {
        !self.client_id.is_empty()
            && !self.client_secret.is_empty()
            && !self.refresh_token.is_empty()
            && !self.from_email.is_empty()
    }
}
