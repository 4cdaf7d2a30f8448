pub mod gmail;

use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// A fully-formed outbound message. Only ever built from input that passed
/// validation; constructed fresh per send and discarded afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub body: String,
}

impl OutboundEmail {
    /// Raw message block the Gmail API expects: headers, blank line, body.
    pub fn to_raw(&self) -> String {
        let mut lines = vec![format!("From: {}", self.from), format!("To: {}", self.to)];
        if let Some(reply_to) = &self.reply_to {
            lines.push(format!("Reply-To: {}", reply_to));
        }
        lines.push(format!("Subject: {}", self.subject));
        lines.push(String::new());
        lines.push(self.body.clone());
        lines.join("\n")
    }

    /// Base64url (URL-safe alphabet, no padding) per the `messages/send`
    /// transport format.
    pub fn encode(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.to_raw().as_bytes())
    }
}

/// Why a send attempt failed. Callers collapse this to one generic
/// user-facing message; the variant detail only reaches the log.
#[derive(Debug)]
pub enum SendError {
    /// Credentials missing, token exchange rejected, or no token in the response.
    Auth(String),
    /// The send endpoint returned a non-success status.
    Api(String),
    /// The request never completed (connect, TLS, timeout).
    Network(String),
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendError::Auth(e) => write!(f, "auth: {}", e),
            SendError::Api(e) => write!(f, "api: {}", e),
            SendError::Network(e) => write!(f, "network: {}", e),
        }
    }
}

/// Sending seam. Every outbound message goes through here, whatever
/// triggered it — `GmailMailer` in production, a recording stub in tests.
pub trait Mailer: Send + Sync {
    /// One atomic send attempt. No retry; a failed message is discarded.
    fn send(&self, email: &OutboundEmail) -> Result<(), SendError>;
}
