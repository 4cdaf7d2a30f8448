use std::collections::HashMap;

use regex::Regex;
use serde::Serialize;

use crate::config::MailConfig;
use crate::email::{Mailer, OutboundEmail};

pub const MSG_VALIDATION_FAILED: &str = "Validation failed. Please check your input.";
pub const MSG_SEND_FAILED: &str =
    "Sorry, there was an error sending your message. Please try again or contact us directly.";
pub const MSG_THANK_YOU: &str =
    "Thank you for your inquiry! We'll contact you shortly to discuss a strategic partnership.";

const ERR_NAME: &str = "Name must be at least 2 characters.";
const ERR_EMAIL: &str = "Invalid email address.";
const ERR_COMPANY: &str = "Company name is required.";
const ERR_GOAL: &str =
    "Please briefly describe your market disruption goal (min 10 characters).";

/// Raw partnership-inquiry fields exactly as posted by the contact form.
/// Request-scoped; never persisted.
#[derive(Debug, Clone, FromForm)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub disruption_goal: String,
    /// Hidden honeypot input. Humans leave it empty.
    #[field(name = "_honey", default = String::new())]
    pub honey: String,
}

/// Outcome of one submission attempt, serialized back to the form script.
/// `errors` maps field name to its messages and is present only when
/// validation failed.
#[derive(Debug, Serialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

impl SubmissionResult {
    pub fn ok(message: &str) -> Self {
        SubmissionResult { success: true, message: message.to_string(), errors: None }
    }

    pub fn failed(message: &str) -> Self {
        SubmissionResult { success: false, message: message.to_string(), errors: None }
    }
}

fn is_valid_email(s: &str) -> bool {
    // Pragmatic shape check: something@something.tld, no whitespace.
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .map(|re| re.is_match(s))
        .unwrap_or(false)
}

/// Run every field rule; returns a map holding only the fields that failed.
/// All rules run together so the user sees every problem at once.
pub fn validate(form: &InquiryForm) -> HashMap<String, Vec<String>> {
    let mut errors: HashMap<String, Vec<String>> = HashMap::new();
    let mut fail = |field: &str, msg: &str| {
        errors.entry(field.to_string()).or_default().push(msg.to_string());
    };

    if form.name.chars().count() < 2 {
        fail("name", ERR_NAME);
    }
    if !is_valid_email(&form.email) {
        fail("email", ERR_EMAIL);
    }
    if form.company.chars().count() < 2 {
        fail("company", ERR_COMPANY);
    }
    if form.disruption_goal.chars().count() < 10 {
        fail("disruption_goal", ERR_GOAL);
    }

    errors
}

/// Build the operator notification from a validated form. Recipient is the
/// configured sender address (the operator mails its own inbox); reply-to
/// points at the submitter so a reply goes straight back to them.
pub fn build_notification(form: &InquiryForm, from_email: &str) -> OutboundEmail {
    let body = format!(
        "New partnership inquiry received from the Periscoped.io website:\n\n\
         Name: {}\n\
         Email: {}\n\
         Company: {}\n\n\
         Message:\n{}\n\n\
         ---\n\
         Sent from Periscoped.io Contact Form",
        form.name, form.email, form.company, form.disruption_goal
    );

    OutboundEmail {
        from: from_email.to_string(),
        to: from_email.to_string(),
        reply_to: Some(form.email.clone()),
        subject: format!("New Partnership Inquiry from {}", form.name),
        body,
    }
}

/// Handle one submission: validate, and only when every rule passes build
/// the notification and dispatch it exactly once. Invalid input never
/// reaches the network; a failed send is logged and reported generically.
pub fn process(form: &InquiryForm, config: &MailConfig, mailer: &dyn Mailer) -> SubmissionResult {
    let errors = validate(form);
    if !errors.is_empty() {
        return SubmissionResult {
            success: false,
            message: MSG_VALIDATION_FAILED.to_string(),
            errors: Some(errors),
        };
    }

    let email = build_notification(form, &config.from_email);
    match mailer.send(&email) {
        Ok(()) => SubmissionResult::ok(MSG_THANK_YOU),
        Err(e) => {
            log::error!("Failed to send inquiry email from {}: {}", form.email, e);
            SubmissionResult::failed(MSG_SEND_FAILED)
        }
    }
}
