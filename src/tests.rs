#![cfg(test)]

use std::sync::Mutex;
use std::time::Duration;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::config::MailConfig;
use crate::email::{Mailer, OutboundEmail, SendError};
use crate::inquiry::{
    self, InquiryForm, MSG_SEND_FAILED, MSG_THANK_YOU, MSG_VALIDATION_FAILED,
};
use crate::rate_limit::RateLimiter;
use crate::routes::public::handle_submission;

/// Recording mailer stub: remembers every message it was asked to send and
/// succeeds or fails according to `fail`.
struct StubMailer {
    fail: bool,
    sent: Mutex<Vec<OutboundEmail>>,
}

impl StubMailer {
    fn ok() -> Self {
        StubMailer { fail: false, sent: Mutex::new(Vec::new()) }
    }

    fn failing() -> Self {
        StubMailer { fail: true, sent: Mutex::new(Vec::new()) }
    }

    fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    fn last_sent(&self) -> OutboundEmail {
        self.sent.lock().unwrap().last().cloned().expect("no email was sent")
    }
}

impl Mailer for StubMailer {
    fn send(&self, email: &OutboundEmail) -> Result<(), SendError> {
        self.sent.lock().unwrap().push(email.clone());
        if self.fail {
            Err(SendError::Api("stubbed failure".into()))
        } else {
            Ok(())
        }
    }
}

fn test_config() -> MailConfig {
    MailConfig {
        client_id: "client-id".into(),
        client_secret: "client-secret".into(),
        refresh_token: "refresh-token".into(),
        from_email: "ops@periscoped.io".into(),
    }
}

fn valid_form() -> InquiryForm {
    InquiryForm {
        name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        company: "Analytical Engines Ltd".into(),
        disruption_goal: "Automate every computation in our market segment.".into(),
        honey: String::new(),
    }
}

// ═══════════════════════════════════════════════════════════
// Validation
// ═══════════════════════════════════════════════════════════

#[test]
fn valid_form_has_no_errors() {
    assert!(inquiry::validate(&valid_form()).is_empty());
}

#[test]
fn name_below_two_chars_fails() {
    let mut form = valid_form();
    form.name = "A".into();
    let errors = inquiry::validate(&form);
    assert_eq!(errors.len(), 1);
    assert!(errors["name"][0].contains("at least 2 characters"));
}

#[test]
fn name_of_exactly_two_chars_passes() {
    let mut form = valid_form();
    form.name = "Al".into();
    assert!(inquiry::validate(&form).is_empty());
}

#[test]
fn malformed_email_fails() {
    for bad in ["not-an-email", "a@b", "a b@c.com", "@example.com", ""] {
        let mut form = valid_form();
        form.email = bad.into();
        let errors = inquiry::validate(&form);
        assert!(errors.contains_key("email"), "expected {:?} to be rejected", bad);
    }
}

#[test]
fn minimal_email_passes() {
    let mut form = valid_form();
    form.email = "a@b.com".into();
    assert!(inquiry::validate(&form).is_empty());
}

#[test]
fn company_below_two_chars_fails() {
    let mut form = valid_form();
    form.company = "X".into();
    assert!(inquiry::validate(&form).contains_key("company"));
}

#[test]
fn goal_of_nine_chars_fails_ten_passes() {
    let mut form = valid_form();
    form.disruption_goal = "123456789".into();
    assert!(inquiry::validate(&form).contains_key("disruption_goal"));

    form.disruption_goal = "1234567890".into();
    assert!(inquiry::validate(&form).is_empty());
}

#[test]
fn all_rules_run_together() {
    let form = InquiryForm {
        name: "A".into(),
        email: "nope".into(),
        company: "".into(),
        disruption_goal: "short".into(),
        honey: String::new(),
    };
    let errors = inquiry::validate(&form);
    assert_eq!(errors.len(), 4);
    for field in ["name", "email", "company", "disruption_goal"] {
        assert!(errors.contains_key(field), "missing error for {}", field);
    }
}

#[test]
fn only_failing_fields_are_reported() {
    let mut form = valid_form();
    form.email = "broken".into();
    let errors = inquiry::validate(&form);
    assert_eq!(errors.len(), 1);
    assert!(errors.contains_key("email"));
}

// ═══════════════════════════════════════════════════════════
// Submission handler
// ═══════════════════════════════════════════════════════════

#[test]
fn valid_submission_dispatches_exactly_once() {
    let mailer = StubMailer::ok();
    let result = inquiry::process(&valid_form(), &test_config(), &mailer);

    assert!(result.success);
    assert_eq!(result.message, MSG_THANK_YOU);
    assert!(result.errors.is_none());
    assert_eq!(mailer.calls(), 1);
}

#[test]
fn dispatched_email_carries_submitter_details() {
    let mailer = StubMailer::ok();
    let form = valid_form();
    inquiry::process(&form, &test_config(), &mailer);

    let email = mailer.last_sent();
    assert_eq!(email.from, "ops@periscoped.io");
    assert_eq!(email.to, "ops@periscoped.io");
    assert_eq!(email.reply_to.as_deref(), Some("ada@example.com"));
    assert_eq!(email.subject, "New Partnership Inquiry from Ada Lovelace");
    assert!(email.body.contains(&form.disruption_goal));
    assert!(email.body.contains("Company: Analytical Engines Ltd"));
}

#[test]
fn invalid_submission_never_reaches_the_mailer() {
    let mailer = StubMailer::ok();
    let mut form = valid_form();
    form.disruption_goal = "too short".into();
    let result = inquiry::process(&form, &test_config(), &mailer);

    assert!(!result.success);
    assert_eq!(result.message, MSG_VALIDATION_FAILED);
    assert!(result.errors.unwrap().contains_key("disruption_goal"));
    assert_eq!(mailer.calls(), 0);
}

#[test]
fn dispatch_failure_reports_generic_message() {
    let mailer = StubMailer::failing();
    let result = inquiry::process(&valid_form(), &test_config(), &mailer);

    assert!(!result.success);
    assert_eq!(result.message, MSG_SEND_FAILED);
    assert!(result.errors.is_none());
    assert_eq!(mailer.calls(), 1);
}

#[test]
fn identical_submissions_are_not_deduplicated() {
    let mailer = StubMailer::ok();
    let form = valid_form();
    inquiry::process(&form, &test_config(), &mailer);
    inquiry::process(&form, &test_config(), &mailer);
    assert_eq!(mailer.calls(), 2);
}

#[test]
fn result_json_omits_errors_when_absent() {
    let ok = serde_json::to_value(inquiry::process(
        &valid_form(),
        &test_config(),
        &StubMailer::ok(),
    ))
    .unwrap();
    assert!(ok.get("errors").is_none());
    assert_eq!(ok["success"], true);

    let mut form = valid_form();
    form.name = "A".into();
    let bad = serde_json::to_value(inquiry::process(&form, &test_config(), &StubMailer::ok()))
        .unwrap();
    assert!(bad["errors"]["name"].is_array());
}

// ═══════════════════════════════════════════════════════════
// Outbound email encoding
// ═══════════════════════════════════════════════════════════

#[test]
fn raw_message_has_headers_blank_line_then_body() {
    let email = OutboundEmail {
        from: "ops@periscoped.io".into(),
        to: "ops@periscoped.io".into(),
        reply_to: Some("ada@example.com".into()),
        subject: "Hello".into(),
        body: "Line one\nLine two".into(),
    };
    assert_eq!(
        email.to_raw(),
        "From: ops@periscoped.io\n\
         To: ops@periscoped.io\n\
         Reply-To: ada@example.com\n\
         Subject: Hello\n\
         \n\
         Line one\nLine two"
    );
}

#[test]
fn raw_message_skips_reply_to_when_absent() {
    let email = OutboundEmail {
        from: "a@x.com".into(),
        to: "b@x.com".into(),
        reply_to: None,
        subject: "S".into(),
        body: "B".into(),
    };
    assert!(!email.to_raw().contains("Reply-To"));
}

#[test]
fn encoded_message_is_base64url_without_padding() {
    let email = crate::inquiry::build_notification(&valid_form(), "ops@periscoped.io");
    let encoded = email.encode();

    assert!(!encoded.contains('+'));
    assert!(!encoded.contains('/'));
    assert!(!encoded.contains('='));
    let decoded = URL_SAFE_NO_PAD.decode(&encoded).unwrap();
    assert_eq!(decoded, email.to_raw().as_bytes());
}

// ═══════════════════════════════════════════════════════════
// Route-level gates
// ═══════════════════════════════════════════════════════════

#[test]
fn honeypot_fakes_success_without_dispatch() {
    let mailer = StubMailer::ok();
    let limiter = RateLimiter::new(10, Duration::from_secs(60));
    let mut form = valid_form();
    form.honey = "gotcha".into();

    let result = handle_submission(&form, &test_config(), &mailer, &limiter, "1.2.3.4");
    assert!(result.success);
    assert_eq!(mailer.calls(), 0);
}

#[test]
fn over_limit_submission_is_rejected_without_dispatch() {
    let mailer = StubMailer::ok();
    let limiter = RateLimiter::new(1, Duration::from_secs(60));
    let form = valid_form();
    let config = test_config();

    let first = handle_submission(&form, &config, &mailer, &limiter, "1.2.3.4");
    assert!(first.success);
    assert_eq!(mailer.calls(), 1);

    let second = handle_submission(&form, &config, &mailer, &limiter, "1.2.3.4");
    assert!(!second.success);
    assert!(second.errors.is_none());
    assert_eq!(mailer.calls(), 1);
}

#[test]
fn rate_limiter_is_per_key() {
    let limiter = RateLimiter::new(2, Duration::from_secs(60));
    assert!(limiter.allow("a"));
    assert!(limiter.allow("a"));
    assert!(!limiter.allow("a"));
    assert!(limiter.allow("b"));
}

// ═══════════════════════════════════════════════════════════
// Configuration
// ═══════════════════════════════════════════════════════════

#[test]
fn mail_config_completeness() {
    assert!(test_config().is_complete());

    let mut config = test_config();
    config.refresh_token.clear();
    assert!(!config.is_complete());
}
