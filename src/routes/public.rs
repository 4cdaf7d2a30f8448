use rocket::form::Form;
use rocket::request::{FromRequest, Outcome, Request};
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::State;

use crate::config::MailConfig;
use crate::email::Mailer;
use crate::inquiry::{self, InquiryForm, SubmissionResult};
use crate::rate_limit::RateLimiter;
use crate::render;

// ── Client IP request guard ──

/// Extracts the real client IP from the request.
/// Checks proxy headers first, then falls back to the socket peer:
///   1. X-Real-IP (nginx proxy_set_header)
///   2. X-Forwarded-For (first IP in the chain = original client)
///   3. Rocket's client_ip()
pub struct ClientIp(pub String);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for ClientIp {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let headers = request.headers();

        if let Some(ip) = headers.get_one("X-Real-IP") {
            let ip = ip.trim();
            if !ip.is_empty() {
                return Outcome::Success(ClientIp(ip.to_string()));
            }
        }

        if let Some(forwarded) = headers.get_one("X-Forwarded-For") {
            if let Some(ip) = forwarded.split(',').next() {
                let ip = ip.trim();
                if !ip.is_empty() {
                    return Outcome::Success(ClientIp(ip.to_string()));
                }
            }
        }

        let ip = request
            .client_ip()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        Outcome::Success(ClientIp(ip))
    }
}

// ── Pages ──

#[get("/")]
pub fn homepage() -> RawHtml<String> {
    RawHtml(render::homepage())
}

// ── Partnership inquiry submission ──

/// Route-level gate in front of `inquiry::process`: bots that filled the
/// honeypot get a fake success (no dispatch), and over-limit clients get a
/// generic failure. Everything else is the submission handler's business.
pub fn handle_submission(
    form: &InquiryForm,
    config: &MailConfig,
    mailer: &dyn Mailer,
    limiter: &RateLimiter,
    client_ip: &str,
) -> SubmissionResult {
    if !form.honey.trim().is_empty() {
        return SubmissionResult::ok(inquiry::MSG_THANK_YOU);
    }

    if !limiter.allow(client_ip) {
        log::warn!("Rate limit hit for contact form from {}", client_ip);
        return SubmissionResult::failed(
            "Too many submissions. Please wait a few minutes and try again.",
        );
    }

    inquiry::process(form, config, mailer)
}

#[post("/contact", data = "<form>")]
pub fn contact_submit(
    form: Form<InquiryForm>,
    config: &State<MailConfig>,
    mailer: &State<Box<dyn Mailer>>,
    limiter: &State<RateLimiter>,
    client_ip: ClientIp,
) -> Json<SubmissionResult> {
    Json(handle_submission(
        &form,
        config,
        mailer.inner().as_ref(),
        limiter,
        &client_ip.0,
    ))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![homepage, contact_submit]
}
