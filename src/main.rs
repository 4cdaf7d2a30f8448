#[macro_use]
extern crate rocket;

use std::time::Duration;

use rocket::response::content::RawHtml;

mod boot;
mod config;
mod email;
mod inquiry;
mod rate_limit;
mod render;
mod routes;

mod tests;

use email::gmail::GmailMailer;
use email::Mailer;
use rate_limit::RateLimiter;

// Contact form submissions allowed per client IP per window.
const CONTACT_RATE_LIMIT: u64 = 5;
const CONTACT_RATE_WINDOW: Duration = Duration::from_secs(15 * 60);

#[catch(404)]
fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>Page not found.</p><a href='/'>← Home</a></body></html>".to_string())
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Internal server error.</p><a href='/'>← Home</a></body></html>".to_string())
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let mail_config = config::MailConfig::from_env();
    boot::run(&mail_config);

    let mailer: Box<dyn Mailer> = Box::new(GmailMailer::new(mail_config.clone()));

    rocket::build()
        .manage(mail_config)
        .manage(mailer)
        .manage(RateLimiter::new(CONTACT_RATE_LIMIT, CONTACT_RATE_WINDOW))
        .mount("/", routes::public::routes())
        .register("/", catchers![not_found, server_error])
}
