use log::{info, warn};

use crate::config::MailConfig;

/// Startup check. The site serves fine without mail credentials, but every
/// inquiry would silently fail to dispatch, so missing configuration gets
/// called out loudly before launch.
pub fn run(config: &MailConfig) {
    info!("Periscoped boot check starting...");

    let required = [
        ("GOOGLE_CLIENT_ID", &config.client_id),
        ("GOOGLE_CLIENT_SECRET", &config.client_secret),
        ("GOOGLE_REFRESH_TOKEN", &config.refresh_token),
        ("FROM_EMAIL", &config.from_email),
    ];

    for (key, value) in required {
        if value.is_empty() {
            warn!("  {} is not set", key);
        }
    }

    if config.is_complete() {
        info!("  Mail dispatch configured (from: {})", config.from_email);
        info!("Boot check passed.");
    } else {
        warn!("  Mail dispatch NOT configured — inquiries will be rejected with a send error");
        warn!("Boot check finished with warnings.");
    }
}
