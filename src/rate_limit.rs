use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Sliding-window in-memory limiter for the contact endpoint, keyed by
/// client IP. State is process-local; a restart forgets everything, which
/// is fine for a best-effort abuse brake.
pub struct RateLimiter {
    max_attempts: u64,
    window: Duration,
    attempts: Mutex<HashMap<String, Vec<Instant>>>,
}

impl RateLimiter {
    pub fn new(max_attempts: u64, window: Duration) -> Self {
        RateLimiter {
            max_attempts,
            window,
            attempts: Mutex::new(HashMap::new()),
        }
    }

    /// Record an attempt for `key`; true while still under the limit.
    pub fn allow(&self, key: &str) -> bool {
        let mut map = self.attempts.lock().unwrap();
        let now = Instant::now();
        let hits = map.entry(key.to_string()).or_default();

        // Drop attempts that have aged out of the window
        hits.retain(|t| now.duration_since(*t) < self.window);

        if (hits.len() as u64) < self.max_attempts {
            hits.push(now);
            true
        } else {
            false
        }
    }
}
