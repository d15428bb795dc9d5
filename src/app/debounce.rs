use std::time::{Duration, Instant};

pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Holds back search input until typing pauses for `delay`.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record a keystroke. Restarts the quiet period.
    pub fn input(&mut self, query: &str, now: Instant) {
        self.pending = Some((query.trim().to_string(), now));
    }

    /// The settled query, returned once per quiet period.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let ready = matches!(
            &self.pending,
            Some((_, at)) if now.saturating_duration_since(*at) >= self.delay
        );
        if ready {
            self.pending.take().map(|(query, _)| query)
        } else {
            None
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}
