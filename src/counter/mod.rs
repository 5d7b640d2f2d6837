//! Elapsed-time tracking for a session.
//!
//! A [`TimeCounter`] measures whole seconds since a reference timestamp
//! (`%Y-%m-%d %H:%M:%S`, local time). The value is recomputed on demand via
//! [`TimeCounter::calc_duration`] and, once [`TimeCounter::start`] has been
//! called, by a background task once per second until [`TimeCounter::stop`].

use chrono::{Local, NaiveDateTime};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::warn;

/// Fixed format of the reference timestamp, second precision.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Tracks elapsed whole seconds since a start timestamp.
///
/// Reads never recompute: [`TimeCounter::duration`] returns whatever the last
/// recomputation stored. Dropping the counter does not cancel a running
/// ticker (tokio join handles detach on drop) — call [`TimeCounter::stop`].
pub struct TimeCounter {
    start_datetime: String,
    duration: Arc<AtomicI64>,
    ticker: Option<JoinHandle<()>>,
}

impl TimeCounter {
    /// Create a counter for the given start timestamp, or for the current
    /// local time when `None`.
    pub fn new(start_datetime: Option<String>) -> Self {
        let start_datetime = start_datetime
            .unwrap_or_else(|| Local::now().format(DATETIME_FORMAT).to_string());
        Self {
            start_datetime,
            duration: Arc::new(AtomicI64::new(0)),
            ticker: None,
        }
    }

    /// The reference timestamp this counter measures from.
    pub fn start_datetime(&self) -> &str {
        &self.start_datetime
    }

    /// Most recently computed duration in whole seconds.
    pub fn duration(&self) -> i64 {
        self.duration.load(Ordering::Relaxed)
    }

    /// Recompute the duration from the wall clock.
    ///
    /// If the start timestamp does not parse, the stored value is left
    /// untouched.
    pub fn calc_duration(&self) {
        if let Some(secs) = elapsed_since(&self.start_datetime) {
            self.duration.store(secs, Ordering::Relaxed);
        }
    }

    /// Compute once immediately, then recompute every second in a background
    /// task until [`TimeCounter::stop`]. A ticker that is already running is
    /// replaced.
    pub fn start(&mut self) {
        self.stop();

        if elapsed_since(&self.start_datetime).is_none() {
            warn!(start = %self.start_datetime, "start timestamp does not parse; duration will not advance");
        }
        self.calc_duration();

        let start = self.start_datetime.clone();
        let duration = Arc::clone(&self.duration);
        self.ticker = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            loop {
                interval.tick().await;
                if let Some(secs) = elapsed_since(&start) {
                    duration.store(secs, Ordering::Relaxed);
                }
            }
        }));
    }

    /// Cancel the recurring recomputation. No-op if the ticker was never
    /// started or was already stopped.
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

fn elapsed_since(start: &str) -> Option<i64> {
    let start = NaiveDateTime::parse_from_str(start, DATETIME_FORMAT).ok()?;
    Some((Local::now().naive_local() - start).num_seconds())
}
