//! Status-line rendering.
//!
//! The whole interface is a single line rewritten in place on stdout.

use crate::app::state::AppState;
use std::io::{self, Write};

pub fn draw(state: &AppState) {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "\r\x1b[2K{}", status_line(state));
    let _ = stdout.flush();
}

pub fn status_line(state: &AppState) -> String {
    if let Some(ref msg) = state.status_message {
        return msg.clone();
    }

    let mut parts: Vec<String> = Vec::new();
    if state.config.ui.show_start_time {
        parts.push(format!("started {}", state.counter.start_datetime()));
    }
    parts.push(format!("elapsed {}", format_elapsed(state.counter.duration())));
    if state.loading.any_loading() {
        parts.push(format!("loading: {}", state.loading.busy_regions().join(", ")));
    } else {
        parts.push("all regions idle".to_string());
    }
    parts.join(" | ")
}

/// `HH:MM:SS`, zero padded. Negative durations render as zero.
fn format_elapsed(secs: i64) -> String {
    let secs = secs.max(0);
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
