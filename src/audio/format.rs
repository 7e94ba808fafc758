//! Position-to-display helpers.

use super::types::Progress;

const MICROS_PER_SECOND: u64 = 1_000_000;

/// Format whole seconds as `MM:SS`. Minutes are not capped at 59.
pub fn format_time(total_seconds: u64) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

pub(crate) fn micros_to_secs(micros: u64) -> u64 {
    micros / MICROS_PER_SECOND
}

pub(crate) fn secs_to_micros(secs: u64) -> u64 {
    secs.saturating_mul(MICROS_PER_SECOND)
}

/// Build the published progress for `position_micros` of `duration_micros`.
pub fn progress(position_micros: u64, duration_micros: u64) -> Progress {
    let position_micros = position_micros.min(duration_micros);
    let ratio = if duration_micros == 0 {
        0.0
    } else {
        position_micros as f64 / duration_micros as f64
    };
    let value = micros_to_secs(position_micros);
    let max = micros_to_secs(duration_micros);
    Progress {
        ratio,
        value,
        max,
        text: format!("{} / {}", format_time(value), format_time(max)),
    }
}
