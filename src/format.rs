//! Small text formatting helpers for the view.

use std::time::Duration;

/// Format a duration as `M:SS`, or `H:MM:SS` from one hour on.
///
/// Unknown durations render as `--:--`.
pub fn clock(d: Option<Duration>) -> String {
    let Some(d) = d else {
        return "--:--".to_string();
    };

    let total = d.as_secs();
    let (h, rem) = (total / 3600, total % 3600);
    let (m, s) = (rem / 60, rem % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}
