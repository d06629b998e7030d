/// Render a position in seconds as `m:ss`, or `h:mm:ss` past the hour.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{}:{:02}", mins, secs)
    }
}

/// Fraction of the progress track under a click, clamped to `[0, 1]`.
///
/// Returns `None` when the track has no usable width.
pub fn click_fraction(click_x: f64, track_width: f64) -> Option<f64> {
    if !track_width.is_finite() || track_width <= 0.0 || !click_x.is_finite() {
        return None;
    }
    Some((click_x / track_width).clamp(0.0, 1.0))
}

/// Percentage of `duration` covered by `current`, for the progress fill.
pub fn progress_percent(current: f64, duration: f64) -> f64 {
    if duration > 0.0 && duration.is_finite() {
        (current / duration * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}
