/// Render an uptime in seconds as `"{h}h {m}m {s}s"`.
///
/// Fractional seconds are truncated. Negative and NaN inputs render as zero.
pub fn format_uptime(seconds: f64) -> String {
    // `as` saturates: NaN and negatives become 0.
    let total = seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{}h {}m {}s", hours, minutes, secs)
}

/// Uptime cell text: `"N/A"` when the server reported no positive uptime.
pub fn uptime_label(seconds: f64) -> String {
    if seconds > 0.0 {
        format_uptime(seconds)
    } else {
        "N/A".to_string()
    }
}
