//! Human readable byte counts.

const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

/// Format a byte count with binary multiples, e.g. `1.50MB`.
///
/// Counts below 1024 are printed as whole bytes. Negative counts format as 0.
///
/// ```rust
/// use pullbar::utils::human_bytes;
///
/// assert_eq!(human_bytes(512), "512B");
/// assert_eq!(human_bytes(1536), "1.50KB");
/// assert_eq!(human_bytes(3 * 1024 * 1024), "3.00MB");
/// ```
pub fn human_bytes(n: i64) -> String {
    let n = n.max(0);
    if n < 1024 {
        return format!("{}B", n);
    }

    let mut value = n as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2}{}", value, UNITS[unit - 1])
}
