// ============================================================================
// FORMAT - Presentación de importes y fechas
// ============================================================================

use chrono::{DateTime, NaiveDateTime};

/// `1234.5` -> `$1,234.50`
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}${}.{}", sign, grouped, cents)
}

/// `2025-01-05T15:04:00Z` -> `Jan 5, 2025, 03:04 PM`.
/// Si el backend manda algo que no es una fecha se muestra tal cual.
pub fn format_date(raw: &str) -> String {
    const DISPLAY: &str = "%b %-d, %Y, %I:%M %p";

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return date.format(DISPLAY).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(date) = NaiveDateTime::parse_from_str(raw, pattern) {
            return date.format(DISPLAY).to_string();
        }
    }
    raw.to_string()
}
