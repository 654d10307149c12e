//! Reusable formatting utilities for CLI output

use std::time::Duration;

/// Truncate string to max characters with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format a request latency for reports.
///
/// # Example output
/// - `850ms`
/// - `1.25s`
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    if millis < 1000 {
        format!("{}ms", millis)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_string("pagos", 10), "pagos");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_string("notificaciones", 8), "notif...");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_string("Gestión", 7), "Gestión");
        assert_eq!(truncate_string("Condominios ñandú", 10), "Condomi...");
    }

    #[test]
    fn test_format_elapsed_millis() {
        assert_eq!(format_elapsed(Duration::from_millis(850)), "850ms");
        assert_eq!(format_elapsed(Duration::from_millis(0)), "0ms");
    }

    #[test]
    fn test_format_elapsed_seconds() {
        assert_eq!(format_elapsed(Duration::from_millis(1250)), "1.25s");
    }
}
