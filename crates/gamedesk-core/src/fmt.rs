//! Shared formatting helpers for table cells.
//!
//! Pure string formatting only; no layout, no styling.

use chrono::{DateTime, NaiveDate, Utc};

/// Optional date as `YYYY-MM-DD`, `"-"` when absent.
pub fn format_opt_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.to_string(),
        None => "-".to_string(),
    }
}

/// Optional timestamp as `YYYY-MM-DD HH:MM`, `"-"` when absent.
pub fn format_opt_datetime(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(t) => t.format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}

/// Compact count: `"97"`, `"1.3K"`, `"2.9K"`, `"1.2M"`.
pub fn format_count(count: i64) -> String {
    let abs = count.unsigned_abs();
    if abs >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if abs >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Percentage with one decimal: `"72.5%"`.
pub fn format_pct(pct: f64) -> String {
    format!("{:.1}%", pct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn opt_date_renders_dash_for_none() {
        assert_eq!(format_opt_date(None), "-");
        assert_eq!(
            format_opt_date(NaiveDate::from_ymd_opt(2024, 1, 1)),
            "2024-01-01"
        );
    }

    #[test]
    fn opt_datetime_renders_minute_precision() {
        let ts = Utc.with_ymd_and_hms(2024, 4, 2, 9, 30, 0).single();
        assert_eq!(format_opt_datetime(ts), "2024-04-02 09:30");
        assert_eq!(format_opt_datetime(None), "-");
    }

    #[test]
    fn count_compacts_thousands_and_millions() {
        assert_eq!(format_count(97), "97");
        assert_eq!(format_count(1284), "1.3K");
        assert_eq!(format_count(2_500_000), "2.5M");
    }

    #[test]
    fn pct_keeps_one_decimal() {
        assert_eq!(format_pct(72.5), "72.5%");
        assert_eq!(format_pct(100.0), "100.0%");
    }
}
