//! Human-readable sizes, ages and ETAs.

use std::time::Duration;

const ARCHIVER_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
const INSTALLER_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Archiver size format: two decimals, capped at GB.
pub fn format_size(bytes: u64) -> String {
    scaled(bytes as f64, &ARCHIVER_UNITS, 2)
}

/// Installer size format: one decimal, capped at TB.
pub fn human_size(bytes: u64) -> String {
    human_size_f64(bytes as f64)
}

/// Same as [`human_size`] for fractional values such as transfer rates.
pub fn human_size_f64(bytes: f64) -> String {
    scaled(bytes, &INSTALLER_UNITS, 1)
}

fn scaled(mut value: f64, units: &[&str], precision: usize) -> String {
    if value == 0.0 {
        return "0 B".to_string();
    }

    let mut unit = 0;
    while value >= 1024.0 && unit < units.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.*} {}", precision, value, units[unit])
}

/// Remaining-time label used by the download progress line.
pub fn format_eta(seconds: f64) -> String {
    if seconds < 60.0 {
        format!("{:.0}s", seconds)
    } else if seconds < 3600.0 {
        format!("{:.0}m", seconds / 60.0)
    } else {
        format!("{:.1}h", seconds / 3600.0)
    }
}

/// Cache age label, e.g. `3 h 12 min`.
pub fn format_age(age: Duration) -> String {
    let secs = age.as_secs();
    format!("{} h {} min", secs / 3600, (secs % 3600) / 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_plain_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(human_size(0), "0 B");
    }

    #[test]
    fn archiver_sizes_use_two_decimals() {
        assert_eq!(format_size(512), "512.00 B");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 MB");
    }

    #[test]
    fn archiver_sizes_cap_at_gigabytes() {
        assert_eq!(format_size(2048 * 1024 * 1024 * 1024), "2048.00 GB");
    }

    #[test]
    fn installer_sizes_use_one_decimal_and_reach_terabytes() {
        assert_eq!(human_size(1536), "1.5 KB");
        assert_eq!(human_size(190 * 1024 * 1024), "190.0 MB");
        assert_eq!(human_size(3 * 1024 * 1024 * 1024 * 1024), "3.0 TB");
    }

    #[test]
    fn eta_switches_units() {
        assert_eq!(format_eta(42.0), "42s");
        assert_eq!(format_eta(600.0), "10m");
        assert_eq!(format_eta(5400.0), "1.5h");
    }

    #[test]
    fn age_splits_hours_and_minutes() {
        assert_eq!(format_age(Duration::from_secs(3 * 3600 + 12 * 60 + 59)), "3 h 12 min");
        assert_eq!(format_age(Duration::from_secs(59)), "0 h 0 min");
    }
}
