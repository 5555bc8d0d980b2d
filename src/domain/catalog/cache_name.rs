use chrono::{DateTime, TimeZone};

pub const CACHE_FILE_PREFIX: &str = "api-cache-";
const CACHE_FILE_SUFFIX: &str = ".json";

/// `api-cache-YYYYmmdd_HHMMSS.json`
pub fn cache_file_name<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}{}{}", CACHE_FILE_PREFIX, at.format("%Y%m%d_%H%M%S"), CACHE_FILE_SUFFIX)
}

pub fn is_cache_file(name: &str) -> bool {
    name.starts_with(CACHE_FILE_PREFIX) && name.ends_with(CACHE_FILE_SUFFIX)
}

/// The timestamp portion of a cache file name.
pub fn cache_label(name: &str) -> &str {
    name.strip_prefix(CACHE_FILE_PREFIX)
        .and_then(|rest| rest.strip_suffix(CACHE_FILE_SUFFIX))
        .unwrap_or(name)
}

/// Cache names newest first; the embedded timestamp sorts lexicographically.
pub fn sort_cache_names(names: &mut [String]) {
    names.sort_by(|a, b| b.cmp(a));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn name_round_trips_through_label() {
        let at = Utc.from_utc_datetime(
            &NaiveDate::from_ymd_opt(2025, 1, 31).unwrap().and_hms_opt(23, 59, 58).unwrap(),
        );
        let name = cache_file_name(&at);
        assert_eq!(name, "api-cache-20250131_235958.json");
        assert!(is_cache_file(&name));
        assert_eq!(cache_label(&name), "20250131_235958");
    }

    #[test]
    fn unrelated_files_are_not_caches() {
        assert!(!is_cache_file("settings.json"));
        assert!(!is_cache_file("api-cache-20250131_235958.json.tmp"));
        assert!(!is_cache_file("installer.log"));
    }

    #[test]
    fn newest_cache_sorts_first() {
        let mut names = vec![
            "api-cache-20240101_000000.json".to_string(),
            "api-cache-20250101_000000.json".to_string(),
            "api-cache-20241231_235959.json".to_string(),
        ];
        sort_cache_names(&mut names);
        assert_eq!(names[0], "api-cache-20250101_000000.json");
        assert_eq!(names[2], "api-cache-20240101_000000.json");
    }
}
