use chrono::NaiveDate;

/// Collapse runs of whitespace into single spaces and trim the ends
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Convert a string to a sanitized filename component
pub fn sanitize_filename(name: &str) -> String {
    let mut name = name.replace("http://", "").replace("https://", "");
    name = name.replace(['/', '\\', ':', '?', '&', '=', '#', '%', ' '], "_");

    // Limit filename length
    if name.len() > 100 {
        name.chars().take(100).collect()
    } else {
        name
    }
}

/// File name for an export written on the given date
pub fn dated_file_name(prefix: &str, date: NaiveDate) -> String {
    let prefix = sanitize_filename(prefix);
    if prefix.is_empty() {
        format!("{}.csv", date.format("%Y-%m-%d"))
    } else {
        format!("{}_{}.csv", prefix, date.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  Corn \n Flakes\t500g "), "Corn Flakes 500g");
        assert_eq!(normalize_text("   "), "");
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("https://a.b/c?d=e"), "a.b_c_d_e");
        assert_eq!(sanitize_filename(&"x".repeat(150)).len(), 100);
    }

    #[test]
    fn test_dated_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(dated_file_name("products", date), "products_2024-03-09.csv");
        assert_eq!(dated_file_name("", date), "2024-03-09.csv");
        assert_eq!(dated_file_name("my run", date), "my_run_2024-03-09.csv");
    }
}
