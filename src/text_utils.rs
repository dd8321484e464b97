use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

/// Converts an author display name into the URL-safe form used in output
/// paths: whitespace runs collapse to a single hyphen, then the whole
/// string is lowercased.
pub fn normalize(display_name: &str) -> String {
    lazy_static! {
        static ref WS_RUN: Regex = Regex::new(r"\s+").unwrap();
    }
    WS_RUN.replace_all(display_name, "-").to_lowercase()
}

/// Splits a post file name of the form YYYY-MM-DD-slug.html.md (or
/// YYYY-MM-DD-slug.md) into its publish date and slug.
pub fn parse_post_file_name(file_name: &str) -> Option<(NaiveDate, String)> {
    lazy_static! {
        static ref POST_FILE: Regex = Regex::new(
            r"^(?P<y>\d{4})-(?P<m>\d{2})-(?P<d>\d{2})-(?P<slug>[^.]+)(?:\.html)?\.md$"
        ).unwrap();
    }

    let caps = POST_FILE.captures(file_name)?;
    let y = caps.name("y")?.as_str().parse::<i32>().ok()?;
    let m = caps.name("m")?.as_str().parse::<u32>().ok()?;
    let d = caps.name("d")?.as_str().parse::<u32>().ok()?;
    let date = NaiveDate::from_ymd_opt(y, m, d)?;
    let slug = caps.name("slug")?.as_str().to_string();

    Some((date, slug))
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Evan Dorn"), "evan-dorn");
        assert_eq!(normalize("  Mel \t Conway "), "-mel-conway-");
        assert_eq!(normalize("SoloName"), "soloname");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for s in ["Evan Dorn", "a  B\t c", "", "already-flat", "Ümläut Name"] {
            assert_eq!(normalize(&normalize(s)), normalize(s));
        }
    }

    #[test]
    fn test_parse_post_file_name() {
        let (date, slug) = parse_post_file_name("2024-03-05-my-first-post.html.md").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(slug, "my-first-post");

        let (date, slug) = parse_post_file_name("2015-01-09-pairing.md").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2015, 1, 9).unwrap());
        assert_eq!(slug, "pairing");
    }

    #[test]
    fn test_parse_post_file_name_rejects() {
        assert!(parse_post_file_name("no-date-prefix.html.md").is_none());
        assert!(parse_post_file_name("2024-03-05-missing-extension.txt").is_none());
        // Month 13 is not a date
        assert!(parse_post_file_name("2024-13-05-bad-month.html.md").is_none());
        assert!(parse_post_file_name("2024-03-05-.html.md").is_none());
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2017, 9, 10).unwrap();
        assert_eq!(format_date(&date), "2017-09-10");
    }
}
