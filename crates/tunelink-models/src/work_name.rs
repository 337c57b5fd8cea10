//! Work-name inference from free-text video titles.
//!
//! Titles on music channels tend to follow a handful of shapes
//! ("Movie - Song", "Movie: Song", "Movie Song OST", "Movie (1997)").
//! The rules below are tried in order and the first match wins; reordering
//! them changes how songs get grouped.

use regex::Regex;
use std::sync::OnceLock;

fn rules() -> &'static [Regex; 3] {
    static RULES: OnceLock<[Regex; 3]> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            // "Titanic - My Heart Will Go On", "Titanic: My Heart Will Go On"
            Regex::new(r"^(.*?)[-:]").expect("valid separator pattern"),
            // "Titanic My Heart Will Go On Song"
            Regex::new(r"(?i)^(.*?)\s(?:song|track|ost)").expect("valid keyword pattern"),
            // "Titanic (1997)"
            Regex::new(r"^(.*?)\s\(\d{4}\)").expect("valid year pattern"),
        ]
    })
}

/// Derive the movie/album name a title belongs to.
///
/// Falls back to the first whitespace-delimited token, or `""` for a blank title.
///
/// # Examples
/// ```
/// use tunelink_models::extract_work_name;
/// assert_eq!(extract_work_name("Titanic - My Heart Will Go On"), "Titanic");
/// assert_eq!(extract_work_name("Titanic (1997)"), "Titanic");
/// assert_eq!(extract_work_name("SingleWord"), "SingleWord");
/// ```
pub fn extract_work_name(title: &str) -> String {
    for rule in rules() {
        if let Some(name) = rule.captures(title).and_then(|caps| caps.get(1)) {
            return name.as_str().trim().to_string();
        }
    }

    title.split_whitespace().next().unwrap_or("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_rule() {
        assert_eq!(extract_work_name("Titanic - My Heart Will Go On"), "Titanic");
        assert_eq!(extract_work_name("Titanic: My Heart Will Go On"), "Titanic");
        // First separator wins, whichever kind it is
        assert_eq!(extract_work_name("Dil Se: Chaiyya - Chaiyya"), "Dil Se");
    }

    #[test]
    fn test_keyword_rule_is_case_insensitive() {
        assert_eq!(
            extract_work_name("Titanic My Heart Will Go On Song"),
            "Titanic My Heart Will Go On"
        );
        assert_eq!(extract_work_name("Interstellar OST Cornfield Chase"), "Interstellar");
        assert_eq!(extract_work_name("Inception Track 3"), "Inception");
    }

    #[test]
    fn test_year_rule() {
        assert_eq!(extract_work_name("Titanic (1997)"), "Titanic");
        assert_eq!(extract_work_name("Rocky  (1976) Theme"), "Rocky");
    }

    #[test]
    fn test_rule_order() {
        // Separator beats keyword and year
        assert_eq!(extract_work_name("Titanic (1997) - Song"), "Titanic (1997)");
        // Keyword beats year
        assert_eq!(extract_work_name("Titanic Song (1997)"), "Titanic");
        // Keywords must start a word
        assert_eq!(extract_work_name("Titanic Soundtrack (1997)"), "Titanic Soundtrack");
    }

    #[test]
    fn test_first_token_fallback() {
        assert_eq!(extract_work_name("SingleWord"), "SingleWord");
        assert_eq!(extract_work_name("Two Words"), "Two");
        assert_eq!(extract_work_name("   Padded title"), "Padded");
    }

    #[test]
    fn test_blank_titles() {
        assert_eq!(extract_work_name(""), "");
        assert_eq!(extract_work_name("   "), "");
    }

    #[test]
    fn test_result_is_trimmed() {
        assert_eq!(extract_work_name("  Titanic   -  Song"), "Titanic");
    }
}
