//! Content policy for community drafts.

use regex::RegexSet;

/// Banned tokens, matched whole-word and case-insensitively in both the
/// title and the details of a draft.
///
/// Carried over verbatim from the site's posting guidelines. Several entries
/// ("hack", "link", "www") collide with the site's own security vocabulary;
/// the list is data here so a policy revision never touches the filter.
pub const FORBIDDEN_WORDS: &[&str] = &[
    // Spam & scam vocabulary
    "scam",
    "cheat",
    "hack",
    "phishing",
    "malware",
    "virus",
    "trojan",
    // Link sharing
    "link",
    "http",
    "www",
    ".com",
    ".net",
    ".org",
    "telegram",
    "whatsapp",
    // Get-rich bait
    "crypto",
    "bitcoin",
    "money now",
    "free money",
];

/// Whole-word, case-insensitive screen over a fixed token list.
pub struct ContentFilter {
    tokens: Vec<String>,
    set: RegexSet,
}

impl ContentFilter {
    /// Compile a filter for `tokens`. Tokens may contain spaces ("free
    /// money") or punctuation (".com"); each is matched as a whole word.
    pub fn new(tokens: &[&str]) -> Self {
        let patterns: Vec<String> = tokens
            .iter()
            .map(|token| format!(r"(?i)\b{}\b", regex::escape(token)))
            .collect();
        let set = RegexSet::new(&patterns).expect("escaped token patterns always compile");
        Self {
            tokens: tokens.iter().map(|token| token.to_string()).collect(),
            set,
        }
    }

    /// The first banned token present in `text`, if any.
    pub fn screen(&self, text: &str) -> Option<&str> {
        self.set
            .matches(text)
            .iter()
            .next()
            .map(|index| self.tokens[index].as_str())
    }
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self::new(FORBIDDEN_WORDS)
    }
}

/// Submission policy: banned vocabulary plus content length bounds.
pub struct FeedPolicy {
    pub min_content_len: usize,
    pub max_content_len: usize,
    filter: ContentFilter,
}

impl FeedPolicy {
    pub fn new(min_content_len: usize, max_content_len: usize, filter: ContentFilter) -> Self {
        Self {
            min_content_len,
            max_content_len,
            filter,
        }
    }

    /// The first banned token present in `text`, if any.
    pub fn screen(&self, text: &str) -> Option<&str> {
        self.filter.screen(text)
    }
}

impl Default for FeedPolicy {
    fn default() -> Self {
        Self::new(30, 1000, ContentFilter::default())
    }
}

/// Length of `s` in UTF-16 code units - the unit the submission form's
/// character counter displays.
pub fn content_units(s: &str) -> usize {
    s.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_are_whole_word() {
        let filter = ContentFilter::default();
        assert!(filter.screen("this is a scam alert").is_some());
        assert_eq!(filter.screen("beware of scammers"), None);
        assert!(filter.screen(" scam ").is_some());
    }

    #[test]
    fn test_matches_are_case_insensitive() {
        let filter = ContentFilter::default();
        assert_eq!(filter.screen("SCAM everywhere"), Some("scam"));
        assert_eq!(filter.screen("Free Money for all"), Some("free money"));
    }

    #[test]
    fn test_multi_word_token() {
        let filter = ContentFilter::default();
        assert!(filter.screen("send money now please").is_some());
        assert_eq!(filter.screen("money later"), None);
    }

    #[test]
    fn test_dotted_token_matches_inside_hostnames() {
        let filter = ContentFilter::default();
        assert_eq!(filter.screen("visit example.com today"), Some(".com"));
        assert_eq!(filter.screen("telecom networks"), None);
    }

    #[test]
    fn test_clean_text_passes() {
        let filter = ContentFilter::default();
        assert_eq!(
            filter.screen("my router firmware was five versions behind"),
            None
        );
    }

    #[test]
    fn test_content_units_counts_utf16() {
        assert_eq!(content_units("abc"), 3);
        // Astral-plane characters take two UTF-16 units each.
        assert_eq!(content_units("😀"), 2);
        assert_eq!(content_units("naïve"), 5);
    }
}
