use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD_REGEX: Regex = Regex::new(r"\b\w+\b").unwrap();
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]+>").unwrap();
}

/// Word tokens of `text`, markup included.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    WORD_REGEX.find_iter(text).map(|m| m.as_str())
}

pub fn word_count(text: &str) -> usize {
    WORD_REGEX.find_iter(text).count()
}

/// Replaces every tag with `replacement`.
pub fn strip_tags(text: &str, replacement: &str) -> String {
    TAG_REGEX.replace_all(text, replacement).into_owned()
}

/// Lowercased word tokens with all markup replaced by whitespace.
pub fn markup_free_words(text: &str) -> Vec<String> {
    let text_only = strip_tags(text, " ").to_lowercase();
    words(&text_only).map(str::to_string).collect()
}

/// First `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Rounds to two decimals. Exact ties go to the even digit, so 3.125 becomes
/// 3.12.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
