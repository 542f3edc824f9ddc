//! List Parsing
//!
//! Normalizes numbered or bulleted model output into short clean strings.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::capitalize_first;

/// `1.`, `2)`, `-`, `*`, `•` or `#` at the start of a line
static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d+[.)]|[-*•#])\s*").expect("list marker regex")
});

/// Any leading run of digits, `.`, `)`, `#`, bullets or whitespace
static HASHTAG_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\d.)#\-*•\s]+").expect("hashtag prefix regex")
});

const QUOTES: [char; 2] = ['"', '\''];

/// Parse freeform lines into at most `max_items` entries
///
/// Lines are trimmed, stripped of one leading list marker and surrounding
/// quotes, and dropped when empty or longer than `max_item_length`
/// characters. Encounter order is preserved.
pub fn parse_list(text: &str, max_items: usize, max_item_length: usize) -> Vec<String> {
    text.lines()
        .map(|line| clean_line(&LIST_MARKER, line))
        .filter(|item| !item.is_empty() && item.chars().count() <= max_item_length)
        .map(str::to_string)
        .take(max_items)
        .collect()
}

/// Parse hashtag suggestions into tokens like `MachineLearning`
///
/// Duplicates (case-insensitive) are dropped, first occurrence wins.
pub fn parse_hashtags(text: &str, max_items: usize, max_tag_length: usize) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    for line in text.lines() {
        if tags.len() >= max_items {
            break;
        }

        let cleaned = clean_line(&HASHTAG_PREFIX, line);
        if cleaned.is_empty() || cleaned.chars().count() > max_tag_length {
            continue;
        }

        let tag = to_hashtag_token(cleaned);
        if !tag.is_empty() && !tags.iter().any(|t| t.eq_ignore_ascii_case(&tag)) {
            tags.push(tag);
        }
    }

    tags
}

/// "machine learning" -> "MachineLearning"
pub fn to_hashtag_token(phrase: &str) -> String {
    phrase.split_whitespace().map(capitalize_first).collect()
}

fn clean_line<'a>(marker: &Regex, line: &'a str) -> &'a str {
    let line = line.trim();
    let stripped = match marker.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    };
    stripped.trim().trim_matches(QUOTES).trim()
}
