//! Structured Extraction
//!
//! Locates a JSON object or array embedded in free-form model output.
//!
//! Models routinely wrap their JSON in prose ("Sure! Here's the analysis:"),
//! code fences, or trailing commentary. The extractor scans for a balanced
//! bracket span using depth tracking that ignores brackets inside string
//! literals, then strictly parses exactly that span. Nothing is repaired.
//! A balanced span that doesn't parse (prose like `{placeholder}`) is
//! skipped whole; the scan never descends into it. An unterminated or
//! mismatched span ends the search.

use serde_json::Value;
use tracing::debug;

/// Which top-level JSON container to look for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    Object,
    Array,
}

impl BracketKind {
    fn open(self) -> char {
        match self {
            Self::Object => '{',
            Self::Array => '[',
        }
    }
}

/// Find and parse the first well-formed span of the given kind
///
/// Returns `None` when the text has no such bracket, a candidate span is
/// unterminated or mismatched, or no balanced span is valid JSON. Objects
/// nested inside a rejected span are never returned.
pub fn extract_structure(text: &str, kind: BracketKind) -> Option<Value> {
    let mut search_from = 0;

    while let Some(offset) = text[search_from..].find(kind.open()) {
        let start = search_from + offset;
        let Some(end) = balanced_end(&text[start..]) else {
            debug!("Candidate span at byte {} never closes", start);
            return None;
        };

        let span = &text[start..start + end];
        match serde_json::from_str::<Value>(span) {
            Ok(value) => return Some(value),
            Err(e) => debug!("Skipping unparseable candidate span: {}", e),
        }

        search_from = start + end;
    }

    None
}

/// Byte length of the balanced span starting at `s[0]`
///
/// Mismatched closers (`{ ]`) and unterminated spans yield `None`.
fn balanced_end(s: &str) -> Option<usize> {
    let mut stack: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut escape = false;

    for (i, ch) in s.char_indices() {
        if escape {
            escape = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape = true,
            '"' => in_string = !in_string,
            '{' if !in_string => stack.push('}'),
            '[' if !in_string => stack.push(']'),
            '}' | ']' if !in_string => {
                if stack.pop() != Some(ch) {
                    return None;
                }
                if stack.is_empty() {
                    return Some(i + ch.len_utf8());
                }
            }
            _ => {}
        }
    }

    None
}
