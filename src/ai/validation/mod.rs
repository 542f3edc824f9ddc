//! Model Output Decoding
//!
//! Tolerant decoders for unstructured completion text:
//! - Structured extraction of an embedded JSON object or array
//! - List parsing for numbered/bulleted suggestions
//!
//! Decoders never fail loudly. A miss is `None` (or an empty list) and the
//! calling feature substitutes its fixed default.

mod extract;
mod list;

pub use extract::{BracketKind, extract_structure};
pub use list::{parse_hashtags, parse_list, to_hashtag_token};
