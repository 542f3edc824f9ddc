pub mod error;
pub mod insight;
pub mod utils;

pub use error::{ErrorCategory, ErrorClassifier, InsightError, ProviderError, Result};
pub use insight::*;
pub use utils::{
    capitalize_first, clamp_signed_unit, clamp_unit, dedupe_labels, json_bool, json_f64,
    json_string, json_string_array, json_string_or, preview,
};
