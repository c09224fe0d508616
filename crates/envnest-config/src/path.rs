//! Key tokenization into tree paths.

use envnest_core::{EnvnestError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NESTED_SEPARATOR: &str = "__";
pub const DEFAULT_SEGMENT_SEPARATOR: &str = "_";

/// The two delimiter tokens used to split a key.
///
/// `nested` is applied first and produces coarse segments; `segment` then
/// splits each coarse segment into the fine segments that form the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separators {
    nested: String,
    segment: String,
}

impl Separators {
    /// Both separators must be non-empty.
    pub fn new(nested: impl Into<String>, segment: impl Into<String>) -> Result<Self> {
        let nested = nested.into();
        let segment = segment.into();
        if nested.is_empty() {
            return Err(EnvnestError::ConfigValidation {
                field: "parser.nested_separator".into(),
                reason: "must not be empty".into(),
            });
        }
        if segment.is_empty() {
            return Err(EnvnestError::ConfigValidation {
                field: "parser.segment_separator".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(Self { nested, segment })
    }

    pub fn nested(&self) -> &str {
        &self.nested
    }

    pub fn segment(&self) -> &str {
        &self.segment
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            nested: DEFAULT_NESTED_SEPARATOR.into(),
            segment: DEFAULT_SEGMENT_SEPARATOR.into(),
        }
    }
}

/// Lowercase `key` and split it into its path segments.
///
/// Always yields at least one segment. Empty fragments between adjacent
/// separators are kept, so `A___B` becomes `["a", "", "b"]`.
pub fn tokenize(key: &str, separators: &Separators) -> Vec<String> {
    key.to_lowercase()
        .split(separators.nested())
        .flat_map(|coarse| coarse.split(separators.segment()))
        .map(str::to_string)
        .collect()
}
