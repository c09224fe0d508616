use envnest_core::{EnvnestError, Result};
use indexmap::IndexMap;

/// Parse the CLI argument as a JSON object of string values.
///
/// Member order is kept, and a repeated member keeps its first position with
/// the last value. Malformed JSON is [`EnvnestError::InvalidJson`]; well-formed
/// JSON of the wrong shape is [`EnvnestError::InvalidInput`].
pub fn parse_input(raw: &str) -> Result<IndexMap<String, String>> {
    serde_json::from_str::<IndexMap<String, String>>(raw).map_err(|e| {
        if e.is_data() {
            EnvnestError::InvalidInput(format!(
                "expected a JSON object of string values: {e}"
            ))
        } else {
            EnvnestError::InvalidJson(e)
        }
    })
}
