//! Output format handling for CLI commands

use clap::ValueEnum;
use serde::Serialize;

/// Output format for CLI commands
///
/// - `Human`: Colored, human-readable output (default)
/// - `Json`: Machine-readable JSON output
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output (default)
    #[default]
    Human,
    /// Machine-readable JSON output
    Json,
}

/// Serialize to pretty-printed JSON, falling back to an empty object.
pub fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_pretty() {
        #[derive(Serialize)]
        struct Sample {
            key: &'static str,
        }

        assert_eq!(to_json(&Sample { key: "A.B" }), "{\n  \"key\": \"A.B\"\n}");
    }
}
