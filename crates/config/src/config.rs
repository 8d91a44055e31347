use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Recognized configuration for a generation run.
///
/// Unknown keys are rejected at parse time so a typo in a config file
/// surfaces as an error instead of silently falling back to a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodegenConfig {
    /// URL the introspection document is fetched from.
    pub specification_url: String,

    /// Directory the generated artifacts are written into. Created if absent.
    pub output_folder: PathBuf,

    /// Extra HTTP headers sent with the introspection request.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Request timeout for the fetch, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retry attempts for the fetch. The default of 0 keeps the fetch
    /// one-shot.
    #[serde(default)]
    pub retry: u32,
}

const fn default_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_applies_defaults() {
        let config: CodegenConfig = serde_json::from_value(serde_json::json!({
            "specification_url": "https://api.example.com/graphql",
            "output_folder": "src/generated"
        }))
        .unwrap();

        assert_eq!(config.specification_url, "https://api.example.com/graphql");
        assert_eq!(config.output_folder, PathBuf::from("src/generated"));
        assert!(config.headers.is_empty());
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.retry, 0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<CodegenConfig, _> = serde_json::from_value(serde_json::json!({
            "specification_url": "https://api.example.com/graphql",
            "output_folder": "src/generated",
            "specifiction_url": "oops"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn full_config_round_trips() {
        let config: CodegenConfig = serde_json::from_value(serde_json::json!({
            "specification_url": "https://api.example.com/graphql",
            "output_folder": "out",
            "headers": { "Authorization": "Bearer token" },
            "timeout_secs": 60,
            "retry": 2
        }))
        .unwrap();

        assert_eq!(
            config.headers.get("Authorization"),
            Some(&"Bearer token".to_string())
        );
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.retry, 2);
    }
}
