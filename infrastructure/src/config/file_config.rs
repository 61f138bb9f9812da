//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Conversion into application-layer types happens through the accessor
//! methods, so parse errors surface at load time with field context.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tribunal_application::TrialParams;
use tribunal_domain::{DomainError, JurorDecision, WeightedRole};

/// Top-level configuration file structure.
///
/// ```toml
/// [trial]
/// quorum = 3
/// juror_timeout_secs = 30
///
/// [[bench]]
/// name = "logic"
/// endpoint = "https://openrouter.ai/api/v1/chat/completions"
/// model = "openai/gpt-4o-mini"
/// api_key_env = "OPENROUTER_API_KEY"
/// prompt = "You are a logic juror..."
///
/// [[bench]]
/// name = "archivist"
/// role = "archivist"
/// script = ["no_objection"]
///
/// [review]
/// staff = ["staff-1"]
///
/// [server]
/// host = "127.0.0.1"
/// port = 5000
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub trial: TrialSection,
    pub bench: Vec<JurorEntry>,
    pub review: ReviewSection,
    pub server: ServerSection,
}

/// `[trial]` section: dispatch and tally parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrialSection {
    pub quorum: usize,
    pub juror_timeout_secs: u64,
    pub max_content_chars: usize,
}

impl Default for TrialSection {
    fn default() -> Self {
        let params = TrialParams::default();
        Self {
            quorum: params.quorum,
            juror_timeout_secs: params.juror_timeout.as_secs(),
            max_content_chars: params.max_content_chars,
        }
    }
}

impl TrialSection {
    pub fn params(&self) -> TrialParams {
        TrialParams::default()
            .with_quorum(self.quorum)
            .with_juror_timeout(Duration::from_secs(self.juror_timeout_secs))
            .with_max_content_chars(self.max_content_chars)
    }
}

/// One `[[bench]]` entry describing a juror capability.
///
/// Entries with an `endpoint` become HTTP jurors; entries with a `script`
/// become scripted jurors. The optional `role` grants override authority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JurorEntry {
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    /// Environment variable holding the API key for the endpoint.
    #[serde(default)]
    pub api_key_env: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub script: Option<Vec<String>>,
}

impl JurorEntry {
    /// Parse the entry's weighted role, if declared.
    pub fn weighted_role(&self) -> Result<Option<WeightedRole>, DomainError> {
        self.role.as_deref().map(str::parse).transpose()
    }

    /// Parse the entry's scripted decisions, if declared.
    pub fn scripted_decisions(&self) -> Result<Option<Vec<JurorDecision>>, DomainError> {
        self.script
            .as_ref()
            .map(|script| script.iter().map(|s| s.parse()).collect())
            .transpose()
    }
}

/// `[review]` section: who may review feedback submissions.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReviewSection {
    pub staff: Vec<String>,
}

/// `[server]` section: HTTP bind address and audit log location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
    pub audit_log: Option<PathBuf>,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            audit_log: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.trial.quorum, 3);
        assert!(config.bench.is_empty());
        assert!(config.review.staff.is_empty());
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_parse_full_file() {
        let toml = r#"
            [trial]
            quorum = 2
            juror_timeout_secs = 10

            [[bench]]
            name = "logic"
            endpoint = "https://example.test/v1/chat/completions"
            model = "gpt-4o-mini"
            prompt = "You are a logic juror."

            [[bench]]
            name = "community"
            role = "community-watch"
            script = ["no_objection", "suspicious_fact"]

            [review]
            staff = ["staff-1", "staff-2"]

            [server]
            port = 8080
        "#;

        let config: FileConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.trial.params().quorum, 2);
        assert_eq!(config.bench.len(), 2);
        assert_eq!(
            config.bench[1].weighted_role().unwrap(),
            Some(WeightedRole::CommunityWatch)
        );
        assert_eq!(
            config.bench[1].scripted_decisions().unwrap().unwrap(),
            vec![JurorDecision::NoObjection, JurorDecision::SuspiciousFact]
        );
        assert_eq!(config.server.port, 8080);
        // Unset fields keep their defaults
        assert_eq!(config.trial.max_content_chars, 12_000);
    }

    #[test]
    fn test_bad_role_is_an_error() {
        let entry = JurorEntry {
            name: "odd".into(),
            role: Some("bailiff".into()),
            endpoint: None,
            model: None,
            api_key_env: None,
            prompt: None,
            script: None,
        };
        assert!(entry.weighted_role().is_err());
    }
}
