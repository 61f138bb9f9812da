//! Juror capability adapters
//!
//! Each adapter implements the `JurorCapability` port. The bench is
//! assembled from configuration: entries with an `endpoint` become HTTP
//! jurors (behind the `http-jurors` feature), entries with a `script`
//! become deterministic scripted jurors for offline and test operation.

#[cfg(feature = "http-jurors")]
pub mod http;
pub mod scripted;

pub use scripted::ScriptedJuror;

use crate::config::JurorEntry;
use std::sync::Arc;
use thiserror::Error;
use tribunal_application::ports::juror::JurorCapability;
use tribunal_domain::DomainError;

/// Errors assembling the bench from configuration.
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Juror {0}: {1}")]
    Invalid(String, DomainError),

    #[error("Juror {name}: missing required field `{field}`")]
    MissingField { name: String, field: &'static str },

    #[error("Juror {name} declares an endpoint, but this build lacks the `http-jurors` feature")]
    HttpUnavailable { name: String },

    #[error("Juror {0} declares neither an endpoint nor a script")]
    NoCapability(String),
}

/// Build the configured bench.
pub fn build_bench(entries: &[JurorEntry]) -> Result<Vec<Arc<dyn JurorCapability>>, BenchError> {
    entries.iter().map(build_juror).collect()
}

fn build_juror(entry: &JurorEntry) -> Result<Arc<dyn JurorCapability>, BenchError> {
    let role = entry
        .weighted_role()
        .map_err(|e| BenchError::Invalid(entry.name.clone(), e))?;

    if let Some(script) = entry
        .scripted_decisions()
        .map_err(|e| BenchError::Invalid(entry.name.clone(), e))?
    {
        return Ok(Arc::new(
            ScriptedJuror::new(&entry.name, script).with_role(role),
        ));
    }

    #[cfg(feature = "http-jurors")]
    if let Some(endpoint) = &entry.endpoint {
        let model = entry.model.as_ref().ok_or(BenchError::MissingField {
            name: entry.name.clone(),
            field: "model",
        })?;
        let prompt = entry.prompt.as_ref().ok_or(BenchError::MissingField {
            name: entry.name.clone(),
            field: "prompt",
        })?;
        let api_key = entry
            .api_key_env
            .as_ref()
            .and_then(|var| std::env::var(var).ok());

        return Ok(Arc::new(
            http::HttpJuror::new(&entry.name, endpoint, model, prompt)
                .with_role(role)
                .with_api_key(api_key),
        ));
    }

    #[cfg(not(feature = "http-jurors"))]
    if entry.endpoint.is_some() {
        return Err(BenchError::HttpUnavailable {
            name: entry.name.clone(),
        });
    }

    Err(BenchError::NoCapability(entry.name.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> JurorEntry {
        JurorEntry {
            name: name.to_string(),
            role: None,
            endpoint: None,
            model: None,
            api_key_env: None,
            prompt: None,
            script: None,
        }
    }

    #[test]
    fn test_scripted_bench() {
        let mut logic = entry("logic");
        logic.script = Some(vec!["no_objection".to_string()]);
        let mut rag = entry("rag");
        rag.script = Some(vec!["no_objection".to_string()]);
        rag.role = Some("archivist".to_string());

        let bench = build_bench(&[logic, rag]).unwrap();
        assert_eq!(bench.len(), 2);
        assert_eq!(bench[0].id(), "logic");
        assert_eq!(
            bench[1].role(),
            Some(tribunal_domain::WeightedRole::Archivist)
        );
    }

    #[test]
    fn test_entry_without_capability() {
        let result = build_bench(&[entry("mystery")]);
        assert!(matches!(result, Err(BenchError::NoCapability(_))));
    }

    #[test]
    fn test_bad_script_token() {
        let mut juror = entry("odd");
        juror.script = Some(vec!["guilty".to_string()]);
        assert!(matches!(
            build_bench(&[juror]),
            Err(BenchError::Invalid(_, _))
        ));
    }
}
