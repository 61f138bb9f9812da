//! HTTP juror - judgment over an OpenAI-compatible chat endpoint
//!
//! Sends the content to a remote model behind a chat-completions API and
//! parses one of the four decision tokens out of the reply. The judgment
//! prompt instructs the model to answer with a bare token; the parser is
//! lenient about surrounding prose as long as exactly one token appears.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;
use tribunal_application::ports::juror::{JurorCapability, JurorError};
use tribunal_domain::{JurorDecision, WeightedRole};

const DECISION_TOKENS: [(&str, JurorDecision); 4] = [
    ("no_objection", JurorDecision::NoObjection),
    ("suspicious_fact", JurorDecision::SuspiciousFact),
    ("reasonable_doubt", JurorDecision::ReasonableDoubt),
    ("abstain", JurorDecision::Abstain),
];

/// Instruction appended to every judgment prompt.
const ANSWER_FORMAT: &str = "\n\nAnswer with exactly one of: no_objection, \
suspicious_fact, reasonable_doubt, abstain. If you cannot judge, answer abstain.";

#[derive(Deserialize)]
struct ChatReply {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

/// A juror backed by an OpenAI-compatible chat-completions endpoint.
pub struct HttpJuror {
    id: String,
    role: Option<WeightedRole>,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    prompt: String,
    client: reqwest::Client,
}

impl HttpJuror {
    pub fn new(
        id: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            role: None,
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: None,
            prompt: prompt.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_role(mut self, role: Option<WeightedRole>) -> Self {
        self.role = role;
        self
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Extract the decision token from a model reply.
    ///
    /// Exactly one distinct token must appear; zero or several make the
    /// reply malformed (and the pool will record an abstention).
    fn parse_decision(reply: &str) -> Result<JurorDecision, JurorError> {
        let lowered = reply.to_lowercase();
        let mut found: Option<JurorDecision> = None;

        for (token, decision) in DECISION_TOKENS {
            if lowered.contains(token) {
                if found.is_some() {
                    return Err(JurorError::MalformedReply(format!(
                        "multiple decision tokens in reply: {}",
                        reply.trim()
                    )));
                }
                found = Some(decision);
            }
        }

        found.ok_or_else(|| {
            JurorError::MalformedReply(format!("no decision token in reply: {}", reply.trim()))
        })
    }
}

#[async_trait]
impl JurorCapability for HttpJuror {
    fn id(&self) -> &str {
        &self.id
    }

    fn role(&self) -> Option<WeightedRole> {
        self.role
    }

    async fn judge(&self, content: &str) -> Result<JurorDecision, JurorError> {
        let body = json!({
            "model": self.model,
            "temperature": 0.0,
            "messages": [
                { "role": "system", "content": format!("{}{}", self.prompt, ANSWER_FORMAT) },
                { "role": "user", "content": content },
            ],
        });

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| JurorError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(JurorError::RequestFailed(format!(
                "HTTP {} from {}",
                status.as_u16(),
                self.endpoint
            )));
        }

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| JurorError::MalformedReply(e.to_string()))?;

        let text = reply
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| JurorError::MalformedReply("empty choices".to_string()))?;

        debug!(juror = %self.id, reply = text.trim(), "Juror replied");
        Self::parse_decision(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_token() {
        assert_eq!(
            HttpJuror::parse_decision("no_objection").unwrap(),
            JurorDecision::NoObjection
        );
    }

    #[test]
    fn test_parse_token_in_prose() {
        let reply = "After checking the sources I vote reasonable_doubt.";
        assert_eq!(
            HttpJuror::parse_decision(reply).unwrap(),
            JurorDecision::ReasonableDoubt
        );
    }

    #[test]
    fn test_parse_rejects_ambiguous_reply() {
        let reply = "Either no_objection or suspicious_fact, hard to say.";
        assert!(matches!(
            HttpJuror::parse_decision(reply),
            Err(JurorError::MalformedReply(_))
        ));
    }

    #[test]
    fn test_parse_rejects_empty_reply() {
        assert!(HttpJuror::parse_decision("I refuse to answer.").is_err());
    }
}
