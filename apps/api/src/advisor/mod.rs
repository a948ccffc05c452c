// Career advisor: prompt building, the error boundary around the model call,
// and the HTTP handlers for both triggers.
// All model calls go through llm_client, never direct HTTP.

pub mod handlers;
pub mod prompts;

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Config;
use crate::llm_client::{GeminiClient, LlmError, TextGenerator};

/// Returned verbatim whenever no credential is configured.
pub const FALLBACK_MESSAGE: &str = "AI service unavailable. Please set GOOGLE_API_KEY.";

/// Prefix shown in front of a failed call's error description.
pub const ERROR_MARKER: &str = "⚠️ Error from AI:";

/// The text-generation service as handlers see it. Which variant is active
/// is decided once at startup from the credential.
#[derive(Clone)]
pub enum Advisor {
    Configured(Arc<dyn TextGenerator>),
    Unconfigured,
}

impl Advisor {
    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        match &config.gemini_api_key {
            Some(key) => {
                let client = GeminiClient::new(key.clone(), config)?;
                Ok(Advisor::Configured(Arc::new(client)))
            }
            None => Ok(Advisor::Unconfigured),
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Advisor::Configured(_))
    }

    pub fn model(&self) -> Option<&str> {
        match self {
            Advisor::Configured(generator) => Some(generator.model()),
            Advisor::Unconfigured => None,
        }
    }

    /// Sends `prompt` to the model and returns what the user should see.
    ///
    /// Never fails: a failed call becomes `"{ERROR_MARKER} {error}"`, and the
    /// unconfigured advisor answers with `FALLBACK_MESSAGE` without touching
    /// the network.
    pub async fn generate(&self, prompt: &str) -> String {
        let generator = match self {
            Advisor::Configured(generator) => generator,
            Advisor::Unconfigured => {
                info!("No Gemini credential configured, returning fallback message");
                return FALLBACK_MESSAGE.to_string();
            }
        };

        match generator.generate_content(prompt).await {
            Ok(text) => {
                info!("Model returned {} chars", text.len());
                text
            }
            Err(e) => {
                warn!("Model call failed: {e}");
                format!("{ERROR_MARKER} {e}")
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use wiremock::matchers::any;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::testing::CountingGenerator;
    use super::*;
    use crate::advisor::prompts::build_career_prompt;
    use crate::models::profile::{EducationLevel, Profile};

    fn config_with(pairs: Vec<(&'static str, String)>) -> Config {
        Config::from_lookup(|key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_unconfigured_returns_fallback_for_any_prompt() {
        let advisor = Advisor::Unconfigured;
        for prompt in ["", "hello", "⚠️ anything at all\n\n"] {
            assert_eq!(advisor.generate(prompt).await, FALLBACK_MESSAGE);
        }
        assert!(!advisor.is_configured());
        assert!(advisor.model().is_none());
    }

    #[tokio::test]
    async fn test_missing_credential_never_reaches_the_network() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let config = config_with(vec![("GEMINI_API_BASE", server.uri())]);
        let advisor = Advisor::from_config(&config).unwrap();
        assert!(!advisor.is_configured());

        let profile = Profile {
            skills: "Python, Communication".to_string(),
            interests: "Data Science, AI, Problem Solving".to_string(),
            education: EducationLevel::Undergraduate,
        };
        let output = advisor.generate(&build_career_prompt(&profile)).await;
        assert_eq!(output, "AI service unavailable. Please set GOOGLE_API_KEY.");
        // MockServer verifies `expect(0)` on drop.
    }

    #[tokio::test]
    async fn test_success_returns_text_unmodified() {
        let reply = "  1. Data Scientist\n\n**Gaps:** SQL  \n";
        let generator = Arc::new(CountingGenerator::replying(reply));
        let advisor = Advisor::Configured(generator.clone());

        assert_eq!(advisor.generate("prompt").await, reply);
        assert_eq!(generator.calls(), 1);
        assert_eq!(generator.prompts(), vec!["prompt".to_string()]);
    }

    #[tokio::test]
    async fn test_failure_becomes_warning_string() {
        let generator = Arc::new(CountingGenerator::failing(429, "Resource has been exhausted"));
        let advisor = Advisor::Configured(generator.clone());

        let output = advisor.generate("prompt").await;
        assert!(output.starts_with(ERROR_MARKER));
        assert!(output.contains("Resource has been exhausted"));
        assert_eq!(
            output,
            "⚠️ Error from AI: API error (status 429): Resource has been exhausted"
        );
        assert_eq!(generator.calls(), 1, "failures are not retried");
    }

    #[tokio::test]
    async fn test_configured_from_config_calls_gemini_once() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{"content": {"parts": [{"text": "Become a data analyst."}]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = config_with(vec![
            ("GEMINI_API_KEY", "key".to_string()),
            ("GEMINI_API_BASE", server.uri()),
        ]);
        let advisor = Advisor::from_config(&config).unwrap();
        assert_eq!(advisor.model(), Some("gemini-2.5-pro"));
        assert_eq!(advisor.generate("prompt").await, "Become a data analyst.");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_becomes_warning_string() {
        // Nothing listens on port 9 in the test environment.
        let config = config_with(vec![
            ("GEMINI_API_KEY", "key".to_string()),
            ("GEMINI_API_BASE", "http://127.0.0.1:9".to_string()),
        ]);
        let advisor = Advisor::from_config(&config).unwrap();

        let output = advisor.generate("prompt").await;
        assert!(output.starts_with("⚠️ Error from AI: HTTP error:"));
    }
}
