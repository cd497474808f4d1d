//! Translation boundary against the Gemini generative-language API.
//!
//! One request per call, no retries, no caching. Every failure mode
//! recovers to the caller's input pair: the public `translate` method is
//! infallible by design, so the page either shows a complete translation
//! or keeps the copy it already had.

use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const GEMINI_MODEL: &str = "gemini-1.5-flash";

/// The headline and subheadline travel together in both directions;
/// a partial pair cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPair {
    pub headline: String,
    pub subheadline: String,
}

#[derive(Debug, Error)]
enum TranslateError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("empty response body")]
    EmptyResponse,
    #[error("malformed translation payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub struct Translator {
    client: reqwest::Client,
    api_key: Option<String>,
    endpoint: String,
}

impl Translator {
    /// Reads `GEMINI_API_KEY`. A missing or empty key is not an error: the
    /// translator runs in passthrough mode and hands every request its own
    /// input back.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        if api_key.is_none() {
            warn!("GEMINI_API_KEY is not set, translation runs in passthrough mode");
        }
        Self {
            client: reqwest::Client::new(),
            api_key,
            endpoint: GEMINI_ENDPOINT.to_string(),
        }
    }

    #[cfg(test)]
    pub fn for_tests(api_key: Option<&str>, endpoint: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.map(str::to_string),
            endpoint: endpoint.to_string(),
        }
    }

    pub async fn translate(
        &self,
        headline: &str,
        subheadline: &str,
        target_language: &str,
    ) -> TextPair {
        let original = TextPair {
            headline: headline.to_string(),
            subheadline: subheadline.to_string(),
        };

        if target_language == "English" {
            return original;
        }

        let Some(api_key) = self.api_key.as_deref() else {
            warn!("translation disabled: missing GEMINI_API_KEY");
            return original;
        };

        match self.request(api_key, &original, target_language).await {
            Ok(pair) => pair,
            Err(err) => {
                error!("translation to {target_language} failed: {err}");
                original
            }
        }
    }

    async fn request(
        &self,
        api_key: &str,
        original: &TextPair,
        target_language: &str,
    ) -> Result<TextPair, TranslateError> {
        let prompt = format!(
            "Translate the following website headline and subheadline into {target_language}. \
             Keep the line breaks exactly where they appear and reply with JSON only.\n\n\
             Headline:\n{}\n\nSubheadline:\n{}",
            original.headline, original.subheadline,
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": 1,
                "topP": 0.95,
                "topK": 64,
                "maxOutputTokens": 8192,
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "headline": { "type": "STRING" },
                        "subheadline": { "type": "STRING" }
                    },
                    "required": ["headline", "subheadline"]
                }
            }
        });

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, GEMINI_MODEL, api_key
        );
        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Status(status));
        }

        let reply: GenerateContentResponse = response.json().await?;
        let text = reply
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or(TranslateError::EmptyResponse)?;

        let pair: TextPair = serde_json::from_str(&strip_code_fences(&text))?;
        Ok(pair)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

/// Models sometimes wrap the JSON answer in markdown fences even when
/// asked for raw JSON; strip them before parsing.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_payload_parses_to_a_pair() {
        let raw = "```json\n{\"headline\":\"Hola\",\"subheadline\":\"Mundo\"}\n```";
        let pair: TextPair = serde_json::from_str(&strip_code_fences(raw)).unwrap();
        assert_eq!(
            pair,
            TextPair {
                headline: "Hola".into(),
                subheadline: "Mundo".into(),
            }
        );
    }

    #[test]
    fn unfenced_payload_is_left_alone() {
        let raw = "{\"headline\":\"Hallo\",\"subheadline\":\"Welt\"}";
        assert_eq!(strip_code_fences(raw), raw);
    }

    #[test]
    fn bare_fences_and_whitespace_are_stripped() {
        assert_eq!(strip_code_fences("```\n{}\n```  "), "{}");
        assert_eq!(strip_code_fences("  ```json{}```"), "{}");
    }

    #[test]
    fn garbage_payload_fails_to_parse() {
        assert!(serde_json::from_str::<TextPair>(&strip_code_fences("not json")).is_err());
    }

    #[test]
    fn missing_field_fails_to_parse() {
        assert!(serde_json::from_str::<TextPair>("{\"headline\":\"Hola\"}").is_err());
    }

    #[tokio::test]
    async fn passthrough_without_credential() {
        let translator = Translator::for_tests(None, GEMINI_ENDPOINT);
        let pair = translator.translate("Hello", "World", "Spanish").await;
        assert_eq!(pair.headline, "Hello");
        assert_eq!(pair.subheadline, "World");
    }

    #[tokio::test]
    async fn transport_failure_returns_the_input_pair() {
        // nothing listens on port 1; the connection fails immediately
        let translator = Translator::for_tests(Some("test-key"), "http://127.0.0.1:1");
        let pair = translator.translate("Hello", "World", "Spanish").await;
        assert_eq!(
            pair,
            TextPair {
                headline: "Hello".into(),
                subheadline: "World".into(),
            }
        );
    }

    #[tokio::test]
    async fn english_never_calls_out() {
        // unreachable endpoint on purpose: English must short-circuit
        let translator = Translator::for_tests(Some("test-key"), "http://127.0.0.1:1");
        let pair = translator.translate("Hello", "World", "English").await;
        assert_eq!(pair.headline, "Hello");
        assert_eq!(pair.subheadline, "World");
    }
}
