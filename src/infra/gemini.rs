//! Thin asynchronous client for the Gemini generateContent API.
//!
//! Fabricates the descriptive company content shown on the About page
//! (store locations and director bios). Failure here only starves the
//! About panels; the rate board and calculator never depend on it.

use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::domain::StoreInfo;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";
const MODEL: &str = "gemini-2.5-flash";
const USER_AGENT: &str = "gold-rate-board/1.0.0";

const PROMPT: &str = "Generate fictional but realistic information for a luxury jewelry \
brand in India called \"Shri Murari Jewellers Pvt. Ltd.\".\n\n\
Provide details for:\n\
1. Two store locations (one flagship in a metro city, one in another major city). \
Include a name, full address, and a phone number for each.\n\
2. Bios for two fictional directors. Include their name, title (e.g., 'Founder & CEO', \
'Creative Director'), and a short, professional bio (2-3 sentences).\n\n\
Format the entire output as a single JSON object.";

#[derive(Debug, Error)]
pub enum StoreInfoError {
    #[error("no API key configured (set GEMINI_API_KEY)")]
    MissingApiKey,
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api error: {0}")]
    Api(String),
    #[error("malformed content payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The single capability the About page depends on. Tests substitute their
/// own source instead of reaching the live service.
pub trait StoreInfoSource {
    fn fetch_store_info(
        &self,
    ) -> impl std::future::Future<Output = Result<StoreInfo, StoreInfoError>>;
}

#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl GeminiClient {
    /// Build a client from the `GEMINI_API_KEY` (or legacy `API_KEY`)
    /// environment variable.
    pub fn from_env() -> Result<Self, StoreInfoError> {
        let key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .unwrap_or_default();
        Self::new(&key)
    }

    pub fn new(api_key: &str) -> Result<Self, StoreInfoError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base: &str) -> Result<Self, StoreInfoError> {
        if api_key.trim().is_empty() {
            return Err(StoreInfoError::MissingApiKey);
        }
        let base_url = Url::parse(base)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url,
            api_key: api_key.trim().to_string(),
        })
    }

    fn request_body() -> serde_json::Value {
        json!({
            "contents": [{ "parts": [{ "text": PROMPT }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "stores": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "name": { "type": "STRING" },
                                    "address": { "type": "STRING" },
                                    "phone": { "type": "STRING" }
                                },
                                "required": ["name", "address", "phone"]
                            }
                        },
                        "directors": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "name": { "type": "STRING" },
                                    "title": { "type": "STRING" },
                                    "bio": { "type": "STRING" }
                                },
                                "required": ["name", "title", "bio"]
                            }
                        }
                    },
                    "required": ["stores", "directors"]
                }
            }
        })
    }
}

impl StoreInfoSource for GeminiClient {
    async fn fetch_store_info(&self) -> Result<StoreInfo, StoreInfoError> {
        let url = self
            .base_url
            .join(&format!("models/{MODEL}:generateContent"))?;

        println!("Requesting store info from {url}");

        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::request_body())
            .send()
            .await?
            .error_for_status()?;

        let envelope: GenerateContentResponse = response.json().await?;
        let text = candidate_text(&envelope)
            .ok_or_else(|| StoreInfoError::Api("response carried no content".into()))?;
        parse_store_info(text)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

fn candidate_text(envelope: &GenerateContentResponse) -> Option<&str> {
    envelope
        .candidates
        .iter()
        .filter_map(|candidate| candidate.content.as_ref())
        .flat_map(|content| content.parts.iter())
        .find_map(|part| part.text.as_deref())
}

/// Parse the model's JSON text into [`StoreInfo`]. Tolerates the code
/// fences some responses wrap around the payload.
pub fn parse_store_info(raw: &str) -> Result<StoreInfo, StoreInfoError> {
    let trimmed = strip_code_fences(raw.trim());
    Ok(serde_json::from_str(trimmed)?)
}

fn strip_code_fences(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the language tag on the opening fence, then the closing fence.
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.trim_end_matches('`').trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "stores": [
            {"name": "Flagship", "address": "12 MG Road, Mumbai", "phone": "+91 22 0000 0000"},
            {"name": "City Store", "address": "4 Park Street, Kolkata", "phone": "+91 33 0000 0000"}
        ],
        "directors": [
            {"name": "A. Murari", "title": "Founder & CEO", "bio": "Founded the house in 1987."}
        ]
    }"#;

    #[test]
    fn parses_plain_json_payload() {
        let info = parse_store_info(PAYLOAD).unwrap();
        assert_eq!(info.stores.len(), 2);
        assert_eq!(info.directors.len(), 1);
        assert_eq!(info.stores[0].name, "Flagship");
        assert_eq!(info.directors[0].title, "Founder & CEO");
    }

    #[test]
    fn parses_fenced_json_payload() {
        let fenced = format!("```json\n{PAYLOAD}\n```");
        let info = parse_store_info(&fenced).unwrap();
        assert_eq!(info.stores.len(), 2);
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        let result = parse_store_info("not json at all");
        assert!(matches!(result, Err(StoreInfoError::Decode(_))));
    }

    #[test]
    fn blank_api_key_is_rejected_up_front() {
        assert!(matches!(
            GeminiClient::new("   "),
            Err(StoreInfoError::MissingApiKey)
        ));
    }

    #[test]
    fn candidate_text_walks_past_empty_candidates() {
        let envelope: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [
                {"content": {"parts": []}},
                {"content": {"parts": [{"text": "{}"}]}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(candidate_text(&envelope), Some("{}"));
    }
}
