use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use contact_model::ContactRecord;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

const SYSTEM_PROMPT: &str = r#"You are a CRM data assistant. You receive a JSON array of contact records exported from a spreadsheet.

Clean the records: normalize capitalization of names and cities, standardize phone number formatting, uppercase postal codes, and fix obvious typos in email addresses. Do not invent data for empty fields and do not drop fields.

CRITICAL INSTRUCTIONS:
1. Return ONLY a valid JSON array, with the same number of records in the same order
2. Keep every key of every record exactly as given
3. Do NOT include any text before or after the JSON
4. Do NOT use markdown code blocks"#;

/// Connection settings for the enhancement service.
///
/// One credential, read from the environment; there is no config file.
#[derive(Debug, Clone)]
pub struct EnhanceConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl EnhanceConfig {
    /// Read `CONTACT_FORMATTER_API_KEY` and the optional
    /// `CONTACT_FORMATTER_MODEL` / `CONTACT_FORMATTER_BASE_URL` overrides.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("CONTACT_FORMATTER_API_KEY").ok(),
            model: std::env::var("CONTACT_FORMATTER_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: std::env::var("CONTACT_FORMATTER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(60),
        }
    }
}

/// Failure inside the enhancement boundary. Callers outside this crate
/// never see one; [`enhance_contacts`] converts them into a fallback.
#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("API key not configured")]
    MissingKey,
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("failed to parse response: {0}")]
    Parse(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Result of an enhancement attempt.
#[derive(Debug, Clone)]
pub struct EnhanceOutcome {
    pub records: Vec<ContactRecord>,
    /// False when any failure forced the fallback to the input records.
    pub applied: bool,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Ask the service to clean the record set. Best-effort only: on any
/// failure the input records come back unchanged and the cause is logged.
pub fn enhance_contacts(config: &EnhanceConfig, records: &[ContactRecord]) -> EnhanceOutcome {
    if records.is_empty() {
        return EnhanceOutcome {
            records: Vec::new(),
            applied: false,
        };
    }
    match call_service(config, records) {
        Ok(enhanced) => {
            debug!(records = enhanced.len(), "enhancement applied");
            EnhanceOutcome {
                records: enhanced,
                applied: true,
            }
        }
        Err(error) => {
            warn!(%error, "enhancement failed, keeping mapped records");
            EnhanceOutcome {
                records: records.to_vec(),
                applied: false,
            }
        }
    }
}

fn call_service(
    config: &EnhanceConfig,
    records: &[ContactRecord],
) -> Result<Vec<ContactRecord>, EnhanceError> {
    let api_key = config.api_key.as_ref().ok_or(EnhanceError::MissingKey)?;
    let payload =
        serde_json::to_string(records).map_err(|e| EnhanceError::Parse(e.to_string()))?;

    let client = reqwest::blocking::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|e| EnhanceError::Network(e.to_string()))?;

    let request = ChatRequest {
        model: config.model.clone(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: payload,
            },
        ],
        temperature: 0.2,
    };

    let url = if config.base_url.ends_with('/') {
        format!("{}chat/completions", config.base_url)
    } else {
        format!("{}/chat/completions", config.base_url)
    };

    let response = client
        .post(&url)
        .bearer_auth(api_key)
        .json(&request)
        .send()
        .map_err(|e| EnhanceError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|parsed| parsed.error.message)
            .unwrap_or(body);
        return Err(EnhanceError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let body: ChatResponse = response
        .json()
        .map_err(|e| EnhanceError::Parse(e.to_string()))?;
    let content = body
        .choices
        .first()
        .map(|choice| choice.message.content.clone())
        .ok_or_else(|| EnhanceError::InvalidResponse("no choices in response".to_string()))?;

    parse_enhanced(&content, records.len())
}

/// Parse the service output as a record array of the expected size.
///
/// Tolerates text or markdown fences around the JSON by retrying on the
/// slice between the first `[` and the last `]`.
fn parse_enhanced(
    content: &str,
    expected_len: usize,
) -> Result<Vec<ContactRecord>, EnhanceError> {
    let records: Vec<ContactRecord> = match serde_json::from_str(content) {
        Ok(records) => records,
        Err(first_error) => {
            let Some(start) = content.find('[') else {
                return Err(EnhanceError::Parse(format!(
                    "response is not a JSON array: {first_error}"
                )));
            };
            let Some(end) = content.rfind(']') else {
                return Err(EnhanceError::Parse(format!(
                    "response is not a JSON array: {first_error}"
                )));
            };
            if end <= start {
                return Err(EnhanceError::Parse(format!(
                    "response is not a JSON array: {first_error}"
                )));
            }
            serde_json::from_str(&content[start..=end])
                .map_err(|e| EnhanceError::Parse(e.to_string()))?
        }
    };

    if records.len() != expected_len {
        return Err(EnhanceError::InvalidResponse(format!(
            "expected {expected_len} records, got {}",
            records.len()
        )));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<ContactRecord> {
        vec![
            ContactRecord {
                first_name: "jane".to_string(),
                email: "jane@example.com".to_string(),
                ..ContactRecord::default()
            },
            ContactRecord {
                first_name: "Bob".to_string(),
                ..ContactRecord::default()
            },
        ]
    }

    #[test]
    fn parses_a_clean_json_array() {
        let content = r#"[{"First Name":"Jane"},{"First Name":"Bob"}]"#;
        let records = parse_enhanced(content, 2).unwrap();
        assert_eq!(records[0].first_name, "Jane");
        assert_eq!(records[1].first_name, "Bob");
    }

    #[test]
    fn parses_an_array_wrapped_in_markdown() {
        let content = "Here you go:\n```json\n[{\"First Name\":\"Jane\"}]\n```";
        let records = parse_enhanced(content, 1).unwrap();
        assert_eq!(records[0].first_name, "Jane");
    }

    #[test]
    fn rejects_non_json_content() {
        let error = parse_enhanced("I could not process that.", 2).unwrap_err();
        assert!(matches!(error, EnhanceError::Parse(_)));
    }

    #[test]
    fn rejects_record_count_drift() {
        let content = r#"[{"First Name":"Jane"}]"#;
        let error = parse_enhanced(content, 2).unwrap_err();
        assert!(matches!(error, EnhanceError::InvalidResponse(_)));
    }

    #[test]
    fn missing_key_falls_back_to_input_unchanged() {
        let config = EnhanceConfig::default();
        let records = sample_records();
        let outcome = enhance_contacts(&config, &records);
        assert!(!outcome.applied);
        assert_eq!(outcome.records, records);
    }

    #[test]
    fn unreachable_service_falls_back_to_input_unchanged() {
        let config = EnhanceConfig {
            api_key: Some("test-key".to_string()),
            base_url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_secs(1),
            ..EnhanceConfig::default()
        };
        let records = sample_records();
        let outcome = enhance_contacts(&config, &records);
        assert!(!outcome.applied);
        assert_eq!(outcome.records, records);
    }

    #[test]
    fn empty_input_skips_the_call() {
        let outcome = enhance_contacts(&EnhanceConfig::default(), &[]);
        assert!(!outcome.applied);
        assert!(outcome.records.is_empty());
    }
}
