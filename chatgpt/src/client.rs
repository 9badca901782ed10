use deck_common::Outline;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("openai http {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed model output: {0}")]
    Malformed(String),
}

/// Outline generator backed by an OpenAI-compatible chat completions endpoint.
pub struct OpenAiOutlineClient {
    api_key: String,
    pub model: String,
    base_url: String,
    timeout: Duration,
    http: reqwest::Client,
}

impl OpenAiOutlineClient {
    pub fn new(api_key: String) -> Self {
        Self::new_with_model(api_key, DEFAULT_MODEL.to_string())
    }

    pub fn new_with_model(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            http: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    pub async fn generate_outline(&self, topic: &str) -> Result<Outline, ClientError> {
        let body = self.request_body(topic);
        tracing::debug!(model = %self.model, "outline request: {body}");

        let mut req = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .timeout(self.timeout);
        if let Ok(project) = std::env::var("OPENAI_PROJECT") {
            if !project.is_empty() {
                req = req.header("OpenAI-Project", project);
            }
        }
        if let Ok(org) = std::env::var("OPENAI_ORG") {
            if !org.is_empty() {
                req = req.header("OpenAI-Organization", org);
            }
        }

        let resp = req.json(&body).send().await?;
        let status = resp.status();
        tracing::debug!("outline response status: {status}");

        let text = resp.text().await?;
        if !status.is_success() {
            tracing::warn!("outline request rejected: {status}");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        parse_completion(&text)
    }

    fn request_body(&self, topic: &str) -> serde_json::Value {
        json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": build_prompt(topic) }],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": "presentation",
                    "strict": true,
                    "schema": outline_schema(),
                },
            },
        })
    }
}

pub fn build_prompt(topic: &str) -> String {
    format!(
        r#"Generate a professional and engaging presentation about "{topic}".
The presentation should have approximately 5-7 slides.
- The first slide must be a title slide with a captivating title and a short subtitle in the content array.
- The last slide must be a simple 'Thank You' or 'Q&A' slide.
- Intermediate slides should cover key aspects of the topic, using 'CONTENT' layout for detailed points and 'SECTION_HEADER' for transitions if needed.
- Ensure the content is structured into clear, concise bullet points.
- Do not add any conversational text or markdown formatting like ```json. Only provide the JSON object."#
    )
}

/// JSON schema the model is asked to follow.
pub fn outline_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "slides": {
                "type": "array",
                "description": "An array of presentation slides.",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": {
                            "type": "string",
                            "description": "The main title of the slide. Should be concise and impactful."
                        },
                        "content": {
                            "type": "array",
                            "description": "A list of bullet points for the slide content. Each string is one bullet point.",
                            "items": { "type": "string" }
                        },
                        "layout": {
                            "type": "string",
                            "enum": ["TITLE", "CONTENT", "SECTION_HEADER", "THANK_YOU"],
                            "description": "Layout for the slide. Use 'TITLE' for the first slide, 'THANK_YOU' for the last, and 'CONTENT' or 'SECTION_HEADER' for others."
                        }
                    },
                    "required": ["title", "content", "layout"],
                    "additionalProperties": false
                }
            }
        },
        "required": ["slides"],
        "additionalProperties": false
    })
}

/// Extract the outline from a chat completions response body.
pub fn parse_completion(body: &str) -> Result<Outline, ClientError> {
    let v: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| ClientError::Malformed(format!("response is not JSON: {e}")))?;
    let content = v["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| ClientError::Malformed("response has no message content".into()))?;
    parse_outline_text(content)
}

/// Parse the model's text output into an outline. Tolerates surrounding
/// whitespace and a stray markdown code fence.
pub fn parse_outline_text(text: &str) -> Result<Outline, ClientError> {
    let trimmed = strip_code_fence(text.trim());
    let value: serde_json::Value = serde_json::from_str(trimmed)
        .map_err(|e| ClientError::Malformed(format!("model output is not JSON: {e}")))?;
    if !value.get("slides").is_some_and(|s| s.is_array()) {
        return Err(ClientError::Malformed(
            "invalid response structure from model".into(),
        ));
    }
    serde_json::from_value(value).map_err(|e| ClientError::Malformed(e.to_string()))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string ("json") on the opening fence line.
    let rest = rest.split_once('\n').map(|(_, body)| body).unwrap_or("");
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_common::SlideLayout;

    fn completion(content: &str) -> String {
        json!({ "choices": [{ "message": { "role": "assistant", "content": content } }] })
            .to_string()
    }

    #[test]
    fn test_parse_completion() {
        let body = completion(
            r#"{"slides":[{"title":"Solar","content":["The bright side"],"layout":"TITLE"},{"title":"Thanks","content":[],"layout":"THANK_YOU"}]}"#,
        );
        let outline = parse_completion(&body).unwrap();
        assert_eq!(outline.len(), 2);
        assert_eq!(outline.slides[0].layout, SlideLayout::Title);
        assert_eq!(outline.slides[1].layout, SlideLayout::ThankYou);
    }

    #[test]
    fn test_parse_fenced_output() {
        let text = concat!(
            "```json\n",
            r#"{"slides":[{"title":"A","content":["b"],"layout":"CONTENT"}]}"#,
            "\n```"
        );
        let outline = parse_outline_text(text).unwrap();
        assert_eq!(outline.slides[0].content, vec!["b".to_string()]);
    }

    #[test]
    fn test_slides_must_be_array() {
        assert!(matches!(
            parse_outline_text(r#"{"slides":"nope"}"#),
            Err(ClientError::Malformed(_))
        ));
        assert!(matches!(parse_outline_text("[]"), Err(ClientError::Malformed(_))));
        assert!(matches!(parse_outline_text("not json"), Err(ClientError::Malformed(_))));
    }

    #[test]
    fn test_missing_message_content() {
        let body = json!({ "choices": [] }).to_string();
        assert!(matches!(parse_completion(&body), Err(ClientError::Malformed(_))));
    }

    #[test]
    fn test_prompt_mentions_topic() {
        let prompt = build_prompt("The Future of Renewable Energy");
        assert!(prompt.contains("\"The Future of Renewable Energy\""));
        assert!(prompt.contains("5-7 slides"));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client =
            OpenAiOutlineClient::new("k".into()).with_base_url("http://localhost:8080/v1/");
        assert_eq!(client.endpoint(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn test_schema_enumerates_layouts() {
        let schema = outline_schema();
        let tags = &schema["properties"]["slides"]["items"]["properties"]["layout"]["enum"];
        let tags: Vec<&str> = tags.as_array().unwrap().iter().filter_map(|t| t.as_str()).collect();
        let expected: Vec<&str> = SlideLayout::ALL.iter().map(|l| l.as_tag()).collect();
        assert_eq!(tags, expected);
    }
}
