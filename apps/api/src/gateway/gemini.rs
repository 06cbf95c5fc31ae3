//! Gemini client — the single point of entry for all generative API calls.
//!
//! ARCHITECTURAL RULE: nothing outside `gateway` may call the Gemini API directly.
//! Agents go through `StructuredResponseGateway`, which talks to this client through
//! the `GenerativeTransport` trait.
//!
//! One attempt per call. The gateway owns failure recovery (fallback payloads), so
//! there is no retry loop here.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::gateway::transport::{
    GenerativeTransport, GroundingSource, ResponseFormat, TransportError, TransportRequest,
    TransportResponse,
};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const HTTP_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    web: Option<WebChunk>,
}

#[derive(Debug, Deserialize)]
struct WebChunk {
    uri: Option<String>,
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts.
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        (!text.trim().is_empty()).then_some(text)
    }

    /// Web citations with both a title and a URI.
    fn sources(&self) -> Vec<GroundingSource> {
        self.candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|m| {
                m.grounding_chunks
                    .iter()
                    .filter_map(|chunk| chunk.web.as_ref())
                    .filter_map(|web| match (&web.title, &web.uri) {
                        (Some(title), Some(uri)) if !title.is_empty() && !uri.is_empty() => {
                            Some(GroundingSource {
                                title: title.clone(),
                                uri: uri.clone(),
                            })
                        }
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

/// Builds the `generateContent` body. The search tool and a response schema are
/// never sent together; the API rejects that combination.
pub(crate) fn build_request_body(request: &TransportRequest) -> Value {
    let mut body = json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": request.prompt }],
        }],
    });

    match &request.format {
        ResponseFormat::Schema(schema) => {
            body["generationConfig"] = json!({
                "responseMimeType": "application/json",
                "responseSchema": schema,
            });
        }
        ResponseFormat::PlainText => {
            body["generationConfig"] = json!({ "responseMimeType": "text/plain" });
        }
        ResponseFormat::Unconstrained => {}
    }

    if request.web_search {
        body["tools"] = json!([{ "google_search": {} }]);
    }

    body
}

#[async_trait]
impl GenerativeTransport for GeminiClient {
    async fn generate(
        &self,
        request: &TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        let body = build_request_body(request);

        let response = self
            .client
            .post(self.endpoint(request.model))
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(TransportError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let raw = response.text().await?;
        let parsed: GenerateContentResponse =
            serde_json::from_str(&raw).map_err(|e| TransportError::Decode(e.to_string()))?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "Gemini call succeeded: model={}, prompt_tokens={}, output_tokens={}",
                request.model, usage.prompt_token_count, usage.candidates_token_count
            );
        }

        let text = parsed.text().ok_or(TransportError::EmptyContent)?;
        Ok(TransportResponse {
            text,
            sources: parsed.sources(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request(format: ResponseFormat, web_search: bool) -> TransportRequest {
        TransportRequest {
            model: "gemini-2.5-flash",
            prompt: "Analyze this".to_string(),
            format,
            web_search,
        }
    }

    fn client(server: &MockServer) -> GeminiClient {
        GeminiClient::new("test-key".to_string(), server.uri()).unwrap()
    }

    #[test]
    fn test_schema_request_body() {
        let schema = json!({ "type": "OBJECT", "properties": {} });
        let body = build_request_body(&request(ResponseFormat::Schema(schema.clone()), false));
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Analyze this");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"], schema);
        assert!(body.get("tools").is_none());
    }

    #[test]
    fn test_search_request_body_has_tool_and_no_schema() {
        let body = build_request_body(&request(ResponseFormat::Unconstrained, true));
        assert!(body.get("generationConfig").is_none());
        assert_eq!(body["tools"], json!([{ "google_search": {} }]));
    }

    #[test]
    fn test_plain_text_request_body() {
        let body = build_request_body(&request(ResponseFormat::PlainText, false));
        assert_eq!(body["generationConfig"], json!({ "responseMimeType": "text/plain" }));
    }

    #[tokio::test]
    async fn test_generate_returns_text_and_sources() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({ "tools": [{ "google_search": {} }] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "{\"a\":" }, { "text": "1}" }] },
                    "groundingMetadata": {
                        "groundingChunks": [
                            { "web": { "uri": "https://news.example/acme", "title": "Acme news" } },
                            { "web": { "uri": "https://no-title.example" } },
                            { "retrievedContext": {} }
                        ]
                    }
                }],
                "usageMetadata": { "promptTokenCount": 10, "candidatesTokenCount": 4 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)
            .generate(&request(ResponseFormat::Unconstrained, true))
            .await
            .unwrap();

        assert_eq!(response.text, "{\"a\":1}");
        assert_eq!(
            response.sources,
            vec![GroundingSource {
                title: "Acme news".to_string(),
                uri: "https://news.example/acme".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_api_error_message_is_extracted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": { "code": 400, "message": "Tool use with a response mime type is unsupported" }
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .generate(&request(ResponseFormat::PlainText, false))
            .await
            .unwrap_err();

        match err {
            TransportError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Tool use with a response mime type is unsupported");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client(&server)
            .generate(&request(ResponseFormat::PlainText, false))
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Api { status: 503, ref message } if message == "overloaded"));
    }

    #[tokio::test]
    async fn test_empty_candidates_is_empty_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let err = client(&server)
            .generate(&request(ResponseFormat::PlainText, false))
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::EmptyContent));
    }

    #[tokio::test]
    async fn test_garbage_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
            .mount(&server)
            .await;

        let err = client(&server)
            .generate(&request(ResponseFormat::PlainText, false))
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Decode(_)));
    }
}
