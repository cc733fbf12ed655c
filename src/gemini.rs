use std::io::Cursor;

use async_trait::async_trait;
use base64::Engine;
use bytes::Bytes;
use image::{ImageFormat, Rgb, RgbImage};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info};

use crate::models::{ImageRef, ImageSource};

pub const OUTPUT_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(String),
    /// Non-success response. The message is the raw body so callers can inspect it.
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("Failed to decode image payload: {0}")]
    Decode(String),
    #[error("{0}")]
    Other(String),
}

impl GeminiError {
    /// HTTP status of a non-success response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            GeminiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Something that turns a prompt into one encoded image.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> Result<ImageRef, GeminiError>;
}

// Helper function to truncate base64 data in JSON for cleaner logging
fn truncate_base64_in_json(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, val) in map.iter_mut() {
                if key == "bytesBase64Encoded" {
                    if let serde_json::Value::String(s) = val {
                        if s.len() > 100 && s.is_ascii() {
                            *val = serde_json::Value::String(format!("{}...[truncated {} chars]", &s[..50], s.len() - 50));
                        }
                    }
                } else {
                    truncate_base64_in_json(val);
                }
            }
        }
        serde_json::Value::Array(arr) => {
            for val in arr.iter_mut() {
                truncate_base64_in_json(val);
            }
        }
        _ => {}
    }
}

fn preview(data: &str) -> String {
    match data.char_indices().nth(50) {
        Some((cut, _)) => format!("{}...[{} chars total]", &data[..cut], data.len()),
        None => data.to_string(),
    }
}

pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    async fn perform_api_call(&self, prompt: &str) -> Result<ImageRef, GeminiError> {
        let url = format!("{}/models/{}:predict?key={}", self.base_url, self.model, self.api_key);

        let masked = if self.api_key.is_empty() { url.clone() } else { url.replace(&self.api_key, "***") };
        info!("🔗 Making request to: {}", masked);

        let request_body = json!({
            "instances": [{ "prompt": prompt }],
            "parameters": {
                "sampleCount": 1,
                "aspectRatio": "1:1",
                "outputOptions": { "mimeType": OUTPUT_MIME_TYPE }
            }
        });

        let response = self.client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GeminiError::Http(e.to_string()))?;

        let status = response.status();
        info!("📥 Response status: {}", status);

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!("❌ API Error response: {}", error_body);
            let message = if error_body.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                error_body
            };
            return Err(GeminiError::Api { status: status.as_u16(), message });
        }

        let response_text = response.text().await
            .map_err(|e| GeminiError::Http(e.to_string()))?;

        let truncated_response = if let Ok(mut json_value) = serde_json::from_str::<serde_json::Value>(&response_text) {
            truncate_base64_in_json(&mut json_value);
            json_value.to_string()
        } else {
            preview(&response_text)
        };
        info!("📥 Raw Imagen API response: {}", truncated_response);

        let parsed: PredictResponse = serde_json::from_str(&response_text)
            .map_err(|e| GeminiError::Other(format!("parse error: {}", e)))?;

        let prediction = parsed.predictions.into_iter().next()
            .ok_or_else(|| GeminiError::Other("no image data in response".into()))?;
        let encoded = prediction.bytes_base64_encoded
            .ok_or_else(|| GeminiError::Other("no image data in response".into()))?;
        info!("🖼️ Extracted image from API response: {}", preview(&encoded));

        let data = base64::engine::general_purpose::STANDARD
            .decode(encoded.as_bytes())
            .map_err(|e| GeminiError::Decode(e.to_string()))?;

        Ok(ImageRef {
            mime_type: prediction.mime_type.unwrap_or_else(|| OUTPUT_MIME_TYPE.to_string()),
            data: Bytes::from(data),
            source: ImageSource::Generated,
        })
    }
}

#[async_trait]
impl ImageGenerator for GeminiClient {
    async fn generate_image(&self, prompt: &str) -> Result<ImageRef, GeminiError> {
        info!("Generating image with Imagen model {}...", self.model);
        let result = self.perform_api_call(prompt).await;
        match &result {
            Ok(image) => info!("✅ Successfully generated image ({} bytes)", image.data.len()),
            Err(e) => error!("❌ Failed to generate image: {}", e),
        }
        result
    }
}

/// Demo-mode stand-in: a dark slate square with a violet centre panel.
///
/// Always the same bytes, so callers can compare placeholders directly.
pub fn placeholder_image() -> Result<ImageRef, GeminiError> {
    const SIZE: u32 = 1024;
    const BACKGROUND: Rgb<u8> = Rgb([0x0f, 0x17, 0x2a]);
    const ACCENT: Rgb<u8> = Rgb([0x6d, 0x28, 0xd9]);

    let inset = SIZE / 4;
    let canvas = RgbImage::from_fn(SIZE, SIZE, |x, y| {
        let inside = (inset..SIZE - inset).contains(&x) && (inset..SIZE - inset).contains(&y);
        if inside { ACCENT } else { BACKGROUND }
    });

    let mut buf = Cursor::new(Vec::new());
    canvas
        .write_to(&mut buf, ImageFormat::Jpeg)
        .map_err(|e| GeminiError::Other(format!("placeholder encode failed: {}", e)))?;

    Ok(ImageRef {
        mime_type: OUTPUT_MIME_TYPE.to_string(),
        data: Bytes::from(buf.into_inner()),
        source: ImageSource::Placeholder,
    })
}

// --- Response Parsing Helpers ---

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    #[serde(rename = "bytesBase64Encoded")]
    bytes_base64_encoded: Option<String>,
    #[serde(rename = "mimeType")]
    mime_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL: &str = "imagen-4.0-generate-001";

    fn client(server: &MockServer) -> GeminiClient {
        GeminiClient::new("test-key".into(), server.uri(), MODEL.into())
    }

    #[tokio::test]
    async fn sends_fixed_options_and_decodes_first_prediction() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/models/{MODEL}:predict")))
            .and(query_param("key", "test-key"))
            .and(body_json(json!({
                "instances": [{ "prompt": "a red case" }],
                "parameters": {
                    "sampleCount": 1,
                    "aspectRatio": "1:1",
                    "outputOptions": { "mimeType": "image/jpeg" }
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "predictions": [
                    { "bytesBase64Encoded": "AAAA", "mimeType": "image/jpeg" },
                    { "bytesBase64Encoded": "/w==" }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let image = client(&server).generate_image("a red case").await.unwrap();
        assert_eq!(&image.data[..], &[0u8, 0, 0][..]);
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.source, ImageSource::Generated);
    }

    #[tokio::test]
    async fn error_body_becomes_the_message() {
        let server = MockServer::start().await;
        let body = r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string(body))
            .mount(&server)
            .await;

        let err = client(&server).generate_image("x").await.unwrap_err();
        assert_eq!(err.status(), Some(429));
        assert_eq!(err.to_string(), body);
    }

    #[tokio::test]
    async fn empty_error_body_falls_back_to_status_line() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client(&server).generate_image("x").await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500 Internal Server Error");
    }

    #[tokio::test]
    async fn empty_predictions_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "predictions": [] })))
            .mount(&server)
            .await;

        let err = client(&server).generate_image("x").await.unwrap_err();
        assert_eq!(err.to_string(), "no image data in response");
    }

    #[test]
    fn placeholder_is_deterministic_jpeg() {
        let a = placeholder_image().unwrap();
        let b = placeholder_image().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.source, ImageSource::Placeholder);
        assert_eq!(&a.data[..3], &[0xFF, 0xD8, 0xFF][..]);
    }

    #[test]
    fn long_payloads_are_truncated_for_logs() {
        let mut value = json!({ "predictions": [{ "bytesBase64Encoded": "A".repeat(200) }] });
        truncate_base64_in_json(&mut value);
        let logged = value["predictions"][0]["bytesBase64Encoded"].as_str().unwrap();
        assert!(logged.ends_with("...[truncated 150 chars]"));
    }
}
