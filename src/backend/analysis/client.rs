/**
 * Inference Service Client
 *
 * Forwards an uploaded picture to the external classifier at
 * `{INFERENCE_URL}/predict` as a multipart form with a single `image` field
 * and decodes the `{label, confidence, probs}` answer.
 *
 * The service is treated as opaque: the numbers it returns are passed
 * through unchecked, only the label must be one of the known categories.
 */

use std::time::Duration;

use reqwest::{
    multipart::{Form, Part},
    Client, StatusCode,
};
use thiserror::Error;

use crate::shared::Prediction;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum InferenceError {
    /// The service could not decode the picture
    #[error("the inference service rejected the image")]
    InvalidImage,

    #[error("the inference service answered {0}")]
    Status(StatusCode),

    #[error("inference request failed: {0}")]
    Request(reqwest::Error),

    #[error("unreadable inference response: {0}")]
    Decode(reqwest::Error),
}

/// Picture to classify
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: Option<String>,
}

#[derive(Debug, Clone)]
pub struct InferenceClient {
    http: Client,
    predict_url: String,
}

impl InferenceClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, InferenceError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(InferenceError::Request)?;

        Ok(Self {
            http,
            predict_url: format!("{}/predict", base_url.trim_end_matches('/')),
        })
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }

    /// Classify a picture
    pub async fn predict(&self, image: ImageUpload) -> Result<Prediction, InferenceError> {
        let mut part = Part::bytes(image.bytes).file_name(image.file_name);
        if let Some(content_type) = image.content_type.as_deref() {
            part = part
                .mime_str(content_type)
                .map_err(|_| InferenceError::InvalidImage)?;
        }
        let form = Form::new().part("image", part);

        let response = self
            .http
            .post(&self.predict_url)
            .multipart(form)
            .send()
            .await
            .map_err(InferenceError::Request)?;

        match response.status() {
            StatusCode::BAD_REQUEST => return Err(InferenceError::InvalidImage),
            status if !status.is_success() => return Err(InferenceError::Status(status)),
            _ => {}
        }

        response
            .json::<Prediction>()
            .await
            .map_err(InferenceError::Decode)
    }
}
