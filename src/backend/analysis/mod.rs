//! Analysis Module
//!
//! Proxies uploaded pictures to the external inference service.
//!
//! - **`client`** - `InferenceClient`, the HTTP client for `POST {INFERENCE_URL}/predict`
//! - **`handlers`** - `analyze`, POST /api/analyze (session required)

/// Inference service client
pub mod client;

/// HTTP handler for the analyze endpoint
pub mod handlers;

pub use client::{ImageUpload, InferenceClient, InferenceError};
pub use handlers::{analyze, AnalysisResponse};
