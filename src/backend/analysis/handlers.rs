/**
 * Analyze Handler
 *
 * POST /api/analyze
 *
 * Takes a multipart upload with an `image` field from a signed-in user,
 * forwards it to the inference service and answers with the raw prediction
 * plus a display-ready report.
 */

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::Json,
};
use serde::Serialize;

use crate::backend::analysis::client::{ImageUpload, InferenceClient};
use crate::backend::error::ApiError;
use crate::backend::middleware::SessionUser;
use crate::shared::lesion::AnalysisReport;
use crate::shared::Prediction;

/// Multipart field carrying the picture
pub const IMAGE_FIELD: &str = "image";

pub const MISSING_IMAGE_MESSAGE: &str = "Please select an image file.";

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    #[serde(flatten)]
    pub prediction: Prediction,
    pub report: AnalysisReport,
}

/// Classify an uploaded picture
///
/// # Errors
///
/// * `400 Bad Request` - No `image` field, an empty file, or the service rejected the picture
/// * `401 Unauthorized` - No valid session
/// * `413 Payload Too Large` - Upload above the configured limit
/// * `502 Bad Gateway` - Inference service unreachable or failing
pub async fn analyze(
    State(inference): State<InferenceClient>,
    SessionUser(claims): SessionUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let mut multipart = multipart?;
    let image = read_image(&mut multipart)
        .await?
        .ok_or_else(|| ApiError::validation(MISSING_IMAGE_MESSAGE))?;

    tracing::info!(
        "Analysis request from {}: {} ({} bytes)",
        claims.email,
        image.file_name,
        image.bytes.len()
    );

    let prediction = inference.predict(image).await?;

    tracing::info!(
        "Analysis for {}: {} at {:.3}",
        claims.email,
        prediction.label,
        prediction.confidence
    );

    let report = prediction.report();
    Ok(Json(AnalysisResponse { prediction, report }))
}

/// First non-empty `image` field, other fields are drained and ignored
async fn read_image(multipart: &mut Multipart) -> Result<Option<ImageUpload>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;

        if bytes.is_empty() {
            return Ok(None);
        }

        return Ok(Some(ImageUpload {
            bytes: bytes.to_vec(),
            file_name,
            content_type,
        }));
    }

    Ok(None)
}
