use crate::dtos::{ConvertRequest, ConvertResponse};
use crate::services::decode_png;
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use service_core::error::AppError;

pub async fn convert_to_svg(
    State(state): State<AppState>,
    Json(req): Json<ConvertRequest>,
) -> Result<impl IntoResponse, AppError> {
    let encoded = req
        .image
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("No image data provided")))?;

    let png_bytes = decode_png(&encoded)?;
    let filename = req.filename.unwrap_or_else(|| "artwork.png".to_string());

    tracing::info!(
        filename = %filename,
        size = png_bytes.len(),
        "Converting image to SVG"
    );

    let svg_content = state
        .converter
        .convert(&png_bytes, &filename)
        .await
        .map_err(|e| {
            tracing::error!(filename = %filename, error = %e, "SVG conversion failed");
            e
        })?;

    let walrus_url = state
        .storage
        .store(svg_content.as_bytes(), &filename)
        .await
        .map_err(|e| {
            tracing::error!(filename = %filename, error = %e, "Storage upload failed");
            e
        })?;

    Ok(Json(ConvertResponse {
        success: true,
        walrus_url,
        svg_content,
        message: "Image successfully converted to SVG".to_string(),
    }))
}
