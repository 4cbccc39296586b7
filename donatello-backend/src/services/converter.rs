//! Image-to-SVG conversion client.
//!
//! The real conversion pipeline is an external collaborator; the placeholder
//! implementation emits a fixed SVG document embedding the filename, which is
//! what the frontend renders until the pipeline exists.

use async_trait::async_trait;
use base64::Engine;
use image::ImageFormat;
use service_core::error::AppError;

/// Decode a base64 payload and verify it is a decodable PNG.
///
/// All failures here are client-input problems and surface as 400s.
pub fn decode_png(encoded: &str) -> Result<Vec<u8>, AppError> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Invalid base64 image data: {}", e)))?;

    let format = image::guess_format(&bytes)
        .map_err(|_| AppError::BadRequest(anyhow::anyhow!("Only PNG images are supported")))?;

    if format != ImageFormat::Png {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Only PNG images are supported"
        )));
    }

    // A PNG magic header alone is not enough; the bytes must decode.
    image::load_from_memory(&bytes)
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Invalid image data: {}", e)))?;

    Ok(bytes)
}

#[async_trait]
pub trait SvgConverter: Send + Sync {
    /// Convert PNG bytes into an SVG document.
    async fn convert(&self, png_bytes: &[u8], filename: &str) -> Result<String, AppError>;
}

#[derive(Default)]
pub struct PlaceholderConverter;

impl PlaceholderConverter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SvgConverter for PlaceholderConverter {
    async fn convert(&self, png_bytes: &[u8], filename: &str) -> Result<String, AppError> {
        tracing::debug!(
            filename = %filename,
            size = png_bytes.len(),
            "Producing placeholder SVG"
        );

        Ok(format!(
            r##"<svg viewBox="0 0 400 400" xmlns="http://www.w3.org/2000/svg">
    <rect width="400" height="400" fill="#f0f0f0"/>
    <text x="200" y="200" text-anchor="middle" font-size="24" fill="#333">
        AI Generated Art from {filename}
    </text>
</svg>"##
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes() -> Vec<u8> {
        let img = image::RgbaImage::new(4, 4);
        let mut buf = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, ImageFormat::Png)
            .expect("Failed to encode test PNG");
        buf.into_inner()
    }

    #[test]
    fn decode_png_accepts_valid_png() {
        let encoded = base64::engine::general_purpose::STANDARD.encode(png_bytes());
        let decoded = decode_png(&encoded).expect("valid PNG should decode");
        assert_eq!(decoded, png_bytes());
    }

    #[test]
    fn decode_png_rejects_invalid_base64() {
        let err = decode_png("not base64!!!").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn decode_png_rejects_non_png_image() {
        let img = image::RgbImage::new(4, 4);
        let mut buf = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, ImageFormat::Jpeg)
            .expect("Failed to encode test JPEG");
        let encoded = base64::engine::general_purpose::STANDARD.encode(buf.into_inner());

        let err = decode_png(&encoded).unwrap_err();
        assert!(err.to_string().contains("Only PNG images are supported"));
    }

    #[tokio::test]
    async fn placeholder_svg_embeds_filename() {
        let svg = PlaceholderConverter::new()
            .convert(&png_bytes(), "sunset.png")
            .await
            .unwrap();
        assert!(svg.contains("sunset.png"));
        assert!(svg.starts_with("<svg"));
    }
}
