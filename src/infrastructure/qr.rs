//! QR code rendering for short URLs.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use qrcode::QrCode;
use qrcode::render::svg;

use crate::error::AppError;

/// Renders a short URL as an embeddable QR image.
pub trait QrEncoder: Send + Sync {
    /// Encodes `url` as a `data:` URL suitable for an `<img>` tag.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the payload cannot be encoded.
    fn encode(&self, url: &str) -> Result<String, AppError>;
}

/// SVG renderer, delivered as a base64 `data:image/svg+xml` URL.
pub struct SvgQrEncoder;

impl SvgQrEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SvgQrEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl QrEncoder for SvgQrEncoder {
    fn encode(&self, url: &str) -> Result<String, AppError> {
        let code = QrCode::new(url.as_bytes())
            .map_err(|e| AppError::internal(format!("QR encoding error: {e}")))?;

        let image = code
            .render::<svg::Color>()
            .min_dimensions(200, 200)
            .build();

        Ok(format!(
            "data:image/svg+xml;base64,{}",
            STANDARD.encode(image)
        ))
    }
}
