// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! QR symbol rendering for rotating tokens.

use crate::error::AppError;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use qrcode::render::svg;
use qrcode::QrCode;

/// Rendered symbol edge length in pixels.
const SYMBOL_SIZE: u32 = 350;

/// Render a token into an SVG QR symbol.
pub fn render_svg(token: &str) -> Result<String, AppError> {
    let code = QrCode::new(token.as_bytes())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("QR encoding failed: {}", e)))?;

    Ok(code
        .render::<svg::Color>()
        .min_dimensions(SYMBOL_SIZE, SYMBOL_SIZE)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}

/// Render a token into a `data:image/svg+xml;base64,...` URL for direct
/// embedding by a display client.
pub fn render_data_url(token: &str) -> Result<String, AppError> {
    let svg = render_svg(token)?;
    Ok(format!("data:image/svg+xml;base64,{}", BASE64.encode(svg)))
}
