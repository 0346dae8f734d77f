// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Share Links, QR Codes and NFC Tags
//!
//! A card is shared as a URL. The URL is shown as text, encoded into a QR
//! code, or written to an NFC tag as an NDEF URI record.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use qrcode::render::svg;
use qrcode::QrCode;
use thiserror::Error;

/// Share errors.
#[derive(Error, Debug)]
pub enum ShareError {
    #[error("QR encoding failed: {0}")]
    Qr(#[from] qrcode::types::QrError),
    #[error("URL too long for a short NDEF record ({len} bytes, max 255)")]
    UrlTooLong { len: usize },
}

/// NDEF URI identifier codes (NFC Forum URI RTD), longest prefix first.
const URI_PREFIXES: [(&str, u8); 4] = [
    ("https://www.", 0x02),
    ("http://www.", 0x01),
    ("https://", 0x04),
    ("http://", 0x03),
];

/// Builds the link to a card.
///
/// Public-only cards carry `?view=public` so the recipient sees exactly
/// what was shared.
pub fn share_url(base_url: &str, username: Option<&str>, public_only: bool) -> String {
    let base = base_url.trim_end_matches('/');
    let mut url = match username {
        Some(username) => format!("{base}/contact/{username}"),
        None => format!("{base}/contact"),
    };
    if public_only {
        url.push_str("?view=public");
    }
    url
}

/// Renders a QR code for `data` as an SVG document.
pub fn qr_svg(data: &str) -> Result<String, ShareError> {
    let code = QrCode::new(data.as_bytes())?;
    Ok(code
        .render::<svg::Color>()
        .min_dimensions(200, 200)
        .quiet_zone(true)
        .build())
}

/// Wraps an SVG document in a `data:` URI, for embedding as an image.
pub fn svg_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", BASE64.encode(svg.as_bytes()))
}

/// Renders a QR code for `data` with block characters, for terminals.
pub fn qr_text(data: &str) -> Result<String, ShareError> {
    let code = QrCode::new(data.as_bytes())?;
    Ok(code
        .render::<char>()
        .light_color(' ')
        .dark_color('█')
        .module_dimensions(2, 1)
        .quiet_zone(true)
        .build())
}

/// Encodes a URL as a single short NDEF message holding one URI record,
/// ready to be written to an NFC tag.
pub fn ndef_uri_record(url: &str) -> Result<Vec<u8>, ShareError> {
    let (code, rest) = URI_PREFIXES
        .iter()
        .find_map(|(prefix, code)| url.strip_prefix(prefix).map(|rest| (*code, rest)))
        .unwrap_or((0x00, url));

    // identifier code + URI
    let payload_len = 1 + rest.len();
    let payload_len = u8::try_from(payload_len)
        .map_err(|_| ShareError::UrlTooLong { len: payload_len })?;

    let mut record = Vec::with_capacity(4 + payload_len as usize);
    // MB | ME | SR, TNF = well-known
    record.push(0xD1);
    record.push(0x01);
    record.push(payload_len);
    record.push(b'U');
    record.push(code);
    record.extend_from_slice(rest.as_bytes());
    Ok(record)
}
