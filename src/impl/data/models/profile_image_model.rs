use base64::{engine::general_purpose::STANDARD, Engine as _};
use fractic_server_error::ServerError;
use tracing::warn;

use crate::{
    entities::{ImageFormat, ProfileImage},
    errors::InvalidBase64Image,
};

/// Base64 spellings of the image headers the portal accepts. When a first
/// decode produces text starting with one of these, the payload was encoded
/// twice.
const ENCODED_IMAGE_HEADERS: &[&[u8]] = &[b"/9j/", b"iVBORw0KGgo", b"R0lGOD", b"UklGR"];

#[derive(Debug)]
pub(crate) struct ProfileImageModel(pub ProfileImage);

impl ProfileImageModel {
    pub(crate) fn decode(raw: &str, unwrap_double_encoding: bool) -> Result<Self, ServerError> {
        let bytes = decode_base64(strip_data_url(raw))?;
        let bytes = if unwrap_double_encoding && looks_double_encoded(&bytes) {
            warn!(
                encoded_len = bytes.len(),
                "profile image is base64-encoded twice; decoding again"
            );
            let inner = String::from_utf8_lossy(&bytes).into_owned();
            match decode_base64(&inner) {
                Ok(inner) => inner,
                Err(_) => {
                    warn!("second decode failed; keeping the once-decoded image");
                    bytes
                }
            }
        } else {
            bytes
        };
        Ok(ProfileImageModel(ProfileImage {
            format: sniff_format(&bytes),
            bytes,
        }))
    }
}

fn strip_data_url(raw: &str) -> &str {
    match raw.split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => raw,
    }
}

fn decode_base64(s: &str) -> Result<Vec<u8>, ServerError> {
    let compact: String = s.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD
        .decode(compact)
        .map_err(|e| InvalidBase64Image::with_debug(&e))
}

fn looks_double_encoded(bytes: &[u8]) -> bool {
    ENCODED_IMAGE_HEADERS
        .iter()
        .any(|header| bytes.starts_with(header))
}

fn sniff_format(bytes: &[u8]) -> ImageFormat {
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        ImageFormat::Jpeg
    } else if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        ImageFormat::Png
    } else if bytes.starts_with(b"GIF8") {
        ImageFormat::Gif
    } else if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
        ImageFormat::Webp
    } else {
        ImageFormat::Unknown
    }
}
