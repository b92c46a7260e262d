//! Image Link resolution for card export
//!
//! Links are used verbatim: http(s) URLs are fetched, anything else is read
//! as a local file path. Bytes are embedded into the card markup as a data
//! URI so rasterization never touches the network or filesystem again.
//!
//! Loading is deliberately tolerant: a broken link degrades the card to the
//! placeholder with a warning instead of failing the export.

use crate::card::ImageSource;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fs;
use tracing::warn;

/// Resolve an image source to an embeddable data URI.
///
/// Returns `None` for the placeholder, and for any link that cannot be
/// loaded or is not a raster format the rasterizer decodes.
pub fn resolve(source: &ImageSource, record_name: &str) -> Option<String> {
    let link = match source {
        ImageSource::Placeholder => return None,
        ImageSource::Link(link) => link,
    };

    let bytes = match load_bytes(link) {
        Ok(bytes) => bytes,
        Err(reason) => {
            warn!(
                link = %link,
                record = %record_name,
                "Failed to load image, using placeholder: {reason}"
            );
            return None;
        }
    };

    match sniff_mime(&bytes) {
        Some(mime) => Some(format!("data:{};base64,{}", mime, STANDARD.encode(&bytes))),
        None => {
            warn!(
                link = %link,
                record = %record_name,
                "Unrecognized image format, using placeholder"
            );
            None
        }
    }
}

fn load_bytes(link: &str) -> Result<Vec<u8>, String> {
    if link.starts_with("http://") || link.starts_with("https://") {
        let response = reqwest::blocking::get(link).map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!("HTTP {}", response.status()));
        }
        response
            .bytes()
            .map(|bytes| bytes.to_vec())
            .map_err(|e| e.to_string())
    } else {
        fs::read(link).map_err(|e| e.to_string())
    }
}

/// Raster formats the rasterizer decodes.
fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        Some("image/png")
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some("image/gif")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_sniff_mime() {
        assert_eq!(sniff_mime(&PNG_HEADER), Some("image/png"));
        assert_eq!(sniff_mime(&[0xFF, 0xD8, 0xFF, 0xE0]), Some("image/jpeg"));
        assert_eq!(sniff_mime(b"GIF89a..."), Some("image/gif"));
        assert_eq!(sniff_mime(b"<html>"), None);
        assert_eq!(sniff_mime(&[]), None);
    }

    #[test]
    fn test_resolve_placeholder() {
        assert_eq!(resolve(&ImageSource::Placeholder, "Ann"), None);
    }

    #[test]
    fn test_resolve_local_png() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&PNG_HEADER).unwrap();
        file.write_all(&[0u8; 16]).unwrap();

        let source = ImageSource::Link(file.path().display().to_string());
        let uri = resolve(&source, "Ann").unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_resolve_missing_file_degrades_to_placeholder() {
        let source = ImageSource::Link("/nonexistent/pic.png".to_string());
        assert_eq!(resolve(&source, "Ann"), None);
    }

    #[test]
    fn test_resolve_unrecognized_format_degrades_to_placeholder() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"just some text").unwrap();

        let source = ImageSource::Link(file.path().display().to_string());
        assert_eq!(resolve(&source, "Ann"), None);
    }
}
