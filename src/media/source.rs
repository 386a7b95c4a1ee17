// SPDX-License-Identifier: MPL-2.0
//! Image locator resolution.
//!
//! An analysis record's `image_url` is one of three things: a plain file
//! path, a remote `http(s)` URL, or an embedded base64 `data:` URI. Remote
//! fetches go through `reqwest`; everything resolves to encoded bytes that
//! [`decode_image`] turns into a pixmap.

use crate::error::{Error, Result};
use crate::media::image::{decode_image, DecodedImage};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::PathBuf;

/// A resolved image locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    File(PathBuf),
    Remote(String),
    /// Bytes already decoded out of a base64 `data:` URI.
    DataUri(Vec<u8>),
}

impl ImageSource {
    /// Classifies a locator string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] for a malformed or non-base64 `data:` URI.
    pub fn parse(url: &str) -> Result<ImageSource> {
        let lower = url.to_ascii_lowercase();
        if lower.starts_with("data:") {
            return parse_data_uri(url);
        }
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(ImageSource::Remote(url.to_string()));
        }
        Ok(ImageSource::File(PathBuf::from(url)))
    }
}

fn parse_data_uri(url: &str) -> Result<ImageSource> {
    let body = &url["data:".len()..];
    let (header, payload) = body
        .split_once(',')
        .ok_or_else(|| Error::Decode("data URI has no payload".into()))?;
    if !header.ends_with(";base64") {
        return Err(Error::Decode("data URI is not base64-encoded".into()));
    }
    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| Error::Decode(format!("invalid base64 payload: {e}")))?;
    Ok(ImageSource::DataUri(bytes))
}

/// Fetches the encoded bytes behind a source.
pub async fn fetch_bytes(source: ImageSource) -> Result<Vec<u8>> {
    match source {
        ImageSource::File(path) => {
            std::fs::read(&path).map_err(|e| Error::Io(format!("{}: {e}", path.display())))
        }
        ImageSource::Remote(url) => {
            let response = reqwest::get(&url).await?.error_for_status()?;
            Ok(response.bytes().await?.to_vec())
        }
        ImageSource::DataUri(bytes) => Ok(bytes),
    }
}

/// Resolves, fetches and decodes an image locator end to end.
pub async fn load_image(url: &str) -> Result<DecodedImage> {
    let source = ImageSource::parse(url)?;
    let bytes = fetch_bytes(source).await?;
    decode_image(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn parse_classifies_remote_urls() {
        let source = ImageSource::parse("https://example.com/a.png").unwrap();
        assert_eq!(
            source,
            ImageSource::Remote("https://example.com/a.png".to_string())
        );
        assert!(matches!(
            ImageSource::parse("HTTP://example.com/a.png").unwrap(),
            ImageSource::Remote(_)
        ));
    }

    #[test]
    fn parse_classifies_file_paths() {
        let source = ImageSource::parse("/photos/a.png").unwrap();
        assert_eq!(source, ImageSource::File(PathBuf::from("/photos/a.png")));
    }

    #[test]
    fn parse_decodes_base64_data_uri() {
        let uri = format!("data:image/png;base64,{}", STANDARD.encode(b"hello"));
        match ImageSource::parse(&uri).unwrap() {
            ImageSource::DataUri(bytes) => assert_eq!(bytes, b"hello"),
            other => panic!("expected DataUri, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_non_base64_data_uri() {
        match ImageSource::parse("data:text/plain,hello") {
            Err(Error::Decode(message)) => assert!(message.contains("base64")),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_data_uri_without_payload() {
        assert!(matches!(
            ImageSource::parse("data:image/png;base64"),
            Err(Error::Decode(_))
        ));
    }

    #[tokio::test]
    async fn load_image_from_file_path() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("sample.png");
        RgbaImage::from_pixel(3, 5, Rgba([0, 255, 0, 255]))
            .save(&path)
            .expect("failed to write png");

        let decoded = load_image(&path.to_string_lossy())
            .await
            .expect("file image should load");
        assert_eq!(decoded.width(), 3);
        assert_eq!(decoded.height(), 5);
    }

    #[tokio::test]
    async fn load_image_from_data_uri() {
        let image = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 255, 255]));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("failed to encode png");
        let uri = format!("data:image/png;base64,{}", STANDARD.encode(&bytes));

        let decoded = load_image(&uri).await.expect("data URI should load");
        assert_eq!(decoded.width(), 2);
    }

    #[tokio::test]
    async fn load_image_from_missing_file_is_io_error() {
        match load_image("/does/not/exist.png").await {
            Err(Error::Io(message)) => assert!(message.contains("exist.png")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
