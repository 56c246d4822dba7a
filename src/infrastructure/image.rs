// src/infrastructure/image.rs
use crate::constants::{JPEG_QUALITY, MAX_IMAGE_WIDTH};
use crate::domain::DomainError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A photo ready for storage and analysis: downscaled, recompressed and
/// wrapped as a self-contained `data:image/jpeg;base64,...` URI.
#[derive(Debug, Clone)]
pub struct PreparedImage {
    pub data_uri: String,
    pub width: u32,
    pub height: u32,
}

/// Prepare an on-disk photo for the collection.
pub fn prepare_image(path: &Path) -> Result<PreparedImage, DomainError> {
    let bytes = fs::read(path)
        .map_err(|e| DomainError::ImageDecode(format!("could not read {}: {e}", path.display())))?;
    prepare_image_bytes(&bytes)
}

/// Decode, downscale to at most [`MAX_IMAGE_WIDTH`] and re-encode as JPEG
/// at [`JPEG_QUALITY`], regardless of the input format.
pub fn prepare_image_bytes(bytes: &[u8]) -> Result<PreparedImage, DomainError> {
    let img = image::load_from_memory(bytes).map_err(|e| DomainError::ImageDecode(e.to_string()))?;

    let img = downscale_to_width(img, MAX_IMAGE_WIDTH);
    let (width, height) = (img.width(), img.height());
    debug!(width, height, "Prepared photo dimensions");

    let jpeg = encode_jpeg(&img, JPEG_QUALITY)?;
    let data_uri = format!("data:image/jpeg;base64,{}", STANDARD.encode(&jpeg));

    Ok(PreparedImage {
        data_uri,
        width,
        height,
    })
}

/// Scale both dimensions by `max_width / width` when the photo is wider
/// than `max_width`; narrower photos keep their exact dimensions.
fn downscale_to_width(img: DynamicImage, max_width: u32) -> DynamicImage {
    if img.width() <= max_width {
        return img;
    }

    let scale = f64::from(max_width) / f64::from(img.width());
    let height = (f64::from(img.height()) * scale).round().max(1.0) as u32;
    img.resize_exact(max_width, height, FilterType::Lanczos3)
}

fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>, DomainError> {
    // JPEG carries no alpha channel; flatten first.
    let rgb = img.to_rgb8();

    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, quality)
        .encode_image(&rgb)
        .map_err(|e| DomainError::ImageEncode(e.to_string()))?;

    Ok(buf)
}
