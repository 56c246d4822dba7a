mod helpers;

use anyhow::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use helpers::test_images;
use image::ImageFormat;
use numisma::domain::DomainError;
use numisma::infrastructure::image::{prepare_image, prepare_image_bytes};

const DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Decode the prepared output back into pixels to check it really is a JPEG
fn decode_output(data_uri: &str) -> image::DynamicImage {
    let payload = data_uri
        .strip_prefix(DATA_URI_PREFIX)
        .expect("Output should carry the JPEG data-URI prefix");
    let bytes = STANDARD
        .decode(payload)
        .expect("Payload should be valid base64");
    image::load_from_memory_with_format(&bytes, ImageFormat::Jpeg)
        .expect("Payload should decode as JPEG")
}

#[test]
fn given_wide_photo_when_preparing_then_width_is_capped_at_800() -> Result<()> {
    // Arrange
    let source = test_images::png_bytes(1600, 1200);

    // Act
    let prepared = prepare_image_bytes(&source)?;

    // Assert - uniform scale: 1600x1200 -> 800x600
    assert_eq!(prepared.width, 800);
    assert_eq!(prepared.height, 600);
    let decoded = decode_output(&prepared.data_uri);
    assert_eq!(decoded.width(), 800);
    assert_eq!(decoded.height(), 600);
    Ok(())
}

#[test]
fn given_narrow_photo_when_preparing_then_dimensions_are_exact_originals() -> Result<()> {
    // Arrange
    let source = test_images::png_bytes(640, 480);

    // Act
    let prepared = prepare_image_bytes(&source)?;

    // Assert
    assert_eq!(prepared.width, 640);
    assert_eq!(prepared.height, 480);
    let decoded = decode_output(&prepared.data_uri);
    assert_eq!(decoded.width(), 640);
    assert_eq!(decoded.height(), 480);
    Ok(())
}

#[test]
fn given_photo_at_threshold_when_preparing_then_not_resized() -> Result<()> {
    let source = test_images::png_bytes(800, 1000);

    let prepared = prepare_image_bytes(&source)?;

    assert_eq!(prepared.width, 800);
    assert_eq!(prepared.height, 1000);
    Ok(())
}

#[test]
fn given_photo_with_alpha_when_preparing_then_reencodes_as_jpeg() -> Result<()> {
    // Arrange - JPEG has no alpha channel, so this must be flattened
    let source = test_images::rgba_png_bytes(1000, 500);

    // Act
    let prepared = prepare_image_bytes(&source)?;

    // Assert
    assert!(prepared.data_uri.starts_with(DATA_URI_PREFIX));
    let decoded = decode_output(&prepared.data_uri);
    assert_eq!(decoded.width(), 800);
    assert_eq!(decoded.height(), 400);
    Ok(())
}

#[test]
fn given_undecodable_bytes_when_preparing_then_returns_decode_error() {
    let result = prepare_image_bytes(b"definitely not an image");

    assert!(matches!(result, Err(DomainError::ImageDecode(_))));
}

#[test]
fn given_missing_file_when_preparing_then_returns_decode_error() {
    let result = prepare_image(std::path::Path::new("/no/such/photo.jpg"));

    assert!(matches!(result, Err(DomainError::ImageDecode(_))));
}

#[test]
fn given_photo_on_disk_when_preparing_then_produces_data_uri() -> Result<()> {
    // Arrange
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("coin.png");
    std::fs::write(&path, test_images::png_bytes(300, 300))?;

    // Act
    let prepared = prepare_image(&path)?;

    // Assert
    assert!(prepared.data_uri.starts_with(DATA_URI_PREFIX));
    assert_eq!(prepared.width, 300);
    Ok(())
}
