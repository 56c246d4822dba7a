use anyhow::{Context, Result};
use numisma::infrastructure::JsonCoinRepository;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture owning a temporary collection document
#[allow(dead_code)]
pub struct TestStore {
    _temp_dir: TempDir,
    pub collection_path: PathBuf,
}

impl TestStore {
    /// Create a fixture with no document yet (fresh collection)
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let collection_path = temp_dir.path().join("numisma_collection_v1.json");

        Ok(Self {
            _temp_dir: temp_dir,
            collection_path,
        })
    }

    /// Open a repository on this fixture's document
    pub fn open_repository(&self) -> Result<JsonCoinRepository> {
        JsonCoinRepository::new(&self.collection_path)
    }

    /// Overwrite the document with raw bytes, bypassing the repository
    /// (for corruption scenarios)
    #[allow(dead_code)]
    pub fn write_raw(&self, raw: &str) -> Result<()> {
        std::fs::write(&self.collection_path, raw).context("Failed to write raw document")
    }

    /// Read the document back as raw text
    #[allow(dead_code)]
    pub fn read_raw(&self) -> Result<String> {
        std::fs::read_to_string(&self.collection_path).context("Failed to read raw document")
    }
}

/// In-memory source photos for image-preparation tests
#[allow(dead_code)]
pub mod test_images {
    use image::{DynamicImage, ImageFormat};
    use std::io::Cursor;

    pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        encode_png(DynamicImage::new_rgb8(width, height))
    }

    /// PNG with an alpha channel; JPEG re-encoding must flatten it
    pub fn rgba_png_bytes(width: u32, height: u32) -> Vec<u8> {
        encode_png(DynamicImage::new_rgba8(width, height))
    }

    fn encode_png(img: DynamicImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png)
            .expect("PNG encode should succeed");
        buf.into_inner()
    }
}
