// src/constants.rs
//
// Application-wide constants extracted from magic numbers throughout the codebase.
// Each constant is documented with its purpose and usage context.

/// Maximum width in pixels for stored coin photos.
///
/// Photos wider than this are downscaled uniformly before being embedded in
/// the collection document. Keeps a single record small enough that a
/// collection of a few hundred coins stays manageable on disk.
///
/// Used in: `infrastructure/image.rs`
pub const MAX_IMAGE_WIDTH: u32 = 800;

/// JPEG quality (0-100) for re-encoded coin photos.
///
/// All uploads are recompressed as JPEG at this quality regardless of their
/// original format, to bound storage size.
///
/// Used in: `infrastructure/image.rs`
pub const JPEG_QUALITY: u8 = 70;

/// Directory under the platform data dir holding the collection document.
///
/// Used in: `lib.rs` (`find_collection_path`)
pub const DATA_DIR_NAME: &str = "numisma";

/// File name of the collection document. The `_v1` suffix is the only
/// versioning the storage format carries.
///
/// Used in: `lib.rs` (`find_collection_path`)
pub const COLLECTION_FILE_NAME: &str = "numisma_collection_v1.json";

/// Environment variable holding the Gemini API credential.
///
/// Used in: `infrastructure/gemini.rs`
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Delay in milliseconds after writing the detail page before opening the browser.
///
/// On macOS, the browser needs a brief moment for the file to be fully written
/// and indexed before opening. Without this delay, the browser may open an empty
/// or incomplete file.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
