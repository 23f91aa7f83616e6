//! # Domain Models
//!
//! These structs represent what the gallery serves: categories of boards,
//! boards of images. Every one of them is a snapshot of a directory listing;
//! nothing here owns state of its own.

use serde::{Deserialize, Serialize};

/// Name of the flat collection that favorites are copied into. It lives
/// directly under the store root so its images are served like any other.
pub const FAVORITES_DIR: &str = "favorites";

/// Filename extensions recognized as images, matched case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// One tile on a collection index page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionEntry {
    /// Store-relative path of the board the tile links to (e.g. "cats/orange")
    pub name: String,
    /// Store-relative path of the image shown on the tile
    pub thumbnail: String,
    /// Display label: the directory name, or the filename for favorites
    pub label: String,
}

/// A board resolved to its image listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardListing {
    /// Store-relative path of the board
    pub name: String,
    /// Image filenames directly inside the board, sorted lexicographically
    pub images: Vec<String>,
    /// Owning category, taken from the first path segment when there is one
    pub category: Option<String>,
}

/// Returns true when `filename` carries one of the recognized image
/// extensions. The extension is whatever follows the last `.`.
pub fn is_image_name(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)),
        None => false,
    }
}
