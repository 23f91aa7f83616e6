//! # Core Traits (Ports)
//!
//! Any plugin must implement these traits to be wired into the binary.

use crate::error::Result;
use crate::models::{BoardListing, CollectionEntry};
use async_trait::async_trait;
use std::path::PathBuf;

/// Read-side contract: browsing the image tree.
#[async_trait]
pub trait GalleryRepo: Send + Sync {
    /// Every immediate subdirectory of the store root, sorted lexicographically.
    async fn list_categories(&self) -> Result<Vec<String>>;

    /// One entry per sub-collection of `category` holding at least one image;
    /// the lexicographically-first image doubles as the tile thumbnail.
    async fn list_collections(&self, category: &str) -> Result<Vec<CollectionEntry>>;

    /// The image filenames directly inside the board at `board_path`.
    async fn list_images(&self, board_path: &str) -> Result<BoardListing>;

    /// The flat favorites collection; empty when nothing has been favorited yet.
    async fn list_favorites(&self) -> Result<Vec<CollectionEntry>>;

    /// Absolute path of an existing file under the store root, for raw
    /// byte serving.
    async fn resolve_file(&self, rel_path: &str) -> Result<PathBuf>;
}

/// Write-side contract: favoriting and quarantining images.
#[async_trait]
pub trait CurationStore: Send + Sync {
    /// Copies the image into the favorites collection. A favorite already
    /// present under the same filename is left untouched.
    async fn add_favorite(&self, image_path: &str) -> Result<()>;

    /// Moves the image out of the store into the quarantine directory.
    async fn archive(&self, image_path: &str) -> Result<()>;
}

/// Login contract. A single shared secret guards the whole gallery.
pub trait AuthProvider: Send + Sync {
    /// Compares a submitted password against the configured secret.
    fn verify(&self, password: &str) -> bool;
}
