//! Filesystem-backed gallery browsing.
//!
//! Listings are produced fresh from the directory tree on every call and
//! sorted lexicographically; there is no natural/numeric ordering, so
//! `img10.jpg` sorts ahead of `img2.jpg`.

use crate::resolve::{resolve, Expect};
use async_trait::async_trait;
use mg_core::error::Result;
use mg_core::models::{is_image_name, BoardListing, CollectionEntry, FAVORITES_DIR};
use mg_core::traits::GalleryRepo;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

pub struct LocalGalleryStore {
    /// Root directory of the served image tree (e.g. "./static")
    root: PathBuf,
}

impl LocalGalleryStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

/// Lists `dir`, returning `(name, is_dir)` pairs sorted by name.
async fn sorted_entries(dir: &Path) -> std::io::Result<Vec<(String, bool)>> {
    let mut reader = fs::read_dir(dir).await?;
    let mut entries = Vec::new();
    while let Some(entry) = reader.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type().await?.is_dir();
        entries.push((name, is_dir));
    }
    entries.sort();
    Ok(entries)
}

/// Image filenames directly inside `dir`, sorted.
async fn sorted_images(dir: &Path) -> std::io::Result<Vec<String>> {
    let entries = sorted_entries(dir).await?;
    Ok(entries
        .into_iter()
        .filter(|(name, is_dir)| !is_dir && is_image_name(name))
        .map(|(name, _)| name)
        .collect())
}

#[async_trait]
impl GalleryRepo for LocalGalleryStore {
    async fn list_categories(&self) -> Result<Vec<String>> {
        let entries = sorted_entries(&self.root).await?;
        Ok(entries
            .into_iter()
            .filter(|(_, is_dir)| *is_dir)
            .map(|(name, _)| name)
            .collect())
    }

    async fn list_collections(&self, category: &str) -> Result<Vec<CollectionEntry>> {
        let base = resolve(&self.root, category, Expect::Directory).await?;

        let mut folders = Vec::new();
        for (folder, is_dir) in sorted_entries(&base).await? {
            if !is_dir {
                continue;
            }
            // The first image in sorted order doubles as the tile thumbnail;
            // folders with no images at all stay off the index.
            let images = sorted_images(&base.join(&folder)).await?;
            if let Some(first) = images.first() {
                folders.push(CollectionEntry {
                    name: format!("{category}/{folder}"),
                    thumbnail: format!("{category}/{folder}/{first}"),
                    label: folder,
                });
            }
        }
        Ok(folders)
    }

    async fn list_images(&self, board_path: &str) -> Result<BoardListing> {
        let dir = resolve(&self.root, board_path, Expect::Directory).await?;
        let images = sorted_images(&dir).await?;
        let category = board_path.split_once('/').map(|(head, _)| head.to_string());
        Ok(BoardListing {
            name: board_path.to_string(),
            images,
            category,
        })
    }

    async fn list_favorites(&self) -> Result<Vec<CollectionEntry>> {
        let dir = self.root.join(FAVORITES_DIR);
        let images = match sorted_images(&dir).await {
            Ok(images) => images,
            // No favorites yet: an empty collection, not an error
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(images
            .into_iter()
            .map(|img| CollectionEntry {
                name: FAVORITES_DIR.to_string(),
                thumbnail: format!("{FAVORITES_DIR}/{img}"),
                label: img,
            })
            .collect())
    }

    async fn resolve_file(&self, rel_path: &str) -> Result<PathBuf> {
        resolve(&self.root, rel_path, Expect::File).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mg_core::error::AppError;
    use std::fs as stdfs;
    use tempfile::TempDir;

    fn store(tmp: &TempDir) -> LocalGalleryStore {
        LocalGalleryStore::new(tmp.path().to_path_buf())
    }

    #[tokio::test]
    async fn categories_are_sorted_directories_only() {
        let tmp = TempDir::new().unwrap();
        stdfs::create_dir(tmp.path().join("zebras")).unwrap();
        stdfs::create_dir(tmp.path().join("cats")).unwrap();
        stdfs::write(tmp.path().join("stray.txt"), b"x").unwrap();

        let animals = store(&tmp).list_categories().await.unwrap();
        assert_eq!(animals, vec!["cats", "zebras"]);
    }

    #[tokio::test]
    async fn collections_skip_folders_without_images() {
        let tmp = TempDir::new().unwrap();
        stdfs::create_dir_all(tmp.path().join("cats/orange")).unwrap();
        stdfs::write(tmp.path().join("cats/orange/1.jpg"), b"img").unwrap();
        stdfs::create_dir_all(tmp.path().join("cats/notes")).unwrap();
        stdfs::write(tmp.path().join("cats/notes/readme.txt"), b"text").unwrap();
        stdfs::create_dir_all(tmp.path().join("cats/empty")).unwrap();

        let folders = store(&tmp).list_collections("cats").await.unwrap();
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].name, "cats/orange");
        assert_eq!(folders[0].label, "orange");
    }

    #[tokio::test]
    async fn thumbnail_is_first_image_in_sorted_order() {
        let tmp = TempDir::new().unwrap();
        stdfs::create_dir_all(tmp.path().join("cats/orange")).unwrap();
        stdfs::write(tmp.path().join("cats/orange/b.jpg"), b"img").unwrap();
        stdfs::write(tmp.path().join("cats/orange/a.png"), b"img").unwrap();
        stdfs::write(tmp.path().join("cats/orange/info.txt"), b"text").unwrap();

        let folders = store(&tmp).list_collections("cats").await.unwrap();
        assert_eq!(folders[0].thumbnail, "cats/orange/a.png");
    }

    #[tokio::test]
    async fn missing_category_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = store(&tmp).list_collections("dogs").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(..)));
    }

    #[tokio::test]
    async fn board_listing_is_lexicographic_not_natural() {
        let tmp = TempDir::new().unwrap();
        stdfs::create_dir_all(tmp.path().join("cats/orange")).unwrap();
        for name in ["img2.jpg", "img10.jpg", "img1.jpg"] {
            stdfs::write(tmp.path().join("cats/orange").join(name), b"img").unwrap();
        }

        let listing = store(&tmp).list_images("cats/orange").await.unwrap();
        assert_eq!(listing.images, vec!["img1.jpg", "img10.jpg", "img2.jpg"]);
    }

    #[tokio::test]
    async fn category_comes_from_the_first_segment() {
        let tmp = TempDir::new().unwrap();
        stdfs::create_dir_all(tmp.path().join("cats/orange")).unwrap();
        stdfs::create_dir(tmp.path().join("favorites")).unwrap();

        let nested = store(&tmp).list_images("cats/orange").await.unwrap();
        assert_eq!(nested.category.as_deref(), Some("cats"));

        let flat = store(&tmp).list_images("favorites").await.unwrap();
        assert_eq!(flat.category, None);
    }

    #[tokio::test]
    async fn favorites_listing_is_empty_without_directory() {
        let tmp = TempDir::new().unwrap();
        let favorites = store(&tmp).list_favorites().await.unwrap();
        assert!(favorites.is_empty());
    }

    #[tokio::test]
    async fn favorites_entries_are_one_per_image() {
        let tmp = TempDir::new().unwrap();
        stdfs::create_dir(tmp.path().join("favorites")).unwrap();
        stdfs::write(tmp.path().join("favorites/1.jpg"), b"img").unwrap();
        stdfs::write(tmp.path().join("favorites/2.png"), b"img").unwrap();

        let favorites = store(&tmp).list_favorites().await.unwrap();
        assert_eq!(favorites.len(), 2);
        assert_eq!(favorites[0].name, "favorites");
        assert_eq!(favorites[0].thumbnail, "favorites/1.jpg");
        assert_eq!(favorites[0].label, "1.jpg");
    }
}
