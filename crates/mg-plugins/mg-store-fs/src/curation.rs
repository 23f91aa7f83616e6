//! Favorite and quarantine moves over the local filesystem.

use crate::resolve::{resolve, Expect};
use async_trait::async_trait;
use mg_core::error::{AppError, Result};
use mg_core::models::FAVORITES_DIR;
use mg_core::traits::CurationStore;
use std::path::{Path, PathBuf};
use tokio::fs;

pub struct LocalCurationStore {
    /// Root directory of the served image tree
    root: PathBuf,
    /// Where deleted images land. Kept outside `root` so they drop out of
    /// every listing the moment they are moved.
    quarantine: PathBuf,
}

impl LocalCurationStore {
    pub fn new(root: PathBuf, quarantine: PathBuf) -> Self {
        Self { root, quarantine }
    }
}

/// Base filename of a store-relative path. Directory structure is
/// discarded: favorites and quarantine are flat namespaces.
fn base_filename(image_path: &str) -> Result<String> {
    Path::new(image_path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or(AppError::BadRequest("image_path"))
}

/// Rename when possible, copy-and-remove when the destination lives on a
/// different filesystem.
async fn move_file(source: &Path, dest: &Path) -> Result<()> {
    if fs::rename(source, dest).await.is_ok() {
        return Ok(());
    }
    fs::copy(source, dest).await?;
    fs::remove_file(source).await?;
    Ok(())
}

#[async_trait]
impl CurationStore for LocalCurationStore {
    async fn add_favorite(&self, image_path: &str) -> Result<()> {
        if image_path.is_empty() {
            return Err(AppError::BadRequest("image_path"));
        }
        let source = resolve(&self.root, image_path, Expect::File).await?;

        let fav_dir = self.root.join(FAVORITES_DIR);
        fs::create_dir_all(&fav_dir).await?;

        // First write wins: an existing favorite under the same filename
        // means the image is already favorited.
        let dest = fav_dir.join(base_filename(image_path)?);
        if fs::try_exists(&dest).await? {
            return Ok(());
        }
        fs::copy(&source, &dest).await?;
        Ok(())
    }

    async fn archive(&self, image_path: &str) -> Result<()> {
        if image_path.is_empty() {
            return Err(AppError::BadRequest("image_path"));
        }
        fs::create_dir_all(&self.quarantine).await?;

        let source = match resolve(&self.root, image_path, Expect::File).await {
            Ok(path) => path,
            Err(AppError::NotFound(..)) => {
                // Deleting something already gone still counts as done;
                // the log line is the only trace.
                log::error!("delete target missing: {image_path}");
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        let dest = self.quarantine.join(base_filename(image_path)?);
        move_file(&source, &dest).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;
    use tempfile::TempDir;

    struct Fixture {
        _tmp: TempDir,
        root: PathBuf,
        quarantine: PathBuf,
        store: LocalCurationStore,
    }

    fn fixture() -> Fixture {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("store");
        let quarantine = tmp.path().join("quarantine");
        stdfs::create_dir_all(root.join("cats/orange")).unwrap();
        stdfs::write(root.join("cats/orange/1.jpg"), b"original").unwrap();
        let store = LocalCurationStore::new(root.clone(), quarantine.clone());
        Fixture { _tmp: tmp, root, quarantine, store }
    }

    #[tokio::test]
    async fn favorite_copies_into_flat_collection() {
        let fx = fixture();
        fx.store.add_favorite("cats/orange/1.jpg").await.unwrap();

        let copied = stdfs::read(fx.root.join("favorites/1.jpg")).unwrap();
        assert_eq!(copied, b"original");
        // the source is untouched
        assert!(fx.root.join("cats/orange/1.jpg").exists());
    }

    #[tokio::test]
    async fn favorite_is_idempotent() {
        let fx = fixture();
        fx.store.add_favorite("cats/orange/1.jpg").await.unwrap();

        // Mutate the source; a second call must not re-copy.
        stdfs::write(fx.root.join("cats/orange/1.jpg"), b"changed").unwrap();
        fx.store.add_favorite("cats/orange/1.jpg").await.unwrap();

        let kept = stdfs::read(fx.root.join("favorites/1.jpg")).unwrap();
        assert_eq!(kept, b"original");
        assert_eq!(stdfs::read_dir(fx.root.join("favorites")).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn favorite_of_missing_source_is_not_found() {
        let fx = fixture();
        let err = fx.store.add_favorite("cats/orange/9.jpg").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(..)));
    }

    #[tokio::test]
    async fn empty_path_is_bad_request() {
        let fx = fixture();
        assert!(matches!(
            fx.store.add_favorite("").await.unwrap_err(),
            AppError::BadRequest(_)
        ));
        assert!(matches!(
            fx.store.archive("").await.unwrap_err(),
            AppError::BadRequest(_)
        ));
    }

    #[tokio::test]
    async fn archive_moves_the_file_out_of_the_store() {
        let fx = fixture();
        fx.store.archive("cats/orange/1.jpg").await.unwrap();

        assert!(!fx.root.join("cats/orange/1.jpg").exists());
        let moved = stdfs::read(fx.quarantine.join("1.jpg")).unwrap();
        assert_eq!(moved, b"original");
    }

    #[tokio::test]
    async fn archive_of_missing_source_reports_success() {
        let fx = fixture();
        fx.store.archive("cats/orange/9.jpg").await.unwrap();
        assert!(!fx.quarantine.join("9.jpg").exists());
    }

    #[tokio::test]
    async fn archive_collisions_are_last_write_wins() {
        let fx = fixture();
        stdfs::create_dir_all(fx.root.join("dogs/pugs")).unwrap();
        stdfs::write(fx.root.join("dogs/pugs/1.jpg"), b"pug").unwrap();

        fx.store.archive("cats/orange/1.jpg").await.unwrap();
        fx.store.archive("dogs/pugs/1.jpg").await.unwrap();

        let kept = stdfs::read(fx.quarantine.join("1.jpg")).unwrap();
        assert_eq!(kept, b"pug");
    }
}
