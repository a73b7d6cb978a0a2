//! Filesystem storage for uploaded album covers and profile pictures.
//!
//! Layout under the configured root:
//!
//! ```text
//! {root}/album_images/{album_id}.{jpg|png}
//! {root}/album_images/default_album.png
//! {root}/profile_images/{user_id}.{jpg|png}
//! {root}/profile_images/default_profile.png
//! ```
//!
//! An entity has at most one stored image: saving a PNG removes a previous
//! JPEG for the same id and vice versa.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use soundvault_core::images::{stored_file_name, ImageCategory, ImageKind};
use soundvault_core::types::DbId;

/// Distinguishes concurrent temporary files for the same id.
static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Image bytes ready to be served.
#[derive(Debug)]
pub struct StoredImage {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    /// `true` when the category default was served instead of an upload.
    pub is_default: bool,
}

/// Reads and writes images below a storage root.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding every image of `category`.
    pub fn category_dir(&self, category: ImageCategory) -> PathBuf {
        self.root.join(category.dir_name())
    }

    /// Write an uploaded image, replacing any earlier upload for `id`.
    ///
    /// The bytes go to a temporary file in the category directory that is
    /// renamed into place, so readers never see a partial image. The upload
    /// of the other kind is removed only after the rename succeeds; on error
    /// the previously stored image is left as it was.
    ///
    /// Returns the path written.
    pub async fn save(
        &self,
        category: ImageCategory,
        id: DbId,
        kind: ImageKind,
        data: &[u8],
    ) -> std::io::Result<PathBuf> {
        let dir = self.category_dir(category);
        tokio::fs::create_dir_all(&dir).await?;

        let path = dir.join(stored_file_name(id, kind));
        let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
        let tmp = dir.join(format!(".{}.{seq}.tmp", stored_file_name(id, kind)));

        let written = match tokio::fs::write(&tmp, data).await {
            Ok(()) => tokio::fs::rename(&tmp, &path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            remove_if_exists(&tmp).await.ok();
            return Err(e);
        }

        for other in ImageKind::ALL.into_iter().filter(|k| *k != kind) {
            remove_if_exists(&dir.join(stored_file_name(id, other))).await?;
        }

        Ok(path)
    }

    /// Load the image stored for `id`, falling back to the category default.
    ///
    /// Returns `Ok(None)` only when neither exists.
    pub async fn load(
        &self,
        category: ImageCategory,
        id: DbId,
    ) -> std::io::Result<Option<StoredImage>> {
        let dir = self.category_dir(category);

        for kind in ImageKind::ALL {
            if let Some(bytes) = read_if_exists(&dir.join(stored_file_name(id, kind))).await? {
                return Ok(Some(StoredImage {
                    bytes,
                    content_type: kind.content_type(),
                    is_default: false,
                }));
            }
        }

        let default = read_if_exists(&dir.join(category.default_file_name())).await?;
        Ok(default.map(|bytes| StoredImage {
            bytes,
            content_type: ImageKind::Png.content_type(),
            is_default: true,
        }))
    }
}

async fn read_if_exists(path: &Path) -> std::io::Result<Option<Vec<u8>>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

async fn remove_if_exists(path: &Path) -> std::io::Result<()> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
