//! Image upload validation and on-disk naming.
//!
//! Uploaded images are stored as `{category_dir}/{id}.{ext}` under the
//! configured storage root. Only JPEG and PNG uploads are accepted; the
//! check runs on the client-supplied filename before anything is written.

use crate::error::CoreError;
use crate::types::DbId;

/// Extensions accepted on upload (lowercase, without the dot).
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Supported image encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
}

impl ImageKind {
    /// Every kind, in the order stored files are probed.
    pub const ALL: [ImageKind; 2] = [ImageKind::Jpeg, ImageKind::Png];

    /// Classify an uploaded file by the extension of its name.
    ///
    /// Matching is case-insensitive. Names without an extension and any
    /// extension outside [`ALLOWED_EXTENSIONS`] are rejected.
    pub fn from_filename(filename: &str) -> Result<Self, CoreError> {
        let ext = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "jpg" | "jpeg" => Ok(ImageKind::Jpeg),
            "png" => Ok(ImageKind::Png),
            _ => Err(CoreError::Validation(format!(
                "Unsupported image type '{filename}'. Allowed: .jpg, .jpeg, .png"
            ))),
        }
    }

    /// Canonical extension used for the stored file.
    pub fn extension(self) -> &'static str {
        match self {
            ImageKind::Jpeg => "jpg",
            ImageKind::Png => "png",
        }
    }

    /// MIME type served for this kind.
    pub fn content_type(self) -> &'static str {
        match self {
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Png => "image/png",
        }
    }
}

/// Which entity an image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageCategory {
    AlbumCover,
    ProfilePicture,
}

impl ImageCategory {
    /// Subdirectory of the storage root holding this category.
    pub fn dir_name(self) -> &'static str {
        match self {
            ImageCategory::AlbumCover => "album_images",
            ImageCategory::ProfilePicture => "profile_images",
        }
    }

    /// File served when no image has been uploaded. Lives in the category
    /// directory and is always a PNG.
    pub fn default_file_name(self) -> &'static str {
        match self {
            ImageCategory::AlbumCover => "default_album.png",
            ImageCategory::ProfilePicture => "default_profile.png",
        }
    }
}

/// File name for an uploaded image of the given kind.
pub fn stored_file_name(id: DbId, kind: ImageKind) -> String {
    format!("{id}.{}", kind.extension())
}
