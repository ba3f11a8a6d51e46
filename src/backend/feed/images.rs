/**
 * Image Storage
 *
 * Uploaded post images are written through the `ImageStorage` trait. The
 * disk implementation stores files flat under a configured directory and
 * hands back a relative reference (`images/<uuid>-<name>`) which is both
 * what the post records and the public path the router serves it under.
 *
 * Removal of replaced or deleted images is best-effort: it runs on a
 * spawned task and failures are only logged.
 */

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use uuid::Uuid;

use crate::backend::error::BackendError;

/// Public prefix of every stored image reference
pub const IMAGE_URL_PREFIX: &str = "images/";

/// Content types accepted as post images
pub const ACCEPTED_IMAGE_TYPES: &[&str] = &["image/png", "image/jpg", "image/jpeg"];

/// An image file received in a multipart upload
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// File name supplied by the client
    pub file_name: String,
    /// MIME type supplied by the client
    pub content_type: String,
    /// Raw file contents
    pub bytes: Bytes,
}

impl ImageUpload {
    /// Whether a content type is one of the accepted image types
    pub fn is_accepted_type(content_type: &str) -> bool {
        let content_type = content_type.trim().to_ascii_lowercase();
        ACCEPTED_IMAGE_TYPES.contains(&content_type.as_str())
    }
}

/// Trait for image storage backends
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Persist an upload and return its reference
    async fn store(&self, upload: ImageUpload) -> Result<String, BackendError>;

    /// Delete a previously stored image by reference
    async fn remove(&self, image_url: &str) -> Result<(), BackendError>;
}

/// Flat-directory implementation of the ImageStorage trait
#[derive(Debug, Clone)]
pub struct DiskImageStorage {
    root: PathBuf,
}

impl DiskImageStorage {
    /// Open (and create if needed) the image directory
    pub fn new<P: AsRef<Path>>(root: P) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Directory images are written to
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a reference to a file inside the root
    ///
    /// Only `images/<single file name>` resolves; anything that could
    /// escape the directory is refused.
    fn resolve(&self, image_url: &str) -> Option<PathBuf> {
        let name = image_url.strip_prefix(IMAGE_URL_PREFIX)?;
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(file)), None) => Some(self.root.join(file)),
            _ => None,
        }
    }
}

#[async_trait]
impl ImageStorage for DiskImageStorage {
    async fn store(&self, upload: ImageUpload) -> Result<String, BackendError> {
        let file_name = format!("{}-{}", Uuid::new_v4(), sanitize_file_name(&upload.file_name));
        let path = self.root.join(&file_name);

        tokio::fs::write(&path, &upload.bytes).await.map_err(|e| {
            tracing::error!("Failed to write image {:?}: {}", path, e);
            BackendError::from(e)
        })?;

        tracing::debug!("Stored image {} ({} bytes)", file_name, upload.bytes.len());
        Ok(format!("{}{}", IMAGE_URL_PREFIX, file_name))
    }

    async fn remove(&self, image_url: &str) -> Result<(), BackendError> {
        let path = self.resolve(image_url).ok_or_else(|| {
            BackendError::server(format!("refusing to remove image outside storage: {}", image_url))
        })?;

        tokio::fs::remove_file(&path).await?;
        tracing::debug!("Removed image {:?}", path);
        Ok(())
    }
}

/// Schedule best-effort removal of an image
///
/// Returns immediately; the outcome never reaches the caller.
pub fn schedule_removal(storage: Arc<dyn ImageStorage>, image_url: String) {
    tokio::spawn(async move {
        if let Err(e) = storage.remove(&image_url).await {
            tracing::warn!("Failed to clear image {}: {}", image_url, e);
        }
    });
}

/// Keep `[A-Za-z0-9._-]`, replace everything else with `_`
fn sanitize_file_name(name: &str) -> String {
    let base = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() {
        "image".to_string()
    } else {
        cleaned.to_string()
    }
}
