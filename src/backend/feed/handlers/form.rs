/**
 * Post Form Parsing
 *
 * Create and update both take `multipart/form-data` with `title`,
 * `content` and `image` parts. An `image` part carrying a file name is an
 * upload; an `image` part without one is a text passthrough of an existing
 * reference (used by update to keep the current image).
 *
 * Uploads with a type other than png/jpg/jpeg are dropped here, so the
 * handler sees them as "no image".
 */

use axum::extract::Multipart;
use validator::Validate;

use crate::backend::error::BackendError;
use crate::backend::feed::images::ImageUpload;

/// Parsed multipart body of a post create/update
#[derive(Debug, Default, Validate)]
pub struct PostForm {
    #[validate(length(min = 5, message = "Title must be at least 5 characters long."))]
    pub title: String,
    #[validate(length(min = 5, message = "Content must be at least 5 characters long."))]
    pub content: String,
    /// Accepted image file, if one was uploaded
    pub image: Option<ImageUpload>,
    /// Text `image` field, trimmed, if non-empty
    pub image_url: Option<String>,
}

impl PostForm {
    /// Read every part of a multipart body
    ///
    /// Unknown parts are drained and ignored.
    ///
    /// # Errors
    /// `ValidationFailed` when the body is not valid multipart.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, BackendError> {
        let mut form = PostForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();

            match name.as_str() {
                "title" => form.title = field.text().await?.trim().to_string(),
                "content" => form.content = field.text().await?.trim().to_string(),
                "image" => match field.file_name().map(str::to_string) {
                    Some(file_name) => {
                        let content_type = field.content_type().unwrap_or_default().to_string();
                        let bytes = field.bytes().await?;

                        if !ImageUpload::is_accepted_type(&content_type) {
                            tracing::debug!("Ignoring image {} of type {:?}", file_name, content_type);
                        } else if bytes.is_empty() {
                            tracing::debug!("Ignoring empty image {}", file_name);
                        } else {
                            form.image = Some(ImageUpload {
                                file_name,
                                content_type,
                                bytes,
                            });
                        }
                    }
                    None => {
                        let text = field.text().await?;
                        let text = text.trim();
                        if !text.is_empty() {
                            form.image_url = Some(text.to_string());
                        }
                    }
                },
                other => {
                    tracing::debug!("Ignoring unknown form field {:?}", other);
                    field.bytes().await?;
                }
            }
        }

        Ok(form)
    }

    /// Check title and content lengths
    pub fn check(&self) -> Result<(), BackendError> {
        self.validate()?;
        Ok(())
    }
}
