//! Image upload payload
//!
//! One image file plus whatever text fields should ride along in the
//! multipart body.

use std::path::Path;

use super::error::{AnalysisError, AnalysisResult};

/// Multipart payload for one analysis request
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    /// Extra text fields, sent in order
    pub fields: Vec<(String, String)>,
}

impl ImageUpload {
    /// Build an upload, guessing the content type from the file name.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_from_file_name(&file_name).to_string();
        Self {
            file_name,
            content_type,
            bytes,
            fields: Vec::new(),
        }
    }

    /// Read an image from disk.
    pub async fn from_path(path: &Path) -> AnalysisResult<Self> {
        let bytes = tokio::fs::read(path).await.map_err(|e| AnalysisError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());

        Ok(Self::new(file_name, bytes))
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// MIME type for a file name, by extension
pub fn mime_from_file_name(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "heic" => "image/heic",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_mime_from_file_name() {
        assert_eq!(mime_from_file_name("lunch.jpg"), "image/jpeg");
        assert_eq!(mime_from_file_name("lunch.JPEG"), "image/jpeg");
        assert_eq!(mime_from_file_name("lunch.png"), "image/png");
        assert_eq!(mime_from_file_name("lunch.webp"), "image/webp");
        assert_eq!(mime_from_file_name("lunch.heic"), "image/heic");
        assert_eq!(mime_from_file_name("lunch"), "application/octet-stream");
        assert_eq!(mime_from_file_name("lunch.txt"), "application/octet-stream");
    }

    #[test]
    fn test_with_field() {
        let upload = ImageUpload::new("a.png", vec![1, 2, 3]).with_field("note", "dinner");
        assert_eq!(upload.content_type, "image/png");
        assert_eq!(upload.len(), 3);
        assert_eq!(upload.fields, vec![("note".to_string(), "dinner".to_string())]);
    }

    #[tokio::test]
    async fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plate.jpg");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"\xff\xd8\xff").unwrap();

        let upload = ImageUpload::from_path(&path).await.unwrap();
        assert_eq!(upload.file_name, "plate.jpg");
        assert_eq!(upload.content_type, "image/jpeg");
        assert_eq!(upload.bytes, b"\xff\xd8\xff".to_vec());
    }

    #[tokio::test]
    async fn test_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageUpload::from_path(&dir.path().join("missing.jpg"))
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Io { .. }));
    }
}
