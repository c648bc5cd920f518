//! Articles: named files with metadata stored server-side.

use serde::{Deserialize, Serialize};

/// An article as returned by the list endpoints.
///
/// `category` carries the category name, not its id; no foreign-key
/// relationship is visible to the client. The per-user like flag is not
/// embedded here - it comes from a separate side query per article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub name: String,
    pub author: String,
    pub category: String,
    pub description: String,
    /// Stored file name; only the admin listing includes it.
    #[serde(default)]
    pub file: Option<String>,
    /// Aggregate like count across all users.
    #[serde(default)]
    pub likes: i64,
    /// Aggregate download count across all users.
    #[serde(default)]
    pub downloads: i64,
}

/// A file picked for upload, held in memory until submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// File size in KiB, for display next to the picked file.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size_kib(&self) -> f64 {
        self.bytes.len() as f64 / 1024.0
    }
}

/// Form payload for creating or updating an article.
///
/// Submitted as a multipart form; `file` must be present on submission
/// (the backend rejects a create without one, and the client refuses to
/// submit either operation without a chosen file).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleDraft {
    pub name: String,
    pub author: String,
    pub category: String,
    pub description: String,
    pub file: Option<FileUpload>,
}

/// Per-user like flag fetched via `GET /articles/{id}/is_liked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeState {
    pub is_liked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_payload_tolerates_missing_counters() {
        let raw = r#"{"id":1,"name":"Doc","author":"A","category":"Tech","description":"x"}"#;
        let article: Article = serde_json::from_str(raw).unwrap();
        assert_eq!(article.likes, 0);
        assert_eq!(article.downloads, 0);
        assert_eq!(article.file, None);
    }

    #[test]
    fn article_payload_reads_admin_listing_fields() {
        let raw = r#"{"id":2,"name":"Doc","author":"A","category":"Tech","description":"x","file":"doc.pdf","likes":4,"downloads":9}"#;
        let article: Article = serde_json::from_str(raw).unwrap();
        assert_eq!(article.file.as_deref(), Some("doc.pdf"));
        assert_eq!(article.likes, 4);
        assert_eq!(article.downloads, 9);
    }

    #[test]
    fn file_upload_reports_size_in_kib() {
        let upload = FileUpload {
            file_name: "doc.pdf".to_string(),
            bytes: vec![0u8; 2048],
        };
        assert!((upload.size_kib() - 2.0).abs() < f64::EPSILON);
    }
}
