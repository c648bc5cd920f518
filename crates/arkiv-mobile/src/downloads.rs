//! Platform file-save capability for article downloads.
//!
//! Screens never touch the filesystem directly; they hand bytes and a
//! file name to a [`SaveTarget`]. One variant exists per platform, with
//! the Android build writing into the shared downloads directory.
#![cfg_attr(not(target_os = "android"), allow(dead_code))]

use std::path::{Path, PathBuf};

use thiserror::Error;

const DOWNLOAD_DIR_NAME: &str = "arkiv-downloads";
const FALLBACK_FILE_NAME: &str = "downloaded_file";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where downloaded article bytes get written.
pub trait SaveTarget {
    /// Writes `bytes` under `file_name`, returning the saved path.
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, SaveError>;
}

/// Saves into the platform downloads directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct DownloadsDirTarget;

impl SaveTarget for DownloadsDirTarget {
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, SaveError> {
        save_under(&default_download_directory(), file_name, bytes)
    }
}

/// Saves under an explicit directory; used by tests and exports.
#[derive(Debug, Clone)]
pub struct DirectoryTarget {
    directory: PathBuf,
}

impl DirectoryTarget {
    #[must_use]
    pub const fn new(directory: PathBuf) -> Self {
        Self { directory }
    }
}

impl SaveTarget for DirectoryTarget {
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, SaveError> {
        save_under(&self.directory, file_name, bytes)
    }
}

fn save_under(directory: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, SaveError> {
    let path = directory.join(sanitize_file_name(file_name));
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, bytes)?;
    Ok(path)
}

fn default_download_directory() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::document_dir)
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DOWNLOAD_DIR_NAME)
}

/// Picks the name a download is saved under: the Content-Disposition
/// name when the server sent one, otherwise a name derived from the
/// article, otherwise a constant fallback.
#[must_use]
pub fn resolved_download_file_name(header_name: Option<&str>, article_name: &str) -> String {
    if let Some(name) = header_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
    {
        return sanitize_file_name(name);
    }

    let article = article_name.trim();
    if article.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        sanitize_file_name(article)
    }
}

/// Strips path separators and leading dots so a server-supplied name
/// cannot escape the download directory.
fn sanitize_file_name(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|character| match character {
            '/' | '\\' | ':' => '_',
            other => other,
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.').to_string();
    if cleaned.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn prefers_header_name_over_article_name() {
        assert_eq!(
            resolved_download_file_name(Some("report.pdf"), "Quarterly Report"),
            "report.pdf"
        );
    }

    #[test]
    fn falls_back_to_article_name_then_constant() {
        assert_eq!(
            resolved_download_file_name(None, "Quarterly Report"),
            "Quarterly Report"
        );
        assert_eq!(resolved_download_file_name(None, "  "), "downloaded_file");
        assert_eq!(resolved_download_file_name(Some("  "), ""), "downloaded_file");
    }

    #[test]
    fn sanitizes_path_separators() {
        assert_eq!(
            resolved_download_file_name(Some("../../etc/passwd"), ""),
            "_.._etc_passwd"
        );
    }

    #[test]
    fn directory_target_writes_bytes() {
        let test_dir = std::env::temp_dir().join(format!(
            "arkiv-download-test-{}",
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let target = DirectoryTarget::new(test_dir.clone());

        let saved_path = target.save("doc.pdf", b"%PDF-1.4").unwrap();
        assert_eq!(std::fs::read(&saved_path).unwrap(), b"%PDF-1.4");

        let _ = std::fs::remove_dir_all(test_dir);
    }
}
