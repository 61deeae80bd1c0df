use crate::domain::models::ExportReport;
use sha2::{Digest, Sha256};
use std::path::PathBuf;

/// Persists a blob under a suggested filename.
pub trait Download {
    fn save(
        &mut self,
        content: &[u8],
        filename: &str,
        content_type: &str,
    ) -> anyhow::Result<ExportReport>;
}

pub fn sha256_hex(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

/// Writes downloads into a directory, replacing files of the same name.
pub struct DirDownload {
    dir: PathBuf,
}

impl DirDownload {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Download for DirDownload {
    fn save(
        &mut self,
        content: &[u8],
        filename: &str,
        content_type: &str,
    ) -> anyhow::Result<ExportReport> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        std::fs::write(&path, content)?;
        tracing::info!(path = %path.display(), bytes = content.len(), "saved download");
        let rows = if content.is_empty() {
            0
        } else {
            content.split(|b| *b == b'\n').count()
        };
        Ok(ExportReport {
            path: path.to_string_lossy().to_string(),
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            rows,
            bytes: content.len(),
            sha256: sha256_hex(content),
        })
    }
}
