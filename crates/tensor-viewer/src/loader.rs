//! File loading collaborator: resolves a path to the full text of the file.

use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The resource could not be retrieved. Parsing never starts.
#[derive(Debug, Error)]
#[error("failed to load {}: {source}", path.display())]
pub struct LoadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Resolves once with the complete file contents; no streaming, no retries.
pub trait TextLoader {
    fn load(&self, path: &Path) -> impl Future<Output = Result<String, LoadError>>;
}

/// Reads from the local filesystem through tokio.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl TextLoader for FsLoader {
    async fn load(&self, path: &Path) -> Result<String, LoadError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LoadError {
                path: path.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn reads_whole_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0 0 0 1").unwrap();

        let text = FsLoader.load(file.path()).await.unwrap();
        assert_eq!(text, "0 0 0 1\n");
    }

    #[tokio::test]
    async fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.tns");

        let err = FsLoader.load(&path).await.unwrap_err();
        assert_eq!(err.path, path);
        assert_eq!(err.source.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("nope.tns"));
    }
}
