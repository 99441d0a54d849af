//! The viewer's current dataset, held explicitly instead of as global state.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tns::{FormatError, TensorDataset};

use crate::loader::{LoadError, TextLoader};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("failed to parse {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
}

/// Holds at most one dataset. A failed load leaves it untouched.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<TensorDataset>,
    generation: u64,
}

impl Session {
    /// An empty session with nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&TensorDataset> {
        self.current.as_ref()
    }

    /// Number of datasets installed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Install `dataset` as current, returning the one it displaced.
    pub fn replace(&mut self, dataset: TensorDataset) -> Option<TensorDataset> {
        self.install(dataset).0
    }

    pub fn clear(&mut self) -> Option<TensorDataset> {
        self.current.take()
    }

    // Single commit path for `replace` and `load`.
    fn install(&mut self, dataset: TensorDataset) -> (Option<TensorDataset>, &TensorDataset) {
        self.generation += 1;
        let previous = self.current.take();
        (previous, &*self.current.insert(dataset))
    }

    /// Read and parse `path` without touching the current dataset.
    ///
    /// The read is the only await point; the parse runs to completion once
    /// the text is available. Either failure is returned as-is, with no retry.
    pub async fn fetch<L: TextLoader>(
        loader: &L,
        path: &Path,
    ) -> Result<TensorDataset, SessionError> {
        let text = loader.load(path).await?;

        let dataset = tns::parse_str(&text).map_err(|source| SessionError::Format {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!(
            "Loaded {}: {} records, {} modes",
            path.display(),
            dataset.len(),
            dataset.mode_count()
        );

        Ok(dataset)
    }

    /// [`Session::fetch`] then make the result current.
    pub async fn load<L: TextLoader>(
        &mut self,
        loader: &L,
        path: &Path,
    ) -> Result<&TensorDataset, SessionError> {
        let dataset = Self::fetch(loader, path).await?;
        Ok(self.install(dataset).1)
    }
}
