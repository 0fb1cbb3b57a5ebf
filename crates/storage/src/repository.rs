use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use sequence_core::model::{ImageId, Problem, ProblemError, ProblemIndex};
use sequence_core::rules::{PLACEHOLDER_COUNT, placeholder_file_name};
use thiserror::Error;

use crate::fs::FsImageRepository;

/// Errors surfaced by image providers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("i/o error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("image error at {path}: {source}")]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("lock poisoned: {0}")]
    Poisoned(String),

    #[error(transparent)]
    InvalidProblem(#[from] ProblemError),
}

impl StorageError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A displayable picture. In-memory assets have no backing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub id: ImageId,
    pub path: Option<PathBuf>,
}

impl ImageAsset {
    #[must_use]
    pub fn in_memory(id: ImageId) -> Self {
        Self { id, path: None }
    }

    #[must_use]
    pub fn on_disk(id: ImageId, path: PathBuf) -> Self {
        Self {
            id,
            path: Some(path),
        }
    }
}

/// Everything a provider knows about one problem.
///
/// `assets` are listed in canonical order, parallel to
/// `problem.canonical_order()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemImages {
    pub problem: Problem,
    pub assets: Vec<ImageAsset>,
}

impl ProblemImages {
    #[must_use]
    pub fn asset(&self, id: &ImageId) -> Option<&ImageAsset> {
        self.assets.iter().find(|asset| &asset.id == id)
    }
}

/// Source of truth for a problem's pictures and their canonical order.
pub trait ImageRepository: Send + Sync {
    /// Load the pictures of `problem`, synthesizing placeholders when there
    /// are none.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backing store cannot be read or
    /// placeholders cannot be written.
    fn load(&self, problem: ProblemIndex) -> Result<ProblemImages, StorageError>;
}

/// In-memory provider for tests and demos.
#[derive(Clone, Default)]
pub struct InMemoryImageRepository {
    problems: Arc<Mutex<HashMap<ProblemIndex, Vec<ImageId>>>>,
}

impl InMemoryImageRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the identifiers of `problem`. An empty list falls back to
    /// placeholder identifiers on load.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Poisoned` if the lock is poisoned.
    pub fn set_problem(
        &self,
        problem: ProblemIndex,
        ids: Vec<ImageId>,
    ) -> Result<(), StorageError> {
        let mut guard = self
            .problems
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        guard.insert(problem, ids);
        Ok(())
    }

    /// Builder-style variant of [`InMemoryImageRepository::set_problem`]
    /// taking plain names.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidProblem` for a blank name.
    pub fn with_problem(self, problem: ProblemIndex, names: &[&str]) -> Result<Self, StorageError> {
        let ids = names
            .iter()
            .map(|name| ImageId::new(*name))
            .collect::<Result<Vec<_>, _>>()?;
        self.set_problem(problem, ids)?;
        Ok(self)
    }
}

impl ImageRepository for InMemoryImageRepository {
    fn load(&self, problem: ProblemIndex) -> Result<ProblemImages, StorageError> {
        let guard = self
            .problems
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        let mut ids = guard.get(&problem).cloned().unwrap_or_default();
        drop(guard);

        if ids.is_empty() {
            ids = (1..=PLACEHOLDER_COUNT)
                .map(|n| ImageId::new(placeholder_file_name(n)))
                .collect::<Result<Vec<_>, _>>()?;
        }

        let problem = Problem::new(problem, ids)?;
        let assets = problem
            .canonical_order()
            .iter()
            .cloned()
            .map(ImageAsset::in_memory)
            .collect();
        Ok(ProblemImages { problem, assets })
    }
}

/// Bundles the image provider behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub images: Arc<dyn ImageRepository>,
}

impl Storage {
    /// Pictures read from `root/problem_{n}` folders.
    #[must_use]
    pub fn filesystem(root: impl Into<PathBuf>) -> Self {
        Self {
            images: Arc::new(FsImageRepository::new(root)),
        }
    }
}
