//! File-system image provider.
//!
//! Layout: `<root>/problem_{n}/` holds the pictures of problem `n` (1-based).
//! The canonical order is the ascending order of the file names.

use std::path::{Path, PathBuf};

use sequence_core::model::{ImageId, Problem, ProblemIndex};
use sequence_core::rules::{PLACEHOLDER_COUNT, placeholder_file_name};

use crate::repository::{ImageAsset, ImageRepository, ProblemImages, StorageError};

pub mod placeholder;

const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Debug, Clone)]
pub struct FsImageRepository {
    root: PathBuf,
}

impl FsImageRepository {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Folder holding the pictures of `problem`.
    #[must_use]
    pub fn problem_dir(&self, problem: ProblemIndex) -> PathBuf {
        self.root.join(format!("problem_{}", problem.number()))
    }

    /// Make sure `problem` has pictures, writing placeholders into an empty
    /// folder. Returns how many placeholders were written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the folder cannot be created or read, or a
    /// placeholder cannot be encoded.
    pub fn seed_placeholders(&self, problem: ProblemIndex) -> Result<usize, StorageError> {
        let dir = self.problem_dir(problem);
        std::fs::create_dir_all(&dir).map_err(|e| StorageError::io(&dir, e))?;
        if !scan(&dir)?.is_empty() {
            return Ok(0);
        }

        let mut written = 0;
        for n in 1..=PLACEHOLDER_COUNT {
            let path = dir.join(placeholder_file_name(n));
            if path.exists() {
                continue;
            }
            placeholder::render(problem, n)
                .save(&path)
                .map_err(|source| StorageError::Image {
                    path: path.clone(),
                    source,
                })?;
            written += 1;
        }
        tracing::info!(
            problem = problem.number(),
            dir = %dir.display(),
            written,
            "no pictures found, wrote placeholders"
        );
        Ok(written)
    }
}

impl ImageRepository for FsImageRepository {
    fn load(&self, problem: ProblemIndex) -> Result<ProblemImages, StorageError> {
        let dir = self.problem_dir(problem);
        std::fs::create_dir_all(&dir).map_err(|e| StorageError::io(&dir, e))?;

        let mut entries = scan(&dir)?;
        if entries.is_empty() {
            self.seed_placeholders(problem)?;
            entries = scan(&dir)?;
        }

        let problem = Problem::new(problem, entries.iter().map(|(id, _)| id.clone()))?;
        let assets = entries
            .into_iter()
            .map(|(id, path)| ImageAsset::on_disk(id, path))
            .collect();
        tracing::debug!(
            problem = problem.index().number(),
            pictures = problem.len(),
            "loaded problem"
        );
        Ok(ProblemImages { problem, assets })
    }
}

/// Picture files directly inside `dir`, sorted by name.
fn scan(dir: &Path) -> Result<Vec<(ImageId, PathBuf)>, StorageError> {
    let read = std::fs::read_dir(dir).map_err(|e| StorageError::io(dir, e))?;
    let mut entries = Vec::new();
    for entry in read {
        let entry = entry.map_err(|e| StorageError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() || !has_image_extension(&path) {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            tracing::warn!(path = %path.display(), "skipping picture with non UTF-8 name");
            continue;
        };
        entries.push((ImageId::new(name)?, path.clone()));
    }
    entries.sort_by(|left, right| left.0.cmp(&right.0));
    Ok(entries)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
