//! Shared error types for the services crate.

use thiserror::Error;

use sequence_core::SessionError;
use sequence_core::model::{ArrangementError, ProblemIndex};
use storage::StorageError;

/// Errors emitted by `PuzzleSession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PuzzleError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("pictures of problem {problem} are not loaded")]
    NotLoaded { problem: ProblemIndex },
    #[error("shuffler produced an invalid order: {0}")]
    Shuffle(#[from] ArrangementError),
}
