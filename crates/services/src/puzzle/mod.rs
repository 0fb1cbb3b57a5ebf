mod service;
mod view;

// Public API of the puzzle subsystem.
pub use crate::error::PuzzleError;
pub use service::{PuzzleService, PuzzleSession};
pub use view::{ProblemView, TileView};
