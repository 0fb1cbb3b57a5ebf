#![forbid(unsafe_code)]

pub mod error;
pub mod puzzle;
pub mod shuffle;

pub use error::PuzzleError;
pub use puzzle::{ProblemView, PuzzleService, PuzzleSession, TileView};
pub use shuffle::RandomShuffler;
