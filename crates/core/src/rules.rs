//! Fixed rules of the picture-ordering game.

/// Number of problems in one cycle of the game.
pub const TOTAL_PROBLEMS: usize = 3;

/// Attempts ("apples") granted for each problem.
pub const MAX_APPLES: u8 = 5;

/// Pictures synthesized for a problem whose folder holds no images.
pub const PLACEHOLDER_COUNT: usize = 4;

/// File name of the `n`-th (1-based) placeholder picture.
#[must_use]
pub fn placeholder_file_name(n: usize) -> String {
    format!("{n:02}_placeholder.png")
}
