mod guide;
mod puzzle;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use guide::GuideView;
pub use puzzle::PuzzleView;
pub use state::ViewError;
