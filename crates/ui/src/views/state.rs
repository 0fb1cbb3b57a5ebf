use services::PuzzleError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Images,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Images => "The pictures could not be loaded. Check the image folder.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<PuzzleError> for ViewError {
    fn from(err: PuzzleError) -> Self {
        match err {
            PuzzleError::Storage(_) => ViewError::Images,
            _ => ViewError::Unknown,
        }
    }
}
