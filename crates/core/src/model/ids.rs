use std::fmt;

use crate::model::ProblemError;
use crate::rules::TOTAL_PROBLEMS;

/// Zero-based position of a problem within the fixed problem cycle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProblemIndex(usize);

impl ProblemIndex {
    /// The first problem of the cycle.
    pub const FIRST: Self = Self(0);

    /// Creates a `ProblemIndex`.
    ///
    /// # Errors
    ///
    /// Returns `ProblemError::IndexOutOfRange` if `index >= TOTAL_PROBLEMS`.
    pub fn new(index: usize) -> Result<Self, ProblemError> {
        if index >= TOTAL_PROBLEMS {
            return Err(ProblemError::IndexOutOfRange { index });
        }
        Ok(Self(index))
    }

    /// Returns the underlying zero-based value
    #[must_use]
    pub fn value(&self) -> usize {
        self.0
    }

    /// One-based number shown to the user and used in folder names.
    #[must_use]
    pub fn number(&self) -> usize {
        self.0 + 1
    }

    /// The following problem, wrapping from the last back to the first.
    #[must_use]
    pub fn next(self) -> Self {
        Self((self.0 + 1) % TOTAL_PROBLEMS)
    }

    /// Every problem index in cycle order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..TOTAL_PROBLEMS).map(Self)
    }
}

impl fmt::Debug for ProblemIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProblemIndex({})", self.0)
    }
}

impl fmt::Display for ProblemIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Identifier of a single picture, its file name.
///
/// Ordering is plain lexicographic order of the name; the canonical answer of
/// a problem is its identifiers sorted ascending.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(String);

impl ImageId {
    /// Creates an `ImageId`.
    ///
    /// # Errors
    ///
    /// Returns `ProblemError::EmptyImageId` if the name is empty or whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ProblemError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProblemError::EmptyImageId);
        }
        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageId({:?})", self.0)
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Label naming whatever picture sits at one shuffled position.
///
/// Labels are positional: `SlotLabel::new(1)` always refers to the first
/// picture of the current arrangement.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotLabel(usize);

impl SlotLabel {
    /// Creates a label from a 1-based position.
    #[must_use]
    pub fn new(position: usize) -> Self {
        Self(position)
    }

    /// Label for a zero-based slot offset.
    #[must_use]
    pub fn for_offset(offset: usize) -> Self {
        Self(offset + 1)
    }

    /// Returns the 1-based position
    #[must_use]
    pub fn position(&self) -> usize {
        self.0
    }

    /// Parses the display form (`"Photo 3"`) or a bare number (`"3"`).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix("Photo").map_or(trimmed, str::trim);
        digits.parse::<usize>().ok().filter(|n| *n > 0).map(Self)
    }
}

impl fmt::Debug for SlotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotLabel({})", self.0)
    }
}

impl fmt::Display for SlotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Photo {}", self.0)
    }
}
