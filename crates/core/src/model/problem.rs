use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::{ImageId, ProblemIndex};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProblemError {
    #[error("problem index {index} is out of range")]
    IndexOutOfRange { index: usize },

    #[error("image identifier cannot be empty")]
    EmptyImageId,

    #[error("problem {problem} has no images")]
    NoImages { problem: ProblemIndex },

    #[error("problem {problem} lists image {id} more than once")]
    DuplicateImage { problem: ProblemIndex, id: ImageId },
}

//
// ─── PROBLEM ───────────────────────────────────────────────────────────────────
//

/// One ordering exercise: a set of pictures and their correct order.
///
/// The canonical order is always the ascending sort of the identifiers, so a
/// `Problem` can be built from an unsorted directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    index: ProblemIndex,
    canonical_order: Vec<ImageId>,
}

impl Problem {
    /// Build a problem, sorting the identifiers into canonical order.
    ///
    /// # Errors
    ///
    /// Returns `ProblemError::NoImages` for an empty list and
    /// `ProblemError::DuplicateImage` when an identifier repeats.
    pub fn new(
        index: ProblemIndex,
        ids: impl IntoIterator<Item = ImageId>,
    ) -> Result<Self, ProblemError> {
        let mut canonical_order: Vec<ImageId> = ids.into_iter().collect();
        if canonical_order.is_empty() {
            return Err(ProblemError::NoImages { problem: index });
        }

        canonical_order.sort();
        if let Some(pair) = canonical_order.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(ProblemError::DuplicateImage {
                problem: index,
                id: pair[0].clone(),
            });
        }

        Ok(Self {
            index,
            canonical_order,
        })
    }

    #[must_use]
    pub fn index(&self) -> ProblemIndex {
        self.index
    }

    /// The correct answer, ascending by identifier.
    #[must_use]
    pub fn canonical_order(&self) -> &[ImageId] {
        &self.canonical_order
    }

    /// Number of pictures (and answer slots).
    #[must_use]
    pub fn len(&self) -> usize {
        self.canonical_order.len()
    }

    /// Always false for a validated problem.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.canonical_order.is_empty()
    }

    /// Exact sequence comparison against the canonical order.
    ///
    /// Any proposal containing a duplicate is incorrect, since the canonical
    /// order never repeats an identifier.
    #[must_use]
    pub fn is_solved_by(&self, proposed: &[ImageId]) -> bool {
        proposed == self.canonical_order.as_slice()
    }
}

/// True when some identifier occurs more than once.
#[must_use]
pub fn has_duplicates<T: Eq + std::hash::Hash>(items: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().any(|item| !seen.insert(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<ImageId> {
        names.iter().map(|name| ImageId::new(*name).unwrap()).collect()
    }

    #[test]
    fn canonical_order_is_sorted_by_name() {
        let problem = Problem::new(ProblemIndex::FIRST, ids(&["03_c.png", "01_a.png", "02_b.png"]))
            .unwrap();
        assert_eq!(
            problem.canonical_order(),
            ids(&["01_a.png", "02_b.png", "03_c.png"]).as_slice()
        );
        assert_eq!(problem.len(), 3);
    }

    #[test]
    fn empty_problem_is_rejected() {
        let err = Problem::new(ProblemIndex::FIRST, Vec::new()).unwrap_err();
        assert_eq!(
            err,
            ProblemError::NoImages {
                problem: ProblemIndex::FIRST
            }
        );
    }

    #[test]
    fn duplicate_identifier_is_rejected() {
        let err = Problem::new(ProblemIndex::FIRST, ids(&["b", "a", "b"])).unwrap_err();
        assert!(matches!(err, ProblemError::DuplicateImage { id, .. } if id.as_str() == "b"));
    }

    #[test]
    fn only_exact_sequence_solves() {
        let problem = Problem::new(ProblemIndex::FIRST, ids(&["a", "b", "c"])).unwrap();
        assert!(problem.is_solved_by(&ids(&["a", "b", "c"])));
        assert!(!problem.is_solved_by(&ids(&["b", "a", "c"])));
        assert!(!problem.is_solved_by(&ids(&["a", "a", "c"])));
        assert!(!problem.is_solved_by(&ids(&["a", "b"])));
    }

    #[test]
    fn duplicate_detection() {
        assert!(has_duplicates(&ids(&["a", "b", "a"])));
        assert!(!has_duplicates(&ids(&["a", "b", "c"])));
    }
}
