use thiserror::Error;

use crate::model::ids::{ImageId, SlotLabel};
use crate::model::problem::Problem;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArrangementError {
    #[error("arrangement is not a permutation of the problem's pictures")]
    NotAPermutation,

    #[error("{label} does not name a picture in this arrangement")]
    UnknownLabel { label: SlotLabel },
}

/// The shuffled order a problem is presented in.
///
/// Position `n` (1-based) of the order is named by `SlotLabel::new(n)`; the
/// child answers with labels and `resolve` maps them back to identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrangement {
    order: Vec<ImageId>,
}

impl Arrangement {
    /// Wrap a presentation order for `problem`.
    ///
    /// The order may coincide with the canonical one.
    ///
    /// # Errors
    ///
    /// Returns `ArrangementError::NotAPermutation` if `order` does not hold
    /// exactly the problem's identifiers.
    pub fn new(problem: &Problem, order: Vec<ImageId>) -> Result<Self, ArrangementError> {
        let mut sorted = order.clone();
        sorted.sort();
        if sorted.as_slice() != problem.canonical_order() {
            return Err(ArrangementError::NotAPermutation);
        }
        Ok(Self { order })
    }

    #[must_use]
    pub fn order(&self) -> &[ImageId] {
        &self.order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Labels in slot order: `Photo 1`, `Photo 2`, ...
    #[must_use]
    pub fn labels(&self) -> Vec<SlotLabel> {
        (0..self.order.len()).map(SlotLabel::for_offset).collect()
    }

    /// The choice a fresh arrangement starts with: each slot holds the
    /// picture displayed at the same position.
    #[must_use]
    pub fn default_choice(&self) -> Vec<SlotLabel> {
        self.labels()
    }

    /// Pictures paired with their labels, in display order.
    pub fn tiles(&self) -> impl Iterator<Item = (SlotLabel, &ImageId)> {
        self.order
            .iter()
            .enumerate()
            .map(|(offset, id)| (SlotLabel::for_offset(offset), id))
    }

    #[must_use]
    pub fn image_for(&self, label: SlotLabel) -> Option<&ImageId> {
        label
            .position()
            .checked_sub(1)
            .and_then(|offset| self.order.get(offset))
    }

    #[must_use]
    pub fn label_of(&self, id: &ImageId) -> Option<SlotLabel> {
        self.order
            .iter()
            .position(|candidate| candidate == id)
            .map(SlotLabel::for_offset)
    }

    /// Map chosen labels back to picture identifiers, keeping duplicates.
    ///
    /// # Errors
    ///
    /// Returns `ArrangementError::UnknownLabel` for a label outside this
    /// arrangement.
    pub fn resolve(&self, labels: &[SlotLabel]) -> Result<Vec<ImageId>, ArrangementError> {
        labels
            .iter()
            .map(|label| {
                self.image_for(*label)
                    .cloned()
                    .ok_or(ArrangementError::UnknownLabel { label: *label })
            })
            .collect()
    }
}
