use crate::model::ImageId;

/// Source of presentation orders.
///
/// Implementations return a permutation of `canonical`. Nothing requires the
/// permutation to differ from the input; a shuffle that lands on the answer
/// is kept as is.
pub trait Shuffler: Send {
    fn shuffle(&mut self, canonical: &[ImageId]) -> Vec<ImageId>;
}

/// Deterministic shuffler that reverses the order. Useful in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseShuffler;

impl Shuffler for ReverseShuffler {
    fn shuffle(&mut self, canonical: &[ImageId]) -> Vec<ImageId> {
        canonical.iter().rev().cloned().collect()
    }
}

/// Deterministic shuffler that rotates the order left by one on every call,
/// so consecutive shuffles differ.
#[derive(Debug, Clone, Copy, Default)]
pub struct RotateShuffler {
    calls: usize,
}

impl Shuffler for RotateShuffler {
    fn shuffle(&mut self, canonical: &[ImageId]) -> Vec<ImageId> {
        self.calls += 1;
        let mut order = canonical.to_vec();
        if !order.is_empty() {
            let by = self.calls % order.len();
            order.rotate_left(by);
        }
        order
    }
}
