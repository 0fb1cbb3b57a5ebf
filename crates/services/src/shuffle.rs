use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use sequence_core::Shuffler;
use sequence_core::model::ImageId;

/// Uniform random permutation backed by `rand`.
///
/// An identity permutation is a legal result and is returned unchanged.
pub struct RandomShuffler {
    rng: StdRng,
}

impl RandomShuffler {
    /// Shuffler seeded from the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible shuffler.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomShuffler {
    fn default() -> Self {
        Self::new()
    }
}

impl Shuffler for RandomShuffler {
    fn shuffle(&mut self, canonical: &[ImageId]) -> Vec<ImageId> {
        let mut order = canonical.to_vec();
        order.shuffle(&mut self.rng);
        order
    }
}
