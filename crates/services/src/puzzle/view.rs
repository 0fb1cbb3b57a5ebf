use sequence_core::SessionState;
use sequence_core::model::{Arrangement, AttemptResult, ProblemIndex, SlotLabel, has_duplicates};
use sequence_core::rules::{MAX_APPLES, TOTAL_PROBLEMS};
use storage::{ImageAsset, ProblemImages};

/// A picture as shown to the child, with the label that names it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView {
    pub label: SlotLabel,
    pub asset: ImageAsset,
}

/// Snapshot of the current problem for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemView {
    pub problem: ProblemIndex,
    pub total_problems: usize,
    pub apples_remaining: u8,
    pub max_apples: u8,
    pub failed_problems: u8,
    pub last_result: Option<AttemptResult>,
    /// Pictures in shuffled display order.
    pub tiles: Vec<TileView>,
    /// Pictures in canonical order, for the teacher's answer key.
    pub answer_key: Vec<ImageAsset>,
    /// Pending choice, one label per answer slot.
    pub choice: Vec<SlotLabel>,
}

impl ProblemView {
    pub(crate) fn build(
        state: &SessionState,
        images: &ProblemImages,
        arrangement: &Arrangement,
    ) -> Self {
        let problem = images.problem.index();
        let tiles = arrangement
            .tiles()
            .map(|(label, id)| TileView {
                label,
                asset: images
                    .asset(id)
                    .cloned()
                    .unwrap_or_else(|| ImageAsset::in_memory(id.clone())),
            })
            .collect();
        let choice = state
            .pending_choice(problem)
            .map_or_else(|| arrangement.default_choice(), <[SlotLabel]>::to_vec);

        Self {
            problem,
            total_problems: TOTAL_PROBLEMS,
            apples_remaining: state.apples_remaining(),
            max_apples: MAX_APPLES,
            failed_problems: state.failed_problems(),
            last_result: state.last_result(),
            tiles,
            answer_key: images.assets.clone(),
            choice,
        }
    }

    /// Labels the child can pick from, in display order.
    #[must_use]
    pub fn options(&self) -> Vec<SlotLabel> {
        self.tiles.iter().map(|tile| tile.label).collect()
    }

    /// Number of answer slots.
    #[must_use]
    pub fn slots(&self) -> usize {
        self.choice.len()
    }

    /// The same picture was picked for more than one slot. Non-blocking:
    /// submission still proceeds and is scored incorrect.
    #[must_use]
    pub fn has_duplicate_choice(&self) -> bool {
        has_duplicates(&self.choice)
    }
}
