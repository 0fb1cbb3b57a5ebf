use std::sync::Arc;

use sequence_core::model::{Arrangement, ProblemIndex, SlotLabel, SubmitOutcome};
use sequence_core::rules::TOTAL_PROBLEMS;
use sequence_core::{SessionError, SessionState, Shuffler};
use storage::{ImageRepository, ProblemImages};

use super::view::ProblemView;
use crate::error::PuzzleError;
use crate::shuffle::RandomShuffler;

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Starts puzzle sessions over a shared image provider.
#[derive(Clone)]
pub struct PuzzleService {
    images: Arc<dyn ImageRepository>,
    seed: Option<u64>,
}

impl PuzzleService {
    #[must_use]
    pub fn new(images: Arc<dyn ImageRepository>) -> Self {
        Self { images, seed: None }
    }

    /// Make every session shuffle from the same seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Start a fresh session with a random (or seeded) shuffler.
    #[must_use]
    pub fn start_session(&self) -> PuzzleSession {
        let shuffler = match self.seed {
            Some(seed) => RandomShuffler::seeded(seed),
            None => RandomShuffler::new(),
        };
        self.start_session_with(Box::new(shuffler))
    }

    /// Start a fresh session with a caller-provided shuffler.
    #[must_use]
    pub fn start_session_with(&self, shuffler: Box<dyn Shuffler>) -> PuzzleSession {
        tracing::debug!(seeded = self.seed.is_some(), "starting puzzle session");
        PuzzleSession::new(Arc::clone(&self.images), shuffler)
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One child's run through the problem cycle.
///
/// Owns the attempt state machine and caches each problem's pictures for the
/// lifetime of the session, so the canonical order never changes mid-session.
pub struct PuzzleSession {
    state: SessionState,
    images: Arc<dyn ImageRepository>,
    shuffler: Box<dyn Shuffler>,
    loaded: Vec<Option<ProblemImages>>,
}

impl PuzzleSession {
    #[must_use]
    pub fn new(images: Arc<dyn ImageRepository>, shuffler: Box<dyn Shuffler>) -> Self {
        Self {
            state: SessionState::new(),
            images,
            shuffler,
            loaded: vec![None; TOTAL_PROBLEMS],
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn current_problem(&self) -> ProblemIndex {
        self.state.current_problem()
    }

    /// Snapshot of the current problem, shuffling it on first view.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::Storage` if the pictures cannot be loaded.
    pub fn view(&mut self) -> Result<ProblemView, PuzzleError> {
        let problem = self.state.current_problem();
        self.ensure_arranged(problem)?;
        let images = self.cached(problem)?;
        let arrangement = self
            .state
            .arrangement(problem)
            .ok_or(SessionError::NoArrangement { problem })?;
        Ok(ProblemView::build(&self.state, images, arrangement))
    }

    /// Put `label` into the zero-based answer `slot` of the current problem.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::Session` for a slot or label the current
    /// arrangement does not have.
    pub fn choose(&mut self, slot: usize, label: SlotLabel) -> Result<(), PuzzleError> {
        let problem = self.state.current_problem();
        self.ensure_arranged(problem)?;
        self.state.choose(problem, slot, label)?;
        Ok(())
    }

    /// Score the pending choice of the current problem.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError` if the pictures cannot be loaded.
    pub fn submit(&mut self) -> Result<SubmitOutcome, PuzzleError> {
        let problem = self.state.current_problem();
        self.ensure_arranged(problem)?;
        let definition = self.cached(problem)?.problem.clone();
        let outcome = self.state.submit_pending(&definition)?;
        self.log_outcome(problem, outcome);
        Ok(outcome)
    }

    /// Score an explicit proposal for `problem`.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::Session` when `problem` is not current or the
    /// labels do not fit its arrangement.
    pub fn submit_labels(
        &mut self,
        problem: ProblemIndex,
        proposed: &[SlotLabel],
    ) -> Result<SubmitOutcome, PuzzleError> {
        let current = self.state.current_problem();
        if problem != current {
            return Err(SessionError::StaleProblem {
                expected: current,
                got: problem,
            }
            .into());
        }
        self.load(problem)?;
        let definition = self.cached(problem)?.problem.clone();
        let outcome = self.state.submit(&definition, proposed)?;
        self.log_outcome(problem, outcome);
        Ok(outcome)
    }

    /// Shuffle the current problem again and restore its default choice.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError` if the pictures cannot be loaded or the shuffler
    /// misbehaves.
    pub fn reshuffle(&mut self) -> Result<(), PuzzleError> {
        let problem = self.state.current_problem();
        let arrangement = self.shuffle(problem)?;
        self.state.reshuffle(problem, arrangement);
        tracing::debug!(problem = problem.number(), "reshuffled");
        Ok(())
    }

    /// Move on without penalty.
    pub fn skip(&mut self) -> ProblemIndex {
        let next = self.state.skip();
        tracing::info!(next = next.number(), "problem skipped");
        next
    }

    /// Start over from the first problem. Loaded pictures stay cached.
    pub fn reset_all(&mut self) {
        self.state.reset_all();
        tracing::info!("session reset");
    }

    fn log_outcome(&self, problem: ProblemIndex, outcome: SubmitOutcome) {
        tracing::info!(
            problem = problem.number(),
            outcome = ?outcome,
            apples = self.state.apples_remaining(),
            failed = self.state.failed_problems(),
            "submission scored"
        );
    }

    fn load(&mut self, problem: ProblemIndex) -> Result<(), PuzzleError> {
        let slot = &mut self.loaded[problem.value()];
        if slot.is_none() {
            *slot = Some(self.images.load(problem)?);
        }
        Ok(())
    }

    fn cached(&self, problem: ProblemIndex) -> Result<&ProblemImages, PuzzleError> {
        self.loaded[problem.value()]
            .as_ref()
            .ok_or(PuzzleError::NotLoaded { problem })
    }

    fn shuffle(&mut self, problem: ProblemIndex) -> Result<Arrangement, PuzzleError> {
        self.load(problem)?;
        let definition = self.cached(problem)?.problem.clone();
        let order = self.shuffler.shuffle(definition.canonical_order());
        Ok(Arrangement::new(&definition, order)?)
    }

    fn ensure_arranged(&mut self, problem: ProblemIndex) -> Result<(), PuzzleError> {
        if self.state.arrangement(problem).is_none() {
            let arrangement = self.shuffle(problem)?;
            self.state.ensure_arrangement(problem, || arrangement);
        }
        Ok(())
    }
}
