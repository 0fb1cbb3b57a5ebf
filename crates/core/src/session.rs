//! Problem/attempt state machine.
//!
//! `SessionState` tracks which problem is on screen, how many apples are left,
//! how many problems were failed, and the per-problem presentation state. All
//! transitions are synchronous and in memory; callers supply the loaded
//! `Problem` and any freshly shuffled `Arrangement`.

use thiserror::Error;

use crate::model::{
    Arrangement, ArrangementError, AttemptResult, Problem, ProblemIndex, SlotLabel, SubmitOutcome,
};
use crate::rules::{MAX_APPLES, TOTAL_PROBLEMS};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Inputs the display surface should never produce. Returning one leaves the
/// state untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("submission for problem {got} but problem {expected} is current")]
    StaleProblem {
        expected: ProblemIndex,
        got: ProblemIndex,
    },

    #[error("problem {problem} has not been shown yet")]
    NoArrangement { problem: ProblemIndex },

    #[error("expected {expected} choices, got {got}")]
    SlotCountMismatch { expected: usize, got: usize },

    #[error("slot {slot} is out of range for {slots} slots")]
    SlotOutOfRange { slot: usize, slots: usize },

    #[error(transparent)]
    Arrangement(#[from] ArrangementError),
}

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    current_problem: ProblemIndex,
    apples_remaining: u8,
    failed_problems: u8,
    last_result: Option<AttemptResult>,
    arrangements: Vec<Option<Arrangement>>,
    choices: Vec<Option<Vec<SlotLabel>>>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// A fresh session: first problem, full apples, nothing shuffled yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_problem: ProblemIndex::FIRST,
            apples_remaining: MAX_APPLES,
            failed_problems: 0,
            last_result: None,
            arrangements: vec![None; TOTAL_PROBLEMS],
            choices: vec![None; TOTAL_PROBLEMS],
        }
    }

    #[must_use]
    pub fn current_problem(&self) -> ProblemIndex {
        self.current_problem
    }

    #[must_use]
    pub fn apples_remaining(&self) -> u8 {
        self.apples_remaining
    }

    #[must_use]
    pub fn failed_problems(&self) -> u8 {
        self.failed_problems
    }

    #[must_use]
    pub fn last_result(&self) -> Option<AttemptResult> {
        self.last_result
    }

    #[must_use]
    pub fn arrangement(&self, problem: ProblemIndex) -> Option<&Arrangement> {
        self.arrangements[problem.value()].as_ref()
    }

    /// The in-progress selection for `problem`, one label per slot.
    #[must_use]
    pub fn pending_choice(&self, problem: ProblemIndex) -> Option<&[SlotLabel]> {
        self.choices[problem.value()].as_deref()
    }

    /// Return the memoized arrangement for `problem`, creating it with `make`
    /// on first access.
    pub fn ensure_arrangement(
        &mut self,
        problem: ProblemIndex,
        make: impl FnOnce() -> Arrangement,
    ) -> &Arrangement {
        let slot = problem.value();
        let choice = &mut self.choices[slot];
        self.arrangements[slot].get_or_insert_with(|| {
            let arrangement = make();
            *choice = Some(arrangement.default_choice());
            arrangement
        })
    }

    /// Replace the arrangement of `problem` and restore its default choice.
    ///
    /// Apples, failures and the last result are left alone.
    pub fn reshuffle(&mut self, problem: ProblemIndex, arrangement: Arrangement) {
        let slot = problem.value();
        self.choices[slot] = Some(arrangement.default_choice());
        self.arrangements[slot] = Some(arrangement);
    }

    /// Put `label` into the zero-based answer `slot` of `problem`.
    ///
    /// Picking a label already used by another slot is allowed; the surface
    /// only warns about it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoArrangement` if the problem was never shown,
    /// `SessionError::SlotOutOfRange` for a bad slot, and
    /// `SessionError::Arrangement` for a label outside the arrangement.
    pub fn choose(
        &mut self,
        problem: ProblemIndex,
        slot: usize,
        label: SlotLabel,
    ) -> Result<(), SessionError> {
        let index = problem.value();
        let arrangement = self.arrangements[index]
            .as_ref()
            .ok_or(SessionError::NoArrangement { problem })?;
        if arrangement.image_for(label).is_none() {
            return Err(ArrangementError::UnknownLabel { label }.into());
        }
        let slots = arrangement.len();
        let choice = self.choices[index].get_or_insert_with(|| arrangement.default_choice());
        let entry = choice
            .get_mut(slot)
            .ok_or(SessionError::SlotOutOfRange { slot, slots })?;
        *entry = label;
        Ok(())
    }

    /// Score `proposed` against `problem` and apply the transition.
    ///
    /// Correct: advance with apples refilled. Incorrect: spend an apple; when
    /// none are left the problem counts as failed and the session advances,
    /// unless every problem has now failed, in which case the whole session
    /// resets.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when `problem` is not the current problem, was
    /// never shown, or `proposed` has the wrong length or an unknown label.
    pub fn submit(
        &mut self,
        problem: &Problem,
        proposed: &[SlotLabel],
    ) -> Result<SubmitOutcome, SessionError> {
        let index = problem.index();
        if index != self.current_problem {
            return Err(SessionError::StaleProblem {
                expected: self.current_problem,
                got: index,
            });
        }
        let arrangement = self
            .arrangement(index)
            .ok_or(SessionError::NoArrangement { problem: index })?;
        if proposed.len() != problem.len() {
            return Err(SessionError::SlotCountMismatch {
                expected: problem.len(),
                got: proposed.len(),
            });
        }
        let resolved = arrangement.resolve(proposed)?;

        if problem.is_solved_by(&resolved) {
            self.advance();
            self.last_result = Some(AttemptResult::Correct);
            return Ok(SubmitOutcome::Correct {
                next_problem: self.current_problem,
            });
        }

        self.last_result = Some(AttemptResult::Incorrect);
        self.apples_remaining = self.apples_remaining.saturating_sub(1);
        if self.apples_remaining > 0 {
            return Ok(SubmitOutcome::Incorrect {
                apples_remaining: self.apples_remaining,
            });
        }

        self.failed_problems = self.failed_problems.saturating_add(1);
        self.advance();
        self.last_result = Some(AttemptResult::Incorrect);
        if usize::from(self.failed_problems) >= TOTAL_PROBLEMS {
            self.reset_all();
            return Ok(SubmitOutcome::SessionReset);
        }

        Ok(SubmitOutcome::ProblemFailed {
            next_problem: self.current_problem,
            failed_problems: self.failed_problems,
        })
    }

    /// Submit the stored pending choice of `problem`.
    ///
    /// # Errors
    ///
    /// See [`SessionState::submit`].
    pub fn submit_pending(&mut self, problem: &Problem) -> Result<SubmitOutcome, SessionError> {
        let proposed = self
            .pending_choice(problem.index())
            .ok_or(SessionError::NoArrangement {
                problem: problem.index(),
            })?
            .to_vec();
        self.submit(problem, &proposed)
    }

    /// Move on without scoring. Never counts as a failure.
    pub fn skip(&mut self) -> ProblemIndex {
        self.advance();
        self.current_problem
    }

    /// Restore every counter and drop all presentation state.
    pub fn reset_all(&mut self) {
        *self = Self::new();
    }

    fn advance(&mut self) {
        self.current_problem = self.current_problem.next();
        self.apples_remaining = MAX_APPLES;
        self.last_result = None;
        let slot = self.current_problem.value();
        self.arrangements[slot] = None;
        self.choices[slot] = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ImageId;

    fn id(name: &str) -> ImageId {
        ImageId::new(name).unwrap()
    }

    fn problem(index: usize) -> Problem {
        Problem::new(
            ProblemIndex::new(index).unwrap(),
            vec![id("a"), id("b"), id("c")],
        )
        .unwrap()
    }

    /// Shows `problem` with the pictures in the given display order.
    fn show(state: &mut SessionState, problem: &Problem, order: &[&str]) {
        let arrangement =
            Arrangement::new(problem, order.iter().map(|name| id(name)).collect()).unwrap();
        state.ensure_arrangement(problem.index(), || arrangement);
    }

    /// Labels that resolve to `names` under the arrangement of `problem`.
    fn labels_for(state: &SessionState, problem: &Problem, names: &[&str]) -> Vec<SlotLabel> {
        let arrangement = state.arrangement(problem.index()).unwrap();
        names
            .iter()
            .map(|name| arrangement.label_of(&id(name)).unwrap())
            .collect()
    }

    fn fail_current(state: &mut SessionState) -> SubmitOutcome {
        let p = problem(state.current_problem().value());
        show(state, &p, &["c", "b", "a"]);
        let wrong = labels_for(state, &p, &["b", "a", "c"]);
        let mut outcome = None;
        while state.current_problem() == p.index() {
            outcome = Some(state.submit(&p, &wrong).unwrap());
            if matches!(outcome, Some(SubmitOutcome::SessionReset)) {
                break;
            }
        }
        outcome.unwrap()
    }

    #[test]
    fn new_state_has_defaults() {
        let state = SessionState::new();
        assert_eq!(state.current_problem(), ProblemIndex::FIRST);
        assert_eq!(state.apples_remaining(), MAX_APPLES);
        assert_eq!(state.failed_problems(), 0);
        assert_eq!(state.last_result(), None);
        assert!(ProblemIndex::all().all(|p| state.arrangement(p).is_none()));
    }

    #[test]
    fn wrong_then_right_scenario() {
        let mut state = SessionState::new();
        let p0 = problem(0);
        show(&mut state, &p0, &["c", "a", "b"]);

        let wrong = labels_for(&state, &p0, &["b", "a", "c"]);
        let outcome = state.submit(&p0, &wrong).unwrap();
        assert_eq!(outcome, SubmitOutcome::Incorrect { apples_remaining: 4 });
        assert_eq!(state.apples_remaining(), 4);
        assert_eq!(state.last_result(), Some(AttemptResult::Incorrect));

        let right = labels_for(&state, &p0, &["a", "b", "c"]);
        let outcome = state.submit(&p0, &right).unwrap();
        let p1 = ProblemIndex::new(1).unwrap();
        assert_eq!(outcome, SubmitOutcome::Correct { next_problem: p1 });
        assert_eq!(state.current_problem(), p1);
        assert_eq!(state.apples_remaining(), MAX_APPLES);
        assert_eq!(state.last_result(), Some(AttemptResult::Correct));
        assert!(state.arrangement(p1).is_none());
    }

    #[test]
    fn duplicate_choice_is_scored_incorrect() {
        let mut state = SessionState::new();
        let p0 = problem(0);
        show(&mut state, &p0, &["a", "b", "c"]);

        let outcome = state
            .submit(&p0, &[SlotLabel::new(1), SlotLabel::new(1), SlotLabel::new(3)])
            .unwrap();
        assert_eq!(outcome.result(), AttemptResult::Incorrect);
    }

    #[test]
    fn identity_shuffle_default_choice_is_correct() {
        let mut state = SessionState::new();
        let p0 = problem(0);
        show(&mut state, &p0, &["a", "b", "c"]);

        let outcome = state.submit_pending(&p0).unwrap();
        assert_eq!(outcome.result(), AttemptResult::Correct);
    }

    #[test]
    fn last_apple_fails_problem_and_advances() {
        let mut state = SessionState::new();
        let p0 = problem(0);
        show(&mut state, &p0, &["c", "b", "a"]);
        let wrong = labels_for(&state, &p0, &["b", "a", "c"]);
        for _ in 0..MAX_APPLES - 1 {
            state.submit(&p0, &wrong).unwrap();
        }
        assert_eq!(state.apples_remaining(), 1);

        let outcome = state.submit(&p0, &wrong).unwrap();
        let p1 = ProblemIndex::new(1).unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::ProblemFailed {
                next_problem: p1,
                failed_problems: 1
            }
        );
        assert_eq!(state.failed_problems(), 1);
        assert_eq!(state.current_problem(), p1);
        assert_eq!(state.apples_remaining(), MAX_APPLES);
    }

    #[test]
    fn failing_every_problem_resets_session() {
        let mut state = SessionState::new();
        assert!(matches!(
            fail_current(&mut state),
            SubmitOutcome::ProblemFailed { .. }
        ));
        assert!(matches!(
            fail_current(&mut state),
            SubmitOutcome::ProblemFailed { failed_problems: 2, .. }
        ));
        assert_eq!(fail_current(&mut state), SubmitOutcome::SessionReset);

        assert_eq!(state, SessionState::new());
    }

    #[test]
    fn correct_on_last_problem_wraps_to_first() {
        let mut state = SessionState::new();
        state.skip();
        state.skip();
        let last = problem(TOTAL_PROBLEMS - 1);
        assert_eq!(state.current_problem(), last.index());
        show(&mut state, &last, &["b", "c", "a"]);

        let right = labels_for(&state, &last, &["a", "b", "c"]);
        let outcome = state.submit(&last, &right).unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Correct {
                next_problem: ProblemIndex::FIRST
            }
        );
    }

    #[test]
    fn reshuffle_touches_only_target_problem() {
        let mut state = SessionState::new();
        let p0 = problem(0);
        show(&mut state, &p0, &["c", "a", "b"]);
        let wrong = labels_for(&state, &p0, &["b", "a", "c"]);
        state.submit(&p0, &wrong).unwrap();
        state.choose(p0.index(), 0, SlotLabel::new(3)).unwrap();

        let before = state.clone();
        let fresh = Arrangement::new(&p0, vec![id("b"), id("c"), id("a")]).unwrap();
        state.reshuffle(p0.index(), fresh.clone());

        assert_eq!(state.arrangement(p0.index()), Some(&fresh));
        assert_eq!(
            state.pending_choice(p0.index()),
            Some(fresh.default_choice().as_slice())
        );
        assert_eq!(state.apples_remaining(), before.apples_remaining());
        assert_eq!(state.failed_problems(), before.failed_problems());
        assert_eq!(state.last_result(), before.last_result());
        assert_eq!(state.current_problem(), before.current_problem());
    }

    #[test]
    fn reshuffle_leaves_other_problems_alone() {
        let mut state = SessionState::new();
        let p0 = problem(0);
        let p1 = problem(1);
        show(&mut state, &p0, &["c", "a", "b"]);
        state.choose(p0.index(), 1, SlotLabel::new(1)).unwrap();
        state.skip();
        assert_eq!(state.current_problem(), p1.index());

        let p0_arrangement = state.arrangement(p0.index()).cloned();
        let p0_choice = state.pending_choice(p0.index()).map(<[SlotLabel]>::to_vec);
        assert!(p0_arrangement.is_some());

        show(&mut state, &p1, &["a", "c", "b"]);
        let fresh = Arrangement::new(&p1, vec![id("b"), id("a"), id("c")]).unwrap();
        state.reshuffle(p1.index(), fresh.clone());

        assert_eq!(state.arrangement(p1.index()), Some(&fresh));
        assert_eq!(state.arrangement(p0.index()).cloned(), p0_arrangement);
        assert_eq!(
            state.pending_choice(p0.index()).map(<[SlotLabel]>::to_vec),
            p0_choice
        );
    }

    #[test]
    fn ensure_arrangement_is_memoized() {
        let mut state = SessionState::new();
        let p0 = problem(0);
        show(&mut state, &p0, &["c", "a", "b"]);
        let again = state.ensure_arrangement(p0.index(), || unreachable!("already shown"));
        assert_eq!(again.order()[0], id("c"));
    }

    #[test]
    fn skip_does_not_count_failure() {
        let mut state = SessionState::new();
        let p0 = problem(0);
        show(&mut state, &p0, &["c", "a", "b"]);
        let wrong = labels_for(&state, &p0, &["b", "a", "c"]);
        state.submit(&p0, &wrong).unwrap();

        for _ in 0..TOTAL_PROBLEMS * 2 {
            state.skip();
        }
        assert_eq!(state.failed_problems(), 0);
        assert_eq!(state.apples_remaining(), MAX_APPLES);
        assert_eq!(state.last_result(), None);
        assert_eq!(state.current_problem(), ProblemIndex::FIRST);
    }

    #[test]
    fn choose_edits_one_slot_and_allows_duplicates() {
        let mut state = SessionState::new();
        let p0 = problem(0);
        show(&mut state, &p0, &["c", "a", "b"]);

        state.choose(p0.index(), 2, SlotLabel::new(1)).unwrap();
        assert_eq!(
            state.pending_choice(p0.index()).unwrap(),
            &[SlotLabel::new(1), SlotLabel::new(2), SlotLabel::new(1)]
        );

        let err = state.choose(p0.index(), 3, SlotLabel::new(1)).unwrap_err();
        assert_eq!(err, SessionError::SlotOutOfRange { slot: 3, slots: 3 });
        let err = state.choose(p0.index(), 0, SlotLabel::new(7)).unwrap_err();
        assert!(matches!(err, SessionError::Arrangement(_)));
    }

    #[test]
    fn surface_defects_leave_state_untouched() {
        let mut state = SessionState::new();
        let p0 = problem(0);
        let p1 = problem(1);

        let err = state.submit(&p0, &[SlotLabel::new(1)]).unwrap_err();
        assert_eq!(err, SessionError::NoArrangement { problem: p0.index() });

        show(&mut state, &p0, &["c", "a", "b"]);
        let before = state.clone();

        let err = state.submit(&p1, &[]).unwrap_err();
        assert!(matches!(err, SessionError::StaleProblem { .. }));
        let err = state.submit(&p0, &[SlotLabel::new(1)]).unwrap_err();
        assert_eq!(err, SessionError::SlotCountMismatch { expected: 3, got: 1 });
        let err = state
            .submit(&p0, &[SlotLabel::new(1), SlotLabel::new(2), SlotLabel::new(9)])
            .unwrap_err();
        assert!(matches!(err, SessionError::Arrangement(_)));

        assert_eq!(state, before);
    }

    #[test]
    fn reset_all_clears_everything() {
        let mut state = SessionState::new();
        fail_current(&mut state);
        let p1 = problem(1);
        show(&mut state, &p1, &["c", "a", "b"]);

        state.reset_all();
        assert_eq!(state, SessionState::new());
    }
}
