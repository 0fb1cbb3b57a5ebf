use crate::model::ids::ProblemIndex;

/// Verdict of the most recent submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptResult {
    /// The proposed order matched the canonical order. Shown as "O".
    Correct,
    /// The proposed order differed. Shown as "X".
    Incorrect,
}

impl AttemptResult {
    /// The single-letter mark used on the result banner.
    #[must_use]
    pub fn mark(self) -> char {
        match self {
            AttemptResult::Correct => 'O',
            AttemptResult::Incorrect => 'X',
        }
    }
}

/// Transition taken by a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Solved; moved on to `next_problem` with a full set of apples.
    Correct { next_problem: ProblemIndex },
    /// Wrong; still on the same problem with `apples_remaining` left.
    Incorrect { apples_remaining: u8 },
    /// Wrong and out of apples; the problem counts as failed.
    ProblemFailed {
        next_problem: ProblemIndex,
        failed_problems: u8,
    },
    /// Wrong, out of apples, and every problem has now failed: the whole
    /// session restarted from the first problem.
    SessionReset,
}

impl SubmitOutcome {
    #[must_use]
    pub fn result(self) -> AttemptResult {
        match self {
            SubmitOutcome::Correct { .. } => AttemptResult::Correct,
            SubmitOutcome::Incorrect { .. }
            | SubmitOutcome::ProblemFailed { .. }
            | SubmitOutcome::SessionReset => AttemptResult::Incorrect,
        }
    }
}
