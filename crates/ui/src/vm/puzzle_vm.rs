use sequence_core::model::{AttemptResult, SlotLabel, SubmitOutcome};
use sequence_core::rules::TOTAL_PROBLEMS;
use services::{ProblemView, PuzzleError, PuzzleSession};

use crate::views::ViewError;

const APPLE: &str = "🍎";
const SPENT_APPLE: &str = "⚪";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PuzzleIntent {
    Choose { slot: usize, label: SlotLabel },
    Submit,
    Reshuffle,
    Skip,
    ResetAll,
}

/// One-shot message about the last command, shown under the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Solved,
    ProblemFailed,
    SessionReset,
    Skipped,
    ResetDone,
}

impl Notice {
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Notice::Solved => "🎉 Well done! On to the next problem.".to_string(),
            Notice::ProblemFailed => {
                "All apples are gone. Moving on to the next problem.".to_string()
            }
            Notice::SessionReset => {
                format!("All {TOTAL_PROBLEMS} problems were missed. Starting over.")
            }
            Notice::Skipped => "Skipped to the next problem.".to_string(),
            Notice::ResetDone => "Starting over from the beginning.".to_string(),
        }
    }

    #[must_use]
    pub fn is_warning(self) -> bool {
        matches!(self, Notice::ProblemFailed | Notice::SessionReset)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultBannerVm {
    pub text: String,
    pub correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileVm {
    pub label: String,
    pub src: Option<String>,
    pub file_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotVm {
    pub slot: usize,
    pub prompt: String,
    pub selected: String,
    pub options: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleScreenVm {
    pub title: String,
    pub apple_bar: String,
    pub result: Option<ResultBannerVm>,
    pub tiles: Vec<TileVm>,
    pub slots: Vec<SlotVm>,
    pub duplicate_warning: Option<&'static str>,
    pub answer_key: Vec<String>,
    /// Caption under the picture strip naming the files in answer order.
    pub answer_note: String,
}

/// `remaining` apples followed by spent markers up to `max`.
#[must_use]
pub fn apple_bar(remaining: u8, max: u8) -> String {
    let remaining = remaining.min(max);
    let mut marks = Vec::with_capacity(usize::from(max));
    marks.extend(std::iter::repeat_n(APPLE, usize::from(remaining)));
    marks.extend(std::iter::repeat_n(SPENT_APPLE, usize::from(max - remaining)));
    marks.join(" ")
}

#[must_use]
pub fn map_puzzle_screen(view: &ProblemView) -> PuzzleScreenVm {
    let options: Vec<String> = view.options().iter().map(ToString::to_string).collect();

    let tiles = view
        .tiles
        .iter()
        .map(|tile| TileVm {
            label: tile.label.to_string(),
            src: tile
                .asset
                .path
                .as_ref()
                .map(|path| path.display().to_string()),
            file_name: tile.asset.id.to_string(),
        })
        .collect();

    let slots = view
        .choice
        .iter()
        .enumerate()
        .map(|(slot, label)| SlotVm {
            slot,
            prompt: format!("Which photo goes in slot {}?", slot + 1),
            selected: label.to_string(),
            options: options.clone(),
        })
        .collect();

    let result = view.last_result.map(|result| {
        let verdict = match result {
            AttemptResult::Correct => "Correct!",
            AttemptResult::Incorrect => "Wrong!",
        };
        ResultBannerVm {
            text: format!("{verdict} {}", result.mark()),
            correct: result == AttemptResult::Correct,
        }
    });

    let duplicate_warning = view.has_duplicate_choice().then_some(
        "The same photo is in more than one slot. Pick a different photo for each slot.",
    );

    let answer_key: Vec<String> = view
        .answer_key
        .iter()
        .map(|asset| asset.id.to_string())
        .collect();
    let answer_note = format!(
        "Teacher: the answer order is {} (file names ascending).",
        answer_key.join(" → ")
    );

    PuzzleScreenVm {
        title: format!("Problem {} / {}", view.problem.number(), view.total_problems),
        apple_bar: apple_bar(view.apples_remaining, view.max_apples),
        result,
        tiles,
        slots,
        duplicate_warning,
        answer_key,
        answer_note,
    }
}

/// Owns the puzzle session and the last rendered screen.
///
/// Every intent runs to completion and refreshes the screen, so components
/// only ever read a finished snapshot.
pub struct PuzzleVm {
    session: PuzzleSession,
    screen: Result<PuzzleScreenVm, ViewError>,
    notice: Option<Notice>,
}

impl PuzzleVm {
    #[must_use]
    pub fn new(session: PuzzleSession) -> Self {
        let mut vm = Self {
            session,
            screen: Err(ViewError::Unknown),
            notice: None,
        };
        vm.refresh();
        vm
    }

    /// # Errors
    ///
    /// Returns the error of the last refresh when the pictures could not be
    /// loaded.
    pub fn screen(&self) -> Result<&PuzzleScreenVm, ViewError> {
        self.screen.as_ref().map_err(|err| *err)
    }

    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// # Errors
    ///
    /// Returns `ViewError` if the command or the following refresh failed.
    pub fn apply(&mut self, intent: PuzzleIntent) -> Result<(), ViewError> {
        let result = self.run(intent);
        self.refresh();
        result.map_err(ViewError::from)?;
        self.screen().map(|_| ())
    }

    fn run(&mut self, intent: PuzzleIntent) -> Result<(), PuzzleError> {
        match intent {
            PuzzleIntent::Choose { slot, label } => {
                self.session.choose(slot, label)?;
                self.notice = None;
            }
            PuzzleIntent::Submit => {
                let outcome = self.session.submit()?;
                self.notice = match outcome {
                    SubmitOutcome::Correct { .. } => Some(Notice::Solved),
                    SubmitOutcome::ProblemFailed { .. } => Some(Notice::ProblemFailed),
                    SubmitOutcome::SessionReset => Some(Notice::SessionReset),
                    SubmitOutcome::Incorrect { .. } => None,
                };
            }
            PuzzleIntent::Reshuffle => {
                self.session.reshuffle()?;
                self.notice = None;
            }
            PuzzleIntent::Skip => {
                self.session.skip();
                self.notice = Some(Notice::Skipped);
            }
            PuzzleIntent::ResetAll => {
                self.session.reset_all();
                self.notice = Some(Notice::ResetDone);
            }
        }
        Ok(())
    }

    fn refresh(&mut self) {
        self.screen = self
            .session
            .view()
            .map(|view| map_puzzle_screen(&view))
            .map_err(ViewError::from);
    }
}
