mod arrangement;
mod ids;
mod outcome;
mod problem;

pub use arrangement::{Arrangement, ArrangementError};
pub use ids::{ImageId, ProblemIndex, SlotLabel};
pub use outcome::{AttemptResult, SubmitOutcome};
pub use problem::{Problem, ProblemError, has_duplicates};
