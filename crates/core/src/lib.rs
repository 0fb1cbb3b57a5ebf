#![forbid(unsafe_code)]

pub mod model;
pub mod rules;
pub mod session;
pub mod shuffle;

pub use session::{SessionError, SessionState};
pub use shuffle::Shuffler;
