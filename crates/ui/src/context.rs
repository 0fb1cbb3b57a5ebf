use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::prelude::*;
use services::PuzzleService;

use crate::views::ViewError;
use crate::vm::{PuzzleIntent, PuzzleVm};

pub trait UiApp: Send + Sync {
    fn puzzle_service(&self) -> Arc<PuzzleService>;

    /// Folder the teacher fills with `problem_{n}` picture folders.
    fn image_root(&self) -> PathBuf;
}

#[derive(Clone)]
pub struct AppContext {
    puzzle_service: Arc<PuzzleService>,
    image_root: PathBuf,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            puzzle_service: app.puzzle_service(),
            image_root: app.image_root(),
        }
    }

    #[must_use]
    pub fn puzzle_service(&self) -> Arc<PuzzleService> {
        Arc::clone(&self.puzzle_service)
    }

    #[must_use]
    pub fn image_root(&self) -> &Path {
        &self.image_root
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Start a puzzle session and share it, together with the error of the last
/// command, with every component below the caller.
pub fn use_puzzle_provider() -> Signal<PuzzleVm> {
    let ctx = use_context::<AppContext>();
    use_context_provider(|| Signal::new(None::<ViewError>));
    use_context_provider(move || Signal::new(PuzzleVm::new(ctx.puzzle_service().start_session())))
}

/// Handler that applies an intent to the shared session and records its error.
pub fn use_puzzle_runner() -> impl Fn(PuzzleIntent) + Copy {
    let vm = use_context::<Signal<PuzzleVm>>();
    let error = use_context::<Signal<Option<ViewError>>>();
    move |intent| {
        let (mut vm, mut error) = (vm, error);
        let result = vm.write().apply(intent);
        error.set(result.err());
    }
}
