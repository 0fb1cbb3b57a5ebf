use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use sequence_core::model::ProblemIndex;
use sequence_core::shuffle::ReverseShuffler;
use services::PuzzleService;
use storage::InMemoryImageRepository;

use crate::context::{UiApp, build_app_context};
use crate::views::{GuideView, PuzzleView, ViewError};
use crate::vm::{PuzzleIntent, PuzzleVm};

struct TestApp {
    puzzle_service: Arc<PuzzleService>,
}

impl UiApp for TestApp {
    fn puzzle_service(&self) -> Arc<PuzzleService> {
        Arc::clone(&self.puzzle_service)
    }

    fn image_root(&self) -> PathBuf {
        PathBuf::from("images")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Puzzle,
    Guide,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    intents: Vec<PuzzleIntent>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    let intents = props.intents.clone();
    let mut last_error: Option<ViewError> = None;
    use_context_provider(|| {
        let session = ctx
            .puzzle_service()
            .start_session_with(Box::new(ReverseShuffler));
        let mut vm = PuzzleVm::new(session);
        for intent in intents {
            last_error = vm.apply(intent).err();
        }
        Signal::new(vm)
    });
    use_context_provider(move || Signal::new(last_error));

    match props.view {
        ViewKind::Puzzle => rsx! { PuzzleView {} },
        ViewKind::Guide => rsx! { GuideView {} },
    }
}

/// Render `view` over a three-picture first problem shown in reverse order,
/// after applying `intents`. The error of the last intent is shared the way
/// the app shares it.
pub fn render_view(view: ViewKind, intents: Vec<PuzzleIntent>) -> String {
    let repo = InMemoryImageRepository::new()
        .with_problem(ProblemIndex::FIRST, &["a.png", "b.png", "c.png"])
        .expect("in-memory problem");
    let app = Arc::new(TestApp {
        puzzle_service: Arc::new(PuzzleService::new(Arc::new(repo))),
    });

    let mut dom = VirtualDom::new_with_props(
        ViewHarness,
        ViewHarnessProps {
            app,
            view,
            intents,
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
