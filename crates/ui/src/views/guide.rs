use dioxus::prelude::*;
use sequence_core::rules::{PLACEHOLDER_COUNT, TOTAL_PROBLEMS};

use crate::context::{AppContext, use_puzzle_runner};
use crate::views::ViewError;
use crate::vm::{Notice, PuzzleIntent, PuzzleVm};

#[component]
pub fn GuideView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_context::<Signal<PuzzleVm>>();
    let error = use_context::<Signal<Option<ViewError>>>();
    let run = use_puzzle_runner();
    let root = ctx.image_root().display().to_string();
    let folders: Vec<String> = (1..=TOTAL_PROBLEMS)
        .map(|n| format!("{root}/problem_{n}"))
        .collect();
    let answer_key = vm
        .read()
        .screen()
        .map(|screen| (screen.title.clone(), screen.answer_key.clone()))
        .ok();
    let reset_done = vm.read().notice() == Some(Notice::ResetDone);

    rsx! {
        div { class: "page guide",
            h2 { "Teacher notes" }
            p { "Put the pictures of each problem in its own folder:" }
            ul {
                for folder in folders {
                    li { code { "{folder}" } }
                }
            }
            p { "The correct order is the file names sorted ascending (e.g. 01_..., 02_..., 03_...)." }
            p {
                "An empty folder gets {PLACEHOLDER_COUNT} placeholder pictures. Rename files so children cannot read the answer from them."
            }

            if let Some((title, key)) = answer_key {
                h3 { "Answer key: {title}" }
                ol { class: "answer-key",
                    for name in key {
                        li { "{name}" }
                    }
                }
            }

            button {
                class: "reset-all",
                onclick: move |_| run(PuzzleIntent::ResetAll),
                "Reset everything (start from the beginning)"
            }
            if reset_done {
                p { class: "notice success", "{Notice::ResetDone.message()}" }
            }
            if let Some(err) = error() {
                p { class: "error", "{err.message()}" }
            }
        }
    }
}
