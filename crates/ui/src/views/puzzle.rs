use dioxus::prelude::*;
use sequence_core::model::SlotLabel;

use crate::context::use_puzzle_runner;
use crate::views::ViewError;
use crate::vm::{PuzzleIntent, PuzzleScreenVm, PuzzleVm, SlotVm, TileVm};

#[component]
pub fn PuzzleView() -> Element {
    let vm = use_context::<Signal<PuzzleVm>>();
    let error = use_context::<Signal<Option<ViewError>>>();
    let run = use_puzzle_runner();
    let screen = vm.read().screen().cloned();
    let notice = vm.read().notice();

    let notice_class = match notice {
        Some(notice) if notice.is_warning() => "notice warning",
        _ => "notice success",
    };

    rsx! {
        div { class: "page puzzle",
            match screen {
                Err(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                Ok(screen) => rsx! {
                    Header { screen: screen.clone() }
                    if let Some(notice) = notice {
                        p { class: notice_class, "{notice.message()}" }
                    }

                    p { "Look at the photos and choose them in the right order, slot 1 first." }
                    div { class: "tiles",
                        for tile in screen.tiles.clone() {
                            Tile { key: "{tile.label}", tile }
                        }
                    }
                    p { class: "teacher-note", "{screen.answer_note}" }

                    h3 { "Choose the order" }
                    div { class: "slots",
                        for slot in screen.slots.clone() {
                            SlotPicker {
                                key: "{slot.slot}",
                                slot,
                                on_choose: move |(slot, label): (usize, SlotLabel)| {
                                    run(PuzzleIntent::Choose { slot, label });
                                },
                            }
                        }
                    }
                    if let Some(warning) = screen.duplicate_warning {
                        p { class: "notice warning", "⚠️ {warning}" }
                    }

                    div { class: "actions",
                        button {
                            id: "puzzle-submit",
                            class: "primary",
                            onclick: move |_| run(PuzzleIntent::Submit),
                            "✅ Check"
                        }
                        button {
                            id: "puzzle-reshuffle",
                            onclick: move |_| run(PuzzleIntent::Reshuffle),
                            "↩️ Shuffle again"
                        }
                        button {
                            id: "puzzle-skip",
                            onclick: move |_| run(PuzzleIntent::Skip),
                            "⏭️ Skip to next problem (teacher)"
                        }
                        button {
                            id: "puzzle-reset",
                            onclick: move |_| run(PuzzleIntent::ResetAll),
                            "🧹 Reset all"
                        }
                    }
                },
            }
            if let Some(err) = error() {
                p { class: "error", "{err.message()}" }
            }
        }
    }
}

#[component]
fn Header(screen: PuzzleScreenVm) -> Element {
    let result_class = match &screen.result {
        Some(result) if result.correct => "result correct",
        _ => "result wrong",
    };

    rsx! {
        div { class: "puzzle-header",
            h2 { "{screen.title}" }
            p { class: "apples",
                strong { "Apples: " }
                "{screen.apple_bar}"
            }
            if let Some(result) = screen.result {
                p { class: result_class, "{result.text}" }
            }
        }
    }
}

#[component]
fn Tile(tile: TileVm) -> Element {
    rsx! {
        figure { class: "tile",
            if let Some(src) = tile.src.clone() {
                img { src: "{src}", alt: "{tile.label}" }
            } else {
                div { class: "tile-placeholder", "{tile.label}" }
            }
            figcaption {
                "{tile.label}"
                span { class: "file-name", " / file: {tile.file_name}" }
            }
        }
    }
}

#[component]
fn SlotPicker(slot: SlotVm, on_choose: EventHandler<(usize, SlotLabel)>) -> Element {
    let index = slot.slot;
    rsx! {
        label { class: "slot",
            span { class: "slot-prompt", "{slot.prompt}" }
            select {
                value: "{slot.selected}",
                onchange: move |evt| {
                    if let Some(label) = SlotLabel::parse(&evt.value()) {
                        on_choose.call((index, label));
                    }
                },
                for option in slot.options.clone() {
                    option {
                        value: "{option}",
                        selected: option == slot.selected,
                        "{option}"
                    }
                }
            }
        }
    }
}
