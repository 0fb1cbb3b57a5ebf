use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::{use_puzzle_provider, use_puzzle_runner};
use crate::views::{GuideView, PuzzleView};
use crate::vm::PuzzleIntent;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", PuzzleView)] Puzzle {},
        #[route("/guide", GuideView)] Guide {},
}

#[component]
fn Layout() -> Element {
    // The session lives above the outlet so it survives page switches.
    use_puzzle_provider();

    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let run = use_puzzle_runner();

    rsx! {
        nav { class: "sidebar",
            h1 { "Picture Order" }
            ul {
                li { Link { to: Route::Puzzle {}, "Puzzle" } }
                li { Link { to: Route::Guide {}, "Teacher notes" } }
            }
            button {
                class: "sidebar-reset",
                onclick: move |_| run(PuzzleIntent::ResetAll),
                "Start over"
            }
        }
    }
}
