use sequence_core::model::SlotLabel;
use sequence_core::rules::MAX_APPLES;

use super::test_harness::{ViewKind, render_view};
use crate::vm::PuzzleIntent;

#[test]
fn puzzle_view_smoke_renders_header_and_slots() {
    let html = render_view(ViewKind::Puzzle, Vec::new());
    assert!(html.contains("Problem 1 / 3"), "missing header in {html}");
    assert!(html.contains("🍎 🍎 🍎 🍎 🍎"), "missing apples in {html}");
    assert!(html.contains("Which photo goes in slot 3?"), "missing slot in {html}");
    assert!(html.contains("Photo 2"), "missing option in {html}");
    assert!(!html.contains("same photo"), "unexpected warning in {html}");
}

#[test]
fn puzzle_view_smoke_warns_about_duplicates() {
    let html = render_view(
        ViewKind::Puzzle,
        vec![PuzzleIntent::Choose {
            slot: 0,
            label: SlotLabel::new(2),
        }],
    );
    assert!(html.contains("same photo"), "missing warning in {html}");
}

#[test]
fn puzzle_view_smoke_shows_wrong_banner() {
    let html = render_view(ViewKind::Puzzle, vec![PuzzleIntent::Submit]);
    assert!(html.contains("Wrong! X"), "missing banner in {html}");
    assert!(html.contains("🍎 🍎 🍎 🍎 ⚪"), "missing spent apple in {html}");
}

#[test]
fn puzzle_view_smoke_shows_correct_banner_on_next_problem() {
    // Pictures are shown reversed, so picking 3, 2, 1 is the answer.
    let mut intents: Vec<PuzzleIntent> = [3, 2, 1]
        .into_iter()
        .enumerate()
        .map(|(slot, position)| PuzzleIntent::Choose {
            slot,
            label: SlotLabel::new(position),
        })
        .collect();
    intents.push(PuzzleIntent::Submit);

    let html = render_view(ViewKind::Puzzle, intents);
    assert!(html.contains("Correct! O"), "missing banner in {html}");
    assert!(html.contains("Well done!"), "missing celebration in {html}");
    assert!(html.contains("Problem 2 / 3"), "missing header in {html}");
}

#[test]
fn puzzle_view_smoke_announces_lost_problem() {
    let intents = vec![PuzzleIntent::Submit; usize::from(MAX_APPLES)];
    let html = render_view(ViewKind::Puzzle, intents);
    assert!(html.contains("All apples are gone"), "missing notice in {html}");
    assert!(html.contains("Problem 2 / 3"), "missing header in {html}");
}

#[test]
fn guide_view_smoke_lists_folders_and_answer_key() {
    let html = render_view(ViewKind::Guide, Vec::new());
    assert!(html.contains("images/problem_1"), "missing folder in {html}");
    assert!(html.contains("images/problem_3"), "missing folder in {html}");
    assert!(html.contains("Answer key: Problem 1 / 3"), "missing key in {html}");
    assert!(html.contains("a.png"), "missing file in {html}");
}

#[test]
fn puzzle_view_smoke_shows_file_name_captions_and_answer_note() {
    let html = render_view(ViewKind::Puzzle, Vec::new());
    assert!(html.contains("file: c.png"), "missing caption in {html}");
    assert!(
        html.contains("the answer order is a.png → b.png → c.png"),
        "missing teacher note in {html}"
    );
}

#[test]
fn puzzle_view_smoke_shows_failed_command_error() {
    let html = render_view(
        ViewKind::Puzzle,
        vec![PuzzleIntent::Choose {
            slot: 0,
            label: SlotLabel::new(9),
        }],
    );
    assert!(html.contains("Something went wrong"), "missing error in {html}");
}

#[test]
fn guide_view_smoke_shows_failed_command_error() {
    let html = render_view(
        ViewKind::Guide,
        vec![PuzzleIntent::Choose {
            slot: 7,
            label: SlotLabel::new(1),
        }],
    );
    assert!(html.contains("Something went wrong"), "missing error in {html}");
}
