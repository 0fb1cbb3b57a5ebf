mod puzzle_vm;

pub use puzzle_vm::{
    Notice, PuzzleIntent, PuzzleScreenVm, PuzzleVm, ResultBannerVm, SlotVm, TileVm, apple_bar,
    map_puzzle_screen,
};
