use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use sequence_core::model::ProblemIndex;
use services::PuzzleService;
use storage::{FsImageRepository, Storage};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Parser, Debug)]
#[command(name = "picture-order")]
#[command(version, about = "Put the pictures in the right order", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Folder holding the `problem_{n}` picture folders
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        env = "PICTURE_ORDER_IMAGES",
        default_value = "images"
    )]
    images: PathBuf,

    /// Fixed shuffle seed for repeatable sessions
    #[arg(long, global = true, env = "PICTURE_ORDER_SEED")]
    seed: Option<u64>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Open the puzzle window (default)
    Ui,
    /// Write placeholder pictures into empty problem folders and exit
    Seed,
}

struct DesktopApp {
    puzzle_service: Arc<PuzzleService>,
    image_root: PathBuf,
}

impl UiApp for DesktopApp {
    fn puzzle_service(&self) -> Arc<PuzzleService> {
        Arc::clone(&self.puzzle_service)
    }

    fn image_root(&self) -> PathBuf {
        self.image_root.clone()
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn seed(images: &FsImageRepository) -> Result<(), Box<dyn std::error::Error>> {
    for problem in ProblemIndex::all() {
        let written = images.seed_placeholders(problem)?;
        println!(
            "{}: {written} placeholder(s) written",
            images.problem_dir(problem).display()
        );
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Command::Ui) {
        Command::Seed => seed(&FsImageRepository::new(&cli.images)),
        Command::Ui => {
            tracing::info!(
                images = %cli.images.display(),
                seed = ?cli.seed,
                "starting picture order"
            );
            let storage = Storage::filesystem(&cli.images);
            let puzzle_service = PuzzleService::new(storage.images).with_seed(cli.seed);
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                puzzle_service: Arc::new(puzzle_service),
                image_root: cli.images,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Picture Order")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
