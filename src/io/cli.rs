//! Command-line interface: slicing images and simulated play-throughs

use crate::io::configuration::{
    DEFAULT_DROP_TOLERANCE, DEFAULT_MISDROP_CHANCE, DEFAULT_SEED, DEFAULT_VIEWPORT_HEIGHT,
    DEFAULT_VIEWPORT_WIDTH, GRID_SPACING, PIECE_FILE_EXTENSION, PIECES_DIR_SUFFIX,
};
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::io::image::{export_pieces, load_image, slice_image};
use crate::io::play::{LevelSummary, SimulatedPlayer, play_level};
use crate::io::progress::ProgressManager;
use crate::level::catalog::{LEVEL_CATALOG, LevelIndex, level_at, level_by_name};
use crate::level::navigator::{NavigationEvent, Screen, navigate};
use crate::placement::{PlacementConfig, ToleranceWindow};
use crate::session::GameSession;
use crate::spatial::geometry::Size;
use crate::spatial::grid::GridDimensions;
use crate::spatial::layout::compute_grid_layout;
use crate::view::render_text;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "gridpuzzle")]
#[command(author, version, about = "Slice images into grid puzzles and play them")]
/// Command-line arguments for the puzzle tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Cut PNG images into row-major piece files
    Slice(SliceArgs),
    /// Play catalog levels with a simulated player
    Play(PlayArgs),
}

/// Arguments of `slice`
#[derive(Args)]
pub struct SliceArgs {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Number of piece rows
    #[arg(short, long)]
    pub rows: usize,

    /// Number of piece columns
    #[arg(short, long)]
    pub cols: usize,

    /// Directory receiving the pieces (defaults to `<image>_pieces` next to each image)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Process images even if their output directory exists
    #[arg(short, long)]
    pub no_skip: bool,
}

/// Arguments of `play`
#[derive(Args)]
pub struct PlayArgs {
    /// Play only this level (by name); plays the whole catalog otherwise
    #[arg(short, long)]
    pub level: Option<String>,

    /// Random seed for tray shuffles and simulated drops
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Drop tolerance as a fraction of the cell size per side
    #[arg(short, long, default_value_t = DEFAULT_DROP_TOLERANCE, allow_negative_numbers = true)]
    pub tolerance: f64,

    /// Probability that a simulated drop aims at a random cell
    #[arg(short, long, default_value_t = DEFAULT_MISDROP_CHANCE)]
    pub misdrop: f64,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

impl SliceArgs {
    /// Check if existing output directories should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }
}

/// Executes the parsed command with progress tracking
pub struct Runner {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);
        Self { cli, progress }
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, image processing or
    /// simulated play fails
    pub fn run(&mut self) -> Result<()> {
        let Self { cli, progress } = self;
        match &cli.command {
            Command::Slice(args) => {
                let dimensions = GridDimensions::new(args.rows, args.cols)?;
                let files = collect_files(args)?;
                slice_files(args, dimensions, &files, progress.as_mut())
            }
            Command::Play(args) => {
                let start = start_level(args.level.as_deref())?;
                let config = PlacementConfig {
                    tolerance: ToleranceWindow::new(args.tolerance)?,
                    ..PlacementConfig::default()
                };
                let player = SimulatedPlayer::new(args.seed, args.misdrop)?;
                let summaries = play_catalog(
                    start,
                    args.level.is_some(),
                    config,
                    args.seed,
                    player,
                    progress.as_mut(),
                )?;
                info!(levels = summaries.len(), "play finished");
                Ok(())
            }
        }
    }
}

fn slice_files(
    args: &SliceArgs,
    dimensions: GridDimensions,
    files: &[PathBuf],
    mut progress: Option<&mut ProgressManager>,
) -> Result<()> {
    if files.is_empty() {
        info!("nothing to slice");
        return Ok(());
    }

    if let Some(pm) = progress.as_deref_mut() {
        pm.start_batch(files.len());
    }

    for file in files {
        let output_dir = output_dir_for(file, args.out.as_deref());
        let stem = file_stem(file);
        let image = load_image(file)?;
        let sliced = slice_image(&image, dimensions)?;
        let written = export_pieces(&sliced, &output_dir, &stem)?;
        info!(
            image = %file.display(),
            pieces = written.len(),
            dir = %output_dir.display(),
            "image sliced"
        );
        if let Some(pm) = progress.as_deref() {
            pm.image_done(&stem);
        }
    }

    if let Some(pm) = progress {
        pm.finish();
    }
    Ok(())
}

/// Play from `start`, following the navigator until it leaves the game
///
/// Finished levels advance to the next catalog entry; with `single` the
/// run returns to the menu after the first finished level instead.
///
/// # Errors
///
/// Returns an error if a level cannot be loaded, laid out or finished
pub fn play_catalog(
    start: LevelIndex,
    single: bool,
    config: PlacementConfig,
    seed: u64,
    mut player: SimulatedPlayer,
    mut progress: Option<&mut ProgressManager>,
) -> Result<Vec<LevelSummary>> {
    let (events_tx, events_rx) = mpsc::channel();
    let mut session = GameSession::new(LEVEL_CATALOG, config, seed, events_tx);
    let viewport = Size::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT);
    let mut summaries = Vec::new();
    let mut screen = navigate(
        LEVEL_CATALOG,
        Screen::LevelSelect,
        NavigationEvent::LevelChosen(start),
    );

    while let Screen::Playing(index) = screen {
        let level = session.load_level(index)?;
        let layout = compute_grid_layout(viewport, level.dimensions()?, GRID_SPACING)?;
        session.apply_layout(&layout)?;

        if let Some(pm) = progress.as_deref_mut() {
            pm.start_level(level.name, level.piece_count());
        }
        let summary = play_level(&mut session, &layout, &mut player, progress.as_deref())?;
        if let Some(pm) = progress.as_deref_mut() {
            pm.finish();
        }

        print_board(&session, &summary);
        summaries.push(summary);

        for event in events_rx.try_iter() {
            screen = navigate(LEVEL_CATALOG, screen, event.into());
        }
        let follow_up = match screen {
            Screen::Finished(_) if single => NavigationEvent::BackToMenu,
            Screen::Finished(_) => NavigationEvent::NextLevel,
            Screen::Playing(_) | Screen::LevelSelect => {
                return Err(computation_error(
                    "play",
                    &format!("level {index} ended without a completion event"),
                ));
            }
        };
        screen = navigate(LEVEL_CATALOG, screen, follow_up);
    }

    Ok(summaries)
}

fn start_level(name: Option<&str>) -> Result<LevelIndex> {
    match name {
        Some(name) => level_by_name(LEVEL_CATALOG, name)
            .map(|(index, _)| index)
            .ok_or_else(|| invalid_parameter("level", &name, &"no level with this name")),
        None => level_at(LEVEL_CATALOG, LevelIndex(0))
            .map(|_| LevelIndex(0))
            .ok_or_else(|| invalid_parameter("level", &"", &"the level catalog is empty")),
    }
}

fn has_piece_extension(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(PIECE_FILE_EXTENSION)
}

fn collect_files(args: &SliceArgs) -> Result<Vec<PathBuf>> {
    let candidates = if args.target.is_file() {
        if !has_piece_extension(&args.target) {
            return Err(invalid_parameter(
                "target",
                &args.target.display(),
                &"target file must be a PNG image",
            ));
        }
        vec![args.target.clone()]
    } else if args.target.is_dir() {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(&args.target)? {
            let path = entry?.path();
            if has_piece_extension(&path) {
                files.push(path);
            }
        }
        files.sort();
        files
    } else {
        return Err(invalid_parameter(
            "target",
            &args.target.display(),
            &"target must be a PNG file or directory",
        ));
    };

    let mut files = Vec::with_capacity(candidates.len());
    for path in candidates {
        let output_dir = output_dir_for(&path, args.out.as_deref());
        if args.skip_existing() && output_dir.exists() {
            warn!(image = %path.display(), "skipping, output exists");
        } else {
            files.push(path);
        }
    }
    Ok(files)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// Directory receiving the pieces of `input_path`
///
/// An explicit `out` directory gets one sub-directory per image so batch
/// runs do not overwrite each other.
pub fn output_dir_for(input_path: &Path, out: Option<&Path>) -> PathBuf {
    let dir_name = format!("{}{PIECES_DIR_SUFFIX}", file_stem(input_path));
    match (out, input_path.parent()) {
        (Some(out), _) => out.join(dir_name),
        (None, Some(parent)) => parent.join(dir_name),
        (None, None) => PathBuf::from(dir_name),
    }
}

// Allow print: the rendered board is the command's output
#[allow(clippy::print_stdout)]
fn print_board(session: &GameSession, summary: &LevelSummary) {
    println!(
        "Level {} \"{}\": {} drops, {} rejected",
        summary.level, summary.name, summary.attempts, summary.rejected
    );
    print!("{}", render_text(&session.view()));
}
