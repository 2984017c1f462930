//! Tests for command-line parsing and the command runner

#[cfg(test)]
mod tests {
    use clap::Parser;
    use gridpuzzle::io::cli::{Cli, Command, Runner, output_dir_for, play_catalog};
    use gridpuzzle::io::configuration::{
        DEFAULT_DROP_TOLERANCE, DEFAULT_MISDROP_CHANCE, DEFAULT_SEED,
    };
    use gridpuzzle::io::error::invalid_parameter;
    use gridpuzzle::PuzzleError;
    use gridpuzzle::io::play::SimulatedPlayer;
    use gridpuzzle::level::catalog::{LEVEL_CATALOG, LevelIndex};
    use gridpuzzle::placement::PlacementConfig;
    use image::{Rgba, RgbaImage};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    fn run(args: &[&str]) -> gridpuzzle::Result<()> {
        let cli = Cli::try_parse_from(args)
            .map_err(|error| invalid_parameter("arguments", &args.join(" "), &error))?;
        let mut runner = Runner::new(cli);
        runner.run()
    }

    fn write_png(path: &Path, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]))
            .save(path)
            .expect("Failed to write test image");
    }

    // Tests slice parsing with only required arguments
    // Verified by changing the skip default
    #[test]
    fn test_parse_slice_minimal() {
        let cli = parse(&["program", "slice", "img.png", "--rows", "2", "--cols", "3"]);

        assert!(!cli.quiet);
        match cli.command {
            Command::Slice(args) => {
                assert_eq!(args.target, PathBuf::from("img.png"));
                assert_eq!((args.rows, args.cols), (2, 3));
                assert_eq!(args.out, None);
                assert!(args.skip_existing());
            }
            Command::Play(_) => panic!("parsed the wrong subcommand"),
        }
    }

    // Tests short flags and the global quiet flag on slice
    // Verified by declaring quiet without global
    #[test]
    fn test_parse_slice_short_flags() {
        let cli = parse(&[
            "program", "slice", "dir", "-r", "4", "-c", "5", "-o", "out", "-n", "-q",
        ]);

        assert!(cli.quiet);
        assert!(!cli.should_show_progress());
        let Command::Slice(args) = cli.command else {
            panic!("parsed the wrong subcommand");
        };
        assert_eq!((args.rows, args.cols), (4, 5));
        assert_eq!(args.out, Some(PathBuf::from("out")));
        assert!(!args.skip_existing());
    }

    // Tests play defaults come from the configuration constants
    // Verified by hardcoding a different default seed
    #[test]
    fn test_parse_play_defaults() {
        let cli = parse(&["program", "play"]);

        assert!(cli.should_show_progress());
        let Command::Play(args) = cli.command else {
            panic!("parsed the wrong subcommand");
        };
        assert_eq!(args.level, None);
        assert_eq!(args.seed, DEFAULT_SEED);
        assert!((args.tolerance - DEFAULT_DROP_TOLERANCE).abs() < f64::EPSILON);
        assert!((args.misdrop - DEFAULT_MISDROP_CHANCE).abs() < f64::EPSILON);
    }

    // Tests play arguments are all overridable
    // Verified by dropping the tolerance argument
    #[test]
    fn test_parse_play_all_args() {
        let cli = parse(&[
            "program", "play", "--level", "Snow Castle", "--seed", "9", "--tolerance", "0.2",
            "--misdrop", "0.5", "--quiet",
        ]);

        assert!(cli.quiet);
        let Command::Play(args) = cli.command else {
            panic!("parsed the wrong subcommand");
        };
        assert_eq!(args.level.as_deref(), Some("Snow Castle"));
        assert_eq!(args.seed, 9);
        assert!((args.tolerance - 0.2).abs() < f64::EPSILON);
        assert!((args.misdrop - 0.5).abs() < f64::EPSILON);
    }

    // Tests piece directories land next to the image or under --out
    // Verified by ignoring the out directory
    #[test]
    fn test_output_dir_for() {
        let input = Path::new("images/castle.png");

        assert_eq!(
            output_dir_for(input, None),
            PathBuf::from("images/castle_pieces")
        );
        assert_eq!(
            output_dir_for(input, Some(Path::new("dump"))),
            PathBuf::from("dump/castle_pieces")
        );
    }

    // Tests slicing a single image writes one file per cell
    // Verified by exporting only the first row
    #[test]
    fn test_slice_single_image() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = temp_dir.path().join("castle.png");
        write_png(&input, 6, 4);

        let target = input.to_str().expect("utf-8 path");
        run(&["program", "slice", target, "-r", "2", "-c", "3", "-q"]).expect("slice succeeds");

        let pieces = temp_dir.path().join("castle_pieces");
        let count = fs::read_dir(&pieces).expect("pieces written").count();
        assert_eq!(count, 6);
        assert!(pieces.join("castle_1_2.png").exists());
    }

    // Tests images whose output directory exists are skipped unless --no-skip
    // Verified by removing the skip check
    #[test]
    fn test_slice_skips_existing_output() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = temp_dir.path().join("castle.png");
        write_png(&input, 4, 4);
        let pieces = temp_dir.path().join("castle_pieces");
        fs::create_dir(&pieces).expect("Failed to create output dir");

        let target = input.to_str().expect("utf-8 path");
        run(&["program", "slice", target, "-r", "2", "-c", "2", "-q"]).expect("skip succeeds");
        assert_eq!(fs::read_dir(&pieces).expect("dir exists").count(), 0);

        run(&["program", "slice", target, "-r", "2", "-c", "2", "-q", "--no-skip"])
            .expect("slice succeeds");
        assert_eq!(fs::read_dir(&pieces).expect("dir exists").count(), 4);
    }

    // Tests a directory target slices every PNG in it
    // Verified by only processing the first directory entry
    #[test]
    fn test_slice_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        write_png(&temp_dir.path().join("a.png"), 2, 2);
        write_png(&temp_dir.path().join("b.png"), 2, 2);
        fs::write(temp_dir.path().join("notes.txt"), "not an image").expect("write");
        let out = temp_dir.path().join("out");

        let target = temp_dir.path().to_str().expect("utf-8 path");
        let out_arg = out.to_str().expect("utf-8 path");
        run(&["program", "slice", target, "-r", "1", "-c", "2", "-o", out_arg, "-q"])
            .expect("slice succeeds");

        assert!(out.join("a_pieces").join("a_0_1.png").exists());
        assert!(out.join("b_pieces").join("b_0_0.png").exists());
        assert!(!out.join("notes_pieces").exists());
    }

    // Tests missing targets, non-PNG files and bad grids are errors
    // Verified by removing target validation
    #[test]
    fn test_slice_invalid_targets() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let txt = temp_dir.path().join("notes.txt");
        fs::write(&txt, "not an image").expect("write");
        let png = temp_dir.path().join("tiny.png");
        write_png(&png, 1, 1);

        let missing = temp_dir.path().join("missing.png");
        let slice = |path: &Path, rows: &str| {
            let target = path.to_str().expect("utf-8 path");
            run(&["program", "slice", target, "-r", rows, "-c", "2", "-q"])
        };
        assert!(slice(&missing, "2").is_err());
        assert!(slice(&txt, "2").is_err());
        assert!(slice(&png, "0").is_err());
        assert!(slice(&png, "2").is_err());
    }

    // Tests an empty directory is not an error
    // Verified by failing on empty file lists
    #[test]
    fn test_slice_empty_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let target = temp_dir.path().to_str().expect("utf-8 path");

        assert!(run(&["program", "slice", target, "-r", "2", "-c", "2"]).is_ok());
    }

    // Tests playing a single named level
    // Verified by ignoring the level argument
    #[test]
    fn test_play_single_level() {
        assert!(run(&["program", "play", "--level", "frozen", "-q"]).is_ok());
        assert!(run(&["program", "play", "--level", "Atlantis", "-q"]).is_err());
    }

    // Tests invalid tuning values are refused before play starts
    // Verified by skipping misdrop validation
    #[test]
    fn test_play_rejects_bad_tuning() {
        assert!(run(&["program", "play", "--misdrop", "1.0", "-q"]).is_err());
        assert!(matches!(
            run(&["program", "play", "--tolerance", "-0.5", "-q"]),
            Err(PuzzleError::InvalidParameter { parameter: "tolerance", .. })
        ));
        assert!(matches!(
            run(&["program", "play", "--tolerance=-0.5", "-q"]),
            Err(PuzzleError::InvalidParameter { parameter: "tolerance", .. })
        ));
    }

    // Tests a negative tolerance is read as a value, not a short flag
    // Verified by removing allow_negative_numbers from the tolerance arg
    #[test]
    fn test_parse_negative_tolerance() {
        let cli = parse(&["program", "play", "--tolerance", "-0.5"]);

        let Command::Play(args) = cli.command else {
            panic!("parsed the wrong subcommand");
        };
        assert!((args.tolerance + 0.5).abs() < f64::EPSILON);
    }

    // Tests unknown arguments surface as an error instead of exiting
    // Verified by parsing with parse_from in the run helper
    #[test]
    fn test_run_reports_bad_arguments() {
        assert!(matches!(
            run(&["program", "play", "--speed", "3"]),
            Err(PuzzleError::InvalidParameter { parameter: "arguments", .. })
        ));
    }

    // Tests the navigator carries play through the whole catalog
    // Verified by stopping after the first finished level
    #[test]
    fn test_play_catalog_advances_levels() {
        let player = SimulatedPlayer::new(3, 0.3).expect("valid chance");
        let summaries = play_catalog(
            LevelIndex(0),
            false,
            PlacementConfig::default(),
            3,
            player,
            None,
        )
        .expect("catalog completes");

        assert_eq!(summaries.len(), LEVEL_CATALOG.len());
        for (position, summary) in summaries.iter().enumerate() {
            assert_eq!(summary.level, LevelIndex(position));
            let level = LEVEL_CATALOG.get(position).expect("catalog level");
            assert_eq!(summary.accepted, level.piece_count());
            assert_eq!(summary.attempts, summary.accepted + summary.rejected);
        }
    }

    // Tests single mode stops after the first level, starting mid-catalog
    // Verified by ignoring the single flag
    #[test]
    fn test_play_catalog_single() {
        let player = SimulatedPlayer::new(8, 0.0).expect("valid chance");
        let summaries = play_catalog(
            LevelIndex(2),
            true,
            PlacementConfig::default(),
            8,
            player,
            None,
        )
        .expect("level completes");

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries.first().map(|s| s.level), Some(LevelIndex(2)));
        assert_eq!(summaries.first().map(|s| s.rejected), Some(0));
    }
}
