//! Tests for the static level catalog and its lookups

#[cfg(test)]
mod tests {
    use gridpuzzle::PuzzleError;
    use gridpuzzle::level::catalog::{
        Difficulty, LEVEL_CATALOG, Level, LevelIndex, level_at, level_by_name, require_level,
    };

    // Tests the first level is the 2x2 Frozen puzzle
    // Verified by reordering the catalog
    #[test]
    fn test_first_level() {
        let first = level_at(LEVEL_CATALOG, LevelIndex(0)).expect("catalog is not empty");

        assert_eq!(first.name, "Frozen");
        assert_eq!(first.image_name, "anna_elza");
        assert_eq!(first.piece_count(), 4);
        assert_eq!(first.difficulty, Difficulty::Easy);
    }

    // Tests every catalog level has playable dimensions and the catalog covers all difficulties
    // Verified by adding a level with zero columns
    #[test]
    fn test_catalog_levels_valid() {
        for level in LEVEL_CATALOG {
            let dims = level.dimensions().expect("catalog level is playable");
            assert_eq!(dims.cell_count(), level.piece_count());
        }
        for difficulty in Difficulty::ALL {
            assert!(LEVEL_CATALOG.iter().any(|level| level.difficulty == difficulty));
        }
    }

    // Tests name lookup ignores case and surrounding whitespace
    // Verified by comparing names exactly
    #[test]
    fn test_level_by_name() {
        let (index, level) = level_by_name(LEVEL_CATALOG, "  snow castle ").expect("known level");

        assert_eq!(index, LevelIndex(1));
        assert_eq!(level.name, "Snow Castle");
        assert!(level_by_name(LEVEL_CATALOG, "Atlantis").is_none());
    }

    // Tests indices past the end produce UnknownLevel
    // Verified by clamping the index to the last level
    #[test]
    fn test_require_level_out_of_range() {
        let index = LevelIndex(LEVEL_CATALOG.len());

        assert!(level_at(LEVEL_CATALOG, index).is_none());
        assert!(matches!(
            require_level(LEVEL_CATALOG, index),
            Err(PuzzleError::UnknownLevel { index: i, catalog_len })
                if i == index.0 && catalog_len == LEVEL_CATALOG.len()
        ));
    }

    // Tests broken level definitions surface as InvalidLevel
    // Verified by returning the raw dimension error
    #[test]
    fn test_invalid_level_dimensions() {
        let broken = Level {
            name: "Broken",
            image_name: "broken",
            grid_rows: 0,
            grid_columns: 3,
            difficulty: Difficulty::Easy,
        };

        assert!(matches!(
            broken.dimensions(),
            Err(PuzzleError::InvalidLevel { ref name, .. }) if name == "Broken"
        ));
    }

    // Tests difficulty ordering and labels shown on level cards
    // Verified by declaring Hardcore before Hard
    #[test]
    fn test_difficulty_labels() {
        assert!(Difficulty::Easy < Difficulty::Hardcore);
        assert!(Difficulty::Hard < Difficulty::Hardcore);
        assert_eq!(Difficulty::Medium.to_string(), "Medium");
        assert_eq!(LevelIndex(0).to_string(), "1");
        assert_eq!(LevelIndex(2).next(), LevelIndex(3));
    }
}
