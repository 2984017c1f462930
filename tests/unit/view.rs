//! Tests for board snapshots and the text renderer

#[cfg(test)]
mod tests {
    use gridpuzzle::level::catalog::LEVEL_CATALOG;
    use gridpuzzle::placement::{PlacementConfig, PlacementEngine};
    use gridpuzzle::spatial::geometry::{Point, Rect};
    use gridpuzzle::spatial::grid::CellIndex;
    use gridpuzzle::spatial::registry::GridGeometryRegistry;
    use gridpuzzle::view::{BoardView, render_text};

    fn engine_and_registry() -> (PlacementEngine, GridGeometryRegistry) {
        let level = LEVEL_CATALOG.first().expect("catalog is not empty");
        let dims = level.dimensions().expect("valid level");
        let mut engine = PlacementEngine::new(PlacementConfig::default(), 5);
        engine.initialize(level).expect("valid level");

        let mut registry = GridGeometryRegistry::new(dims);
        for cell in dims.cells() {
            let rect = Rect::new(cell.column as f64 * 20.0, cell.row as f64 * 20.0, 20.0, 20.0);
            registry.record_cell_rect(cell, rect).expect("cell inside grid");
        }
        (engine, registry)
    }

    // Tests an untouched level shows an empty board and a full tray
    // Verified by filling cells from the tray
    #[test]
    fn test_initial_view() {
        let (engine, _registry) = engine_and_registry();
        let view = BoardView::from_engine(&engine);

        assert_eq!(view.cells.dim(), (2, 2));
        assert!(view.cells.iter().all(Option::is_none));
        assert_eq!(view.tray.len(), 4);
        assert_eq!((view.placed, view.total), (0, 4));
        assert!(!view.completed);
    }

    // Tests a seated piece appears in its cell and leaves the tray
    // Verified by drawing pieces at their tray position
    #[test]
    fn test_view_after_placement() {
        let (mut engine, registry) = engine_and_registry();
        let cell = CellIndex::new(1, 0);
        let id = engine
            .pieces()
            .iter()
            .find(|piece| piece.correct_cell() == cell)
            .map(|piece| piece.id())
            .expect("every cell has a piece");
        assert!(engine
            .attempt_placement(&registry, id, Point::new(10.0, 30.0), 20.0)
            .is_accepted());

        let view = BoardView::from_engine(&engine);
        assert_eq!(view.cells.get([1, 0]), Some(&Some(id)));
        assert!(!view.tray.contains(&id));

        let text = render_text(&view);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("[ ][ ]"));
        assert_eq!(lines.next(), Some("[x][ ]"));
        assert_eq!(lines.next(), Some("placed 1/4"));
        assert!(lines.next().is_some_and(|line| line.starts_with("tray: #")));
    }

    // Tests a finished board renders as complete without a tray line
    // Verified by always printing the tray
    #[test]
    fn test_render_completed() {
        let (mut engine, registry) = engine_and_registry();
        let placements: Vec<_> = engine
            .pieces()
            .iter()
            .map(|piece| (piece.id(), piece.correct_cell()))
            .collect();
        for (id, cell) in placements {
            let center = Point::new(
                (cell.column as f64).mul_add(20.0, 10.0),
                (cell.row as f64).mul_add(20.0, 10.0),
            );
            assert!(engine.attempt_placement(&registry, id, center, 20.0).is_accepted());
        }

        let text = render_text(&BoardView::from_engine(&engine));
        assert_eq!(text, "[x][x]\n[x][x]\nplaced 4/4 - complete\n");
    }
}
