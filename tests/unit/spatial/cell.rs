//! Tests for the one-shot collapse transition and domain restriction

#[cfg(test)]
mod tests {
    use tilecollapse::AlgorithmError;
    use tilecollapse::algorithm::domain::Domain;
    use tilecollapse::algorithm::random::{FirstChoice, RandomSource};
    use tilecollapse::spatial::cell::{Cell, CellState, Choice, Position};
    use tilecollapse::spatial::tiles::{Tile, TileCatalog};

    struct FixedIndex(usize);

    impl RandomSource for FixedIndex {
        fn choose(&mut self, _len: usize) -> usize {
            self.0
        }
    }

    fn cell() -> Cell {
        Cell::new(Position::new(2, 3))
    }

    #[test]
    fn test_new_cell() {
        let cell = cell();
        assert_eq!(cell.position(), Position::new(2, 3));
        assert_eq!(cell.entropy(), 7);
        assert!(!cell.is_collapsed());
        assert!(!cell.is_stalled());
        assert_eq!(cell.resolved(), None);
        assert_eq!(cell.display_tile(), Tile::Unresolved);
        assert_eq!(cell.domain(), Domain::full());
    }

    // Tests explicit tiles collapse the cell and clear its domain
    #[test]
    fn test_collapse_explicit_tile() {
        let catalog = TileCatalog::new();
        for tile in Tile::RESOLVED {
            let mut cell = cell();
            assert_eq!(cell.collapse(Choice::Tile(tile), &catalog), Ok(tile));
            assert!(cell.is_collapsed());
            assert_eq!(cell.entropy(), 0);
            assert!(cell.domain().is_empty());
            assert_eq!(cell.state(), &CellState::Collapsed(tile));
        }
    }

    // Tests explicit indices follow catalog order and reject the end of range
    // Verified by comparing against the current domain size instead
    #[test]
    fn test_collapse_explicit_index() {
        let catalog = TileCatalog::new();
        for (index, tile) in Tile::RESOLVED.iter().enumerate() {
            let mut cell = cell();
            assert_eq!(cell.collapse(Choice::Index(index), &catalog), Ok(*tile));
        }

        let mut cell = cell();
        assert_eq!(
            cell.collapse(Choice::Index(7), &catalog),
            Err(AlgorithmError::OutOfRange { index: 7, max: 6 })
        );
        assert!(!cell.is_collapsed());
        assert_eq!(cell.entropy(), 7);
    }

    #[test]
    fn test_collapse_rejects_sentinel() {
        let catalog = TileCatalog::new();
        let mut cell = cell();
        assert!(matches!(
            cell.collapse(Choice::Tile(Tile::Unresolved), &catalog),
            Err(AlgorithmError::UnknownTile { .. })
        ));
        assert_eq!(cell.domain(), Domain::full());
    }

    // Tests collapsing twice keeps the first tile
    // Verified by removing the early return for collapsed cells
    #[test]
    fn test_collapse_is_one_shot() {
        let catalog = TileCatalog::new();
        let mut cell = cell();
        cell.collapse(Choice::Tile(Tile::TeeDown), &catalog).unwrap();

        assert_eq!(
            cell.collapse(Choice::Tile(Tile::Vertical), &catalog),
            Ok(Tile::TeeDown)
        );
        assert_eq!(cell.collapse(Choice::Index(99), &catalog), Ok(Tile::TeeDown));
        assert_eq!(cell.resolved(), Some(Tile::TeeDown));
    }

    // Tests random draws index into the sorted current domain
    #[test]
    fn test_collapse_random_draws_from_domain() {
        let catalog = TileCatalog::new();
        let domain = Domain::from_tiles([Tile::Vertical, Tile::TeeLeft]);

        let mut first = Cell::with_domain(Position::new(0, 0), domain);
        assert_eq!(
            first.collapse(Choice::Random(&mut FirstChoice), &catalog),
            Ok(Tile::TeeLeft)
        );

        let mut last = Cell::with_domain(Position::new(0, 0), domain);
        assert_eq!(
            last.collapse(Choice::Random(&mut FixedIndex(1)), &catalog),
            Ok(Tile::Vertical)
        );

        let mut past_end = Cell::with_domain(Position::new(0, 0), domain);
        assert_eq!(
            past_end.collapse(Choice::Random(&mut FixedIndex(2)), &catalog),
            Err(AlgorithmError::OutOfRange { index: 2, max: 1 })
        );
        assert_eq!(past_end.entropy(), 2);
    }

    #[test]
    fn test_collapse_random_on_empty_domain() {
        let catalog = TileCatalog::new();
        let mut cell = Cell::with_domain(Position::new(4, 1), Domain::empty());
        assert!(cell.is_stalled());
        assert_eq!(
            cell.collapse(Choice::Random(&mut FirstChoice), &catalog),
            Err(AlgorithmError::EmptyDomain { row: 4, column: 1 })
        );
        assert!(!cell.is_collapsed());
    }

    // Tests restriction intersects and is idempotent
    // Verified by replacing the domain with the allowed set
    #[test]
    fn test_restrict() {
        let mut cell = Cell::with_domain(
            Position::new(0, 0),
            Domain::from_tiles([Tile::Blank, Tile::TeeUp, Tile::Vertical]),
        );
        let allowed = Domain::from_tiles([Tile::Vertical, Tile::Blank, Tile::TeeDown]);

        let once = cell.restrict(&allowed);
        assert_eq!(once.to_vec(), vec![Tile::Blank, Tile::Vertical]);
        let twice = cell.restrict(&allowed);
        assert_eq!(once, twice);
        assert_eq!(cell.entropy(), 2);
    }

    // Tests restriction never changes a collapsed tile
    #[test]
    fn test_restrict_collapsed_cell() {
        let catalog = TileCatalog::new();
        let mut cell = cell();
        cell.collapse(Choice::Tile(Tile::Horizontal), &catalog)
            .unwrap();

        let remaining = cell.restrict(&Domain::from_tiles([Tile::Blank]));
        assert!(remaining.is_empty());
        assert_eq!(cell.resolved(), Some(Tile::Horizontal));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(3, 7).to_string(), "(3, 7)");
    }
}
