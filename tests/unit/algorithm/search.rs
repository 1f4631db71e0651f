//! Tests for the backtracking placement search

#[cfg(test)]
mod tests {
    use crate::shape_from_art;
    use polypack::algorithm::items::{SearchItem, encode_items, expand_items, order_items};
    use polypack::algorithm::search::{
        PlacementChoice, PlacementSearch, SearchOutcome, start_offset,
    };
    use polypack::{Container, ItemOrder, Problem, ShapeRegistry, SymmetryBreaking};

    fn prepare(registry: &ShapeRegistry, problem: &Problem) -> Vec<SearchItem> {
        let mut templates = expand_items(problem, registry).unwrap();
        order_items(&mut templates, ItemOrder::AreaDescending);
        encode_items(&templates, registry, problem.container).unwrap()
    }

    fn cells(container: Container) -> usize {
        container.width * container.height
    }

    // Tests start offsets for untied and tied items
    // Verified by always starting tied items at last_offset
    #[test]
    fn test_start_offset_rules() {
        let last = Some(PlacementChoice {
            offset: 4,
            orientation: 1,
        });
        let canonical = SymmetryBreaking::Canonical;

        assert_eq!(start_offset(false, canonical, last, 0), 0);
        assert_eq!(start_offset(true, canonical, None, 0), 0);
        assert_eq!(start_offset(true, canonical, last, 0), 5);
        assert_eq!(start_offset(true, canonical, last, 1), 5);
        assert_eq!(start_offset(true, canonical, last, 2), 4);
        assert_eq!(start_offset(true, SymmetryBreaking::Disabled, last, 0), 0);
    }

    // Tests identical monominoes fill a container in increasing offset order
    // Verified by starting tied items at offset 0
    #[test]
    fn test_monominoes_fill_in_order() {
        let registry = ShapeRegistry::from_shapes([(0, shape_from_art(&["#"]))]).unwrap();
        let problem = Problem::new(3, 2, vec![6]);
        let items = prepare(&registry, &problem);

        let mut search = PlacementSearch::new(
            &items,
            cells(problem.container),
            SymmetryBreaking::Canonical,
            None,
        );
        assert_eq!(search.run(), SearchOutcome::Found);

        let offsets: Vec<_> = search.trail().iter().map(|choice| choice.offset).collect();
        assert_eq!(offsets, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(search.occupancy().count(), 6);
        assert_eq!(search.stats().nodes, 6);
    }

    // Tests exhaustion leaves the occupancy exactly as it started
    // Verified by skipping the mask removal on backtrack
    #[test]
    fn test_exhaustion_restores_occupancy() {
        let registry = ShapeRegistry::from_shapes([(0, shape_from_art(&["##", "##"]))]).unwrap();
        let problem = Problem::new(3, 3, vec![2]);
        let items = prepare(&registry, &problem);

        let mut search = PlacementSearch::new(
            &items,
            cells(problem.container),
            SymmetryBreaking::Canonical,
            None,
        );
        assert_eq!(search.run(), SearchOutcome::Exhausted);
        assert!(search.occupancy().is_empty());
        assert!(search.trail().is_empty());
        assert!(search.stats().placements_tested > 0);
    }

    // Tests tied pieces come out in increasing (offset, orientation) order
    // Verified by letting tied items restart at offset 0
    #[test]
    fn test_tied_trail_is_increasing() {
        let registry = ShapeRegistry::from_shapes([(0, shape_from_art(&["#.", "##"]))]).unwrap();
        let problem = Problem::new(3, 2, vec![2]);
        let items = prepare(&registry, &problem);
        assert!(items[1].tied_to_previous);

        for symmetry in [SymmetryBreaking::Canonical, SymmetryBreaking::Disabled] {
            let mut search =
                PlacementSearch::new(&items, cells(problem.container), symmetry, None);
            assert_eq!(search.run(), SearchOutcome::Found);
            assert_eq!(search.occupancy().count(), 6);
        }

        let mut search = PlacementSearch::new(
            &items,
            cells(problem.container),
            SymmetryBreaking::Canonical,
            None,
        );
        search.run();
        let trail = search.trail();
        assert_eq!(trail.len(), 2);
        assert!(trail[0] < trail[1]);
    }

    // Tests the node limit aborts a search
    // Verified by ignoring the node limit
    #[test]
    fn test_node_limit_aborts() {
        let registry = ShapeRegistry::from_shapes([(0, shape_from_art(&["##", "##"]))]).unwrap();
        let problem = Problem::new(3, 3, vec![2]);
        let items = prepare(&registry, &problem);

        let mut search = PlacementSearch::new(
            &items,
            cells(problem.container),
            SymmetryBreaking::Disabled,
            Some(2),
        );
        assert_eq!(search.run(), SearchOutcome::Aborted);
        assert_eq!(search.stats().nodes, 3);
    }

    // Tests an empty item list is found without visiting a node
    // Verified by counting the terminal level as a node
    #[test]
    fn test_no_items() {
        let mut search = PlacementSearch::new(&[], 4, SymmetryBreaking::Canonical, Some(0));
        assert_eq!(search.run(), SearchOutcome::Found);
        assert_eq!(search.stats().nodes, 0);
        assert_eq!(search.stats().items, 0);
    }
}
