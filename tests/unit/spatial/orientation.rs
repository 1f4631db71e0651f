//! Tests for orientation expansion and deduplication

#[cfg(test)]
mod tests {
    use crate::shape_from_art;
    use polypack::spatial::orientation::{OrientationSet, orientations};

    fn orientation_count(rows: &[&str]) -> usize {
        orientations(&shape_from_art(rows)).len()
    }

    // Tests orientation counts across pieces with different symmetry
    // Verified by skipping the reflection pass
    #[test]
    fn test_orientation_counts_follow_symmetry() {
        assert_eq!(orientation_count(&["#"]), 1);
        assert_eq!(orientation_count(&["##"]), 2);
        assert_eq!(orientation_count(&["##", "##"]), 1);
        assert_eq!(orientation_count(&["####"]), 2);
        assert_eq!(orientation_count(&["#.", "##"]), 4);
        assert_eq!(orientation_count(&["###", ".#."]), 4);
        assert_eq!(orientation_count(&[".##", "##."]), 4);
        assert_eq!(orientation_count(&["#..", "###"]), 8);
        assert_eq!(orientation_count(&[".##", "##.", ".#."]), 8);
        assert_eq!(orientation_count(&[".#.", "###", ".#."]), 1);
    }

    // Tests every orientation keeps the base area and the count divides 8
    // Verified by not trimming rotated candidates
    #[test]
    fn test_orientations_preserve_area() {
        let pieces: [&[&str]; 5] = [
            &["#.", "##"],
            &["###", "#.."],
            &[".##", "##.", ".#."],
            &["##", "##"],
            &["#.#", "###"],
        ];
        for rows in pieces {
            let base = shape_from_art(rows);
            let set = OrientationSet::new(&base);
            assert!([1, 2, 4, 8].contains(&set.len()));
            assert_eq!(8 % set.len(), 0);
            assert_eq!(set.area(), base.area());
            assert!(set.iter().all(|orientation| orientation.area() == base.area()));
        }
    }

    // Tests the base shape and all its rotations are members
    // Verified by returning only reflected candidates
    #[test]
    fn test_contains_base_and_rotations() {
        let base = shape_from_art(&["###", "#.."]);
        let set = OrientationSet::new(&base);
        assert!(set.contains(&base));
        assert!(set.contains(&base.rotate_90()));
        assert!(set.contains(&base.rotate_90().rotate_90()));
        assert!(set.contains(&base.reflect()));
    }

    // Tests equal geometry yields identical sets regardless of source layout
    // Verified by removing the canonical sort
    #[test]
    fn test_same_geometry_same_set() {
        let upright = OrientationSet::new(&shape_from_art(&["#.", "#.", "##"]));
        let turned = OrientationSet::new(&shape_from_art(&["..#", "###"]));
        let padded = OrientationSet::new(&shape_from_art(&["...", "#..", "#..", "##."]));
        assert_eq!(upright, turned);
        assert_eq!(upright, padded);
    }

    // Tests orientations are sorted by bounding box then pattern
    // Verified by keeping generation order
    #[test]
    fn test_canonical_order() {
        let set = OrientationSet::new(&shape_from_art(&["####"]));
        let dims: Vec<_> = set.iter().map(|o| (o.height(), o.width())).collect();
        assert_eq!(dims, vec![(1, 4), (4, 1)]);

        let set = OrientationSet::new(&shape_from_art(&["#..", "###"]));
        for pair in set.iter().collect::<Vec<_>>().windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let key_a = (a.height(), a.width(), a.pattern());
            let key_b = (b.height(), b.width(), b.pattern());
            assert!(key_a < key_b);
        }
    }
}
