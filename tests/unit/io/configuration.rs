//! Tests for solver configuration constants

#[cfg(test)]
mod tests {
    use polypack::io::configuration::{
        DEFAULT_SEED, DIMENSION_SEPARATOR, EMPTY_GLYPH, FILLED_GLYPH, MAX_CONTAINER_CELLS,
        MIN_PROBLEMS_FOR_PROGRESS, ORIENTATION_CANDIDATES, PROGRESS_BAR_WIDTH,
    };
    use polypack::SearchConfig;

    // Tests the container cap covers the puzzle sizes seen in practice
    // Verified by lowering the cap below 50x50
    #[test]
    fn test_max_container_cells() {
        assert_eq!(MAX_CONTAINER_CELLS, 4096);
        assert!(MAX_CONTAINER_CELLS >= 50 * 50);
    }

    // Tests four rotations times two reflections
    // Verified by dropping the reflection factor
    #[test]
    fn test_orientation_candidates() {
        assert_eq!(ORIENTATION_CANDIDATES, 8);
    }

    // Tests the glyphs are distinct and not the separator
    // Verified by reusing '#' for empty cells
    #[test]
    fn test_glyphs_distinct() {
        assert_ne!(FILLED_GLYPH, EMPTY_GLYPH);
        assert_ne!(FILLED_GLYPH, DIMENSION_SEPARATOR);
        assert_ne!(EMPTY_GLYPH, DIMENSION_SEPARATOR);
    }

    // Tests default seed is fixed
    // Verified by changing seed value
    #[test]
    fn test_default_seed_is_reproducible() {
        assert_eq!(DEFAULT_SEED, 42);
    }

    // Tests progress settings
    // Verified by changing width value
    #[test]
    fn test_progress_settings() {
        assert_eq!(PROGRESS_BAR_WIDTH, 40);
        assert!(MIN_PROBLEMS_FOR_PROGRESS >= 1);
    }

    // Tests the default search configuration uses the container cap
    // Verified by defaulting to a node limit
    #[test]
    fn test_default_search_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_container_cells, MAX_CONTAINER_CELLS);
        assert!(config.node_limit.is_none());
        assert!(config.validate().is_ok());
    }
}
