//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use polypack::PackingError;
    use polypack::io::error::{file_system, invalid_parameter, malformed_shape, parse_error};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = file_system("/tmp/puzzle.txt", "read puzzle", io_error);

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("/tmp/puzzle.txt"));
        assert!(message.contains("read puzzle"));
        assert!(message.contains("file not found"));
    }

    // Tests oversized container message names dimensions and limit
    // Verified by omitting the limit from the message
    #[test]
    fn test_oversized_container_error() {
        let error = PackingError::OversizedContainer {
            width: 70,
            height: 70,
            max_cells: 4096,
        };

        let message = error.to_string();
        assert!(message.contains("70x70"));
        assert!(message.contains("4096"));
        assert!(error.source().is_none());
    }

    // Tests malformed shape messages with and without an identifier
    // Verified by dropping the identifier branch
    #[test]
    fn test_malformed_shape_error() {
        let with_id = malformed_shape(Some(3), &"row 1 has 2 cells, expected 3");
        assert!(with_id.to_string().contains("shape 3"));
        assert!(with_id.to_string().contains("row 1"));

        let without_id = malformed_shape(None, &"grid has no cells");
        assert_eq!(without_id.to_string(), "Malformed shape: grid has no cells");
    }

    // Tests parse and parameter errors carry their context
    // Verified by omitting the line number
    #[test]
    fn test_parse_and_parameter_errors() {
        let parse = parse_error(12, &"unexpected character 'x'");
        assert!(parse.to_string().contains("line 12"));

        let parameter = invalid_parameter("seed", &5, &"only used with --order shuffled");
        let message = parameter.to_string();
        assert!(message.contains("seed"));
        assert!(message.contains('5'));
        assert!(message.contains("shuffled"));
    }

    // Tests unknown shape message and io conversion
    // Verified by converting io errors without a source
    #[test]
    fn test_unknown_shape_and_io_conversion() {
        let unknown = PackingError::UnknownShape { shape: 7, count: 2 };
        assert!(unknown.to_string().contains("unknown shape 7"));

        let converted: PackingError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(converted, PackingError::FileSystem { .. }));
        assert!(converted.source().is_some());
    }
}
