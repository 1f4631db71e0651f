//! Error types for shape construction, puzzle loading and solver setup

use std::fmt;
use std::path::PathBuf;

use crate::spatial::registry::ShapeId;

/// Main error type for all packing operations
///
/// An infeasible problem is not an error: the solver reports it as a normal
/// verdict. These variants cover inputs the solver refuses to work with.
#[derive(Debug)]
pub enum PackingError {
    /// Shape grid is not usable as a polyomino
    MalformedShape {
        /// Identifier of the offending shape, when known
        shape: Option<ShapeId>,
        /// Description of what is wrong with the grid
        reason: String,
    },

    /// Container has more cells than a placement mask may address
    OversizedContainer {
        /// Container width in cells
        width: usize,
        /// Container height in cells
        height: usize,
        /// Maximum number of cells supported
        max_cells: usize,
    },

    /// Problem requests instances of a shape that was never registered
    UnknownShape {
        /// The unregistered shape identifier
        shape: ShapeId,
        /// Number of instances requested
        count: usize,
    },

    /// Puzzle text could not be parsed
    Parse {
        /// 1-based line number of the offending line
        line: usize,
        /// Description of the syntax problem
        reason: String,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PackingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedShape { shape, reason } => match shape {
                Some(id) => write!(f, "Malformed shape {id}: {reason}"),
                None => write!(f, "Malformed shape: {reason}"),
            },
            Self::OversizedContainer {
                width,
                height,
                max_cells,
            } => {
                write!(
                    f,
                    "Container {width}x{height} exceeds the supported {max_cells} cells"
                )
            }
            Self::UnknownShape { shape, count } => {
                write!(f, "Problem requests {count} of unknown shape {shape}")
            }
            Self::Parse { line, reason } => {
                write!(f, "Parse error on line {line}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PackingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for packing results
pub type Result<T> = std::result::Result<T, PackingError>;

impl From<std::io::Error> for PackingError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a malformed shape error
pub fn malformed_shape(shape: Option<ShapeId>, reason: &impl ToString) -> PackingError {
    PackingError::MalformedShape {
        shape,
        reason: reason.to_string(),
    }
}

/// Create a puzzle parse error for a 1-based line number
pub fn parse_error(line: usize, reason: &impl ToString) -> PackingError {
    PackingError::Parse {
        line,
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PackingError {
    PackingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error carrying the path and failed operation
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> PackingError {
    PackingError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
