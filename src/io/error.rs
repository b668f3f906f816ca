//! Error types for engine and rendering operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all engine and rendering operations
///
/// Every invariant violation is a caller error detected eagerly at
/// construction or call time; there is no retry logic and no
/// partial-failure recovery.
#[derive(Debug)]
pub enum RenderError {
    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// The violated bound
        reason: String,
    },

    /// Transformation index exceeds the flame's transformation list
    TransformationIndex {
        /// The invalid index
        index: usize,
        /// Number of transformations in the flame
        count: usize,
    },

    /// Accumulator cell coordinates outside the grid
    CellOutOfBounds {
        /// Requested column
        x: usize,
        /// Requested row
        y: usize,
        /// Grid width in cells
        width: usize,
        /// Grid height in cells
        height: usize,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::TransformationIndex { index, count } => {
                write!(
                    f,
                    "Transformation index {index} is out of bounds (count: {count})"
                )
            }
            Self::CellOutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Cell ({x}, {y}) is outside the {width}x{height} accumulator grid"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, RenderError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> RenderError {
    RenderError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("width", &0, &"rectangle dimensions must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'width' = '0': rectangle dimensions must be greater than zero"
        );
    }

    #[test]
    fn test_cell_out_of_bounds_display() {
        let err = RenderError::CellOutOfBounds {
            x: 7,
            y: 3,
            width: 4,
            height: 4,
        };
        assert_eq!(
            err.to_string(),
            "Cell (7, 3) is outside the 4x4 accumulator grid"
        );
    }
}
