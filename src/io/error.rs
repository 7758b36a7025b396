//! Error types and context management for collapse operations

use std::fmt;

/// Main error type for all catalog, cell and grid operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    /// Identifier does not name a tile the catalog can use here
    UnknownTile {
        /// The rejected identifier
        name: String,
    },

    /// Direction name is not one of the four cardinal directions
    UnknownDirection {
        /// The rejected direction name
        name: String,
    },

    /// Explicit tile index outside the resolved tile list
    OutOfRange {
        /// The rejected index
        index: usize,
        /// Largest valid index
        max: usize,
    },

    /// Random collapse requested on a cell whose domain was propagated to empty
    EmptyDomain {
        /// Row of the affected cell
        row: usize,
        /// Column of the affected cell
        column: usize,
    },

    /// Generation cannot progress: cells remain uncollapsed but none has candidates
    ///
    /// Occurs when propagation empties a domain before that cell is selected.
    /// There is no backtracking, so the grid can never complete.
    Stalled {
        /// Iteration when this occurred
        iteration: usize,
        /// Cells collapsed so far
        collapsed: usize,
        /// Cells in the grid
        total: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTile { name } => write!(f, "Unknown tile '{name}'"),
            Self::UnknownDirection { name } => write!(f, "Unknown direction '{name}'"),
            Self::OutOfRange { index, max } => {
                write!(f, "Tile index {index} is out of range (0..={max})")
            }
            Self::EmptyDomain { row, column } => {
                write!(f, "Cell ({row}, {column}) has no remaining candidates")
            }
            Self::Stalled {
                iteration,
                collapsed,
                total,
            } => {
                write!(
                    f,
                    "Generation stalled at iteration {iteration} with {collapsed}/{total} cells collapsed"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for AlgorithmError {}

/// Convenience type alias for algorithm results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Current generation iteration
    pub iteration: Option<usize>,
}

/// Enriches error messages with generation state information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<AlgorithmError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only stalls are tied to a point in the generation loop
            if let AlgorithmError::Stalled { iteration, .. } = &mut error {
                if let Some(iter) = context.iteration {
                    *iteration = iter;
                }
            }
            error
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an unknown tile error from any displayable identifier
pub fn unknown_tile(name: &impl ToString) -> AlgorithmError {
    AlgorithmError::UnknownTile {
        name: name.to_string(),
    }
}
