//! Error types for visor.

/// Result type alias for visor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in visor operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An argument violated a precondition of the cell address codec.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the violated precondition.
        message: String,
    },

    /// Row index out of bounds for the current dataset snapshot.
    #[error("Row index {requested} out of bounds for dataset with {total} rows")]
    RowOutOfBounds {
        /// The requested row index.
        requested: usize,
        /// The total row count.
        total: usize,
    },

    /// Column index out of bounds for the current schema.
    #[error("Column index {requested} out of bounds ({total} columns)")]
    ColumnOutOfBounds {
        /// The requested column index.
        requested: usize,
        /// The total column count.
        total: usize,
    },

    /// Cell address arithmetic exceeded the representable range.
    #[error("Cell address overflow for row {row} with {column_count} columns")]
    AddressOverflow {
        /// The row index that overflowed.
        row: usize,
        /// The column count in effect.
        column_count: usize,
    },

    /// A record could not be used where a field mapping was required.
    #[error("Data error: {message}")]
    Data {
        /// Description of the data error.
        message: String,
    },
}

impl Error {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a data error.
    pub fn data(message: impl Into<String>) -> Self {
        Self::Data {
            message: message.into(),
        }
    }
}
