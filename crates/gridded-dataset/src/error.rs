//! Error types for gridded dataset access.

use thiserror::Error;

/// Result type for dataset operations.
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Error types for reading and writing gridded datasets.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error reported by the NetCDF/HDF5 library
    #[error("NetCDF error: {0}")]
    NetCdf(#[from] netcdf::Error),

    /// Requested variable is not present in the dataset
    #[error("Missing variable: {0}")]
    MissingVariable(String),

    /// Requested dimension is not present in the dataset
    #[error("Missing dimension: {0}")]
    MissingDimension(String),

    /// Invalid data format
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    /// Variable data does not match its declared dimensions
    #[error("Shape mismatch for '{name}': dimensions imply {expected:?}, data has {actual:?}")]
    ShapeMismatch {
        name: String,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
}

impl DatasetError {
    /// Create a MissingVariable error.
    pub fn missing_variable(name: impl Into<String>) -> Self {
        Self::MissingVariable(name.into())
    }

    /// Create an InvalidFormat error.
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }
}
