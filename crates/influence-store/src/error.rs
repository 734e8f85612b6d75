//! Error types for influence-function access and exposure computation.

use gridded_dataset::DatasetError;
use thiserror::Error;

use crate::naming::FieldKey;

/// Errors surfaced by [`InfluenceFunctionStore`](crate::InfluenceFunctionStore)
/// operations.
#[derive(Error, Debug)]
pub enum InfluenceError {
    /// Invalid store configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The underlying dataset could not be read or written.
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// No variable exists for the requested (source, species, pathway).
    #[error("no influence function for {key} (variable '{variable}')")]
    FieldNotFound { key: FieldKey, variable: String },

    /// The dataset holds no variable following the naming convention.
    #[error("no variable follows the <source>{delimiter}<species>{delimiter}<pathway> naming convention")]
    EmptyCatalog { delimiter: String },

    /// Two fields that must be combined have different shapes.
    #[error("shape mismatch for '{variable}': expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        variable: String,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    /// A coordinate axis has no finite values to match against.
    #[error("axis '{axis}' has no finite values")]
    EmptyAxis { axis: String },

    /// A sampling location is not a finite coordinate pair.
    #[error("invalid location (lon {lon}, lat {lat})")]
    InvalidLocation { lon: f64, lat: f64 },

    /// The exposure field is not a lat x lon surface.
    #[error("exposure for {species}/{pathway} has shape {shape:?}, expected a lat x lon surface")]
    UnsupportedFieldRank {
        species: String,
        pathway: String,
        shape: Vec<usize>,
    },

    /// A table column does not have one value per row.
    #[error("column '{column}' has {found} values but the table has {expected} rows")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },
}

impl InfluenceError {
    /// Create a Config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error means the requested field does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::FieldNotFound { .. } | Self::Dataset(DatasetError::MissingVariable(_))
        )
    }
}

/// Result type for influence store operations.
pub type Result<T> = std::result::Result<T, InfluenceError>;
