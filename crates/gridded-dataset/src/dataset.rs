//! The read-only dataset abstraction.

use ndarray::{Array1, ArrayD, Ix1};

use crate::error::{DatasetError, DatasetResult};

/// A collection of named multi-dimensional numeric variables.
///
/// Coordinate axes (latitude, longitude, level, time) are ordinary 1-D
/// variables and are read through [`Dataset::read_axis`].
pub trait Dataset {
    /// Names of all variables, in definition order.
    fn variable_names(&self) -> Vec<String>;

    /// Read a variable's values, shaped by its dimensions (row-major).
    ///
    /// Returns [`DatasetError::MissingVariable`] when `name` is not present.
    fn read_variable(&self, name: &str) -> DatasetResult<ArrayD<f64>>;

    /// Short human-readable label used in logs and output metadata.
    fn describe(&self) -> String;

    /// Check whether a variable with this name exists.
    fn has_variable(&self, name: &str) -> bool {
        self.variable_names().iter().any(|v| v == name)
    }

    /// Read a one-dimensional coordinate variable.
    fn read_axis(&self, name: &str) -> DatasetResult<Array1<f64>> {
        let values = self.read_variable(name)?;
        if values.ndim() != 1 {
            return Err(DatasetError::invalid_format(format!(
                "axis '{}' has {} dimensions, expected 1",
                name,
                values.ndim()
            )));
        }
        values
            .into_dimensionality::<Ix1>()
            .map_err(|e| DatasetError::invalid_format(format!("axis '{}': {}", name, e)))
    }
}
