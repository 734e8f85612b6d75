//! In-memory dataset.
//!
//! Variables keep their insertion order, which is also the order reported by
//! [`Dataset::variable_names`] and the order used when writing to NetCDF.

use ndarray::{ArrayD, IxDyn};

use crate::dataset::Dataset;
use crate::error::{DatasetError, DatasetResult};

/// A named variable held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryVariable {
    /// Dimension names, outermost first.
    pub dims: Vec<String>,
    /// Values shaped by `dims`.
    pub data: ArrayD<f64>,
    /// Text attributes (e.g. `units`, `long_name`).
    pub attributes: Vec<(String, String)>,
}

impl MemoryVariable {
    /// Look up a text attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Ordered collection of dimensions, variables and global attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryDataset {
    name: String,
    dimensions: Vec<(String, usize)>,
    variables: Vec<(String, MemoryVariable)>,
    attributes: Vec<(String, String)>,
}

impl MemoryDataset {
    /// Create an empty dataset with a descriptive name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Declare a dimension.
    ///
    /// Re-declaring a dimension with the same length is a no-op; a different
    /// length is an error.
    pub fn add_dimension(&mut self, name: &str, len: usize) -> DatasetResult<()> {
        match self.dimension_len(name) {
            Some(existing) if existing == len => Ok(()),
            Some(existing) => Err(DatasetError::invalid_format(format!(
                "dimension '{}' already declared with length {} (requested {})",
                name, existing, len
            ))),
            None => {
                self.dimensions.push((name.to_string(), len));
                Ok(())
            }
        }
    }

    /// Declare a dimension and its 1-D coordinate variable of the same name.
    pub fn add_coordinate(&mut self, name: &str, values: Vec<f64>) -> DatasetResult<()> {
        self.add_dimension(name, values.len())?;
        let data = ArrayD::from_shape_vec(IxDyn(&[values.len()]), values)
            .map_err(|e| DatasetError::invalid_format(format!("coordinate '{}': {}", name, e)))?;
        self.add_variable(name, &[name], data)
    }

    /// Add (or replace) a variable over already-declared dimensions.
    pub fn add_variable(&mut self, name: &str, dims: &[&str], data: ArrayD<f64>) -> DatasetResult<()> {
        let expected = dims
            .iter()
            .map(|dim| {
                self.dimension_len(dim)
                    .ok_or_else(|| DatasetError::MissingDimension(dim.to_string()))
            })
            .collect::<DatasetResult<Vec<usize>>>()?;

        if data.shape() != expected.as_slice() {
            return Err(DatasetError::ShapeMismatch {
                name: name.to_string(),
                expected,
                actual: data.shape().to_vec(),
            });
        }

        let variable = MemoryVariable {
            dims: dims.iter().map(|d| d.to_string()).collect(),
            data,
            attributes: Vec::new(),
        };

        match self.variables.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, slot)) => *slot = variable,
            None => self.variables.push((name.to_string(), variable)),
        }
        Ok(())
    }

    /// Set a text attribute on an existing variable.
    pub fn set_variable_attribute(
        &mut self,
        variable: &str,
        name: &str,
        value: impl Into<String>,
    ) -> DatasetResult<()> {
        let (_, var) = self
            .variables
            .iter_mut()
            .find(|(existing, _)| existing == variable)
            .ok_or_else(|| DatasetError::missing_variable(variable))?;
        upsert(&mut var.attributes, name, value.into());
        Ok(())
    }

    /// Set a global text attribute.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        upsert(&mut self.attributes, name, value.into());
    }

    /// Dataset name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared dimensions in order.
    pub fn dimensions(&self) -> &[(String, usize)] {
        &self.dimensions
    }

    /// Length of a declared dimension.
    pub fn dimension_len(&self, name: &str) -> Option<usize> {
        self.dimensions
            .iter()
            .find(|(dim, _)| dim == name)
            .map(|(_, len)| *len)
    }

    /// Variables in insertion order.
    pub fn variables(&self) -> &[(String, MemoryVariable)] {
        &self.variables
    }

    /// Look up a variable by name.
    pub fn variable(&self, name: &str) -> Option<&MemoryVariable> {
        self.variables
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, var)| var)
    }

    /// Global attributes in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Look up a global attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl Dataset for MemoryDataset {
    fn variable_names(&self) -> Vec<String> {
        self.variables.iter().map(|(name, _)| name.clone()).collect()
    }

    fn read_variable(&self, name: &str) -> DatasetResult<ArrayD<f64>> {
        self.variable(name)
            .map(|var| var.data.clone())
            .ok_or_else(|| DatasetError::missing_variable(name))
    }

    fn describe(&self) -> String {
        format!("memory:{}", self.name)
    }

    fn has_variable(&self, name: &str) -> bool {
        self.variable(name).is_some()
    }
}

fn upsert(entries: &mut Vec<(String, String)>, name: &str, value: String) {
    match entries.iter_mut().find(|(key, _)| key == name) {
        Some((_, slot)) => *slot = value,
        None => entries.push((name.to_string(), value)),
    }
}
