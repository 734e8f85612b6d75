//! Native NetCDF access using the netcdf library.
//!
//! Files are opened once and kept open for the lifetime of the
//! [`NetCdfDataset`]; every [`Dataset::read_variable`] call reads the values
//! from the file again. Numeric variables of any stored type are converted
//! to `f64` by libnetcdf on read.

use std::path::{Path, PathBuf};
use std::sync::Once;

use ndarray::{ArrayD, IxDyn};
use tracing::debug;

use crate::dataset::Dataset;
use crate::error::{DatasetError, DatasetResult};

/// Silence HDF5's automatic error printing to stderr.
///
/// The HDF5 C library prints verbose error messages to stderr even when errors
/// are handled gracefully by the Rust code (e.g., when checking for optional
/// attributes that don't exist). This creates confusing log spam like:
///
/// ```text
/// HDF5-DIAG: Error detected in HDF5 (1.10.8) thread 3:
///   #003: ../../../src/H5Adense.c line 397 in H5A__dense_open(): can't locate attribute in name index
/// ```
///
/// Called automatically before every open/create in this crate; it only
/// takes effect once per process.
pub fn silence_hdf5_errors() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        // SAFETY: H5Eset_auto2 is thread-safe and we're passing null pointers
        // to disable error output, which is a documented valid use.
        unsafe {
            hdf5_metno_sys::h5e::H5Eset_auto2(
                hdf5_metno_sys::h5e::H5E_DEFAULT,
                None,
                std::ptr::null_mut(),
            );
        }
    });
}

/// A NetCDF file opened for reading.
pub struct NetCdfDataset {
    path: PathBuf,
    file: netcdf::File,
}

impl std::fmt::Debug for NetCdfDataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetCdfDataset")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl NetCdfDataset {
    /// Open a NetCDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> DatasetResult<Self> {
        // Silence HDF5's verbose stderr output for missing attributes
        silence_hdf5_errors();

        let path = path.as_ref().to_path_buf();
        let file = netcdf::open(&path)?;

        debug!(
            path = %path.display(),
            variables = file.variables().count(),
            dimensions = file.dimensions().count(),
            "Opened NetCDF dataset"
        );

        Ok(Self { path, file })
    }

    /// Path the dataset was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Length of a named dimension.
    pub fn dimension_len(&self, name: &str) -> Option<usize> {
        self.file.dimension(name).map(|dim| dim.len())
    }

    /// Dimension names of a variable, outermost first.
    pub fn variable_dimensions(&self, name: &str) -> DatasetResult<Vec<String>> {
        let var = self
            .file
            .variable(name)
            .ok_or_else(|| DatasetError::missing_variable(name))?;
        Ok(var.dimensions().iter().map(|dim| dim.name()).collect())
    }

    /// Read a global text attribute.
    pub fn global_attribute(&self, name: &str) -> Option<String> {
        // Check first to avoid HDF5 error spam for optional attributes
        if !self.file.attributes().any(|attr| attr.name() == name) {
            return None;
        }
        match self.file.attribute(name)?.value().ok()? {
            netcdf::AttributeValue::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Read a text attribute from a variable.
    pub fn variable_attribute(&self, variable: &str, name: &str) -> Option<String> {
        let var = self.file.variable(variable)?;
        if !has_attr(&var, name) {
            return None;
        }
        match var.attribute_value(name)?.ok()? {
            netcdf::AttributeValue::Str(value) => Some(value),
            _ => None,
        }
    }
}

impl Dataset for NetCdfDataset {
    fn variable_names(&self) -> Vec<String> {
        self.file.variables().map(|var| var.name()).collect()
    }

    fn read_variable(&self, name: &str) -> DatasetResult<ArrayD<f64>> {
        let var = self
            .file
            .variable(name)
            .ok_or_else(|| DatasetError::missing_variable(name))?;

        let shape: Vec<usize> = var.dimensions().iter().map(|dim| dim.len()).collect();

        // Read all extents; libnetcdf converts the stored type to f64
        let values: Vec<f64> = var.get_values(..)?;

        ArrayD::from_shape_vec(IxDyn(&shape), values)
            .map_err(|e| DatasetError::invalid_format(format!("variable '{}': {}", name, e)))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn has_variable(&self, name: &str) -> bool {
        self.file.variable(name).is_some()
    }
}

/// Check if a variable has an attribute with the given name.
/// This avoids HDF5 error spam when checking for optional attributes.
fn has_attr(var: &netcdf::Variable, name: &str) -> bool {
    var.attributes().any(|attr| attr.name() == name)
}
