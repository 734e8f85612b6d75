//! Persist a [`MemoryDataset`] as a NetCDF-4 file.

use std::path::Path;

use tracing::{debug, info};

use crate::error::DatasetResult;
use crate::memory::MemoryDataset;
use crate::native::silence_hdf5_errors;

/// Write every dimension, variable and attribute of `dataset` to `path`.
///
/// An existing file at `path` is overwritten. Variables are stored as
/// 64-bit floats in insertion order.
pub fn write_netcdf<P: AsRef<Path>>(dataset: &MemoryDataset, path: P) -> DatasetResult<()> {
    silence_hdf5_errors();

    let path = path.as_ref();
    let mut file = netcdf::create(path)?;

    for (name, len) in dataset.dimensions() {
        file.add_dimension(name, *len)?;
    }

    for (name, value) in dataset.attributes() {
        file.add_attribute(name, value.as_str())?;
    }

    for (name, variable) in dataset.variables() {
        let dims: Vec<&str> = variable.dims.iter().map(String::as_str).collect();
        let mut var = file.add_variable::<f64>(name, &dims)?;

        for (key, value) in &variable.attributes {
            var.put_attribute(key, value.as_str())?;
        }

        let values: Vec<f64> = variable.data.iter().copied().collect();
        var.put_values(&values, ..)?;

        debug!(variable = %name, shape = ?variable.data.shape(), "Wrote variable");
    }

    info!(
        path = %path.display(),
        variables = dataset.variables().len(),
        "Wrote NetCDF dataset"
    );

    Ok(())
}
