//! Gridded dataset access for influence-function data.
//!
//! This crate provides a small read-only view over collections of named
//! N-dimensional numeric variables, the shape NetCDF files take once opened.
//!
//! # Backends
//!
//! - [`NetCdfDataset`]: reads NetCDF-3/4 files with the native `netcdf`
//!   library. Values of any numeric type are converted to `f64` on read.
//! - [`MemoryDataset`]: ordered in-memory variables with named dimensions.
//!   Derived outputs are assembled here and persisted with [`write_netcdf`].
//!
//! # Example
//!
//! ```ignore
//! use gridded_dataset::{Dataset, NetCdfDataset};
//!
//! let dataset = NetCdfDataset::open("influence_functions.nc")?;
//! for name in dataset.variable_names() {
//!     let values = dataset.read_variable(&name)?;
//!     println!("{name}: {:?}", values.shape());
//! }
//! ```

pub mod dataset;
pub mod error;
pub mod memory;
pub mod native;
pub mod writer;

pub use dataset::Dataset;
pub use error::{DatasetError, DatasetResult};
pub use memory::{MemoryDataset, MemoryVariable};
pub use native::{silence_hdf5_errors, NetCdfDataset};
pub use writer::write_netcdf;
