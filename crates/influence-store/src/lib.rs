//! Exposure estimates from gridded influence functions.
//!
//! An influence-function dataset holds one field per
//! `(source, species, pathway)` combination, each the exposure produced by a
//! unit emission from that source. This crate discovers the combinations
//! present in a dataset from its variable names, combines the fields with
//! user-supplied source magnitudes, samples the result at point locations
//! and exports it as a table or a NetCDF grid.
//!
//! # Architecture
//!
//! ```text
//! NetCDF file ──► NetCdfDataset
//!                      │
//!                      ▼
//!        InfluenceFunctionStore::open
//!                      │
//!                      ├─► Catalog::build (variable names only)
//!                      │
//!   get_field ◄────────┤  encode key, read, squeeze
//!                      │
//!   get_exposure ◄─────┤  Σ magnitude × field over SourceWeights
//!                      │
//!   sample_at_points ◄─┤  nearest lat line × nearest lon line
//!                      │
//!   fill_table ◄───────┤  one column per (species, pathway)
//!                      │
//!   export_grid ◄──────┘  MemoryDataset ──► write_netcdf
//! ```
//!
//! # Example
//!
//! ```ignore
//! use influence_store::{InfluenceFunctionStore, SourceWeights, StoreConfig};
//!
//! let store = InfluenceFunctionStore::open("influence_functions.nc", StoreConfig::default())?;
//!
//! let weights = SourceWeights::from([("coal", 2.0), ("traffic", 0.5)]);
//! let exposure = store.get_exposure(&weights, "PM25", "inh")?;
//!
//! store.export_grid(&weights, &[("PM25", "inh")], "exposure.nc")?;
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod field;
pub mod naming;
pub mod sampling;
pub mod store;
pub mod table;
pub mod weights;

// Re-export commonly used types at crate root
pub use catalog::Catalog;
pub use config::StoreConfig;
pub use error::{InfluenceError, Result};
pub use export::ExportResult;
pub use field::squeeze;
pub use naming::{exposure_variable_name, DecodeError, FieldKey, VariableNaming};
pub use sampling::nearest_grid_index;
pub use store::InfluenceFunctionStore;
pub use table::{ExposureTable, Location, TableColumn};
pub use weights::SourceWeights;

pub use gridded_dataset::{Dataset, MemoryDataset, NetCdfDataset};
