//! Common test fixtures for influence-function tests.
//!
//! [`InfluenceFixture`] describes a small influence-function dataset:
//! coordinate axes, fields laid out as `(time, lat, lon[, level])`, and
//! auxiliary variables that do not follow the naming convention. It can be
//! turned into a [`MemoryDataset`] or written to a temporary NetCDF file.

use std::path::{Path, PathBuf};

use gridded_dataset::{write_netcdf, MemoryDataset};
use ndarray::{ArrayD, IxDyn};
use tempfile::TempDir;

use crate::generators::{create_indexed_grid, create_plume_grid, regular_axis};

/// Common identifiers used by the preset scenarios.
pub mod names {
    pub const SOURCES: [&str; 3] = ["coal", "traffic", "shipping"];
    pub const SPECIES: [&str; 2] = ["NOx", "PM25"];
    pub const PATHWAYS: [&str; 2] = ["inh", "ing"];

    /// Auxiliary (lat, lon) variable present in the mixed scenario.
    pub const CELL_AREA: &str = "cell_area";
}

/// Builder for a synthetic influence-function dataset.
#[derive(Debug, Clone)]
pub struct InfluenceFixture {
    lat_name: String,
    lon_name: String,
    lats: Vec<f64>,
    lons: Vec<f64>,
    times: Vec<f64>,
    levels: Option<(String, Vec<f64>)>,
    fields: Vec<(String, Vec<f64>)>,
    auxiliary: Vec<(String, Vec<f64>)>,
}

impl InfluenceFixture {
    /// A single-time-step grid over the given axes.
    pub fn new(lats: Vec<f64>, lons: Vec<f64>) -> Self {
        Self {
            lat_name: "lat".to_string(),
            lon_name: "lon".to_string(),
            lats,
            lons,
            times: vec![0.0],
            levels: None,
            fields: Vec::new(),
            auxiliary: Vec::new(),
        }
    }

    /// Rename the latitude/longitude coordinates.
    pub fn with_axis_names(mut self, lat_name: &str, lon_name: &str) -> Self {
        self.lat_name = lat_name.to_string();
        self.lon_name = lon_name.to_string();
        self
    }

    /// Use several time steps.
    pub fn with_times(mut self, times: Vec<f64>) -> Self {
        self.times = times;
        self
    }

    /// Add a vertical axis as the innermost field dimension.
    pub fn with_levels(mut self, name: &str, levels: Vec<f64>) -> Self {
        self.levels = Some((name.to_string(), levels));
        self
    }

    /// Add a field with explicit values in `(time, lat, lon[, level])` order.
    pub fn with_field(mut self, name: &str, values: Vec<f64>) -> Self {
        self.fields.push((name.to_string(), values));
        self
    }

    /// Add a field with the same value everywhere.
    pub fn with_constant_field(self, name: &str, value: f64) -> Self {
        let len = self.field_shape().iter().product();
        self.with_field(name, vec![value; len])
    }

    /// Add a `(lat, lon)` variable that is not an influence function.
    pub fn with_auxiliary(mut self, name: &str, values: Vec<f64>) -> Self {
        self.auxiliary.push((name.to_string(), values));
        self
    }

    /// Shape every field is stored with.
    pub fn field_shape(&self) -> Vec<usize> {
        let mut shape = vec![self.times.len(), self.lats.len(), self.lons.len()];
        if let Some((_, levels)) = &self.levels {
            shape.push(levels.len());
        }
        shape
    }

    /// Materialize as an in-memory dataset.
    ///
    /// Coordinates come first (`time`, lat, lon, level), then fields, then
    /// auxiliary variables.
    ///
    /// # Panics
    ///
    /// Panics if a field's value count does not match [`Self::field_shape`].
    pub fn build(&self) -> MemoryDataset {
        let mut ds = MemoryDataset::new("influence fixture");
        ds.add_coordinate("time", self.times.clone())
            .expect("time coordinate");
        ds.add_coordinate(&self.lat_name, self.lats.clone())
            .expect("lat coordinate");
        ds.add_coordinate(&self.lon_name, self.lons.clone())
            .expect("lon coordinate");

        let mut dims = vec!["time", self.lat_name.as_str(), self.lon_name.as_str()];
        if let Some((name, levels)) = &self.levels {
            ds.add_coordinate(name, levels.clone())
                .expect("level coordinate");
            dims.push(name.as_str());
        }

        let shape = self.field_shape();
        for (name, values) in &self.fields {
            let data = ArrayD::from_shape_vec(IxDyn(&shape), values.clone())
                .unwrap_or_else(|e| panic!("field '{}' does not fit {:?}: {}", name, shape, e));
            ds.add_variable(name, &dims, data)
                .unwrap_or_else(|e| panic!("field '{}': {}", name, e));
        }

        let surface = [self.lats.len(), self.lons.len()];
        for (name, values) in &self.auxiliary {
            let data = ArrayD::from_shape_vec(IxDyn(&surface), values.clone())
                .unwrap_or_else(|e| panic!("auxiliary '{}' does not fit {:?}: {}", name, surface, e));
            ds.add_variable(name, &[self.lat_name.as_str(), self.lon_name.as_str()], data)
                .unwrap_or_else(|e| panic!("auxiliary '{}': {}", name, e));
        }

        ds
    }

    /// Write the fixture to a NetCDF file inside a fresh temporary directory.
    pub fn write_netcdf(&self) -> TempNetCdf {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("influence_functions.nc");
        write_netcdf(&self.build(), &path).expect("write fixture NetCDF");
        TempNetCdf { dir, path }
    }
}

/// A NetCDF file that is deleted together with its temporary directory.
#[derive(Debug)]
pub struct TempNetCdf {
    dir: TempDir,
    path: PathBuf,
}

impl TempNetCdf {
    /// Path of the fixture file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A path for an output file next to the fixture.
    pub fn sibling(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Two sources on a 1×2×2 grid of ones: `S1_NOx_inh`, `S2_NOx_inh`.
///
/// Axes are `lat = [0, 10]`, `lon = [0, 10]`.
pub fn two_source_scenario() -> InfluenceFixture {
    InfluenceFixture::new(vec![0.0, 10.0], vec![0.0, 10.0])
        .with_constant_field("S1_NOx_inh", 1.0)
        .with_constant_field("S2_NOx_inh", 1.0)
}

/// Every source/species/pathway from [`names`] on a 3×3 grid.
///
/// Axes are `lat = lon = [0, 10, 20]`. Field values are distinct per
/// variable: plume-shaped around a source-specific cell, scaled by the
/// variable's position in the file. A `cell_area` auxiliary variable is
/// appended and is not an influence function.
pub fn mixed_scenario() -> InfluenceFixture {
    let axis = regular_axis(0.0, 10.0, 3);
    let mut fixture = InfluenceFixture::new(axis.clone(), axis);

    let mut scale = 1.0;
    for (s, source) in names::SOURCES.iter().enumerate() {
        for species in names::SPECIES {
            for pathway in names::PATHWAYS {
                let values = create_plume_grid(3, 3, s, 2 - s)
                    .into_iter()
                    .map(|v| v * scale)
                    .collect();
                fixture = fixture.with_field(&format!("{source}_{species}_{pathway}"), values);
                scale += 1.0;
            }
        }
    }

    fixture.with_auxiliary(names::CELL_AREA, create_indexed_grid(3, 3))
}
