//! Exporting exposure estimates to tables and NetCDF grids.
//!
//! # Known limitations of the grid export
//!
//! The exported grid always has a single synthetic time step (`time = 0.0`)
//! and no vertical axis. An exposure field is written only if it squeezes
//! to the `lat x lon` grid; fields that still carry several time steps or
//! levels are rejected with `UnsupportedFieldRank` rather than reduced.

use std::path::{Path, PathBuf};

use chrono::Utc;
use gridded_dataset::{write_netcdf, Dataset, MemoryDataset};
use ndarray::Axis;
use tracing::info;

use crate::error::Result;
use crate::naming::exposure_variable_name;
use crate::sampling::as_surface;
use crate::store::InfluenceFunctionStore;
use crate::table::ExposureTable;
use crate::weights::SourceWeights;

/// Summary of a completed grid export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportResult {
    /// File that was written.
    pub path: PathBuf,
    /// Exposure variables written, in request order.
    pub variables: Vec<String>,
    /// Grid size as `(lat, lon)`.
    pub shape: (usize, usize),
}

impl<D: Dataset> InfluenceFunctionStore<D> {
    /// Add one exposure column per `(species, pathway)` pair to `table`.
    ///
    /// Columns are named `<species>_<pathway>`. Every column is computed
    /// before any is attached, so on error the table is left unchanged.
    pub fn fill_table<S, P>(
        &self,
        table: &mut ExposureTable,
        pairs: &[(S, P)],
        weights: &SourceWeights,
    ) -> Result<()>
    where
        S: AsRef<str>,
        P: AsRef<str>,
    {
        let mut columns = Vec::with_capacity(pairs.len());
        for (species, pathway) in pairs {
            let (species, pathway) = (species.as_ref(), pathway.as_ref());
            let values = self.sample_at_points(weights, species, pathway, table.locations())?;
            columns.push((exposure_variable_name(species, pathway), values));
        }

        for (name, values) in columns {
            table.set_column(name, values)?;
        }

        info!(rows = table.len(), columns = pairs.len(), "Filled exposure table");
        Ok(())
    }

    /// Assemble the output dataset written by [`Self::export_grid`].
    ///
    /// Holds coordinates `time = [0.0]`, `lat`, `lon` copied from the source
    /// and one `(time, lat, lon)` variable per `(species, pathway)` pair.
    pub fn build_export_dataset<S, P>(
        &self,
        weights: &SourceWeights,
        pairs: &[(S, P)],
    ) -> Result<MemoryDataset>
    where
        S: AsRef<str>,
        P: AsRef<str>,
    {
        let (lons, lats) = self.lonlats()?;
        let (nlat, nlon) = (lats.len(), lons.len());

        let mut output = MemoryDataset::new("influence exposure");
        output.add_coordinate("time", vec![0.0])?;
        output.add_coordinate("lat", lats.to_vec())?;
        output.add_coordinate("lon", lons.to_vec())?;
        output.set_variable_attribute("lat", "units", "degrees_north")?;
        output.set_variable_attribute("lon", "units", "degrees_east")?;

        for (species, pathway) in pairs {
            let (species, pathway) = (species.as_ref(), pathway.as_ref());
            let exposure = self.get_exposure(weights, species, pathway)?;
            let grid = as_surface(exposure, nlat, nlon, species, pathway)?
                .insert_axis(Axis(0))
                .into_dyn();

            let name = exposure_variable_name(species, pathway);
            output.add_variable(&name, &["time", "lat", "lon"], grid)?;
            output.set_variable_attribute(
                &name,
                "long_name",
                format!("exposure to {species} via {pathway}"),
            )?;
        }

        output.set_attribute("title", "Weighted influence-function exposure");
        output.set_attribute("source_dataset", self.dataset().describe());
        output.set_attribute("date_created", Utc::now().to_rfc3339());

        Ok(output)
    }

    /// Compute exposures for every `(species, pathway)` pair and write them
    /// to a new NetCDF file.
    ///
    /// All exposures are computed before the destination is created; the
    /// first failure aborts the export.
    pub fn export_grid<S, P, Q>(
        &self,
        weights: &SourceWeights,
        pairs: &[(S, P)],
        destination: Q,
    ) -> Result<ExportResult>
    where
        S: AsRef<str>,
        P: AsRef<str>,
        Q: AsRef<Path>,
    {
        let output = self.build_export_dataset(weights, pairs)?;
        let destination = destination.as_ref();
        write_netcdf(&output, destination)?;

        // A repeated pair overwrites its variable, so list each name once
        let mut variables: Vec<String> = Vec::with_capacity(pairs.len());
        for (species, pathway) in pairs {
            let name = exposure_variable_name(species.as_ref(), pathway.as_ref());
            if !variables.contains(&name) {
                variables.push(name);
            }
        }
        let shape = (
            output.dimension_len("lat").unwrap_or_default(),
            output.dimension_len("lon").unwrap_or_default(),
        );

        info!(
            path = %destination.display(),
            variables = ?variables,
            "Exported exposure grid"
        );

        Ok(ExportResult {
            path: destination.to_path_buf(),
            variables,
            shape,
        })
    }
}
