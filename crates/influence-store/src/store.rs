//! The influence-function store.

use std::path::Path;

use gridded_dataset::{Dataset, DatasetError, NetCdfDataset};
use ndarray::{Array1, ArrayD};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::config::StoreConfig;
use crate::error::{InfluenceError, Result};
use crate::field::squeeze;
use crate::naming::{FieldKey, VariableNaming};
use crate::weights::SourceWeights;

/// Read access to the influence functions of one dataset.
///
/// The catalog is built once at construction from variable names; fields are
/// read from the dataset on every request and never cached.
#[derive(Debug)]
pub struct InfluenceFunctionStore<D = NetCdfDataset> {
    dataset: D,
    config: StoreConfig,
    naming: VariableNaming,
    catalog: Catalog,
}

impl InfluenceFunctionStore<NetCdfDataset> {
    /// Open a NetCDF file and build its catalog.
    pub fn open<P: AsRef<Path>>(path: P, config: StoreConfig) -> Result<Self> {
        config.validate().map_err(InfluenceError::config)?;
        let dataset = NetCdfDataset::open(path)?;
        Self::new(dataset, config)
    }
}

impl<D: Dataset> InfluenceFunctionStore<D> {
    /// Wrap an opened dataset and build its catalog.
    pub fn new(dataset: D, config: StoreConfig) -> Result<Self> {
        config.validate().map_err(InfluenceError::config)?;

        let naming = VariableNaming::new(config.delimiter.clone());
        let catalog = Catalog::build(dataset.variable_names(), &naming, config.verbose);

        info!(
            dataset = %dataset.describe(),
            fields = catalog.keys().len(),
            sources = catalog.sources().len(),
            species = catalog.species().len(),
            pathways = catalog.pathways().len(),
            "Opened influence-function store"
        );

        Ok(Self {
            dataset,
            config,
            naming,
            catalog,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn naming(&self) -> &VariableNaming {
        &self.naming
    }

    /// The underlying dataset.
    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    /// Give back the underlying dataset.
    pub fn into_dataset(self) -> D {
        self.dataset
    }

    pub fn sources(&self) -> &[String] {
        self.catalog.sources()
    }

    pub fn species(&self) -> &[String] {
        self.catalog.species()
    }

    pub fn pathways(&self) -> &[String] {
        self.catalog.pathways()
    }

    // =========================================================================
    // Coordinates
    // =========================================================================

    /// Latitude values of the dataset.
    pub fn latitudes(&self) -> Result<Array1<f64>> {
        Ok(self.dataset.read_axis(&self.config.lat_name)?)
    }

    /// Longitude values of the dataset.
    pub fn longitudes(&self) -> Result<Array1<f64>> {
        Ok(self.dataset.read_axis(&self.config.lon_name)?)
    }

    /// `(longitudes, latitudes)`.
    pub fn lonlats(&self) -> Result<(Array1<f64>, Array1<f64>)> {
        Ok((self.longitudes()?, self.latitudes()?))
    }

    /// Vertical level values, or `None` when no vertical axis is configured.
    ///
    /// A configured axis that is missing from the dataset is an error.
    pub fn altitudes(&self) -> Result<Option<Array1<f64>>> {
        match &self.config.z_name {
            Some(z_name) => Ok(Some(self.dataset.read_axis(z_name)?)),
            None => {
                info!("No altitude axis");
                Ok(None)
            }
        }
    }

    // =========================================================================
    // Fields
    // =========================================================================

    /// Influence function for one key, with singleton dimensions removed.
    ///
    /// Shape is `(time, lat, lon[, level])` minus every length-1 axis.
    pub fn get_field(&self, source: &str, species: &str, pathway: &str) -> Result<ArrayD<f64>> {
        let variable = self.naming.encode(source, species, pathway);

        match self.dataset.read_variable(&variable) {
            Ok(values) => {
                let field = squeeze(values);
                debug!(variable = %variable, shape = ?field.shape(), "Read influence function");
                Ok(field)
            }
            Err(DatasetError::MissingVariable(_)) => Err(InfluenceError::FieldNotFound {
                key: FieldKey::new(source, species, pathway),
                variable,
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Influence function for a [`FieldKey`].
    pub fn get_field_by_key(&self, key: &FieldKey) -> Result<ArrayD<f64>> {
        self.get_field(&key.source, &key.species, &key.pathway)
    }

    /// Weighted sum of the influence functions of every source in `weights`
    /// for one species and pathway.
    ///
    /// The result has the shape of the first catalogued field and starts at
    /// zero, so empty weights give an all-zero field. Every weighted field
    /// must have that same shape.
    pub fn get_exposure(
        &self,
        weights: &SourceWeights,
        species: &str,
        pathway: &str,
    ) -> Result<ArrayD<f64>> {
        let template_key = self
            .catalog
            .first_key()
            .ok_or_else(|| InfluenceError::EmptyCatalog {
                delimiter: self.naming.delimiter().to_string(),
            })?;
        let template = self.get_field_by_key(template_key)?;
        let mut exposure = ArrayD::<f64>::zeros(template.raw_dim());

        for (source, magnitude) in weights.iter() {
            let field = self.get_field(source, species, pathway)?;
            if field.shape() != exposure.shape() {
                return Err(InfluenceError::ShapeMismatch {
                    variable: self.naming.encode(source, species, pathway),
                    expected: exposure.shape().to_vec(),
                    found: field.shape().to_vec(),
                });
            }
            exposure.scaled_add(magnitude, &field);
        }

        debug!(
            species = species,
            pathway = pathway,
            sources = weights.len(),
            total = exposure.sum(),
            "Computed exposure"
        );

        Ok(exposure)
    }
}
