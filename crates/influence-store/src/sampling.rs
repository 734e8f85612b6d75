//! Point sampling of exposure fields.
//!
//! Locations are matched to the grid one axis at a time: the nearest
//! latitude line and the nearest longitude line are found independently by
//! absolute difference. This is exact for regular lon/lat grids and is not a
//! geodesic nearest point. Locations outside the grid snap to the edge.

use gridded_dataset::Dataset;
use ndarray::{Array1, Array2, ArrayD};
use num_traits::Float;
use tracing::debug;

use crate::error::{InfluenceError, Result};
use crate::store::InfluenceFunctionStore;
use crate::table::Location;
use crate::weights::SourceWeights;

/// Index of the axis value closest to `target`.
///
/// Exact ties go to the lowest index. NaN axis values never match. Returns
/// `None` for an empty axis, an all-NaN axis, or a NaN target.
pub fn nearest_grid_index<T, I>(axis: I, target: T) -> Option<usize>
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(usize, T)> = None;
    for (index, value) in axis.into_iter().enumerate() {
        let distance = (value - target).abs();
        if distance.is_nan() {
            continue;
        }
        match best {
            Some((_, closest)) if distance >= closest => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

/// Per-axis lookup against already-loaded coordinates.
struct GridLocator {
    lat_name: String,
    lon_name: String,
    lats: Array1<f64>,
    lons: Array1<f64>,
}

impl GridLocator {
    fn locate(&self, lon: f64, lat: f64) -> Result<(usize, usize)> {
        if !lon.is_finite() || !lat.is_finite() {
            return Err(InfluenceError::InvalidLocation { lon, lat });
        }
        let i = nearest_grid_index(self.lats.iter().copied(), lat).ok_or_else(|| {
            InfluenceError::EmptyAxis {
                axis: self.lat_name.clone(),
            }
        })?;
        let j = nearest_grid_index(self.lons.iter().copied(), lon).ok_or_else(|| {
            InfluenceError::EmptyAxis {
                axis: self.lon_name.clone(),
            }
        })?;
        Ok((i, j))
    }
}

impl<D: Dataset> InfluenceFunctionStore<D> {
    fn grid_locator(&self) -> Result<GridLocator> {
        let (lons, lats) = self.lonlats()?;
        Ok(GridLocator {
            lat_name: self.config().lat_name.clone(),
            lon_name: self.config().lon_name.clone(),
            lats,
            lons,
        })
    }

    /// Grid indices `(lat_index, lon_index)` nearest to a location.
    pub fn nearest_index(&self, lon: f64, lat: f64) -> Result<(usize, usize)> {
        self.grid_locator()?.locate(lon, lat)
    }

    /// Exposure at each location, in input order.
    ///
    /// The exposure field is computed once and must reduce to a
    /// `lat x lon` surface after squeezing. Single-row and single-column
    /// grids are accepted.
    pub fn sample_at_points(
        &self,
        weights: &SourceWeights,
        species: &str,
        pathway: &str,
        locations: &[Location],
    ) -> Result<Vec<f64>> {
        let exposure = self.get_exposure(weights, species, pathway)?;
        let locator = self.grid_locator()?;
        let surface = as_surface(
            exposure,
            locator.lats.len(),
            locator.lons.len(),
            species,
            pathway,
        )?;

        let values = locations
            .iter()
            .map(|location| {
                let (i, j) = locator.locate(location.lon, location.lat)?;
                Ok(surface[[i, j]])
            })
            .collect::<Result<Vec<f64>>>()?;

        debug!(
            species = species,
            pathway = pathway,
            points = values.len(),
            "Sampled exposure at points"
        );

        Ok(values)
    }
}

/// Reshape a squeezed exposure field into a `(lat, lon)` surface.
///
/// The squeezed shape must be exactly `[nlat, nlon]` with length-1 axes
/// removed; anything else still carries a time or level axis, or does not
/// lie on the lat/lon grid.
pub(crate) fn as_surface(
    exposure: ArrayD<f64>,
    nlat: usize,
    nlon: usize,
    species: &str,
    pathway: &str,
) -> Result<Array2<f64>> {
    let expected: Vec<usize> = [nlat, nlon].into_iter().filter(|&n| n != 1).collect();
    let unsupported = || InfluenceError::UnsupportedFieldRank {
        species: species.to_string(),
        pathway: pathway.to_string(),
        shape: exposure.shape().to_vec(),
    };
    if exposure.shape() != expected.as_slice() {
        return Err(unsupported());
    }

    let values: Vec<f64> = exposure.iter().copied().collect();
    Array2::from_shape_vec((nlat, nlon), values).map_err(|_| unsupported())
}
