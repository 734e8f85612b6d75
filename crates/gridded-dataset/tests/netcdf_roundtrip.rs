//! Integration test: write a MemoryDataset to NetCDF and read it back.
//!
//! 1. Build a small lat/lon grid with known values
//! 2. Persist it with `write_netcdf`
//! 3. Reopen it with `NetCdfDataset`
//! 4. Verify names, shapes, values and attributes survive

use gridded_dataset::{write_netcdf, Dataset, DatasetError, MemoryDataset, NetCdfDataset};
use ndarray::{ArrayD, IxDyn};

/// Value at (lat, lon) = lat * 1000 + lon (for easy verification)
fn create_test_values(nlat: usize, nlon: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(nlat * nlon);
    for lat in 0..nlat {
        for lon in 0..nlon {
            data.push((lat * 1000 + lon) as f64);
        }
    }
    data
}

fn build_dataset() -> MemoryDataset {
    let mut ds = MemoryDataset::new("roundtrip");
    ds.add_coordinate("time", vec![0.0]).unwrap();
    ds.add_coordinate("lat", vec![-10.0, 0.0, 10.0]).unwrap();
    ds.add_coordinate("lon", vec![100.0, 110.0, 120.0, 130.0]).unwrap();

    let values = ArrayD::from_shape_vec(IxDyn(&[1, 3, 4]), create_test_values(3, 4)).unwrap();
    ds.add_variable("coal_PM25_inh", &["time", "lat", "lon"], values)
        .unwrap();
    ds.set_variable_attribute("lat", "units", "degrees_north")
        .unwrap();
    ds.set_attribute("title", "roundtrip test");
    ds
}

#[test]
fn test_netcdf_roundtrip_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roundtrip.nc");

    let source = build_dataset();
    write_netcdf(&source, &path).unwrap();

    let reopened = NetCdfDataset::open(&path).unwrap();
    assert_eq!(
        reopened.variable_names(),
        vec!["time", "lat", "lon", "coal_PM25_inh"]
    );

    let field = reopened.read_variable("coal_PM25_inh").unwrap();
    assert_eq!(field.shape(), &[1, 3, 4]);
    assert_eq!(field[IxDyn(&[0, 2, 3])], 2003.0);
    assert_eq!(field[IxDyn(&[0, 1, 0])], 1000.0);

    assert_eq!(
        reopened.read_axis("lon").unwrap().to_vec(),
        vec![100.0, 110.0, 120.0, 130.0]
    );
    assert_eq!(reopened.dimension_len("time"), Some(1));
    assert_eq!(
        reopened.variable_dimensions("coal_PM25_inh").unwrap(),
        vec!["time", "lat", "lon"]
    );
}

#[test]
fn test_netcdf_roundtrip_attributes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("attrs.nc");
    write_netcdf(&build_dataset(), &path).unwrap();

    let reopened = NetCdfDataset::open(&path).unwrap();
    assert_eq!(
        reopened.global_attribute("title").as_deref(),
        Some("roundtrip test")
    );
    assert_eq!(
        reopened.variable_attribute("lat", "units").as_deref(),
        Some("degrees_north")
    );
    assert_eq!(reopened.global_attribute("history"), None);
    assert_eq!(reopened.variable_attribute("lon", "units"), None);
}

#[test]
fn test_netcdf_missing_variable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.nc");
    write_netcdf(&build_dataset(), &path).unwrap();

    let reopened = NetCdfDataset::open(&path).unwrap();
    assert!(!reopened.has_variable("coal_PM25_ing"));
    assert!(matches!(
        reopened.read_variable("coal_PM25_ing"),
        Err(DatasetError::MissingVariable(_))
    ));
}

#[test]
fn test_open_nonexistent_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = NetCdfDataset::open(dir.path().join("does_not_exist.nc"));
    assert!(matches!(result, Err(DatasetError::NetCdf(_))));
}
