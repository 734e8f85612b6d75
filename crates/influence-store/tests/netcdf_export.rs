//! Integration test: influence functions on disk, exposures back to disk.
//!
//! This test covers the full file-based workflow:
//! 1. Write a synthetic influence-function dataset to NetCDF
//! 2. Open it with `InfluenceFunctionStore::open`
//! 3. Export weighted exposures with `export_grid`
//! 4. Reopen the output with `NetCdfDataset` and verify coordinates and values

use influence_store::{
    Dataset, InfluenceError, InfluenceFunctionStore, NetCdfDataset, SourceWeights, StoreConfig,
};
use test_utils::{
    assert_fields_approx_eq, init_test_tracing, mixed_scenario, names, InfluenceFixture,
};

#[test]
fn test_open_reads_catalog_from_file() -> anyhow::Result<()> {
    init_test_tracing();
    let file = mixed_scenario().write_netcdf();

    let store = InfluenceFunctionStore::open(file.path(), StoreConfig::default())?;

    assert_eq!(store.sources(), names::SOURCES);
    assert_eq!(store.species(), names::SPECIES);
    assert_eq!(store.pathways(), names::PATHWAYS);
    assert_eq!(store.latitudes()?.to_vec(), vec![0.0, 10.0, 20.0]);
    assert!(store.dataset().describe().ends_with("influence_functions.nc"));
    Ok(())
}

#[test]
fn test_file_and_memory_exposures_agree() -> anyhow::Result<()> {
    init_test_tracing();
    let fixture = mixed_scenario();
    let file = fixture.write_netcdf();

    let on_disk = InfluenceFunctionStore::open(file.path(), StoreConfig::default())?;
    let in_memory = InfluenceFunctionStore::new(fixture.build(), StoreConfig::default())?;
    let weights = SourceWeights::from([("coal", 0.25), ("shipping", 7.0)]);

    let a = on_disk.get_exposure(&weights, "NOx", "ing")?;
    let b = in_memory.get_exposure(&weights, "NOx", "ing")?;
    assert_eq!(a.shape(), b.shape());
    assert_fields_approx_eq!(a.iter(), b.iter(), 1e-12);
    Ok(())
}

#[test]
fn test_export_grid_roundtrip() -> anyhow::Result<()> {
    init_test_tracing();
    let file = mixed_scenario().write_netcdf();
    let store = InfluenceFunctionStore::open(file.path(), StoreConfig::default())?;
    let weights = SourceWeights::from([("coal", 1.0), ("traffic", 2.0), ("shipping", 0.5)]);

    let destination = file.sibling("exposure.nc");
    let result = store.export_grid(&weights, &[("NOx", "inh"), ("PM25", "ing")], &destination)?;

    assert_eq!(result.path, destination);
    assert_eq!(result.variables, vec!["NOx_inh", "PM25_ing"]);
    assert_eq!(result.shape, (3, 3));

    let exported = NetCdfDataset::open(&destination)?;
    assert_eq!(
        exported.variable_names(),
        vec!["time", "lat", "lon", "NOx_inh", "PM25_ing"]
    );
    assert_eq!(exported.read_axis("time")?.to_vec(), vec![0.0]);
    assert_eq!(exported.read_axis("lat")?, store.latitudes()?);
    assert_eq!(exported.read_axis("lon")?, store.longitudes()?);
    assert_eq!(exported.variable_dimensions("NOx_inh")?, vec!["time", "lat", "lon"]);

    let written = exported.read_variable("NOx_inh")?;
    assert_eq!(written.shape(), &[1, 3, 3]);
    let expected = store.get_exposure(&weights, "NOx", "inh")?;
    assert_fields_approx_eq!(written.iter(), expected.iter(), 1e-12);

    assert_eq!(
        exported.variable_attribute("lon", "units").as_deref(),
        Some("degrees_east")
    );
    assert!(exported.global_attribute("date_created").is_some());
    Ok(())
}

#[test]
fn test_export_grid_repeated_pair_listed_once() -> anyhow::Result<()> {
    init_test_tracing();
    let file = mixed_scenario().write_netcdf();
    let store = InfluenceFunctionStore::open(file.path(), StoreConfig::default())?;

    let destination = file.sibling("repeated.nc");
    let result = store.export_grid(
        &SourceWeights::from([("coal", 1.0)]),
        &[("NOx", "inh"), ("PM25", "inh"), ("NOx", "inh")],
        &destination,
    )?;

    assert_eq!(result.variables, vec!["NOx_inh", "PM25_inh"]);
    let exported = NetCdfDataset::open(&destination)?;
    assert_eq!(
        exported.variable_names(),
        vec!["time", "lat", "lon", "NOx_inh", "PM25_inh"]
    );
    Ok(())
}

#[test]
fn test_export_failure_does_not_create_file() {
    init_test_tracing();
    let file = mixed_scenario().write_netcdf();
    let store = InfluenceFunctionStore::open(file.path(), StoreConfig::default()).unwrap();

    let destination = file.sibling("never.nc");
    let err = store
        .export_grid(
            &SourceWeights::from([("coal", 1.0)]),
            &[("NOx", "inh"), ("O3", "inh")],
            &destination,
        )
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(!destination.exists());
}

#[test]
fn test_level_axis_dropped_from_export_of_surface_fields() -> anyhow::Result<()> {
    init_test_tracing();
    // One level: the vertical axis squeezes away and the field is a surface
    let file = InfluenceFixture::new(vec![0.0, 10.0], vec![0.0, 10.0, 20.0])
        .with_levels("level", vec![250.0])
        .with_constant_field("S1_NOx_inh", 2.0)
        .write_netcdf();
    let store = InfluenceFunctionStore::open(
        file.path(),
        StoreConfig::default().with_z_name("level"),
    )?;
    assert_eq!(store.altitudes()?.map(|z| z.to_vec()), Some(vec![250.0]));

    let destination = file.sibling("surface.nc");
    store.export_grid(&SourceWeights::from([("S1", 3.0)]), &[("NOx", "inh")], &destination)?;

    let exported = NetCdfDataset::open(&destination)?;
    assert!(!exported.has_variable("level"));
    assert_eq!(exported.dimension_len("level"), None);
    let written = exported.read_variable("NOx_inh")?;
    assert_eq!(written.shape(), &[1, 2, 3]);
    assert!(written.iter().all(|v| *v == 6.0));
    Ok(())
}

#[test]
fn test_open_missing_file_is_dataset_error() {
    let err = InfluenceFunctionStore::open("/nonexistent/influence.nc", StoreConfig::default())
        .unwrap_err();
    assert!(matches!(err, InfluenceError::Dataset(_)));
}
