//! Catalog of the sources, species and pathways present in a dataset.
//!
//! Built once from variable names only; no field data is read. Each list
//! holds distinct values in first-seen order.

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::naming::{FieldKey, VariableNaming};

/// Discovered influence-function identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    sources: Vec<String>,
    species: Vec<String>,
    pathways: Vec<String>,
    keys: Vec<FieldKey>,
    skipped: Vec<String>,
}

impl Catalog {
    /// Scan variable names and collect every name that decodes.
    ///
    /// Names that do not follow the convention are recorded in
    /// [`Catalog::skipped`]; with `verbose` they are also logged at `info`.
    pub fn build<I, S>(names: I, naming: &VariableNaming, verbose: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self::default();

        for name in names {
            let name = name.as_ref();
            match naming.decode(name) {
                Ok(key) => catalog.record(key),
                Err(reason) => {
                    if verbose {
                        info!(variable = name, reason = %reason, "Variable not eligible");
                    } else {
                        trace!(variable = name, reason = %reason, "Variable not eligible");
                    }
                    catalog.skipped.push(name.to_string());
                }
            }
        }

        if verbose {
            info!(sources = ?catalog.sources, "Source types");
            info!(species = ?catalog.species, "Chemical species");
            info!(pathways = ?catalog.pathways, "Exposure pathways");
        }
        debug!(
            fields = catalog.keys.len(),
            sources = catalog.sources.len(),
            species = catalog.species.len(),
            pathways = catalog.pathways.len(),
            skipped = catalog.skipped.len(),
            "Built influence-function catalog"
        );

        catalog
    }

    fn record(&mut self, key: FieldKey) {
        push_unique(&mut self.sources, &key.source);
        push_unique(&mut self.species, &key.species);
        push_unique(&mut self.pathways, &key.pathway);
        self.keys.push(key);
    }

    /// Known sources, in first-seen order.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Known chemical species, in first-seen order.
    pub fn species(&self) -> &[String] {
        &self.species
    }

    /// Known exposure pathways, in first-seen order.
    pub fn pathways(&self) -> &[String] {
        &self.pathways
    }

    /// Every decoded variable, in scan order.
    pub fn keys(&self) -> &[FieldKey] {
        &self.keys
    }

    /// Variable names that did not follow the naming convention.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// The first decoded variable.
    ///
    /// Its source, species and pathway are also the first entries of the
    /// three lists.
    pub fn first_key(&self) -> Option<&FieldKey> {
        self.keys.first()
    }

    /// True when no variable followed the naming convention.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains_source(&self, source: &str) -> bool {
        self.sources.iter().any(|s| s == source)
    }

    pub fn contains_species(&self, species: &str) -> bool {
        self.species.iter().any(|s| s == species)
    }

    pub fn contains_pathway(&self, pathway: &str) -> bool {
        self.pathways.iter().any(|p| p == pathway)
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|existing| existing == value) {
        list.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(names: &[&str]) -> Catalog {
        Catalog::build(names.iter().copied(), &VariableNaming::default(), false)
    }

    #[test]
    fn test_first_seen_order() {
        let catalog = build(&[
            "lat",
            "lon",
            "traffic_NOx_inh",
            "coal_PM25_inh",
            "traffic_PM25_ing",
            "shipping_NOx_inh",
            "coal_NOx_ing",
        ]);

        assert_eq!(catalog.sources(), &["traffic", "coal", "shipping"]);
        assert_eq!(catalog.species(), &["NOx", "PM25"]);
        assert_eq!(catalog.pathways(), &["inh", "ing"]);
        assert_eq!(catalog.keys().len(), 5);
        assert_eq!(catalog.skipped(), &["lat", "lon"]);
    }

    #[test]
    fn test_distinct_sources_counted_once() {
        let names: Vec<String> = (0..12)
            .map(|i| format!("S{}_NOx_{}", i % 4, if i % 2 == 0 { "inh" } else { "ing" }))
            .collect();
        let catalog = Catalog::build(&names, &VariableNaming::default(), false);

        assert_eq!(catalog.sources(), &["S0", "S1", "S2", "S3"]);
        assert_eq!(catalog.pathways(), &["inh", "ing"]);
    }

    #[test]
    fn test_excludes_wrong_token_counts() {
        let catalog = build(&[
            "time",
            "cell_area",
            "a_b_c_d",
            "a_b_c_d_e",
            "S1_NOx_inh",
        ]);

        assert_eq!(catalog.sources(), &["S1"]);
        assert_eq!(catalog.skipped().len(), 4);
        assert!(!catalog.contains_source("a"));
        assert!(!catalog.contains_source("cell"));
    }

    #[test]
    fn test_verbose_does_not_change_result() {
        let names = ["lat", "S1_NOx_inh"];
        let quiet = Catalog::build(names, &VariableNaming::default(), false);
        let loud = Catalog::build(names, &VariableNaming::default(), true);
        assert_eq!(quiet, loud);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = build(&["lat", "lon", "time"]);
        assert!(catalog.is_empty());
        assert!(catalog.first_key().is_none());
        assert!(catalog.sources().is_empty());
    }

    #[test]
    fn test_first_key_matches_list_heads() {
        let catalog = build(&["lat", "coal_PM25_inh", "traffic_NOx_ing"]);
        let first = catalog.first_key().unwrap();
        assert_eq!(first.source, catalog.sources()[0]);
        assert_eq!(first.species, catalog.species()[0]);
        assert_eq!(first.pathway, catalog.pathways()[0]);
    }

    #[test]
    fn test_custom_delimiter() {
        let naming = VariableNaming::new(".");
        let catalog = Catalog::build(["coal.PM25.inh", "coal_PM25_inh"], &naming, false);
        assert_eq!(catalog.sources(), &["coal"]);
        assert_eq!(catalog.skipped(), &["coal_PM25_inh"]);
    }

    #[test]
    fn test_membership_queries() {
        let catalog = build(&["coal_PM25_inh"]);
        assert!(catalog.contains_source("coal"));
        assert!(catalog.contains_species("PM25"));
        assert!(catalog.contains_pathway("inh"));
        assert!(!catalog.contains_pathway("ing"));
    }
}
