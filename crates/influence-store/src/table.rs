//! In-memory exposure tables.

use serde::{Deserialize, Serialize};

use crate::error::{InfluenceError, Result};

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lon: f64,
    pub lat: f64,
}

impl Location {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<(f64, f64)> for Location {
    /// From a `(lon, lat)` pair.
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

/// A named column of per-row values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableColumn {
    pub name: String,
    pub values: Vec<f64>,
}

/// Rows of locations with named numeric columns.
///
/// Columns keep insertion order; setting an existing column replaces its
/// values in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExposureTable {
    locations: Vec<Location>,
    columns: Vec<TableColumn>,
}

impl ExposureTable {
    /// One row per location, no columns yet.
    pub fn from_locations<I, L>(locations: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Location>,
    {
        Self {
            locations: locations.into_iter().map(Into::into).collect(),
            columns: Vec::new(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Row locations in order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Values of a column.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Attach or replace a column. It must have exactly one value per row.
    pub fn set_column(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<()> {
        let name = name.into();
        if values.len() != self.locations.len() {
            return Err(InfluenceError::ColumnLength {
                column: name,
                expected: self.locations.len(),
                found: values.len(),
            });
        }

        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(column) => column.values = values,
            None => self.columns.push(TableColumn { name, values }),
        }
        Ok(())
    }

    /// Value of one cell.
    pub fn value(&self, row: usize, column: &str) -> Option<f64> {
        self.column(column)?.get(row).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ExposureTable {
        ExposureTable::from_locations([(0.0, 0.0), (10.0, 5.0), (20.0, -5.0)])
    }

    #[test]
    fn test_from_locations() {
        let table = table();
        assert_eq!(table.len(), 3);
        assert_eq!(table.locations()[1], Location::new(10.0, 5.0));
        assert_eq!(table.column_names().count(), 0);
    }

    #[test]
    fn test_set_column_and_replace() {
        let mut table = table();
        table.set_column("NOx_inh", vec![1.0, 2.0, 3.0]).unwrap();
        table.set_column("PM25_inh", vec![0.0, 0.0, 0.0]).unwrap();
        table.set_column("NOx_inh", vec![4.0, 5.0, 6.0]).unwrap();

        assert_eq!(
            table.column_names().collect::<Vec<_>>(),
            vec!["NOx_inh", "PM25_inh"]
        );
        assert_eq!(table.column("NOx_inh"), Some(&[4.0, 5.0, 6.0][..]));
        assert_eq!(table.value(2, "NOx_inh"), Some(6.0));
        assert_eq!(table.value(3, "NOx_inh"), None);
        assert_eq!(table.value(0, "missing"), None);
    }

    #[test]
    fn test_set_column_wrong_length() {
        let mut table = table();
        let err = table.set_column("NOx_inh", vec![1.0]).unwrap_err();
        assert!(matches!(
            err,
            InfluenceError::ColumnLength {
                expected: 3,
                found: 1,
                ..
            }
        ));
        assert!(table.columns().is_empty());
    }

    #[test]
    fn test_serializes_with_serde() {
        let mut table = ExposureTable::from_locations([(1.5, 2.5)]);
        table.set_column("NOx_inh", vec![4.0]).unwrap();

        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["locations"][0]["lon"], 1.5);
        assert_eq!(json["columns"][0]["name"], "NOx_inh");

        let back: ExposureTable = serde_json::from_value(json).unwrap();
        assert_eq!(back, table);
    }
}
