//! Configuration for the influence-function store.

use serde::{Deserialize, Serialize};

/// How variable names and coordinate axes are laid out in a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Separator between the source, species and pathway tokens of a
    /// variable name.
    pub delimiter: String,

    /// Name of the latitude coordinate variable.
    pub lat_name: String,

    /// Name of the longitude coordinate variable.
    pub lon_name: String,

    /// Name of the vertical coordinate variable, if the dataset has one.
    pub z_name: Option<String>,

    /// Log every variable that does not follow the naming convention and
    /// the discovered catalog at `info` level.
    pub verbose: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            delimiter: "_".to_string(),
            lat_name: "lat".to_string(),
            lon_name: "lon".to_string(),
            z_name: None,
            verbose: false,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("INFLUENCE_DELIMITER") {
            config.delimiter = val;
        }

        if let Ok(val) = std::env::var("INFLUENCE_LAT_NAME") {
            config.lat_name = val;
        }

        if let Ok(val) = std::env::var("INFLUENCE_LON_NAME") {
            config.lon_name = val;
        }

        if let Ok(val) = std::env::var("INFLUENCE_Z_NAME") {
            if !val.is_empty() {
                config.z_name = Some(val);
            }
        }

        if let Ok(val) = std::env::var("INFLUENCE_VERBOSE") {
            config.verbose = val.to_lowercase() == "true" || val == "1";
        }

        config
    }

    /// Use a different variable-name delimiter.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Use different latitude/longitude coordinate names.
    pub fn with_axes(mut self, lat_name: impl Into<String>, lon_name: impl Into<String>) -> Self {
        self.lat_name = lat_name.into();
        self.lon_name = lon_name.into();
        self
    }

    /// Declare the vertical coordinate name.
    pub fn with_z_name(mut self, z_name: impl Into<String>) -> Self {
        self.z_name = Some(z_name.into());
        self
    }

    /// Turn on verbose catalog diagnostics.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.delimiter.is_empty() {
            return Err("delimiter must not be empty".to_string());
        }

        if self.lat_name.is_empty() || self.lon_name.is_empty() {
            return Err("lat_name and lon_name must not be empty".to_string());
        }

        if self.lat_name == self.lon_name {
            return Err(format!(
                "lat_name and lon_name must differ (both '{}')",
                self.lat_name
            ));
        }

        if matches!(self.z_name.as_deref(), Some("")) {
            return Err("z_name must not be empty when set".to_string());
        }

        Ok(())
    }
}
