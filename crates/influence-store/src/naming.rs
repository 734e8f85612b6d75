//! Variable naming convention.
//!
//! Influence-function variables are named `<source><d><species><d><pathway>`
//! where `<d>` is the configured delimiter, e.g. `coal_PM25_inh` with the
//! default `_`. Names with any other number of tokens (coordinate variables
//! such as `lat`, or `grid_cell_area_m2`) are not influence functions.
//!
//! Tokens must not themselves contain the delimiter: such a key encodes to a
//! name that decodes to a different token count.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifies one influence-function field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldKey {
    pub source: String,
    pub species: String,
    pub pathway: String,
}

impl FieldKey {
    /// Create a new key.
    pub fn new(
        source: impl Into<String>,
        species: impl Into<String>,
        pathway: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            species: species.into(),
            pathway: pathway.into(),
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "source '{}', species '{}', pathway '{}'",
            self.source, self.species, self.pathway
        )
    }
}

/// Why a variable name could not be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The name does not split into exactly three tokens.
    #[error("'{name}' splits into {found} tokens, expected 3")]
    TokenCount { name: String, found: usize },

    /// The naming has no delimiter to split on.
    #[error("cannot decode '{name}' with an empty delimiter")]
    EmptyDelimiter { name: String },
}

/// Encodes and decodes `(source, species, pathway)` variable names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableNaming {
    delimiter: String,
}

impl Default for VariableNaming {
    fn default() -> Self {
        Self::new("_")
    }
}

impl VariableNaming {
    /// Create a naming convention with the given delimiter.
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    /// The token delimiter.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Split a variable name into its key.
    ///
    /// Empty tokens count: with `_`, `a__b` decodes to species `""`.
    pub fn decode(&self, name: &str) -> Result<FieldKey, DecodeError> {
        if self.delimiter.is_empty() {
            return Err(DecodeError::EmptyDelimiter {
                name: name.to_string(),
            });
        }

        let tokens: Vec<&str> = name.split(self.delimiter.as_str()).collect();
        match tokens.as_slice() {
            [source, species, pathway] => Ok(FieldKey::new(*source, *species, *pathway)),
            _ => Err(DecodeError::TokenCount {
                name: name.to_string(),
                found: tokens.len(),
            }),
        }
    }

    /// Join a key's tokens into a variable name.
    pub fn encode(&self, source: &str, species: &str, pathway: &str) -> String {
        format!(
            "{source}{d}{species}{d}{pathway}",
            d = self.delimiter
        )
    }

    /// Encode a [`FieldKey`].
    pub fn encode_key(&self, key: &FieldKey) -> String {
        self.encode(&key.source, &key.species, &key.pathway)
    }
}

/// Name of an exported exposure variable or table column.
///
/// Always joined with `_`, independent of the input naming delimiter.
pub fn exposure_variable_name(species: &str, pathway: &str) -> String {
    format!("{species}_{pathway}")
}
