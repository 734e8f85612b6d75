//! Source magnitudes used to weight influence functions.

use serde::{Deserialize, Serialize};

/// Ordered mapping from source name to emission magnitude.
///
/// Iteration follows insertion order. Re-inserting a source replaces its
/// magnitude without moving it. The order is observable but exposure sums
/// do not depend on it beyond floating-point rounding.
///
/// ```
/// use influence_store::SourceWeights;
///
/// let weights = SourceWeights::from([("coal", 2.0), ("traffic", 0.5)]);
/// assert_eq!(weights.get("traffic"), Some(0.5));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceWeights {
    entries: Vec<(String, f64)>,
}

impl SourceWeights {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// The same magnitude for every listed source.
    pub fn uniform<I, S>(sources: I, magnitude: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        sources.into_iter().map(|s| (s, magnitude)).collect()
    }

    /// Set a source's magnitude, returning the previous one.
    pub fn insert(&mut self, source: impl Into<String>, magnitude: f64) -> Option<f64> {
        let source = source.into();
        match self.entries.iter_mut().find(|(name, _)| *name == source) {
            Some((_, slot)) => Some(std::mem::replace(slot, magnitude)),
            None => {
                self.entries.push((source, magnitude));
                None
            }
        }
    }

    /// Builder form of [`SourceWeights::insert`].
    pub fn with(mut self, source: impl Into<String>, magnitude: f64) -> Self {
        self.insert(source, magnitude);
        self
    }

    /// Magnitude for a source.
    pub fn get(&self, source: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == source)
            .map(|(_, magnitude)| *magnitude)
    }

    /// `(source, magnitude)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries
            .iter()
            .map(|(name, magnitude)| (name.as_str(), *magnitude))
    }

    /// Source names in insertion order.
    pub fn sources(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for SourceWeights {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut weights = Self::new();
        for (source, magnitude) in iter {
            weights.insert(source, magnitude);
        }
        weights
    }
}

impl<S: Into<String>, const N: usize> From<[(S, f64); N]> for SourceWeights {
    fn from(entries: [(S, f64); N]) -> Self {
        entries.into_iter().collect()
    }
}
