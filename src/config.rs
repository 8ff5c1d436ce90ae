use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Largest worker count a batch may request
pub const MAX_PARALLELISM: i64 = 1024;

/// Settings for a batch of searches
///
/// Deserializes from JSON with every field optional:
///
/// ```
/// use csr_dijkstra::SolverConfig;
///
/// let config = SolverConfig::from_json(r#"{ "parallelism": 4, "cutoff": 2.5 }"#).unwrap();
/// assert_eq!(config.parallelism, 4);
/// assert!(config.track_predecessors);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Worker threads; zero or negative uses the host default, values above
    /// [`MAX_PARALLELISM`] are rejected
    pub parallelism: i64,

    /// Inclusive distance bound, `None` for unbounded searches
    pub cutoff: Option<f64>,

    /// Whether to fill the predecessor matrix
    pub track_predecessors: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            parallelism: 0,
            cutoff: None,
            track_predecessors: true,
        }
    }
}

impl SolverConfig {
    /// Parses and validates a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SolverConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn with_parallelism(mut self, parallelism: i64) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Sets the cutoff; an infinite value means unbounded
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = if cutoff == f64::INFINITY {
            None
        } else {
            Some(cutoff)
        };
        self
    }

    pub fn with_predecessors(mut self, track: bool) -> Self {
        self.track_predecessors = track;
        self
    }

    /// Rejects NaN cutoffs and worker counts above [`MAX_PARALLELISM`]
    ///
    /// A negative cutoff is valid and settles only the source.
    pub fn validate(&self) -> Result<()> {
        if self.parallelism > MAX_PARALLELISM {
            return Err(Error::Config(format!(
                "parallelism {} exceeds the limit of {}",
                self.parallelism, MAX_PARALLELISM
            )));
        }
        match self.cutoff {
            Some(c) if c.is_nan() => Err(Error::InvalidCutoff(c)),
            _ => Ok(()),
        }
    }

    /// Cutoff in the weight type of the graph
    pub fn cutoff_as<W: Float>(&self) -> Result<W> {
        match self.cutoff {
            None => Ok(W::infinity()),
            Some(c) => W::from(c).ok_or(Error::InvalidCutoff(c)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let config = SolverConfig::from_json("{}").unwrap();
        assert_eq!(config, SolverConfig::default());
        assert_eq!(config.cutoff_as::<f64>().unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = SolverConfig::default()
            .with_parallelism(3)
            .with_cutoff(10.0)
            .with_predecessors(false);
        let json = config.to_json().unwrap();
        assert_eq!(SolverConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_infinite_cutoff_means_unbounded() {
        let config = SolverConfig::default().with_cutoff(f64::INFINITY);
        assert_eq!(config.cutoff, None);
    }

    #[test]
    fn test_rejects_bad_cutoffs() {
        assert!(SolverConfig::default().with_cutoff(f64::NAN).validate().is_err());
        assert!(matches!(
            SolverConfig::from_json(r#"{ "parallelism": "many" }"#),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_rejects_huge_parallelism() {
        let err = SolverConfig::default()
            .with_parallelism(i64::MAX)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(SolverConfig::default()
            .with_parallelism(MAX_PARALLELISM)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_accepts_negative_cutoff() {
        let config = SolverConfig::from_json(r#"{ "cutoff": -1.0 }"#).unwrap();
        assert_eq!(config.cutoff, Some(-1.0));
        assert_eq!(config.cutoff_as::<f64>().unwrap(), -1.0);
    }

    #[test]
    fn test_cutoff_converts_to_f32() {
        let config = SolverConfig::default().with_cutoff(2.5);
        assert_eq!(config.cutoff_as::<f32>().unwrap(), 2.5f32);
    }
}
