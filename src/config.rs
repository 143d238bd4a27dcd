use crate::{Error, Result};

/// Problem size at or below which the builders stop forking.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100;

/// Environment variable overriding the parallel threshold.
pub const PARALLEL_THRESHOLD_VAR: &str = "DIVCONQ_PARALLEL_THRESHOLD";

/// Tuning shared by the builders. None of it affects their results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildConfig {
    pub parallel_threshold: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl BuildConfig {
    /// Reads the configuration from the environment, falling back to the
    /// defaults for unset variables.
    pub fn from_env() -> Result<BuildConfig> {
        BuildConfig::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as `from_env` with a custom variable lookup.
    ///
    /// # Example
    /// ```
    /// use divconq::config::{BuildConfig, PARALLEL_THRESHOLD_VAR};
    ///
    /// let config = BuildConfig::from_lookup(|var| {
    ///     (var == PARALLEL_THRESHOLD_VAR).then(|| "4096".to_string())
    /// })
    /// .unwrap();
    /// assert_eq!(config.parallel_threshold, 4096);
    ///
    /// assert!(BuildConfig::from_lookup(|_| Some("lots".to_string())).is_err());
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<BuildConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = BuildConfig::default();
        if let Some(value) = lookup(PARALLEL_THRESHOLD_VAR) {
            let parsed = value.trim().parse::<usize>();
            config.parallel_threshold = parsed.map_err(|_| Error::InvalidConfig {
                var: PARALLEL_THRESHOLD_VAR,
                value,
            })?;
        }
        Ok(config)
    }
}
