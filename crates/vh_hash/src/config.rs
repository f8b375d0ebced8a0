//! Engine configuration.

/// Limits and scheduling knobs for a [`HashEngine`](crate::HashEngine).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashConfig {
    /// Deepest nesting of lists, tables, node heads and closures walked
    /// before failing with `DepthExceeded`.
    pub max_depth: usize,
    /// Effective length from which vectorized entry points evaluate
    /// positions in parallel.
    pub parallel_threshold: usize,
}

/// Environment variable overriding [`HashConfig::max_depth`].
pub const MAX_DEPTH_ENV: &str = "VH_MAX_DEPTH";

/// Environment variable overriding [`HashConfig::parallel_threshold`].
pub const PARALLEL_THRESHOLD_ENV: &str = "VH_PARALLEL_THRESHOLD";

impl Default for HashConfig {
    fn default() -> Self {
        HashConfig {
            max_depth: 4096,
            parallel_threshold: 16 * 1024,
        }
    }
}

impl HashConfig {
    /// A config that never schedules work on the thread pool.
    pub fn sequential() -> Self {
        HashConfig {
            parallel_threshold: usize::MAX,
            ..Default::default()
        }
    }

    /// Defaults, overridden by `VH_MAX_DEPTH` and `VH_PARALLEL_THRESHOLD`.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`HashConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = HashConfig::default();
        if let Some(max_depth) = parse_var(&lookup, MAX_DEPTH_ENV) {
            config.max_depth = max_depth;
        }
        if let Some(threshold) = parse_var(&lookup, PARALLEL_THRESHOLD_ENV) {
            config.parallel_threshold = threshold;
        }
        config
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }
}

fn parse_var(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<usize> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(n) => Some(n),
        Err(err) => {
            tracing::warn!(key, value = %raw, %err, "ignoring invalid configuration value");
            None
        }
    }
}

#[cfg(test)]
mod tests;
