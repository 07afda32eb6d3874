//! Pool and substitution configuration.

/// Environment variable overriding [`SubstConfig::max_depth`].
pub const MAX_DEPTH_ENV: &str = "TERN_SUBST_MAX_DEPTH";

/// Limits applied while substituting.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SubstConfig {
    /// Maximum nesting of vals a single substitution may descend through.
    pub max_depth: usize,
}

impl SubstConfig {
    /// Default nesting limit.
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    /// Read the configuration from the environment.
    ///
    /// Falls back to the default when `TERN_SUBST_MAX_DEPTH` is unset or is
    /// not a positive integer.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let Some(raw) = lookup(MAX_DEPTH_ENV) else {
            return Self::default();
        };
        Self::parse_max_depth(&raw).unwrap_or_else(|| {
            tracing::warn!(value = %raw, "ignoring invalid {MAX_DEPTH_ENV}");
            Self::default()
        })
    }

    fn parse_max_depth(raw: &str) -> Option<Self> {
        match raw.trim().parse::<usize>() {
            Ok(max_depth) if max_depth > 0 => Some(Self { max_depth }),
            _ => None,
        }
    }
}

impl Default for SubstConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Whether the pool deduplicates structurally equal vals.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum ValInterning {
    /// Structurally equal vals share one handle.
    #[default]
    Canonical,
    /// Every construction allocates a fresh handle.
    Distinct,
}

/// Configuration for a [`Pool`](crate::Pool).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct PoolConfig {
    pub interning: ValInterning,
    pub subst: SubstConfig,
}

impl PoolConfig {
    /// Default pool configuration with limits taken from the environment.
    pub fn from_env() -> Self {
        Self {
            interning: ValInterning::default(),
            subst: SubstConfig::from_env(),
        }
    }

    /// Same configuration with a different interning mode.
    #[must_use]
    pub fn with_interning(self, interning: ValInterning) -> Self {
        Self { interning, ..self }
    }

    /// Same configuration with a different nesting limit.
    #[must_use]
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self {
            subst: SubstConfig { max_depth },
            ..self
        }
    }
}
