use thiserror::Error;

/// How the Catalan series decides it has summed enough terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StoppingRule {
    /// Stop once the partial sum is within `tolerance` of the closed-form
    /// value `(1 - √(1 - 4A)) / (2A)`.
    #[default]
    Reference,

    /// Stop once the term just added is smaller than `tolerance` in magnitude.
    ///
    /// The closed-form value is still used to report the final error.
    TermMagnitude,
}

/// Configuration for the quadratic solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_terms: usize,
    zero_threshold: f64,
    catalan_threshold: f64,
    stopping: StoppingRule,
}

/// Errors that can occur when validating a quadratic solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("max_terms must be between 1 and {}", Config::MAX_TERMS_LIMIT)]
    MaxTerms,

    #[error("zero_threshold must be finite and positive")]
    ZeroThreshold,

    #[error("catalan_threshold must be finite and in (0, 0.25]")]
    CatalanThreshold,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
            max_terms: Self::DEFAULT_MAX_TERMS,
            zero_threshold: Self::DEFAULT_ZERO_THRESHOLD,
            catalan_threshold: Self::DEFAULT_CATALAN_THRESHOLD,
            stopping: StoppingRule::Reference,
        }
    }
}

impl Config {
    /// Default target absolute error on the series partial sum.
    pub const DEFAULT_TOLERANCE: f64 = 1e-10;

    /// Default cap on the number of series terms.
    pub const DEFAULT_MAX_TERMS: usize = 100;

    /// Default magnitude below which a coefficient counts as zero.
    pub const DEFAULT_ZERO_THRESHOLD: f64 = 1e-15;

    /// Default (and largest allowed) `|A|` for which the series is used.
    pub const DEFAULT_CATALAN_THRESHOLD: f64 = 0.25;

    /// Largest accepted `max_terms`.
    ///
    /// Up to this index every `C(n)` fits in an `f64` and `C(n)·Aⁿ` stays
    /// finite for `|A| ≤ 1/4`.
    pub const MAX_TERMS_LIMIT: usize = 500;

    /// Creates a config with the given tolerance and default limits.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is not finite and positive.
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            tolerance,
            ..Self::default()
        })
    }

    /// Returns a copy with a different series term cap.
    ///
    /// # Errors
    ///
    /// Returns an error unless `1 <= max_terms <= MAX_TERMS_LIMIT`.
    pub fn with_max_terms(self, max_terms: usize) -> Result<Self, ConfigError> {
        if !(1..=Self::MAX_TERMS_LIMIT).contains(&max_terms) {
            return Err(ConfigError::MaxTerms);
        }

        Ok(Self { max_terms, ..self })
    }

    /// Returns a copy with a different zero threshold.
    ///
    /// # Errors
    ///
    /// Returns an error unless the threshold is finite and positive.
    pub fn with_zero_threshold(self, zero_threshold: f64) -> Result<Self, ConfigError> {
        if !zero_threshold.is_finite() || zero_threshold <= 0.0 {
            return Err(ConfigError::ZeroThreshold);
        }

        Ok(Self {
            zero_threshold,
            ..self
        })
    }

    /// Returns a copy with a different series applicability cutoff.
    ///
    /// The series diverges beyond `|A| = 1/4`, so larger cutoffs are rejected.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < catalan_threshold <= 0.25`.
    pub fn with_catalan_threshold(self, catalan_threshold: f64) -> Result<Self, ConfigError> {
        if !catalan_threshold.is_finite()
            || catalan_threshold <= 0.0
            || catalan_threshold > Self::DEFAULT_CATALAN_THRESHOLD
        {
            return Err(ConfigError::CatalanThreshold);
        }

        Ok(Self {
            catalan_threshold,
            ..self
        })
    }

    /// Returns a copy with a different series stopping rule.
    #[must_use]
    pub fn with_stopping(self, stopping: StoppingRule) -> Self {
        Self { stopping, ..self }
    }

    /// Returns the target absolute error on the series partial sum.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of series terms.
    #[must_use]
    pub fn max_terms(&self) -> usize {
        self.max_terms
    }

    /// Returns the magnitude below which a value counts as zero.
    #[must_use]
    pub fn zero_threshold(&self) -> f64 {
        self.zero_threshold
    }

    /// Returns the largest `|A|` for which the series is used.
    #[must_use]
    pub fn catalan_threshold(&self) -> f64 {
        self.catalan_threshold
    }

    /// Returns the series stopping rule.
    #[must_use]
    pub fn stopping(&self) -> StoppingRule {
        self.stopping
    }

    /// Returns true if `value` is numerically zero.
    #[must_use]
    pub fn is_zero(&self, value: f64) -> bool {
        value.abs() < self.zero_threshold
    }
}
