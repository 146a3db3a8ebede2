//! Batch fixtures shared by the cross-crate tests.
//!
//! A [`Batch`] is a solver configuration plus a list of named equations with
//! their expected method and roots, loaded from TOML or JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use quadra_core::Equation;
use quadra_solvers::quadratic::{self, Config, ConfigError, Method, Solution, StoppingRule};

/// Errors that can occur while loading or running a batch.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("invalid TOML batch: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON batch: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid solver config: {0}")]
    Config(#[from] ConfigError),
}

/// Solver settings for a batch; omitted fields keep the solver defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tolerance: Option<f64>,
    pub max_terms: Option<usize>,
    pub stopping: Option<StoppingRule>,
}

impl Settings {
    /// Builds the validated solver config.
    ///
    /// # Errors
    ///
    /// Returns an error if any provided value is out of range.
    pub fn config(&self) -> Result<Config, ConfigError> {
        let mut config = match self.tolerance {
            Some(tolerance) => Config::new(tolerance)?,
            None => Config::default(),
        };
        if let Some(max_terms) = self.max_terms {
            config = config.with_max_terms(max_terms)?;
        }
        if let Some(stopping) = self.stopping {
            config = config.with_stopping(stopping);
        }
        Ok(config)
    }
}

/// A named equation with its expected outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub name: String,
    pub equation: Equation,
    pub method: Method,
    #[serde(default)]
    pub roots: Vec<f64>,
}

/// The result of solving one case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub name: String,
    pub solution: Solution,
}

/// A set of cases solved with shared settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    #[serde(default)]
    pub settings: Settings,
    pub cases: Vec<Case>,
}

impl Batch {
    /// Parses a batch from TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not describe a batch.
    pub fn from_toml(text: &str) -> Result<Self, BatchError> {
        Ok(toml::from_str(text)?)
    }

    /// Parses a batch from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not describe a batch.
    pub fn from_json(text: &str) -> Result<Self, BatchError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Solves every case in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings do not form a valid config.
    pub fn run(&self) -> Result<Vec<Outcome>, BatchError> {
        let config = self.settings.config()?;
        Ok(self
            .cases
            .iter()
            .map(|case| Outcome {
                name: case.name.clone(),
                solution: quadratic::solve_unobserved(&case.equation, &config),
            })
            .collect())
    }
}
