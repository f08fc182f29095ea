// ─────────────────────────────────────────────────────────────────────
// Copper LaNN — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::CONFIDENCE_Z_95;
use crate::error::{CopperError, CopperResult};
use serde::{Deserialize, Serialize};

/// Per-layer specification of one fully connected network, as exported
/// alongside the trained models.
///
/// `weights_array[l]` is row-major with shape (out, in), so layer `l`
/// computes `act(W x + b)` on a column vector `x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    #[serde(rename = "weightsArray")]
    pub weights_array: Vec<Vec<Vec<f64>>>,
    #[serde(rename = "biasesArray")]
    pub biases_array: Vec<Vec<f64>>,
    #[serde(rename = "activationArray")]
    pub activation_array: Vec<String>,
}

impl NetworkSpec {
    pub fn n_layers(&self) -> usize {
        self.weights_array.len()
    }
}

/// Weights of the latent-augmented model: embedding, slope (f1) and
/// intercept (f2) networks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LannSpec {
    #[serde(rename = "embeddingNet")]
    pub embedding_net: NetworkSpec,
    #[serde(rename = "f1Net")]
    pub f1_net: NetworkSpec,
    #[serde(rename = "f2Net")]
    pub f2_net: NetworkSpec,
}

/// Weights of the flat baseline model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FcnnSpec {
    #[serde(rename = "FCNN")]
    pub fcnn: NetworkSpec,
}

impl LannSpec {
    pub fn from_file(path: &str) -> CopperResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> CopperResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl FcnnSpec {
    pub fn from_file(path: &str) -> CopperResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> CopperResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Aging-time grid used for curve sweeps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// First grid time [min] (default: 0)
    #[serde(default = "default_min_time")]
    pub min_time: f64,
    /// Last grid time [min] (default: 1000)
    #[serde(default = "default_max_time")]
    pub max_time: f64,
    /// Number of grid nodes including both ends (default: 101)
    #[serde(default = "default_n_time_nodes")]
    pub n_time_nodes: usize,
    /// Band half-width in standard deviations (default: 1.96)
    #[serde(default = "default_confidence_z")]
    pub confidence_z: f64,
}

fn default_min_time() -> f64 {
    0.0
}
fn default_max_time() -> f64 {
    1000.0
}
fn default_n_time_nodes() -> usize {
    101
}
fn default_confidence_z() -> f64 {
    CONFIDENCE_Z_95
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            min_time: default_min_time(),
            max_time: default_max_time(),
            n_time_nodes: default_n_time_nodes(),
            confidence_z: default_confidence_z(),
        }
    }
}

impl SweepConfig {
    pub fn from_file(path: &str) -> CopperResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CopperResult<()> {
        if !self.min_time.is_finite() || !self.max_time.is_finite() {
            return Err(CopperError::ConfigError(format!(
                "sweep bounds must be finite, got [{}, {}]",
                self.min_time, self.max_time
            )));
        }
        if self.min_time < 0.0 {
            return Err(CopperError::NegativeParameter {
                name: "sweep min_time",
                value: self.min_time,
            });
        }
        if self.max_time <= self.min_time {
            return Err(CopperError::ConfigError(format!(
                "sweep max_time {} must exceed min_time {}",
                self.max_time, self.min_time
            )));
        }
        if self.n_time_nodes < 2 {
            return Err(CopperError::ConfigError(format!(
                "sweep requires n_time_nodes >= 2, got {}",
                self.n_time_nodes
            )));
        }
        if !self.confidence_z.is_finite() || self.confidence_z < 0.0 {
            return Err(CopperError::ConfigError(format!(
                "confidence_z must be finite and non-negative, got {}",
                self.confidence_z
            )));
        }
        Ok(())
    }
}
