// ─────────────────────────────────────────────────────────────────────
// Copper LaNN — Output Rescaling
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Mapping from network head values to physical units.

use crate::network::softplus;
use copper_types::prediction::{ModelOutput, Prediction, Property};

/// Network-space (mean, std) per property, before any output transform.
/// Index 0 is conductivity, index 1 is hardness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawHeads {
    pub mean: [f64; 2],
    pub std: [f64; 2],
}

impl RawHeads {
    /// Split a `[mean_cond, mean_hard, std_cond, std_hard]` head.
    pub fn from_head(head: &[f64; 4]) -> Self {
        RawHeads {
            mean: [head[0], head[1]],
            std: [head[2], head[3]],
        }
    }

    /// Softplus on every entry.
    pub fn positive(self) -> Self {
        RawHeads {
            mean: self.mean.map(softplus),
            std: self.std.map(softplus),
        }
    }

    /// Multiply by 40 (%IACS) and 200 (HV); mean and std alike.
    pub fn to_physical(self) -> ModelOutput {
        let pick = |i: usize, property: Property| Prediction {
            mean: self.mean[i] * property.output_scale(),
            std: self.std[i] * property.output_scale(),
        };
        ModelOutput {
            conductivity: pick(0, Property::Conductivity),
            hardness: pick(1, Property::Hardness),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_heads_through_softplus() {
        let out = RawHeads::from_head(&[0.0; 4]).positive().to_physical();
        let ln2 = std::f64::consts::LN_2;
        assert!((out.conductivity.mean - 40.0 * ln2).abs() < 1e-12);
        assert!((out.conductivity.std - 40.0 * ln2).abs() < 1e-12);
        assert!((out.hardness.mean - 200.0 * ln2).abs() < 1e-12);
        assert!((out.hardness.std - 200.0 * ln2).abs() < 1e-12);
    }

    #[test]
    fn test_linear_rescale_only() {
        let out = RawHeads::from_head(&[0.5, 1.2, 0.01, -0.02]).to_physical();
        assert!((out.conductivity.mean - 20.0).abs() < 1e-12);
        assert!((out.hardness.mean - 240.0).abs() < 1e-12);
        assert!((out.conductivity.std - 0.4).abs() < 1e-12);
        assert!((out.hardness.std + 4.0).abs() < 1e-12);
    }
}
