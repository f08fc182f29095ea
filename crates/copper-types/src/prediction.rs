// ─────────────────────────────────────────────────────────────────────
// Copper LaNN — Prediction
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::{CONDUCTIVITY_SCALE, HARDNESS_SCALE};
use serde::{Deserialize, Serialize};

/// Predicted material property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Property {
    /// Electrical conductivity [%IACS].
    Conductivity,
    /// Vickers hardness [HV].
    Hardness,
}

impl Property {
    pub const ALL: [Property; 2] = [Property::Conductivity, Property::Hardness];

    /// Factor mapping a network-space value to physical units.
    pub fn output_scale(self) -> f64 {
        match self {
            Property::Conductivity => CONDUCTIVITY_SCALE,
            Property::Hardness => HARDNESS_SCALE,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Property::Conductivity => "%IACS",
            Property::Hardness => "HV",
        }
    }
}

/// Mean and standard deviation of one property, in physical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub mean: f64,
    pub std: f64,
}

impl Prediction {
    /// `(mean - z*std, mean + z*std)`.
    pub fn confidence_band(&self, z: f64) -> (f64, f64) {
        (self.mean - z * self.std, self.mean + z * self.std)
    }
}

/// Output of one model evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelOutput {
    pub conductivity: Prediction,
    pub hardness: Prediction,
}

impl ModelOutput {
    pub fn get(&self, property: Property) -> Prediction {
        match property {
            Property::Conductivity => self.conductivity,
            Property::Hardness => self.hardness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CONFIDENCE_Z_95;

    #[test]
    fn test_confidence_band_95() {
        let p = Prediction {
            mean: 30.0,
            std: 2.0,
        };
        let (lo, hi) = p.confidence_band(CONFIDENCE_Z_95);
        assert!((lo - 26.08).abs() < 1e-12);
        assert!((hi - 33.92).abs() < 1e-12);
    }

    #[test]
    fn test_zero_std_collapses_band() {
        let p = Prediction {
            mean: 150.0,
            std: 0.0,
        };
        assert_eq!(p.confidence_band(CONFIDENCE_Z_95), (150.0, 150.0));
    }

    #[test]
    fn test_property_scales() {
        assert_eq!(Property::Conductivity.output_scale(), 40.0);
        assert_eq!(Property::Hardness.output_scale(), 200.0);
        assert_eq!(Property::Hardness.unit(), "HV");
    }

    #[test]
    fn test_model_output_lookup() {
        let out = ModelOutput {
            conductivity: Prediction {
                mean: 40.0,
                std: 1.0,
            },
            hardness: Prediction {
                mean: 220.0,
                std: 8.0,
            },
        };
        assert_eq!(out.get(Property::Conductivity).mean, 40.0);
        assert_eq!(out.get(Property::Hardness).std, 8.0);
    }
}
