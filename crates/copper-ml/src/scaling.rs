// ─────────────────────────────────────────────────────────────────────
// Copper LaNN — Feature Scaling
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fixed per-feature normalization shared by both models.

use copper_types::constants::{
    DIM_EMBEDDING_INPUT, FEATURE_DIVISORS, IDX_AGING_TEMP, IDX_AGING_TIME,
};
use copper_types::input::PhysicalInput;
use ndarray::{s, Array1, ArrayView1};

/// Network-ready feature vector, produced only by [`scale`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledInput {
    values: Array1<f64>,
}

impl ScaledInput {
    pub fn values(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }

    /// Composition and process one-hots: the first 11 entries.
    pub fn embedding_input(&self) -> ArrayView1<'_, f64> {
        self.values.slice(s![..DIM_EMBEDDING_INPUT])
    }

    /// [scaled aging temperature, log-scaled aging time].
    pub fn surface_variables(&self) -> [f64; 2] {
        [self.values[IDX_AGING_TEMP], self.values[IDX_AGING_TIME]]
    }

    /// `ln(1 + t)` of the raw aging time in minutes.
    pub fn scaled_time(&self) -> f64 {
        self.values[IDX_AGING_TIME]
    }
}

/// Divide each feature by its fixed scale; aging time becomes `ln(1 + t)`.
///
/// Validation already happened when the `PhysicalInput` was built, so
/// this cannot fail.
pub fn scale(input: &PhysicalInput) -> ScaledInput {
    let mut values = input.values().to_owned();
    for (v, divisor) in values.iter_mut().zip(FEATURE_DIVISORS.iter()) {
        *v /= divisor;
    }
    values[IDX_AGING_TIME] = scale_time(values[IDX_AGING_TIME]);
    ScaledInput { values }
}

/// Aging-time transform, strictly increasing on `t >= 0`.
pub fn scale_time(aging_time: f64) -> f64 {
    aging_time.ln_1p()
}
