// ─────────────────────────────────────────────────────────────────────
// Copper LaNN — Latent-Augmented Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Latent-augmented neural network (LaNN) for aged copper alloys.
//!
//! An embedding network maps composition and process (no time, no
//! temperature) to a 6-d latent material state. The property trajectory
//! is affine in transformed time `s = ln(1 + t)`:
//!
//! ```text
//! raw = s * f1([latent, T/500, s]) + f2(latent)
//! ```
//!
//! with `f1` the slope and `f2` the intercept network, each emitting
//! `[mean_cond, mean_hard, std_cond, std_hard]`. Softplus then keeps mean
//! and std positive before rescaling to %IACS and HV.

use crate::model::{expect_dims, PropertyModel};
use crate::network::FeedForwardNet;
use crate::output::RawHeads;
use crate::scaling::{scale, ScaledInput};
use copper_types::config::LannSpec;
use copper_types::constants::{
    DIM_DICTIONARY_VAR, DIM_EMBEDDING_INPUT, DIM_LATENT_VARS, DIM_OUTPUTS,
};
use copper_types::error::CopperResult;
use copper_types::input::PhysicalInput;
use copper_types::prediction::ModelOutput;
use ndarray::{s, Array1};
use tracing::info;

#[derive(Debug, Clone)]
pub struct CopperLann {
    embedding_net: FeedForwardNet,
    slope_net: FeedForwardNet,
    intercept_net: FeedForwardNet,
}

impl CopperLann {
    /// Check sub-network shapes: embedding 11 -> 6, slope 8 -> 4, intercept 6 -> 4.
    pub fn new(
        embedding_net: FeedForwardNet,
        slope_net: FeedForwardNet,
        intercept_net: FeedForwardNet,
    ) -> CopperResult<Self> {
        expect_dims("embedding net", &embedding_net, DIM_EMBEDDING_INPUT, DIM_LATENT_VARS)?;
        expect_dims("f1 (slope) net", &slope_net, DIM_DICTIONARY_VAR, DIM_OUTPUTS)?;
        expect_dims("f2 (intercept) net", &intercept_net, DIM_LATENT_VARS, DIM_OUTPUTS)?;

        info!(
            embedding_layers = embedding_net.n_layers(),
            slope_layers = slope_net.n_layers(),
            intercept_layers = intercept_net.n_layers(),
            "LaNN model initialized"
        );
        Ok(Self {
            embedding_net,
            slope_net,
            intercept_net,
        })
    }

    pub fn from_spec(spec: &LannSpec) -> CopperResult<Self> {
        Self::new(
            FeedForwardNet::from_spec("embeddingNet", DIM_EMBEDDING_INPUT, &spec.embedding_net)?,
            FeedForwardNet::from_spec("f1Net", DIM_DICTIONARY_VAR, &spec.f1_net)?,
            FeedForwardNet::from_spec("f2Net", DIM_LATENT_VARS, &spec.f2_net)?,
        )
    }

    pub fn from_file(path: &str) -> CopperResult<Self> {
        Self::from_spec(&LannSpec::from_file(path)?)
    }

    /// Time-invariant latent material state for a scaled input.
    pub fn latent(&self, scaled: &ScaledInput) -> Array1<f64> {
        self.embedding_net.forward(scaled.embedding_input())
    }

    /// Affine-in-time heads before softplus and rescaling.
    pub fn raw_heads(&self, input: &PhysicalInput) -> RawHeads {
        let scaled = scale(input);
        let latent = self.latent(&scaled);

        let [temp, time] = scaled.surface_variables();
        let mut dictionary = Array1::<f64>::zeros(DIM_DICTIONARY_VAR);
        dictionary.slice_mut(s![..DIM_LATENT_VARS]).assign(&latent);
        dictionary[DIM_LATENT_VARS] = temp;
        dictionary[DIM_LATENT_VARS + 1] = time;

        let slope = self.slope_net.forward(dictionary.view());
        let intercept = self.intercept_net.forward(latent.view());

        // The transformed time multiplies the slope and is also one of the
        // slope net's inputs.
        let scaled_time = scaled.scaled_time();
        let head: [f64; DIM_OUTPUTS] =
            std::array::from_fn(|k| scaled_time * slope[k] + intercept[k]);
        RawHeads::from_head(&head)
    }

    pub fn embedding_net(&self) -> &FeedForwardNet {
        &self.embedding_net
    }

    pub fn slope_net(&self) -> &FeedForwardNet {
        &self.slope_net
    }

    pub fn intercept_net(&self) -> &FeedForwardNet {
        &self.intercept_net
    }
}

impl PropertyModel for CopperLann {
    fn name(&self) -> &'static str {
        "LaNN"
    }

    /// Mean and std are non-negative. They are strictly positive only while
    /// each raw head stays above about -745; below that `e^x` underflows and
    /// softplus returns exactly 0.
    fn evaluate(&self, input: &PhysicalInput) -> ModelOutput {
        self.raw_heads(input).positive().to_physical()
    }
}
