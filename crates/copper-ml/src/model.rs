// ─────────────────────────────────────────────────────────────────────
// Copper LaNN — Property Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::network::FeedForwardNet;
use copper_types::error::{CopperError, CopperResult};
use copper_types::input::PhysicalInput;
use copper_types::prediction::ModelOutput;
use tracing::warn;

/// A predictor of conductivity and hardness with uncertainty.
///
/// Implementors hold only immutable weights, so `evaluate` may be called
/// any number of times from any call site.
pub trait PropertyModel {
    fn name(&self) -> &'static str;

    fn evaluate(&self, input: &PhysicalInput) -> ModelOutput;

    /// Validate a raw 13-entry vector, then evaluate. Nothing is computed
    /// when validation fails.
    fn evaluate_raw(&self, values: &[f64]) -> CopperResult<ModelOutput> {
        let input = PhysicalInput::from_slice(values).inspect_err(|e| {
            warn!(model = self.name(), error = %e, "rejected physical input");
        })?;
        Ok(self.evaluate(&input))
    }

    fn evaluate_batch(&self, inputs: &[PhysicalInput]) -> Vec<ModelOutput> {
        inputs.iter().map(|input| self.evaluate(input)).collect()
    }
}

/// Reject a sub-network whose declared shape does not fit its slot.
pub(crate) fn expect_dims(
    role: &str,
    net: &FeedForwardNet,
    input_dim: usize,
    output_dim: usize,
) -> CopperResult<()> {
    if net.input_dim() != input_dim {
        return Err(CopperError::DimensionMismatch {
            context: format!("{role} input"),
            expected: input_dim,
            found: net.input_dim(),
        });
    }
    if net.output_dim() != output_dim {
        return Err(CopperError::DimensionMismatch {
            context: format!("{role} output"),
            expected: output_dim,
            found: net.output_dim(),
        });
    }
    Ok(())
}
