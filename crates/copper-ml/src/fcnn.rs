// ─────────────────────────────────────────────────────────────────────
// Copper LaNN — FCNN Baseline
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Flat fully connected baseline (13 -> ... -> 4).
//!
//! Unlike the LaNN, the head is rescaled linearly with no softplus, so a
//! negative network output yields a negative mean or std. This matches the
//! exported baseline and is kept as-is pending review of how it was trained.

use crate::model::{expect_dims, PropertyModel};
use crate::network::FeedForwardNet;
use crate::output::RawHeads;
use crate::scaling::scale;
use copper_types::config::FcnnSpec;
use copper_types::constants::{DIM_INPUTS, DIM_OUTPUTS};
use copper_types::error::CopperResult;
use copper_types::input::PhysicalInput;
use copper_types::prediction::ModelOutput;
use tracing::info;

#[derive(Debug, Clone)]
pub struct CopperFcnn {
    net: FeedForwardNet,
}

impl CopperFcnn {
    pub fn new(net: FeedForwardNet) -> CopperResult<Self> {
        expect_dims("FCNN", &net, DIM_INPUTS, DIM_OUTPUTS)?;
        info!(layers = net.n_layers(), "FCNN model initialized");
        Ok(Self { net })
    }

    pub fn from_spec(spec: &FcnnSpec) -> CopperResult<Self> {
        Self::new(FeedForwardNet::from_spec("FCNN", DIM_INPUTS, &spec.fcnn)?)
    }

    pub fn from_file(path: &str) -> CopperResult<Self> {
        Self::from_spec(&FcnnSpec::from_file(path)?)
    }

    pub fn raw_heads(&self, input: &PhysicalInput) -> RawHeads {
        let scaled = scale(input);
        let head = self.net.forward(scaled.values());
        RawHeads::from_head(&std::array::from_fn(|k| head[k]))
    }

    pub fn net(&self) -> &FeedForwardNet {
        &self.net
    }
}

impl PropertyModel for CopperFcnn {
    fn name(&self) -> &'static str {
        "FCNN"
    }

    fn evaluate(&self, input: &PhysicalInput) -> ModelOutput {
        self.raw_heads(input).to_physical()
    }
}
