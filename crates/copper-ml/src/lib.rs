// ─────────────────────────────────────────────────────────────────────
// Copper LaNN — Copper Ml
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Conductivity and hardness prediction for aged copper alloys.
//!
//! Two models share one feature scaler: the latent-augmented LaNN and a
//! flat FCNN baseline. Both return mean and std per property.

pub mod fcnn;
pub mod lann;
pub mod model;
pub mod network;
pub mod output;
pub mod scaling;
pub mod sweep;

pub use fcnn::CopperFcnn;
pub use lann::CopperLann;
pub use model::PropertyModel;
pub use network::{Activation, FeedForwardNet};
