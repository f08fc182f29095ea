// ─────────────────────────────────────────────────────────────────────
// Copper LaNN — Aging-Time Sweeps
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Aging curves: evaluate a model over a uniform aging-time grid.

use crate::fcnn::CopperFcnn;
use crate::lann::CopperLann;
use crate::model::PropertyModel;
use copper_types::config::SweepConfig;
use copper_types::error::CopperResult;
use copper_types::input::PhysicalInput;
use copper_types::prediction::Property;
use ndarray::Array1;
use tracing::{debug, instrument};

/// `n` evenly spaced points from `x0` to `xf`; the last point is exactly `xf`.
pub fn linspace(x0: f64, xf: f64, n: usize) -> Array1<f64> {
    if n == 0 {
        return Array1::zeros(0);
    }
    if n == 1 {
        return Array1::from_elem(1, xf);
    }
    let dx = (xf - x0) / (n - 1) as f64;
    let mut grid = Array1::from_shape_fn(n, |i| x0 + dx * i as f64);
    grid[n - 1] = xf;
    grid
}

/// Mean and std of one property along the time grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyCurve {
    pub mean: Array1<f64>,
    pub std: Array1<f64>,
}

impl PropertyCurve {
    fn unset(n: usize) -> Self {
        PropertyCurve {
            mean: Array1::from_elem(n, f64::NAN),
            std: Array1::from_elem(n, f64::NAN),
        }
    }

    /// `(mean - z*std, mean + z*std)` elementwise.
    pub fn band(&self, z: f64) -> (Array1<f64>, Array1<f64>) {
        (&self.mean - &(&self.std * z), &self.mean + &(&self.std * z))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgingCurve {
    pub model: &'static str,
    /// Aging time [min] at each node.
    pub times: Array1<f64>,
    pub conductivity: PropertyCurve,
    pub hardness: PropertyCurve,
}

impl AgingCurve {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn curve(&self, property: Property) -> &PropertyCurve {
        match property {
            Property::Conductivity => &self.conductivity,
            Property::Hardness => &self.hardness,
        }
    }

    pub fn band(&self, property: Property, z: f64) -> (Array1<f64>, Array1<f64>) {
        self.curve(property).band(z)
    }
}

/// Evaluate `model` at every grid time, keeping the rest of `base` fixed.
///
/// The config is checked first; a bad config yields no curve at all.
#[instrument(skip(model, base, config), fields(model = model.name(), n = config.n_time_nodes))]
pub fn sweep_aging_time<M: PropertyModel + ?Sized>(
    model: &M,
    base: &PhysicalInput,
    config: &SweepConfig,
) -> CopperResult<AgingCurve> {
    config.validate()?;
    let times = linspace(config.min_time, config.max_time, config.n_time_nodes);
    let n = times.len();

    let mut conductivity = PropertyCurve::unset(n);
    let mut hardness = PropertyCurve::unset(n);
    for (i, &t) in times.iter().enumerate() {
        let out = model.evaluate(&base.with_aging_time(t)?);
        conductivity.mean[i] = out.conductivity.mean;
        conductivity.std[i] = out.conductivity.std;
        hardness.mean[i] = out.hardness.mean;
        hardness.std[i] = out.hardness.std;
    }

    debug!(
        aging_temp = base.aging_temp(),
        t_max = config.max_time,
        "aging sweep complete"
    );
    Ok(AgingCurve {
        model: model.name(),
        times,
        conductivity,
        hardness,
    })
}

/// Validate a raw 13-entry base vector, then sweep. Its aging-time entry
/// is replaced by the grid but must still be valid.
pub fn sweep_aging_time_raw<M: PropertyModel + ?Sized>(
    model: &M,
    base: &[f64],
    config: &SweepConfig,
) -> CopperResult<AgingCurve> {
    let base = PhysicalInput::from_slice(base)?;
    sweep_aging_time(model, &base, config)
}

/// Both models over the same grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelComparison {
    pub lann: AgingCurve,
    pub fcnn: AgingCurve,
}

pub fn compare_models(
    lann: &CopperLann,
    fcnn: &CopperFcnn,
    base: &PhysicalInput,
    config: &SweepConfig,
) -> CopperResult<ModelComparison> {
    Ok(ModelComparison {
        lann: sweep_aging_time(lann, base, config)?,
        fcnn: sweep_aging_time(fcnn, base, config)?,
    })
}
