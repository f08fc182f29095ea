// ─────────────────────────────────────────────────────────────────────
// Copper LaNN — Feed-Forward Network
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Layered fully connected network evaluator.
//!
//! Each layer computes `act(W x + b)` with `W` of shape (out, in).
//! Shapes and activation names are checked once at construction;
//! `forward` is a pure function of `&self` that returns a fresh array.

use copper_types::config::NetworkSpec;
use copper_types::error::{CopperError, CopperResult};
use ndarray::{Array1, Array2, ArrayView1};
use ndarray_npy::NpzReader;
use rand::Rng;
use std::fs::File;
use std::str::FromStr;

const LEAKY_RELU_SLOPE: f64 = 0.01;
const ELU_ALPHA: f64 = 1.0;

/// Above this, `ln(1 + e^x)` equals `x` to machine precision.
const SOFTPLUS_LINEAR_CUTOFF: f64 = 36.0;

/// Closed set of supported activations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Linear,
    Relu,
    LeakyRelu,
    Elu,
    Tanh,
    Sigmoid,
    Softplus,
    Swish,
}

impl Activation {
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Linear => x,
            Activation::Relu => relu(x),
            Activation::LeakyRelu => {
                if x > 0.0 {
                    x
                } else {
                    LEAKY_RELU_SLOPE * x
                }
            }
            Activation::Elu => {
                if x > 0.0 {
                    x
                } else {
                    ELU_ALPHA * x.exp_m1()
                }
            }
            Activation::Tanh => x.tanh(),
            Activation::Sigmoid => sigmoid(x),
            Activation::Softplus => softplus(x),
            Activation::Swish => x * sigmoid(x),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Activation::Linear => "linear",
            Activation::Relu => "relu",
            Activation::LeakyRelu => "leaky_relu",
            Activation::Elu => "elu",
            Activation::Tanh => "tanh",
            Activation::Sigmoid => "sigmoid",
            Activation::Softplus => "softplus",
            Activation::Swish => "swish",
        }
    }
}

impl FromStr for Activation {
    type Err = CopperError;

    /// Case-insensitive; `-` and `_` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        match key.as_str() {
            "linear" | "identity" | "none" => Ok(Activation::Linear),
            "relu" => Ok(Activation::Relu),
            "leaky_relu" | "leakyrelu" => Ok(Activation::LeakyRelu),
            "elu" => Ok(Activation::Elu),
            "tanh" => Ok(Activation::Tanh),
            "sigmoid" | "logistic" => Ok(Activation::Sigmoid),
            "softplus" => Ok(Activation::Softplus),
            "swish" | "silu" => Ok(Activation::Swish),
            _ => Err(CopperError::UnknownActivation(s.to_string())),
        }
    }
}

fn relu(x: f64) -> f64 {
    x.max(0.0)
}

fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// `ln(1 + e^x)`, strictly positive for `x > -745`.
pub fn softplus(x: f64) -> f64 {
    if x > SOFTPLUS_LINEAR_CUTOFF {
        x
    } else {
        x.exp().ln_1p()
    }
}

#[derive(Debug, Clone)]
pub struct DenseLayer {
    weights: Array2<f64>, // (out, in)
    bias: Array1<f64>,    // (out,)
    activation: Activation,
}

impl DenseLayer {
    pub fn new(
        weights: Array2<f64>,
        bias: Array1<f64>,
        activation: Activation,
    ) -> CopperResult<Self> {
        if bias.len() != weights.nrows() {
            return Err(CopperError::DimensionMismatch {
                context: "layer bias length".to_string(),
                expected: weights.nrows(),
                found: bias.len(),
            });
        }
        Ok(Self {
            weights,
            bias,
            activation,
        })
    }

    pub fn input_dim(&self) -> usize {
        self.weights.ncols()
    }

    pub fn output_dim(&self) -> usize {
        self.weights.nrows()
    }

    pub fn weights(&self) -> &Array2<f64> {
        &self.weights
    }

    pub fn bias(&self) -> &Array1<f64> {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    fn forward(&self, x: &Array1<f64>) -> Array1<f64> {
        let act = self.activation;
        (self.weights.dot(x) + &self.bias).mapv_into(|v| act.apply(v))
    }

    fn forward_batch(&self, x: &Array2<f64>) -> Array2<f64> {
        let act = self.activation;
        (x.dot(&self.weights.t()) + &self.bias).mapv_into(|v| act.apply(v))
    }
}

/// Immutable stack of dense layers with a declared input size.
#[derive(Debug, Clone)]
pub struct FeedForwardNet {
    input_dim: usize,
    layers: Vec<DenseLayer>,
}

impl FeedForwardNet {
    /// Assemble a network, checking that every layer consumes what the
    /// previous one produces and that the first consumes `input_dim`.
    pub fn new(input_dim: usize, layers: Vec<DenseLayer>) -> CopperResult<Self> {
        Self::assemble("network", input_dim, layers)
    }

    /// Build from parallel per-layer lists, as exported with the trained models.
    pub fn from_parts(
        input_dim: usize,
        weights: Vec<Array2<f64>>,
        biases: Vec<Array1<f64>>,
        activations: Vec<Activation>,
    ) -> CopperResult<Self> {
        check_layer_counts("network", weights.len(), biases.len(), activations.len())?;
        let layers = weights
            .into_iter()
            .zip(biases)
            .zip(activations)
            .map(|((w, b), a)| DenseLayer::new(w, b, a))
            .collect::<CopperResult<Vec<_>>>()?;
        Self::new(input_dim, layers)
    }

    /// Build from a JSON network spec. Activation names are resolved here,
    /// so an unknown name fails construction rather than evaluation.
    pub fn from_spec(name: &str, input_dim: usize, spec: &NetworkSpec) -> CopperResult<Self> {
        check_layer_counts(
            name,
            spec.weights_array.len(),
            spec.biases_array.len(),
            spec.activation_array.len(),
        )?;

        let mut layers = Vec::with_capacity(spec.n_layers());
        for (i, ((rows, bias), act)) in spec
            .weights_array
            .iter()
            .zip(&spec.biases_array)
            .zip(&spec.activation_array)
            .enumerate()
        {
            let weights = nested_to_array2(&format!("{name} layer {i} weights"), rows)?;
            let activation: Activation = act.parse()?;
            let layer = DenseLayer::new(weights, Array1::from_vec(bias.clone()), activation)
                .map_err(|e| with_context(e, &format!("{name} layer {i}")))?;
            layers.push(layer);
        }
        Self::assemble(name, input_dim, layers)
    }

    /// Load weights from a NumPy `.npz` archive holding `w0, b0, w1, b1, ...`.
    /// The archive carries no activation names, so one is supplied per layer.
    pub fn from_npz(
        path: &str,
        input_dim: usize,
        activations: &[Activation],
    ) -> CopperResult<Self> {
        let file = File::open(path)?;
        let mut npz = NpzReader::new(file)
            .map_err(|e| CopperError::ConfigError(format!("Failed to open npz '{path}': {e}")))?;

        let mut weights = Vec::with_capacity(activations.len());
        let mut biases = Vec::with_capacity(activations.len());
        for i in 0..activations.len() {
            weights.push(read_array2(&mut npz, &format!("w{i}"))?);
            biases.push(read_array1(&mut npz, &format!("b{i}"))?);
        }
        Self::from_parts(input_dim, weights, biases, activations.to_vec())
    }

    /// All-zero network with the given layer widths. Hidden layers use
    /// `hidden`; the last layer is linear.
    pub fn zeros(input_dim: usize, widths: &[usize], hidden: Activation) -> CopperResult<Self> {
        Self::with_init(input_dim, widths, hidden, |_, _| 0.0)
    }

    /// Xavier-uniform initialised network with zero biases.
    pub fn random<R: Rng>(
        input_dim: usize,
        widths: &[usize],
        hidden: Activation,
        rng: &mut R,
    ) -> CopperResult<Self> {
        Self::with_init(input_dim, widths, hidden, |fan_in, fan_out| {
            let s = (2.0 / (fan_in + fan_out) as f64).sqrt();
            (rng.gen::<f64>() - 0.5) * 2.0 * s
        })
    }

    fn with_init<F>(
        input_dim: usize,
        widths: &[usize],
        hidden: Activation,
        mut init: F,
    ) -> CopperResult<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut layers = Vec::with_capacity(widths.len());
        let mut fan_in = input_dim;
        for (i, &fan_out) in widths.iter().enumerate() {
            let activation = if i + 1 == widths.len() {
                Activation::Linear
            } else {
                hidden
            };
            let weights = Array2::from_shape_fn((fan_out, fan_in), |_| init(fan_in, fan_out));
            layers.push(DenseLayer::new(weights, Array1::zeros(fan_out), activation)?);
            fan_in = fan_out;
        }
        Self::new(input_dim, layers)
    }

    fn assemble(name: &str, input_dim: usize, layers: Vec<DenseLayer>) -> CopperResult<Self> {
        if layers.is_empty() {
            return Err(CopperError::ConfigError(format!(
                "{name} requires at least one layer"
            )));
        }
        let mut expected = input_dim;
        for (i, layer) in layers.iter().enumerate() {
            if layer.input_dim() != expected {
                return Err(CopperError::DimensionMismatch {
                    context: format!("{name} layer {i} input"),
                    expected,
                    found: layer.input_dim(),
                });
            }
            expected = layer.output_dim();
        }
        Ok(Self { input_dim, layers })
    }

    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    pub fn output_dim(&self) -> usize {
        self.layers
            .last()
            .map(DenseLayer::output_dim)
            .unwrap_or(self.input_dim)
    }

    pub fn n_layers(&self) -> usize {
        self.layers.len()
    }

    pub fn layers(&self) -> &[DenseLayer] {
        &self.layers
    }

    /// Forward pass on one sample whose length the caller already checked,
    /// either through `expect_dims` at model construction or in `try_forward`.
    pub(crate) fn forward(&self, x: ArrayView1<f64>) -> Array1<f64> {
        debug_assert_eq!(x.len(), self.input_dim);
        let mut h = x.to_owned();
        for layer in &self.layers {
            h = layer.forward(&h);
        }
        h
    }

    /// Forward pass on one sample of any length; a wrong length is an error.
    pub fn try_forward(&self, x: ArrayView1<f64>) -> CopperResult<Array1<f64>> {
        if x.len() != self.input_dim {
            return Err(CopperError::DimensionMismatch {
                context: "forward input".to_string(),
                expected: self.input_dim,
                found: x.len(),
            });
        }
        Ok(self.forward(x))
    }

    /// Batch forward: (n_samples, input_dim) -> (n_samples, output_dim).
    pub fn forward_batch(&self, x: &Array2<f64>) -> CopperResult<Array2<f64>> {
        if x.ncols() != self.input_dim {
            return Err(CopperError::DimensionMismatch {
                context: "forward batch columns".to_string(),
                expected: self.input_dim,
                found: x.ncols(),
            });
        }
        let mut h = x.to_owned();
        for layer in &self.layers {
            h = layer.forward_batch(&h);
        }
        Ok(h)
    }
}

fn check_layer_counts(
    name: &str,
    n_weights: usize,
    n_biases: usize,
    n_acts: usize,
) -> CopperResult<()> {
    if n_biases != n_weights {
        return Err(CopperError::DimensionMismatch {
            context: format!("{name} bias count"),
            expected: n_weights,
            found: n_biases,
        });
    }
    if n_acts != n_weights {
        return Err(CopperError::DimensionMismatch {
            context: format!("{name} activation count"),
            expected: n_weights,
            found: n_acts,
        });
    }
    Ok(())
}

fn nested_to_array2(context: &str, rows: &[Vec<f64>]) -> CopperResult<Array2<f64>> {
    let n_cols = rows.first().map(Vec::len).unwrap_or(0);
    let mut flat = Vec::with_capacity(rows.len() * n_cols);
    for row in rows {
        if row.len() != n_cols {
            return Err(CopperError::DimensionMismatch {
                context: format!("{context} (ragged row)"),
                expected: n_cols,
                found: row.len(),
            });
        }
        flat.extend_from_slice(row);
    }
    Array2::from_shape_vec((rows.len(), n_cols), flat)
        .map_err(|e| CopperError::ConfigError(format!("{context}: {e}")))
}

fn with_context(err: CopperError, context: &str) -> CopperError {
    match err {
        CopperError::DimensionMismatch {
            context: inner,
            expected,
            found,
        } => CopperError::DimensionMismatch {
            context: format!("{context} {inner}"),
            expected,
            found,
        },
        other => other,
    }
}

fn read_array1(npz: &mut NpzReader<File>, key: &str) -> CopperResult<Array1<f64>> {
    npz.by_name::<ndarray::OwnedRepr<f64>, ndarray::Ix1>(&format!("{key}.npy"))
        .or_else(|_| npz.by_name::<ndarray::OwnedRepr<f64>, ndarray::Ix1>(key))
        .map_err(|e| CopperError::ConfigError(format!("Failed to read {key} from npz: {e}")))
}

fn read_array2(npz: &mut NpzReader<File>, key: &str) -> CopperResult<Array2<f64>> {
    npz.by_name::<ndarray::OwnedRepr<f64>, ndarray::Ix2>(&format!("{key}.npy"))
        .or_else(|_| npz.by_name::<ndarray::OwnedRepr<f64>, ndarray::Ix2>(key))
        .map_err(|e| CopperError::ConfigError(format!("Failed to read {key} from npz: {e}")))
}
