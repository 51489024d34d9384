use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::error::network_error::NetworkError;
use crate::math::matrix::Matrix;

/// One fully-connected layer.
///
/// `weights` holds `size` rows of `input_size + 1` values; row `i` is the
/// weight vector of neuron `i` with its bias in the last column. `outputs`
/// keeps the most recent forward result and `delta` the per-neuron error
/// signal written by the network (or by the downstream layer's backward
/// pass) ahead of this layer's own backward pass.
#[derive(Debug, Serialize, Deserialize)]
pub struct Layer {
    pub size: usize,
    pub input_size: usize,
    pub weights: Matrix,
    pub outputs: Vec<f64>,
    pub delta: Vec<f64>,
    pub activator: ActivationFunction,
}

impl Layer {
    /// Allocates a layer with weights drawn uniformly from [-0.5, 0.5) and
    /// zeroed output/delta buffers.
    pub fn new<R: Rng>(
        size: usize,
        input_size: usize,
        activation: ActivationFunction,
        rng: &mut R,
    ) -> Layer {
        Layer {
            size,
            input_size,
            weights: Matrix::uniform(size, input_size + 1, rng),
            outputs: vec![0.0; size],
            delta: vec![0.0; size],
            activator: activation,
        }
    }

    /// Builds a layer around an explicit weight matrix. Rows are neurons and
    /// the last column of each row is that neuron's bias.
    pub fn from_weights(
        weights: Matrix,
        activation: ActivationFunction,
    ) -> Result<Layer, NetworkError> {
        if weights.cols == 0 {
            return Err(NetworkError::InvalidTopology {
                message: "weight rows need at least a bias column".to_string(),
            });
        }
        let size = weights.rows;
        let input_size = weights.cols - 1;
        Ok(Layer {
            size,
            input_size,
            weights,
            outputs: vec![0.0; size],
            delta: vec![0.0; size],
            activator: activation,
        })
    }

    /// Computes one output per neuron, overwriting `outputs`.
    ///
    /// `inputs` must hold exactly `input_size` values.
    pub fn forward(&mut self, inputs: &[f64]) {
        assert_eq!(
            inputs.len(),
            self.input_size,
            "layer fed {} inputs, expected {}",
            inputs.len(),
            self.input_size
        );

        for i in 0..self.size {
            let row = self.weights.row(i);
            let mut x = 0.0;
            for k in 0..self.input_size {
                x += row[k] * inputs[k];
            }
            x += row[self.input_size];
            self.outputs[i] = self.activator.function(x);
        }
    }

    /// Consumes `delta`, back-distributes the error signal into `prev_delta`,
    /// and applies the gradient-descent weight update in place.
    ///
    /// For each neuron the local gradient is `delta[i]` scaled by the
    /// activation derivative at the stored output. Propagation into
    /// `prev_delta[k]` accumulates `weight * local` using the weight value
    /// from before its own update; callers zero the buffer beforehand.
    /// `None` for `prev_delta` marks the first layer: nothing upstream to
    /// propagate into, weights still updated. The bias (last column) moves
    /// by the local gradient alone, its implicit input being 1.
    pub fn backward(
        &mut self,
        prev_outputs: &[f64],
        mut prev_delta: Option<&mut [f64]>,
        learning_rate: f64,
    ) {
        assert_eq!(
            prev_outputs.len(),
            self.input_size,
            "backward fed {} upstream outputs, expected {}",
            prev_outputs.len(),
            self.input_size
        );
        if let Some(ref prev) = prev_delta {
            assert_eq!(
                prev.len(),
                self.input_size,
                "upstream delta holds {} entries, expected {}",
                prev.len(),
                self.input_size
            );
        }

        for i in 0..self.size {
            let local = self.delta[i] * self.activator.derivative_at_output(self.outputs[i]);
            let row = self.weights.row_mut(i);
            for k in 0..self.input_size {
                // Propagate through the pre-update weight, then overwrite it.
                if let Some(ref mut prev) = prev_delta {
                    prev[k] += row[k] * local;
                }
                row[k] += local * learning_rate * prev_outputs[k];
            }
            row[self.input_size] += local * learning_rate;
        }
    }
}
