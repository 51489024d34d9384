use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::error::network_error::NetworkError;
use crate::layers::dense::Layer;

/// A feedforward network: an ordered stack of dense layers plus the
/// hyperparameters its caller declared up front.
///
/// Layers are appended with `add_layer`; `compute` runs inference and, while
/// `training` is set and a label is supplied, one backpropagation step per
/// call. Squared per-class error accumulates in a running loss that only an
/// explicit `reset_loss` clears.
#[derive(Debug, Serialize, Deserialize)]
pub struct Network {
    pub layers: Vec<Layer>,
    pub epochs: usize,
    pub learning_rate: f64,
    pub input_size: usize,
    pub output_size: usize,
    pub training: bool,
    loss: f64,
    // One generator for every layer's weight init; per-layer reseeding would
    // correlate rows created within the same clock tick.
    #[serde(skip, default = "entropy_rng")]
    rng: StdRng,
}

fn entropy_rng() -> StdRng {
    StdRng::from_entropy()
}

impl Network {
    /// Creates an empty network. `output_size` must match the size of the
    /// layer added last; `compute` enforces this.
    pub fn new(epochs: usize, learning_rate: f64, input_size: usize, output_size: usize) -> Network {
        Network::from_rng(epochs, learning_rate, input_size, output_size, entropy_rng())
    }

    /// Same as `new` but with a fixed RNG seed, for reproducible weight
    /// initialization.
    pub fn with_seed(
        epochs: usize,
        learning_rate: f64,
        input_size: usize,
        output_size: usize,
        seed: u64,
    ) -> Network {
        Network::from_rng(
            epochs,
            learning_rate,
            input_size,
            output_size,
            StdRng::seed_from_u64(seed),
        )
    }

    fn from_rng(
        epochs: usize,
        learning_rate: f64,
        input_size: usize,
        output_size: usize,
        rng: StdRng,
    ) -> Network {
        Network {
            layers: Vec::new(),
            epochs,
            learning_rate,
            input_size,
            output_size,
            training: false,
            loss: 0.0,
            rng,
        }
    }

    /// Appends a fully-connected layer of `size` neurons. Its input width is
    /// the previous layer's size, or the network's declared input width for
    /// the first layer.
    pub fn add_layer(&mut self, size: usize, activation: ActivationFunction) {
        let input_size = self.layers.last().map_or(self.input_size, |layer| layer.size);
        self.layers.push(Layer::new(size, input_size, activation, &mut self.rng));
    }

    /// Runs one forward pass and, when training with a label, one
    /// backpropagation pass. Returns a borrow of the output layer's
    /// activations.
    ///
    /// `label` is the target class index. `None` makes the call pure
    /// inference regardless of the training flag.
    ///
    /// # Errors
    /// - `InvalidTopology` when no layers have been added
    /// - `ShapeMismatch` when `inputs` is not `input_size` long, or the last
    ///   layer does not match the declared output width
    /// - `LabelOutOfRange` when a supplied label is not below `output_size`
    pub fn compute(&mut self, inputs: &[f64], label: Option<usize>) -> Result<&[f64], NetworkError> {
        if self.layers.is_empty() {
            return Err(NetworkError::InvalidTopology {
                message: "network has no layers".to_string(),
            });
        }
        let last_size = self.layers[self.layers.len() - 1].size;
        if last_size != self.output_size {
            return Err(NetworkError::ShapeMismatch {
                expected: self.output_size,
                actual: last_size,
            });
        }
        if inputs.len() != self.input_size {
            return Err(NetworkError::ShapeMismatch {
                expected: self.input_size,
                actual: inputs.len(),
            });
        }
        if let Some(label) = label {
            if label >= self.output_size {
                return Err(NetworkError::LabelOutOfRange {
                    label,
                    num_classes: self.output_size,
                });
            }
        }

        self.forward_pass(inputs);

        if self.training {
            if let Some(label) = label {
                self.seed_output_delta(label);
                self.backward_pass(inputs);
            }
        }

        Ok(&self.layers[self.layers.len() - 1].outputs)
    }

    /// Chains every layer in index order; each layer reads its predecessor's
    /// output buffer directly (the first reads the caller's input).
    fn forward_pass(&mut self, inputs: &[f64]) {
        for i in 0..self.layers.len() {
            let (prev, rest) = self.layers.split_at_mut(i);
            let layer = &mut rest[0];
            match prev.last() {
                Some(prev_layer) => layer.forward(&prev_layer.outputs),
                None => layer.forward(inputs),
            }
        }
    }

    /// Writes the one-hot classification error into the output layer's delta
    /// and accumulates its square into the running loss.
    fn seed_output_delta(&mut self, label: usize) {
        let mut squared_error = 0.0;
        if let Some(last) = self.layers.last_mut() {
            for i in 0..last.size {
                let target = if i == label { 1.0 } else { 0.0 };
                let err = target - last.outputs[i];
                last.delta[i] = err;
                squared_error += err * err;
            }
        }
        self.loss += squared_error;
    }

    /// Walks layers from the last index down to the first, inclusive. Each
    /// upstream delta buffer is zeroed just before the downstream layer
    /// accumulates into it; layer 0 propagates nowhere and only updates its
    /// weights.
    fn backward_pass(&mut self, inputs: &[f64]) {
        let learning_rate = self.learning_rate;
        for i in (0..self.layers.len()).rev() {
            let (prev, rest) = self.layers.split_at_mut(i);
            let layer = &mut rest[0];
            match prev.last_mut() {
                Some(prev_layer) => {
                    prev_layer.delta.fill(0.0);
                    layer.backward(&prev_layer.outputs, Some(&mut prev_layer.delta), learning_rate);
                }
                None => layer.backward(inputs, None, learning_rate),
            }
        }
    }

    /// The output layer's activations from the most recent `compute` call.
    pub fn outputs(&self) -> &[f64] {
        self.layers.last().map_or(&[], |layer| &layer.outputs)
    }

    /// Running sum of squared per-class error across training calls.
    pub fn loss(&self) -> f64 {
        self.loss
    }

    /// Clears the running loss. Cadence (per epoch, per report, never) is
    /// the caller's choice.
    pub fn reset_loss(&mut self) {
        self.loss = 0.0;
    }

    /// Serializes the network, topology and weights included, to a
    /// pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<(), NetworkError> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a network previously written by `save_json`,
    /// re-validating layer dimension chaining before handing it back.
    pub fn load_json(path: &str) -> Result<Network, NetworkError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let network: Network = serde_json::from_reader(reader)?;
        network.validate_topology()?;
        Ok(network)
    }

    /// Checks every stored dimension: each layer's input width against its
    /// predecessor's size (or the network input width), each weight matrix
    /// and buffer against the layer's own declared shape, and the final
    /// layer against the declared output width.
    fn validate_topology(&self) -> Result<(), NetworkError> {
        let mut expected = self.input_size;
        for layer in &self.layers {
            if layer.input_size != expected {
                return Err(NetworkError::ShapeMismatch {
                    expected,
                    actual: layer.input_size,
                });
            }
            let weights = &layer.weights;
            if weights.rows != layer.size
                || weights.cols != layer.input_size + 1
                || weights.data.len() != weights.rows
                || weights.data.iter().any(|row| row.len() != weights.cols)
            {
                return Err(NetworkError::InvalidTopology {
                    message: format!(
                        "layer weight matrix is not {} x {}",
                        layer.size,
                        layer.input_size + 1
                    ),
                });
            }
            if layer.outputs.len() != layer.size || layer.delta.len() != layer.size {
                return Err(NetworkError::ShapeMismatch {
                    expected: layer.size,
                    actual: layer.outputs.len(),
                });
            }
            expected = layer.size;
        }
        if !self.layers.is_empty() && expected != self.output_size {
            return Err(NetworkError::ShapeMismatch {
                expected: self.output_size,
                actual: expected,
            });
        }
        Ok(())
    }
}
