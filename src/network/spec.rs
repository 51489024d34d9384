use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::error::network_error::NetworkError;
use crate::network::network::Network;

/// Describes one layer in a network architecture.
///
/// The layer's input width is not part of the description; it is inferred
/// from the preceding layer (or the network input width) when the spec is
/// built, so a spec cannot describe a mis-chained stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerSpec {
    pub size: usize,
    pub activation: ActivationFunction,
}

/// A fully serializable description of a network architecture plus its
/// training hyperparameters, independent of any trained weights.
///
/// Useful for storing configurations before training starts and for
/// rebuilding a fresh network from a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub input_size: usize,
    pub output_size: usize,
    pub epochs: usize,
    pub learning_rate: f64,
    /// Ordered layer descriptions, first entry closest to the raw input.
    pub layers: Vec<LayerSpec>,
}

impl NetworkSpec {
    /// Builds a freshly initialized network from this description.
    ///
    /// # Errors
    /// - `InvalidTopology` when the spec declares no layers
    /// - `ShapeMismatch` when the final layer's size differs from the
    ///   declared output width
    pub fn build(&self) -> Result<Network, NetworkError> {
        self.build_into(Network::new(
            self.epochs,
            self.learning_rate,
            self.input_size,
            self.output_size,
        ))
    }

    /// Same as `build` but with a fixed weight-init seed.
    pub fn build_with_seed(&self, seed: u64) -> Result<Network, NetworkError> {
        self.build_into(Network::with_seed(
            self.epochs,
            self.learning_rate,
            self.input_size,
            self.output_size,
            seed,
        ))
    }

    fn build_into(&self, mut network: Network) -> Result<Network, NetworkError> {
        let last = self.layers.last().ok_or_else(|| NetworkError::InvalidTopology {
            message: "spec declares no layers".to_string(),
        })?;
        if last.size != self.output_size {
            return Err(NetworkError::ShapeMismatch {
                expected: self.output_size,
                actual: last.size,
            });
        }
        for layer in &self.layers {
            network.add_layer(layer.size, layer.activation);
        }
        Ok(network)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<(), NetworkError> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec, NetworkError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let spec = serde_json::from_reader(reader)?;
        Ok(spec)
    }
}
