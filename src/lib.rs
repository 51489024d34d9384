pub mod math;
pub mod activation;
pub mod error;
pub mod layers;
pub mod network;
pub mod train;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use error::network_error::NetworkError;
pub use layers::dense::Layer;
pub use network::network::Network;
pub use network::spec::{LayerSpec, NetworkSpec};
pub use train::trainer::train;
pub use train::epoch_stats::EpochStats;
