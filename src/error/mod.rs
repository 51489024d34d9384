pub mod network_error;

pub use network_error::NetworkError;
