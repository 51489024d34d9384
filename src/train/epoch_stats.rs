use serde::{Serialize, Deserialize};

/// Per-epoch statistics produced by the training driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean squared-error loss over all samples in this epoch.
    pub train_loss: f64,
    /// Fraction of samples whose argmax output matched the label, in [0, 1].
    pub train_accuracy: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
