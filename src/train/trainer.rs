use std::time::Instant;

use rand::seq::SliceRandom;

use crate::error::network_error::NetworkError;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;

/// Trains `network` on the labelled samples for its full epoch budget.
///
/// Each epoch visits every sample once in a freshly shuffled order, running
/// one forward/backward `compute` per sample. The network's running loss is
/// reset at the start of each epoch, so `EpochStats::train_loss` is the mean
/// over that epoch alone. The training flag is forced on for the duration of
/// the run and restored afterwards.
///
/// Returns one `EpochStats` per completed epoch; an empty sample set yields
/// an empty run.
///
/// # Errors
/// `ShapeMismatch` when `inputs` and `labels` differ in length, plus
/// anything `Network::compute` reports for the individual samples.
pub fn train(
    network: &mut Network,
    inputs: &[Vec<f64>],
    labels: &[usize],
) -> Result<Vec<EpochStats>, NetworkError> {
    if inputs.len() != labels.len() {
        return Err(NetworkError::ShapeMismatch {
            expected: inputs.len(),
            actual: labels.len(),
        });
    }
    if inputs.is_empty() {
        return Ok(Vec::new());
    }

    let was_training = network.training;
    network.training = true;
    let result = run_epochs(network, inputs, labels);
    network.training = was_training;
    result
}

fn run_epochs(
    network: &mut Network,
    inputs: &[Vec<f64>],
    labels: &[usize],
) -> Result<Vec<EpochStats>, NetworkError> {
    let total_epochs = network.epochs;
    let mut stats = Vec::with_capacity(total_epochs);
    let mut indices: Vec<usize> = (0..inputs.len()).collect();

    for epoch in 1..=total_epochs {
        let t_start = Instant::now();
        network.reset_loss();
        indices.shuffle(&mut rand::thread_rng());

        let mut correct = 0usize;
        for &idx in &indices {
            let outputs = network.compute(&inputs[idx], Some(labels[idx]))?;
            if argmax(outputs) == labels[idx] {
                correct += 1;
            }
        }

        stats.push(EpochStats {
            epoch,
            total_epochs,
            train_loss: network.loss() / inputs.len() as f64,
            train_accuracy: correct as f64 / inputs.len() as f64,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        });
    }

    Ok(stats)
}

/// Index of the maximum element in a slice.
fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}
