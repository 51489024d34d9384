/// XOR as a two-class classification problem: label 1 when the inputs differ.
///
/// Architecture: 2 -> 8 (Sigmoid) -> 2 (Sigmoid)
/// Learning rate: 0.5, 5000 epochs of per-sample SGD.
///
/// Run with:
///   cargo run --example xor

use oxide_nn::{ActivationFunction, Network, train};

fn main() {
    let mut network = Network::new(5000, 0.5, 2, 2);
    network.add_layer(8, ActivationFunction::Sigmoid);
    network.add_layer(2, ActivationFunction::Sigmoid);

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let labels = vec![0, 1, 1, 0];

    let stats = train(&mut network, &inputs, &labels).expect("training failed");
    for s in stats.iter().step_by(500).chain(stats.last()) {
        println!(
            "Epoch {}/{}: loss = {:.6}, accuracy = {:.2}",
            s.epoch, s.total_epochs, s.train_loss, s.train_accuracy
        );
    }

    for (input, label) in inputs.iter().zip(&labels) {
        let outputs = network.compute(input, None).expect("inference failed");
        println!(
            "Input {:?} -> class {} (expected {}), outputs [{:.4}, {:.4}]",
            input,
            argmax(outputs),
            label,
            outputs[0],
            outputs[1]
        );
    }
}

/// Index of the maximum value in a slice.
fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
        .map(|(i, _)| i)
        .unwrap()
}
