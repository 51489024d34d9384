/// Hand-wired digit-classifier topology: 784 -> 256 -> 128 -> 10, all Sigmoid.
///
/// The classic 28x28 grayscale setup. No dataset ships with the demo, so it
/// feeds one synthetic image through the untrained stack to show the forward
/// path; wire up an IDX loader and `oxide_nn::train` to actually fit it.
///
/// Run with:
///   cargo run --example digits --release

use oxide_nn::{ActivationFunction, Network};

fn main() {
    let network_inputs = 28 * 28;
    let network_outputs = 10;
    let epochs = 10;
    let learning_rate = 0.1;

    let mut network = Network::new(epochs, learning_rate, network_inputs, network_outputs);
    network.add_layer(256, ActivationFunction::Sigmoid);
    network.add_layer(128, ActivationFunction::Sigmoid);
    network.add_layer(network_outputs, ActivationFunction::Sigmoid);

    // A synthetic "image": a horizontal intensity ramp normalized to [0, 1].
    let image: Vec<f64> = (0..network_inputs).map(|i| (i % 28) as f64 / 27.0).collect();

    let outputs = network.compute(&image, None).expect("inference failed");
    println!("Untrained class scores:");
    for (digit, score) in outputs.iter().enumerate() {
        println!("  {digit}: {score:.4}");
    }
    println!("Predicted digit: {}", argmax(outputs));
}

/// Index of the maximum value in a slice.
fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
        .map(|(i, _)| i)
        .unwrap()
}
