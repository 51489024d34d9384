// This binary crate is intentionally minimal.
// All neural network logic lives in the library (src/lib.rs and its modules).
// Run demos with:
//   cargo run --example xor
fn main() {
    println!("oxide-nn: a from-scratch feedforward neural network core in Rust.");
    println!("Run `cargo run --example xor` to see the XOR demo.");
    println!("Run `cargo run --example digits` to see the hand-wired digit topology.");
}
