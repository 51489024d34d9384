use serde::{Serialize, Deserialize};
use std::f64::consts::E;

// Fixed 0.1 leak keeps the variant unit (no f64 field), preserving Eq + Copy.
const LEAKY_SLOPE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationFunction {
    Sigmoid,
    ReLU,
    LeakyReLU,
}

impl ActivationFunction {
    /// Element-wise activation.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::LeakyReLU => if x > 0.0 { x } else { LEAKY_SLOPE * x },
        }
    }

    /// Derivative evaluated at the activated output `a = function(x)`.
    ///
    /// Exact for Sigmoid (`a * (1 - a)`). For the ReLU family the output has
    /// the same sign as the pre-activation, so thresholding on `a` is
    /// equivalent to thresholding on `x`.
    pub fn derivative_at_output(&self, a: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => a * (1.0 - a),
            ActivationFunction::ReLU => if a > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::LeakyReLU => if a > 0.0 { 1.0 } else { LEAKY_SLOPE },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_output_is_strictly_between_zero_and_one() {
        let act = ActivationFunction::Sigmoid;
        for i in -100..=100 {
            let x = i as f64 * 0.5;
            let a = act.function(x);
            assert!(a > 0.0 && a < 1.0, "sigmoid({x}) = {a} out of (0, 1)");
        }
    }

    #[test]
    fn relu_family_lower_bound() {
        for i in -100..=100 {
            let x = i as f64 * 0.5;
            let relu = ActivationFunction::ReLU.function(x);
            let leaky = ActivationFunction::LeakyReLU.function(x);
            let floor = x.min(LEAKY_SLOPE * x);
            assert!(relu >= floor);
            assert!(leaky >= floor);
        }
    }

    #[test]
    fn relu_is_identity_on_positives_and_zero_on_negatives() {
        let act = ActivationFunction::ReLU;
        assert_eq!(act.function(3.5), 3.5);
        assert_eq!(act.function(-3.5), 0.0);
        assert_eq!(act.function(0.0), 0.0);
    }

    #[test]
    fn leaky_relu_scales_negatives() {
        let act = ActivationFunction::LeakyReLU;
        assert_eq!(act.function(2.0), 2.0);
        assert!((act.function(-2.0) - (-0.2)).abs() < 1e-12);
    }

    #[test]
    fn sigmoid_gradient_at_output() {
        let act = ActivationFunction::Sigmoid;
        // Peak of a * (1 - a) is 0.25 at a = 0.5.
        assert!((act.derivative_at_output(0.5) - 0.25).abs() < 1e-12);
        assert!((act.derivative_at_output(0.9) - 0.09).abs() < 1e-12);
    }

    #[test]
    fn relu_gradients_at_output() {
        assert_eq!(ActivationFunction::ReLU.derivative_at_output(1.7), 1.0);
        assert_eq!(ActivationFunction::ReLU.derivative_at_output(0.0), 0.0);
        assert_eq!(ActivationFunction::LeakyReLU.derivative_at_output(1.7), 1.0);
        assert_eq!(ActivationFunction::LeakyReLU.derivative_at_output(-0.3), LEAKY_SLOPE);
    }
}
