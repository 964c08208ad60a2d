//! Choice Rule
//!
//! Turns option values into a stochastic choice: values are squashed into a
//! bounded range, converted to probabilities with a temperature softmax, and one
//! option is drawn in proportion to its probability.

use rand::Rng;

/// `tanh(v) * 2 - 1`: bounded to `[-3, 1]` so extreme utilities cannot saturate the softmax.
pub fn squash(value: f64) -> f64 {
    value.tanh() * 2.0 - 1.0
}

/// Softmax at temperature `temp`.
///
/// Exponents are shifted by the maximum value so the largest term is
/// `exp(0) = 1`; nothing overflows however small the temperature.
pub fn softmax(values: &[f64], temp: f64) -> Vec<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = values.iter().map(|v| ((v - max) / temp).exp()).collect();
    let total: f64 = exps.iter().sum();

    if !total.is_finite() || total <= 0.0 {
        // Only reachable with non-finite inputs
        return vec![1.0 / values.len() as f64; values.len()];
    }
    exps.into_iter().map(|e| e / total).collect()
}

/// Draw an index with probability proportional to its weight.
pub fn weighted_choice<R: Rng + ?Sized>(rng: &mut R, weights: &[f64]) -> usize {
    let total_weight: f64 = weights.iter().sum();

    if weights.is_empty() || total_weight <= 0.0 {
        return 0;
    }

    // Generate random value in [0, total_weight)
    let mut roll: f64 = rng.gen::<f64>() * total_weight;

    for (index, weight) in weights.iter().enumerate() {
        if roll < *weight {
            return index;
        }
        roll -= weight;
    }

    // Rounding left the roll just past the last bucket
    weights.iter().rposition(|w| *w > 0.0).unwrap_or(0)
}
