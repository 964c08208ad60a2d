//! Random Matching
//!
//! Each period agents meet in disjoint pairs drawn uniformly at random,
//! without replacement. With an odd population one agent sits the period out.

use rand::seq::index;
use rand::Rng;

/// Draw `n_agents / 2` disjoint pairs of agent indices.
pub fn draw_pairs<R: Rng + ?Sized>(n_agents: usize, rng: &mut R) -> Vec<(usize, usize)> {
    let drawn = index::sample(rng, n_agents, 2 * (n_agents / 2)).into_vec();
    drawn.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect()
}
