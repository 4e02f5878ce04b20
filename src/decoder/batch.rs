//! Population evaluation.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::types::{Candidate, RandomKeyDecoder};
use crate::error::DecodeError;

/// Decodes every key vector of `population`.
///
/// Every length is checked before any decoding starts, so a malformed
/// population is rejected without partial work. With the `parallel`
/// feature enabled and `parallel == true`, decodes are spread over the
/// rayon thread pool; results are returned in input order and are
/// identical to a sequential run.
///
/// # Examples
///
/// ```
/// use domset_rk::decoder::{evaluate_batch, DecoderConfig, MdsDecoder};
/// use domset_rk::graph::Graph;
///
/// let graph = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
/// let decoder = MdsDecoder::new(&graph, DecoderConfig::default()).unwrap();
/// let population = vec![vec![0.1, 0.2, 0.3], vec![0.9, 0.1, 0.5]];
///
/// let solutions = evaluate_batch(&decoder, &population, false).unwrap();
/// assert_eq!(solutions.len(), 2);
/// assert_eq!(solutions[1].selected, vec![1]);
/// ```
pub fn evaluate_batch<D: RandomKeyDecoder>(
    decoder: &D,
    population: &[Vec<f64>],
    parallel: bool,
) -> Result<Vec<D::Solution>, DecodeError> {
    let expected = decoder.chromosome_length();
    if let Some(keys) = population.iter().find(|keys| keys.len() != expected) {
        return Err(DecodeError::KeyLength {
            expected,
            actual: keys.len(),
        });
    }

    if parallel {
        decode_parallel(decoder, population)
    } else {
        population.iter().map(|keys| decoder.decode(keys)).collect()
    }
}

#[cfg(feature = "parallel")]
fn decode_parallel<D: RandomKeyDecoder>(
    decoder: &D,
    population: &[Vec<f64>],
) -> Result<Vec<D::Solution>, DecodeError> {
    population
        .par_iter()
        .map(|keys| decoder.decode(keys))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn decode_parallel<D: RandomKeyDecoder>(
    decoder: &D,
    population: &[Vec<f64>],
) -> Result<Vec<D::Solution>, DecodeError> {
    population.iter().map(|keys| decoder.decode(keys)).collect()
}

/// Decodes every key vector and returns only the fitness values.
pub fn evaluate_costs<D: RandomKeyDecoder>(
    decoder: &D,
    population: &[Vec<f64>],
    parallel: bool,
) -> Result<Vec<f64>, DecodeError> {
    Ok(evaluate_batch(decoder, population, parallel)?
        .iter()
        .map(Candidate::fitness)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::{DecoderConfig, MdsDecoder};
    use crate::graph::Graph;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn cycle(n: usize) -> Graph {
        let edges: Vec<(usize, usize)> = (0..n).map(|v| (v, (v + 1) % n)).collect();
        Graph::from_edges(n, &edges).unwrap()
    }

    fn random_population(n: usize, size: usize, seed: u64) -> Vec<Vec<f64>> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..size)
            .map(|_| (0..n).map(|_| rng.random_range(0.0..1.0)).collect())
            .collect()
    }

    #[test]
    fn test_batch_matches_single_decodes() {
        let g = cycle(12);
        let decoder = MdsDecoder::new(&g, DecoderConfig::default()).unwrap();
        let population = random_population(12, 20, 42);

        let batch = evaluate_batch(&decoder, &population, false).unwrap();
        for (keys, solution) in population.iter().zip(batch.iter()) {
            assert_eq!(&decoder.decode(keys).unwrap(), solution);
        }
    }

    #[test]
    fn test_parallel_equals_sequential() {
        let g = cycle(30);
        let decoder = MdsDecoder::new(&g, DecoderConfig::default()).unwrap();
        let population = random_population(30, 64, 7);

        let sequential = evaluate_batch(&decoder, &population, false).unwrap();
        let parallel = evaluate_batch(&decoder, &population, true).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_rejects_bad_length_before_decoding() {
        let g = cycle(4);
        let decoder = MdsDecoder::new(&g, DecoderConfig::default()).unwrap();
        let population = vec![vec![0.1; 4], vec![0.1; 3]];
        assert_eq!(
            evaluate_batch(&decoder, &population, false),
            Err(DecodeError::KeyLength {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_costs() {
        let g = cycle(6);
        let decoder = MdsDecoder::new(&g, DecoderConfig::default()).unwrap();
        let population = random_population(6, 10, 3);
        let costs = evaluate_costs(&decoder, &population, false).unwrap();
        assert_eq!(costs.len(), 10);
        // gamma(C6) = 2; any locally minimal set on C6 has at most 3 vertices.
        assert!(costs.iter().all(|&c| (2.0..=3.0).contains(&c)));
    }

    #[test]
    fn test_empty_population() {
        let g = cycle(3);
        let decoder = MdsDecoder::new(&g, DecoderConfig::default()).unwrap();
        assert!(evaluate_batch(&decoder, &[], true).unwrap().is_empty());
    }
}
