//! Minimum Dominating Set decoder.
//!
//! Decoding runs four steps over per-call buffers:
//!
//! 1. **Ranking**: vertices sorted by ascending key ([`rank_keys`]).
//! 2. **Construction**: walk the ranking and select a vertex whenever it,
//!    or one of its neighbors, is still undominated.
//! 3. **Pruning**: a single backward sweep over the selection that drops
//!    every vertex whose closed neighborhood stays dominated without it.
//! 4. **Feasibility**: any undominated vertex turns the fitness into the
//!    configured penalty.
//!
//! Coverage is tracked as a per-vertex counter of how many selected
//! vertices dominate it (a selected vertex dominates itself).

use rand::Rng;

use super::batch::evaluate_batch;
use super::config::DecoderConfig;
use super::ranking::rank_keys;
use super::types::{DominatingSet, RandomKeyDecoder};
use crate::error::DecodeError;
use crate::graph::Graph;

/// Random-key decoder for the Minimum Dominating Set problem.
///
/// Borrows the graph read-only and keeps no state between calls, so one
/// decoder can serve any number of threads at once.
///
/// # Examples
///
/// ```
/// use domset_rk::decoder::{DecoderConfig, MdsDecoder};
/// use domset_rk::graph::Graph;
///
/// let path = Graph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
/// let decoder = MdsDecoder::new(&path, DecoderConfig::default()).unwrap();
///
/// let solution = decoder.decode(&[0.0, 1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(solution.sorted(), vec![0, 3]);
/// assert_eq!(solution.fitness, 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct MdsDecoder<'g> {
    graph: &'g Graph,
    config: DecoderConfig,
}

impl<'g> MdsDecoder<'g> {
    /// Creates a decoder for `graph`.
    ///
    /// # Errors
    ///
    /// [`DecodeError::EmptyGraph`] for a graph without vertices, or
    /// [`DecodeError::InvalidConfig`] if the penalty does not exceed the
    /// vertex count.
    pub fn new(graph: &'g Graph, config: DecoderConfig) -> Result<Self, DecodeError> {
        if graph.is_empty() {
            return Err(DecodeError::EmptyGraph);
        }
        config.validate_for(graph.num_vertices())?;
        Ok(Self { graph, config })
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Returns `true` if [`evaluate`](Self::evaluate) spreads decodes over
    /// the rayon pool: the config asks for it and the `parallel` feature
    /// is compiled in.
    pub fn runs_parallel(&self) -> bool {
        self.config.parallel && cfg!(feature = "parallel")
    }

    /// Decodes a whole population, in parallel when
    /// [`DecoderConfig::parallel`] is set.
    ///
    /// # Errors
    ///
    /// [`DecodeError::KeyLength`] for the first key vector of the wrong
    /// length, before any decoding starts.
    pub fn evaluate(
        &self,
        population: &[Vec<f64>],
    ) -> Result<Vec<DominatingSet>, DecodeError> {
        evaluate_batch(self, population, self.config.parallel)
    }

    /// Checks that `keys` matches the graph before any decode work starts.
    pub fn check_keys(&self, keys: &[f64]) -> Result<(), DecodeError> {
        let expected = self.graph.num_vertices();
        if keys.len() != expected {
            return Err(DecodeError::KeyLength {
                expected,
                actual: keys.len(),
            });
        }
        Ok(())
    }

    /// Decodes `keys` into a dominating set and its fitness.
    ///
    /// # Errors
    ///
    /// [`DecodeError::KeyLength`] if `keys.len()` differs from the vertex
    /// count. Otherwise decoding always succeeds; an undominated vertex is
    /// reported through [`DominatingSet::feasible`] and the penalty fitness.
    pub fn decode(&self, keys: &[f64]) -> Result<DominatingSet, DecodeError> {
        self.check_keys(keys)?;

        let order = rank_keys(keys);
        let mut coverage = vec![0u32; self.graph.num_vertices()];
        let mut selected = self.construct(&order, &mut coverage);
        let constructed = selected.len();

        if self.config.prune {
            self.prune(&mut selected, &mut coverage);
        }

        Ok(self.assess(selected, constructed, &coverage))
    }

    /// Feasibility check and fitness for a finished selection.
    ///
    /// Fitness is `selected.len()` if every counter in `coverage` is
    /// positive, the configured penalty otherwise.
    pub fn assess(
        &self,
        selected: Vec<usize>,
        constructed: usize,
        coverage: &[u32],
    ) -> DominatingSet {
        let undominated = coverage.iter().filter(|&&c| c == 0).count();
        if undominated > 0 {
            log::warn!(
                "infeasible decode: {} of {} vertices undominated by {} selected",
                undominated,
                coverage.len(),
                selected.len()
            );
            return DominatingSet {
                selected,
                constructed,
                fitness: self.config.infeasible_penalty,
                feasible: false,
            };
        }

        DominatingSet {
            fitness: selected.len() as f64,
            selected,
            constructed,
            feasible: true,
        }
    }

    /// Greedy construction over a vertex ordering.
    ///
    /// Selects each vertex of `order` that is undominated itself or has an
    /// undominated neighbor, updating `coverage` as it goes. Returns the
    /// selected vertices in selection order.
    ///
    /// `coverage` must have one entry per vertex; it is usually all zeros,
    /// but a pre-filled counter vector is honored (already-dominated
    /// regions are skipped).
    ///
    /// # Panics
    ///
    /// Panics if `order` holds a vertex `>= num_vertices()` or if
    /// `coverage` is shorter than the vertex count.
    pub fn construct(&self, order: &[usize], coverage: &mut [u32]) -> Vec<usize> {
        let mut selected = Vec::new();
        for &v in order {
            let needed = coverage[v] == 0
                || self.graph.neighbors(v).iter().any(|&u| coverage[u] == 0);
            if needed {
                self.add(v, coverage);
                selected.push(v);
            }
        }
        selected
    }

    /// Single backward redundancy sweep over `selected`.
    ///
    /// Visits every vertex of `selected` once, most recently added first.
    /// A vertex is dropped when it and each of its neighbors are dominated
    /// at least twice; counters shrink as removals happen, so later checks
    /// in the same sweep see earlier removals. Removal swaps the last entry
    /// into the freed slot. Returns the number of vertices removed.
    ///
    /// # Panics
    ///
    /// Panics if `selected` holds a vertex `>= num_vertices()` or if
    /// `coverage` is shorter than the vertex count. Counters must come
    /// from [`construct`](Self::construct) over the same `selected`;
    /// otherwise a counter may underflow.
    pub fn prune(&self, selected: &mut Vec<usize>, coverage: &mut [u32]) -> usize {
        let mut removed = 0usize;
        for i in (0..selected.len()).rev() {
            let v = selected[i];
            if self.is_redundant(v, coverage) {
                self.remove(v, coverage);
                selected.swap_remove(i);
                removed += 1;
            }
        }
        removed
    }

    fn is_redundant(&self, v: usize, coverage: &[u32]) -> bool {
        coverage[v] > 1 && self.graph.neighbors(v).iter().all(|&u| coverage[u] > 1)
    }

    fn add(&self, v: usize, coverage: &mut [u32]) {
        coverage[v] += 1;
        for &u in self.graph.neighbors(v) {
            coverage[u] += 1;
        }
    }

    fn remove(&self, v: usize, coverage: &mut [u32]) {
        coverage[v] -= 1;
        for &u in self.graph.neighbors(v) {
            coverage[u] -= 1;
        }
    }
}

impl RandomKeyDecoder for MdsDecoder<'_> {
    type Solution = DominatingSet;

    fn chromosome_length(&self) -> usize {
        self.graph.num_vertices()
    }

    fn decode(&self, keys: &[f64]) -> Result<DominatingSet, DecodeError> {
        MdsDecoder::decode(self, keys)
    }

    /// Degree-biased keys: high-degree vertices get small keys and are
    /// considered first by the construction, with random jitter so seeds
    /// differ from one another.
    fn seed_chromosome<R: Rng>(&self, rng: &mut R) -> Option<Vec<f64>> {
        let span = (self.graph.max_degree() + 2) as f64;
        let keys = (0..self.graph.num_vertices())
            .map(|v| {
                let bias = 1.0 - (self.graph.degree(v) + 1) as f64 / span;
                0.7 * bias + 0.3 * rng.random_range(0.0..1.0)
            })
            .collect();
        Some(keys)
    }
}
