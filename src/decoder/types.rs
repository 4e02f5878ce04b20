//! Core traits and the decoded solution type.

use rand::Rng;

use crate::error::DecodeError;

/// A decoded candidate solution as seen by an optimization engine.
///
/// Lower fitness is better (minimization), matching the convention of
/// random-key engines such as BRKGA.
pub trait Candidate: Send {
    /// Returns the scalar fitness of this candidate.
    fn fitness(&self) -> f64;

    /// Returns `true` if the candidate satisfies every problem constraint.
    fn is_feasible(&self) -> bool;
}

/// Maps a random-key chromosome to a problem solution.
///
/// This is the contract an external random-key engine relies on: it owns
/// the population of key vectors and treats the decoder as an opaque,
/// deterministic fitness oracle. Implementations must be pure with
/// respect to shared state so that decodes can run concurrently.
///
/// # Examples
///
/// ```
/// use domset_rk::decoder::{DecoderConfig, MdsDecoder, RandomKeyDecoder};
/// use domset_rk::graph::Graph;
///
/// let graph = Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
/// let decoder = MdsDecoder::new(&graph, DecoderConfig::default()).unwrap();
///
/// assert_eq!(decoder.chromosome_length(), 3);
/// assert_eq!(decoder.cost(&[0.1, 0.5, 0.9]).unwrap(), 1.0);
/// ```
pub trait RandomKeyDecoder: Send + Sync {
    /// The decoded solution type.
    type Solution: Candidate;

    /// Number of keys a chromosome must carry.
    fn chromosome_length(&self) -> usize;

    /// Decodes `keys` into a solution.
    ///
    /// # Errors
    ///
    /// [`DecodeError::KeyLength`] if `keys.len() != self.chromosome_length()`.
    fn decode(&self, keys: &[f64]) -> Result<Self::Solution, DecodeError>;

    /// Decodes `keys` and returns only the fitness.
    fn cost(&self, keys: &[f64]) -> Result<f64, DecodeError> {
        self.decode(keys).map(|solution| solution.fitness())
    }

    /// Creates a custom initial chromosome.
    ///
    /// Engines may call this to warm-start their population with
    /// problem-aware keys. The default returns `None` (use random keys).
    fn seed_chromosome<R: Rng>(&self, _rng: &mut R) -> Option<Vec<f64>> {
        None
    }
}

/// Result of decoding one key vector into a dominating set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DominatingSet {
    /// Selected vertices. Order carries no meaning once pruning has run.
    pub selected: Vec<usize>,

    /// Size of the set after greedy construction, before pruning.
    pub constructed: usize,

    /// `selected.len()` when feasible, the configured penalty otherwise.
    pub fitness: f64,

    /// Whether every vertex is dominated by `selected`.
    pub feasible: bool,
}

impl DominatingSet {
    /// Returns the number of selected vertices.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns the selected vertices in ascending order.
    pub fn sorted(&self) -> Vec<usize> {
        let mut sorted = self.selected.clone();
        sorted.sort_unstable();
        sorted
    }
}

impl Candidate for DominatingSet {
    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn is_feasible(&self) -> bool {
        self.feasible
    }
}
