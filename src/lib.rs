//! Random-key decoder for the Minimum Dominating Set problem.
//!
//! The crate provides the problem-specific half of a Random-Key
//! Optimization setup:
//!
//! - **Graph model** ([`graph`]): a static, read-only adjacency structure
//!   built once per instance from an edge list or an instance file.
//! - **Decoder** ([`decoder`]): maps a key vector (one real per vertex) to
//!   a dominating set via key-ordered greedy construction, a backward
//!   redundancy-pruning sweep and a feasibility check, returning a fitness
//!   to minimize.
//! - **Validation** ([`validate`]): independent checks for domination and
//!   local minimality.
//!
//! # Architecture
//!
//! Population management, crossover and mutation belong to an external
//! random-key engine. It talks to this crate only through
//! [`decoder::RandomKeyDecoder`], treating the decoder as a pure,
//! deterministic fitness oracle that may be called from many threads.
//!
//! ```
//! use domset_rk::decoder::{DecoderConfig, MdsDecoder};
//! use domset_rk::graph::Graph;
//!
//! let graph = Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
//! let decoder = MdsDecoder::new(&graph, DecoderConfig::default()).unwrap();
//!
//! let solution = decoder.decode(&[0.1, 0.5, 0.9]).unwrap();
//! assert_eq!(solution.selected, vec![0]);
//! assert_eq!(solution.fitness, 1.0);
//! ```

pub mod decoder;
pub mod error;
pub mod graph;
pub mod validate;

pub use error::{DecodeError, InstanceLoadError};
