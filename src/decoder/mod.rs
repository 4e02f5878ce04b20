//! Random-key decoder for the Minimum Dominating Set problem.
//!
//! An external random-key engine (BRKGA or similar) owns a population of
//! key vectors, one key per vertex, and evolves them. This module turns a
//! single key vector into a dominating set and a fitness to minimize:
//! the set size when every vertex is dominated, or a penalty larger than
//! any feasible size otherwise.
//!
//! The engine only needs [`RandomKeyDecoder`]; [`MdsDecoder`] implements
//! it, and [`evaluate_batch`] decodes a whole population at once.
//!
//! # References
//!
//! - Bean (1994), "Genetic algorithms and random keys for sequencing and optimization"
//! - Goncalves & Resende (2011), "Biased random-key genetic algorithms for
//!   combinatorial optimization", *J. Heuristics* 17(5), 487–525

mod batch;
mod config;
mod mds;
mod ranking;
mod types;

pub use batch::{evaluate_batch, evaluate_costs};
pub use config::{DecoderConfig, DEFAULT_INFEASIBLE_PENALTY};
pub use mds::MdsDecoder;
pub use ranking::rank_keys;
pub use types::{Candidate, DominatingSet, RandomKeyDecoder};
