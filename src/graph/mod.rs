//! Graph model for dominating-set instances.
//!
//! A [`Graph`] is built once per instance, either directly from an edge
//! list with [`Graph::from_edges`] or from an instance file with
//! [`load_instance`] / [`read_instance`], and is immutable afterwards.

mod io;
mod types;

pub use io::{load_instance, read_instance, IndexBase};
pub use types::Graph;
