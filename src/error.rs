//! Error types.
//!
//! Two failure families exist: loading an instance ([`InstanceLoadError`])
//! and calling the decoder with arguments that do not match the instance
//! ([`DecodeError`]). An infeasible decode is not an error; it is reported
//! through [`DominatingSet::feasible`](crate::decoder::DominatingSet).

use thiserror::Error;

/// Failure while reading or building a problem instance.
///
/// Fatal for the instance: no partial [`Graph`](crate::graph::Graph) is
/// returned alongside it.
#[derive(Debug, Error)]
pub enum InstanceLoadError {
    /// The instance source could not be read.
    #[error("cannot read instance: {0}")]
    Io(#[from] std::io::Error),

    /// The text does not follow the `nVertices nEdges` / `u v` layout.
    #[error("malformed instance at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// The header announces zero vertices.
    #[error("instance must contain at least one vertex")]
    NoVertices,

    /// The announced vertex count cannot be allocated.
    #[error("cannot allocate adjacency for {vertex_count} vertices")]
    TooManyVertices { vertex_count: usize },

    /// An edge endpoint lies outside `[0, vertex_count)` after index
    /// normalization.
    #[error("edge {index} ({u}, {v}) has an endpoint outside [0, {vertex_count})")]
    InvalidEdge {
        index: usize,
        u: i64,
        v: i64,
        vertex_count: usize,
    },
}

/// Precondition violation detected before any decoding work starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    /// Key vector length differs from the vertex count.
    #[error("key vector has length {actual}, expected {expected}")]
    KeyLength { expected: usize, actual: usize },

    /// The graph has no vertices (never built, or torn down).
    #[error("graph has no vertices")]
    EmptyGraph,

    /// Decoder configuration is unusable for this graph.
    #[error("invalid decoder configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = DecodeError::KeyLength {
            expected: 5,
            actual: 3,
        };
        assert_eq!(err.to_string(), "key vector has length 3, expected 5");

        let err = InstanceLoadError::InvalidEdge {
            index: 2,
            u: 0,
            v: 7,
            vertex_count: 4,
        };
        assert_eq!(
            err.to_string(),
            "edge 2 (0, 7) has an endpoint outside [0, 4)"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: InstanceLoadError = io.into();
        assert!(matches!(err, InstanceLoadError::Io(_)));
    }
}
