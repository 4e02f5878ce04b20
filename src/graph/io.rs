//! Instance reader.
//!
//! The instance format is a header line `nVertices nEdges` followed by
//! `nEdges` lines `u v`. Blank lines and comment lines (starting with `#`
//! or `c `) are skipped anywhere in the file. Vertex indices are 0-based
//! unless [`IndexBase::One`] is requested.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::types::Graph;
use crate::error::InstanceLoadError;

const EDGE_RESERVE_CAP: usize = 4096;

/// Vertex numbering convention of an instance file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndexBase {
    /// Vertices are numbered `0..n`.
    #[default]
    Zero,
    /// Vertices are numbered `1..=n`; a raw `0` is out of range.
    One,
}

impl IndexBase {
    fn offset(self) -> i64 {
        match self {
            IndexBase::Zero => 0,
            IndexBase::One => 1,
        }
    }
}

/// Opens `path` and reads an instance from it.
///
/// # Errors
///
/// [`InstanceLoadError::Io`] if the file cannot be opened, otherwise
/// whatever [`read_instance`] reports.
pub fn load_instance<P: AsRef<Path>>(
    path: P,
    base: IndexBase,
) -> Result<Graph, InstanceLoadError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let graph = read_instance(BufReader::new(file), base)?;
    log::info!(
        "loaded {}: {} vertices, {} edges",
        path.display(),
        graph.num_vertices(),
        graph.num_edges()
    );
    Ok(graph)
}

/// Reads an instance from any buffered reader.
///
/// Edge endpoints are normalized to 0-based indices according to `base`
/// and validated against the announced vertex count. Lines after the last
/// announced edge are ignored.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use domset_rk::graph::{read_instance, IndexBase};
///
/// let g = read_instance(Cursor::new("3 2\n1 2\n2 3\n"), IndexBase::One).unwrap();
/// assert_eq!(g.neighbors(1), &[0, 2]);
/// ```
pub fn read_instance<R: BufRead>(
    reader: R,
    base: IndexBase,
) -> Result<Graph, InstanceLoadError> {
    let mut has_header = false;
    let mut edges: Vec<(usize, usize)> = Vec::new();
    let mut expected_edges = 0usize;
    let mut vertex_count = 0usize;
    let mut last_line = 0usize;
    let mut header_line = 0usize;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        last_line = line_no;
        let trimmed = line.trim();
        if is_skippable(trimmed) {
            continue;
        }

        let (a, b) = parse_pair(trimmed, line_no)?;

        if !has_header {
            if a < 0 || b < 0 {
                return Err(InstanceLoadError::Malformed {
                    line: line_no,
                    reason: format!("negative count in header `{trimmed}`"),
                });
            }
            vertex_count = a as usize;
            expected_edges = b as usize;
            if vertex_count == 0 {
                return Err(InstanceLoadError::NoVertices);
            }
            has_header = true;
            header_line = line_no;
            // The header is untrusted; grow with the edges actually read.
            edges.reserve(expected_edges.min(EDGE_RESERVE_CAP));
            if expected_edges == 0 {
                break;
            }
            continue;
        }

        let index = edges.len();
        let u = a.saturating_sub(base.offset());
        let v = b.saturating_sub(base.offset());
        if u < 0 || v < 0 || u as usize >= vertex_count || v as usize >= vertex_count {
            return Err(InstanceLoadError::InvalidEdge {
                index,
                u: a,
                v: b,
                vertex_count,
            });
        }
        edges.push((u as usize, v as usize));
        if edges.len() == expected_edges {
            break;
        }
    }

    if !has_header {
        return Err(InstanceLoadError::Malformed {
            line: last_line.max(1),
            reason: "missing `nVertices nEdges` header".into(),
        });
    }
    if edges.len() < expected_edges {
        return Err(InstanceLoadError::Malformed {
            line: last_line,
            reason: format!(
                "header announces {} edges but only {} were found",
                expected_edges,
                edges.len()
            ),
        });
    }

    Graph::from_edges(vertex_count, &edges).map_err(|err| match err {
        InstanceLoadError::TooManyVertices { vertex_count } => {
            InstanceLoadError::Malformed {
                line: header_line,
                reason: format!("cannot allocate {vertex_count} vertices"),
            }
        }
        other => other,
    })
}

fn is_skippable(line: &str) -> bool {
    line.is_empty() || line.starts_with('#') || line.starts_with("c ") || line == "c"
}

fn parse_pair(line: &str, line_no: usize) -> Result<(i64, i64), InstanceLoadError> {
    let mut tokens = line.split_whitespace();
    let mut next = |what: &str| -> Result<i64, InstanceLoadError> {
        let token = tokens.next().ok_or_else(|| InstanceLoadError::Malformed {
            line: line_no,
            reason: format!("missing {what}"),
        })?;
        token.parse::<i64>().map_err(|_| InstanceLoadError::Malformed {
            line: line_no,
            reason: format!("`{token}` is not an integer"),
        })
    };
    let a = next("first value")?;
    let b = next("second value")?;
    if let Some(extra) = tokens.next() {
        return Err(InstanceLoadError::Malformed {
            line: line_no,
            reason: format!("unexpected trailing token `{extra}`"),
        });
    }
    Ok((a, b))
}
