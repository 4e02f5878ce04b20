//! Solution checks that do not rely on decoder bookkeeping.
//!
//! These recompute domination from scratch, so they can verify sets that
//! come from anywhere (a decoder run, a file, another solver).

use crate::graph::Graph;

/// Returns the vertices not dominated by `selected`, in ascending order.
///
/// Entries of `selected` outside the graph are ignored.
pub fn undominated(graph: &Graph, selected: &[usize]) -> Vec<usize> {
    let counts = coverage_counts(graph, selected);
    counts
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c == 0)
        .map(|(v, _)| v)
        .collect()
}

/// Checks whether every vertex is in `selected` or adjacent to a member.
///
/// # Examples
///
/// ```
/// use domset_rk::graph::Graph;
/// use domset_rk::validate::is_dominating;
///
/// let g = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
/// assert!(is_dominating(&g, &[1]));
/// assert!(!is_dominating(&g, &[0]));
/// ```
pub fn is_dominating(graph: &Graph, selected: &[usize]) -> bool {
    coverage_counts(graph, selected).iter().all(|&c| c > 0)
}

/// Checks that no single member of `selected` can be dropped while
/// keeping the set dominating.
///
/// Equivalent to every member having a private vertex in its closed
/// neighborhood. Returns `false` if `selected` is not dominating.
pub fn is_locally_minimal(graph: &Graph, selected: &[usize]) -> bool {
    let counts = coverage_counts(graph, selected);
    if counts.iter().any(|&c| c == 0) {
        return false;
    }
    selected.iter().all(|&v| {
        v < graph.num_vertices()
            && (counts[v] == 1 || graph.neighbors(v).iter().any(|&u| counts[u] == 1))
    })
}

fn coverage_counts(graph: &Graph, selected: &[usize]) -> Vec<u32> {
    let n = graph.num_vertices();
    let mut counts = vec![0u32; n];
    for &v in selected.iter().filter(|&&v| v < n) {
        counts[v] += 1;
        for &u in graph.neighbors(v) {
            counts[u] += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(n: usize) -> Graph {
        let edges: Vec<(usize, usize)> = (1..n).map(|v| (v - 1, v)).collect();
        Graph::from_edges(n, &edges).unwrap()
    }

    #[test]
    fn test_undominated() {
        let g = path(5);
        assert_eq!(undominated(&g, &[0]), vec![2, 3, 4]);
        assert!(undominated(&g, &[1, 3]).is_empty());
    }

    #[test]
    fn test_is_dominating() {
        let g = path(5);
        assert!(is_dominating(&g, &[0, 3]));
        assert!(is_dominating(&g, &[0, 2, 4]));
        assert!(!is_dominating(&g, &[0, 2]));
        assert!(!is_dominating(&g, &[]));
    }

    #[test]
    fn test_locally_minimal() {
        let g = path(5);
        assert!(is_locally_minimal(&g, &[0, 2, 4]));
        assert!(is_locally_minimal(&g, &[1, 3]));
        assert!(!is_locally_minimal(&g, &[0, 1, 3]));
        assert!(!is_locally_minimal(&g, &[0]));
    }

    #[test]
    fn test_duplicate_members_not_minimal() {
        let g = path(3);
        assert!(is_locally_minimal(&g, &[1]));
        assert!(!is_locally_minimal(&g, &[1, 1]));
    }

    #[test]
    fn test_out_of_range_members_ignored() {
        let g = path(3);
        assert!(is_dominating(&g, &[1, 99]));
        assert!(!is_locally_minimal(&g, &[1, 99]));
    }
}
