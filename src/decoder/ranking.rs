//! Key-vector ranking.

use std::cmp::Ordering;

/// Returns vertex indices sorted by ascending key.
///
/// The sort is stable: equal keys keep ascending index order, so repeated
/// calls with the same keys always produce the same permutation. Keys are
/// compared with [`f64::total_cmp`], so NaN keys get a fixed position
/// (positive NaN after every finite key) instead of an order that depends
/// on the sort algorithm.
///
/// # Examples
///
/// ```
/// use domset_rk::decoder::rank_keys;
///
/// assert_eq!(rank_keys(&[0.7, 0.2, 0.7, 0.1]), vec![3, 1, 0, 2]);
/// ```
pub fn rank_keys(keys: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&a, &b| compare_keys(keys[a], keys[b]));
    order
}

fn compare_keys(a: f64, b: f64) -> Ordering {
    // Fold -0.0 into 0.0 so the two zeros tie and fall back to index order.
    let a = if a == 0.0 { 0.0 } else { a };
    let b = if b == 0.0 { 0.0 } else { b };
    a.total_cmp(&b)
}
