//! Row elimination with a feature-gated parallel implementation
//!
//! Each row below the pivot is updated independently with the same
//! arithmetic whichever path runs, so the parallel (rayon) and sequential
//! versions produce bit-identical factors. Pivot selection never happens
//! here and stays sequential.

use crate::traits::Scalar;
use ndarray::{Array1, Array2, ArrayView1, ArrayViewMut1, Axis, Zip, s};

/// Check if parallel processing is available
#[cfg(feature = "rayon")]
pub fn is_parallel_available() -> bool {
    true
}

/// Check if parallel processing is available
#[cfg(not(feature = "rayon"))]
pub fn is_parallel_available() -> bool {
    false
}

/// Subtract `multipliers[r] * U[k, ..]` from every row `k + 1 + r` of `u`.
///
/// Column `k` of the updated rows is set to exactly zero.
#[cfg(feature = "rayon")]
pub(crate) fn eliminate_below<T: Scalar>(
    u: &mut Array2<T>,
    k: usize,
    multipliers: &Array1<T>,
    parallel: bool,
) {
    let (head, mut tail) = u.view_mut().split_at(Axis(0), k + 1);
    let pivot_tail = head.row(k).slice_move(s![k + 1..]);
    let rows = Zip::from(tail.rows_mut()).and(multipliers);
    if parallel {
        rows.par_for_each(|row, &m| update_row(row, m, k, pivot_tail.view()));
    } else {
        rows.for_each(|row, &m| update_row(row, m, k, pivot_tail.view()));
    }
}

/// Subtract `multipliers[r] * U[k, ..]` from every row `k + 1 + r` of `u`.
///
/// Column `k` of the updated rows is set to exactly zero.
#[cfg(not(feature = "rayon"))]
pub(crate) fn eliminate_below<T: Scalar>(
    u: &mut Array2<T>,
    k: usize,
    multipliers: &Array1<T>,
    _parallel: bool,
) {
    let (head, mut tail) = u.view_mut().split_at(Axis(0), k + 1);
    let pivot_tail = head.row(k).slice_move(s![k + 1..]);
    Zip::from(tail.rows_mut())
        .and(multipliers)
        .for_each(|row, &m| update_row(row, m, k, pivot_tail.view()));
}

#[inline]
fn update_row<T: Scalar>(mut row: ArrayViewMut1<'_, T>, m: T, k: usize, pivot_tail: ArrayView1<'_, T>) {
    row[k] = T::zero();
    Zip::from(row.slice_mut(s![k + 1..]))
        .and(&pivot_tail)
        .for_each(|x, &p| *x -= m * p);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_eliminate_first_column() {
        let mut u = array![[2.0, 1.0, 1.0], [4.0, 3.0, 3.0], [8.0, 7.0, 9.0]];
        let multipliers = array![2.0, 4.0];
        eliminate_below(&mut u, 0, &multipliers, false);
        assert_eq!(u, array![[2.0, 1.0, 1.0], [0.0, 1.0, 1.0], [0.0, 3.0, 5.0]]);
    }

    #[test]
    fn test_last_column_is_noop() {
        let mut u = array![[1.0, 2.0], [0.0, 3.0]];
        let before = u.clone();
        eliminate_below(&mut u, 1, &Array1::zeros(0), false);
        assert_eq!(u, before);
    }

    #[test]
    fn test_parallel_flag_matches_sequential() {
        let base = Array2::from_shape_fn((6, 6), |(i, j)| ((i * 7 + j * 3) % 11) as f64 + 0.5);
        let multipliers = Array1::from_shape_fn(5, |i| 0.1 * (i as f64 + 1.0));

        let mut seq = base.clone();
        eliminate_below(&mut seq, 0, &multipliers, false);
        let mut par = base.clone();
        eliminate_below(&mut par, 0, &multipliers, true);

        assert_eq!(seq, par);
    }
}
