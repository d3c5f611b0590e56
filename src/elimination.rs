//! Gaussian elimination: rank computation and reduction to RREF.
//!
//! Both entry points work on a matrix whose *rows* are the input vectors. They clone the matrix
//! into a local working copy, mutate it freely, and never let it escape (except as the return
//! value of [`rref`]).

use nalgebra::DMatrix;

/// Magnitudes at or below this value are treated as exactly zero during pivot selection.
///
/// The same constant governs [`rank`] and [`rref`], so a vector set that is dependent up to
/// floating-point rounding (eg. an exact scalar multiple computed in `f64`) classifies the same
/// way through both.
pub const TOLERANCE: f64 = 1e-10;

/// Computes the rank of `matrix` by forward elimination with partial row selection.
///
/// For each column, the first row at or below the pivot counter whose entry exceeds
/// [`TOLERANCE`] in magnitude is swapped into pivot position, normalized, and used to eliminate
/// that column from every other row (above and below, so the working copy ends up fully
/// reduced). Columns without a usable pivot contribute nothing to the rank.
///
/// # Examples
///
/// ```
/// # use nalgebra::DMatrix;
/// let m = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
/// assert_eq!(lindep::rank(&m), 1);
/// ```
pub fn rank(matrix: &DMatrix<f64>) -> usize {
    let mut m = matrix.clone();
    let (rows, cols) = m.shape();

    let mut rank = 0;
    for col in 0..cols {
        if rank == rows {
            break;
        }

        let Some(pivot_row) = (rank..rows).find(|&row| m[(row, col)].abs() > TOLERANCE) else {
            continue;
        };

        if pivot_row != rank {
            m.swap_rows(rank, pivot_row);
        }

        let pivot = m[(rank, col)];
        for j in col..cols {
            m[(rank, j)] /= pivot;
        }

        for row in 0..rows {
            if row != rank && m[(row, col)].abs() > TOLERANCE {
                let factor = m[(row, col)];
                for j in col..cols {
                    m[(row, j)] -= factor * m[(rank, j)];
                }
            }
        }

        rank += 1;
    }

    log::trace!("rank {rank} for {rows}x{cols} matrix");
    rank
}

/// Reduces `matrix` to reduced row echelon form.
///
/// A variant of the same elimination as [`rank`] that returns the transformed matrix instead of
/// a pivot count. It tracks a lead-column pointer per row; when the pointer exhausts the columns
/// while searching for a usable pivot, the reduction stops and the matrix is returned as-is,
/// leaving any rows below that point untouched. For well-conditioned inputs the result is true
/// RREF: every pivot is 1 and is the only non-zero entry in its column.
pub fn rref(matrix: &DMatrix<f64>) -> DMatrix<f64> {
    let mut m = matrix.clone();
    let (rows, cols) = m.shape();

    let mut lead = 0;
    for r in 0..rows {
        if lead >= cols {
            break;
        }

        let mut i = r;
        while m[(i, lead)].abs() < TOLERANCE {
            i += 1;
            if i == rows {
                i = r;
                lead += 1;
                if lead == cols {
                    return m;
                }
            }
        }

        m.swap_rows(r, i);

        let val = m[(r, lead)];
        for j in 0..cols {
            m[(r, j)] /= val;
        }

        for i in 0..rows {
            if i != r {
                let val = m[(i, lead)];
                for j in 0..cols {
                    m[(i, j)] -= val * m[(r, j)];
                }
            }
        }

        lead += 1;
    }

    m
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn mat(rows: &[&[f64]]) -> DMatrix<f64> {
        DMatrix::from_fn(rows.len(), rows[0].len(), |r, c| rows[r][c])
    }

    #[test]
    fn rank_of_bases() {
        assert_eq!(rank(&DMatrix::identity(2, 2)), 2);
        assert_eq!(rank(&DMatrix::identity(3, 3)), 3);
    }

    #[test]
    fn rank_of_multiples() {
        assert_eq!(rank(&mat(&[&[1.0, 2.0], &[2.0, 4.0]])), 1);
        assert_eq!(
            rank(&mat(&[
                &[1.0, 2.0, 3.0],
                &[2.0, 4.0, 6.0],
                &[3.0, 6.0, 9.0],
            ])),
            1
        );
    }

    #[test]
    fn rank_of_single_vector() {
        assert_eq!(rank(&mat(&[&[0.0, 0.0, 0.0]])), 0);
        assert_eq!(rank(&mat(&[&[0.0, 0.5, 0.0]])), 1);
    }

    #[test]
    fn rank_more_rows_than_columns() {
        // 3 vectors in the plane can never be independent.
        let m = mat(&[&[1.0, 0.0], &[0.0, 1.0], &[3.0, -2.0]]);
        assert_eq!(rank(&m), 2);
    }

    #[test]
    fn rank_within_tolerance_is_dependent() {
        let m = mat(&[&[1.0, 2.0], &[2.0, 4.0 + 5e-11]]);
        assert_eq!(rank(&m), 1);

        // Well above the tolerance the perturbed row counts as its own direction again.
        let m = mat(&[&[1.0, 2.0], &[2.0, 4.0 + 1e-6]]);
        assert_eq!(rank(&m), 2);
    }

    #[test]
    fn rank_is_bounded() {
        let mut rng = fastrand::Rng::with_seed(0x7b10a2d5192c4e60);
        for _ in 0..100 {
            let rows = rng.usize(1..=5);
            let cols = rng.usize(2..=3);
            let m = DMatrix::from_fn(rows, cols, |_, _| rng.f64() * 8.0 - 4.0);
            let rank = rank(&m);
            assert!(rank <= rows.min(cols), "rank {rank} of {rows}x{cols}");
        }
    }

    #[test]
    fn rref_of_identity() {
        let id = DMatrix::<f64>::identity(3, 3);
        assert_eq!(rref(&id), id);
    }

    #[test]
    fn rref_of_dependent_pair() {
        let m = mat(&[&[1.0, 2.0], &[2.0, 4.0]]);
        assert_relative_eq!(rref(&m), mat(&[&[1.0, 2.0], &[0.0, 0.0]]));
    }

    #[test]
    fn rref_normalizes_and_clears_columns() {
        let m = mat(&[&[0.0, 2.0, 4.0], &[3.0, 0.0, 3.0], &[0.0, 0.0, 5.0]]);
        assert_relative_eq!(rref(&m), DMatrix::identity(3, 3));
    }

    #[test]
    fn rref_early_exit_on_exhausted_columns() {
        // Column 1 has no pivot, so the lead pointer skips ahead before the first row is placed.
        let m = mat(&[&[0.0, 1.0], &[0.0, 2.0], &[0.0, 3.0]]);
        assert_relative_eq!(
            rref(&m),
            mat(&[&[0.0, 1.0], &[0.0, 0.0], &[0.0, 0.0]])
        );

        // The lead pointer runs off the end while searching a pivot for the second row, returning
        // the matrix mid-reduction.
        let m = mat(&[&[1.0, 2.0], &[3.0, 6.0]]);
        assert_relative_eq!(rref(&m), mat(&[&[1.0, 2.0], &[0.0, 0.0]]));
    }

    #[test]
    fn rref_is_idempotent() {
        let mut rng = fastrand::Rng::with_seed(0x3024b6663d843ca2);
        for _ in 0..100 {
            let rows = rng.usize(1..=5);
            let cols = rng.usize(2..=3);
            let m = DMatrix::from_fn(rows, cols, |_, _| rng.f64() * 8.0 - 4.0);
            let once = rref(&m);
            let twice = rref(&once);
            assert_relative_eq!(once, twice, epsilon = 1e-8);
        }
    }
}
