//! The analysis entry point and its result record.

use std::fmt;

use nalgebra::DMatrix;

use crate::{
    determinant::{det2, det3},
    elimination::{self, TOLERANCE},
    error::AnalysisError,
    report,
};

/// Analyzes a set of vectors for linear dependence.
///
/// The vectors are stacked as the rows of a matrix, which is then ranked and reduced. The set
/// counts as independent when its rank equals the number of vectors. For square sets (2 vectors
/// of 2 components, or 3 of 3) the determinant is computed as well; for every other shape it is
/// simply absent.
///
/// This is a pure function: the input is copied into the returned [`Analysis`] and no state is
/// kept between calls.
///
/// # Errors
///
/// The set is rejected without computing anything if it is empty, if the vectors disagree on
/// their component count, or if every component of every vector is zero. See [`AnalysisError`].
///
/// # Examples
///
/// ```
/// let analysis = lindep::analyze(&[vec![1.0, 0.0], vec![0.0, 1.0]])?;
/// assert!(analysis.is_independent());
/// assert_eq!(analysis.determinant(), Some(1.0));
/// assert_eq!(analysis.dependency(), None);
/// # Ok::<(), lindep::AnalysisError>(())
/// ```
pub fn analyze(vectors: &[Vec<f64>]) -> Result<Analysis, AnalysisError> {
    validate(vectors)?;

    let rows = vectors.len();
    let cols = vectors[0].len();
    let matrix = DMatrix::from_fn(rows, cols, |r, c| vectors[r][c]);

    let rank = elimination::rank(&matrix);
    let is_independent = rank == rows;

    let determinant = match (rows, cols) {
        (2, 2) => Some(det2(&vectors[0], &vectors[1])),
        (3, 3) => Some(det3(&vectors[0], &vectors[1], &vectors[2])),
        _ => None,
    };

    let rref = elimination::rref(&matrix);

    let dependency = (!is_independent).then(|| dependency_summary(rows, rank));

    log::trace!(
        "analyzed {rows} vector(s) of {cols} component(s): rank {rank}, determinant {determinant:?}"
    );

    Ok(Analysis {
        vectors: vectors.to_vec(),
        rank,
        is_independent,
        determinant,
        rref,
        dependency,
    })
}

fn validate(vectors: &[Vec<f64>]) -> Result<(), AnalysisError> {
    let Some(first) = vectors.first() else {
        return Err(AnalysisError::Empty);
    };

    for (index, vector) in vectors.iter().enumerate() {
        if vector.len() != first.len() {
            return Err(AnalysisError::DimensionMismatch {
                index,
                expected: first.len(),
                found: vector.len(),
            });
        }
    }

    let all_zero = vectors.iter().flatten().all(|&c| c == 0.0);
    if all_zero {
        return Err(AnalysisError::ZeroVectorSet);
    }

    Ok(())
}

/// Summarizes a rank deficiency in one sentence.
///
/// This deliberately does not solve for the actual combination coefficients; it only counts how
/// many vectors are redundant.
fn dependency_summary(count: usize, rank: usize) -> String {
    format!(
        "At least {} vector(s) can be expressed as a linear combination of the others.",
        count - rank
    )
}

/// Result of analyzing a vector set, as returned by [`analyze`].
///
/// Owned by the caller and never mutated after creation. The [`fmt::Display`] impl renders the
/// same plain-text report as [`report::render`].
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    vectors: Vec<Vec<f64>>,
    rank: usize,
    is_independent: bool,
    determinant: Option<f64>,
    rref: DMatrix<f64>,
    dependency: Option<String>,
}

impl Analysis {
    /// Returns the analyzed vectors, in input order.
    #[inline]
    pub fn vectors(&self) -> &[Vec<f64>] {
        &self.vectors
    }

    /// Returns the rank of the matrix formed by the vectors: the number of linearly independent
    /// vectors in the set.
    #[inline]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Returns whether the set is linearly independent, ie. whether [`rank`][Self::rank] equals
    /// the number of vectors.
    #[inline]
    pub fn is_independent(&self) -> bool {
        self.is_independent
    }

    /// Returns the determinant of the square system, or [`None`] when the set isn't 2 vectors of
    /// 2 components or 3 vectors of 3 components.
    ///
    /// A determinant within [`TOLERANCE`] of zero indicates linear dependence.
    #[inline]
    pub fn determinant(&self) -> Option<f64> {
        self.determinant
    }

    /// Returns whether the determinant is present and within [`TOLERANCE`] of zero.
    #[inline]
    pub fn determinant_is_zero(&self) -> bool {
        matches!(self.determinant, Some(det) if det.abs() < TOLERANCE)
    }

    /// Returns the reduced row echelon form of the matrix formed by stacking the vectors as
    /// rows.
    #[inline]
    pub fn rref(&self) -> &DMatrix<f64> {
        &self.rref
    }

    /// Returns a one-sentence summary of the dependency, or [`None`] when the set is
    /// independent.
    #[inline]
    pub fn dependency(&self) -> Option<&str> {
        self.dependency.as_deref()
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&report::Report::new(self), f)
    }
}
