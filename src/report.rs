//! Plain-text rendering of an [`Analysis`].
//!
//! This is data formatting only: where the rendered text ends up (a terminal, a file, the
//! clipboard) is the caller's business.

use std::fmt;

use itertools::Itertools;

use crate::analysis::Analysis;

/// Renders `analysis` as a plain-text report.
///
/// # Examples
///
/// ```
/// let analysis = lindep::analyze(&[vec![1.0, 2.0], vec![2.0, 4.0]])?;
/// let text = lindep::report::render(&analysis);
/// assert!(text.contains("Rank: 1 of 2"));
/// assert!(text.contains("Linear Dependency: Dependent"));
/// # Ok::<(), lindep::AnalysisError>(())
/// ```
pub fn render(analysis: &Analysis) -> String {
    Report::new(analysis).to_string()
}

/// Wraps an [`Analysis`] in a [`fmt::Display`] impl that renders the full report.
pub struct Report<'a> {
    analysis: &'a Analysis,
}

impl<'a> Report<'a> {
    /// Creates a report over `analysis`.
    pub fn new(analysis: &'a Analysis) -> Self {
        Self { analysis }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.analysis;
        let vectors = analysis.vectors();
        let components = vectors[0].len();

        writeln!(f, "Dimension: {components}D")?;
        writeln!(f, "Number of vectors: {}", vectors.len())?;

        writeln!(f, "\nVectors:")?;
        for (i, vector) in vectors.iter().enumerate() {
            writeln!(f, "  v{} = ({})", i + 1, vector.iter().join(", "))?;
        }

        writeln!(f, "\nAnalysis Results:")?;
        writeln!(f, "  Rank: {} of {}", analysis.rank(), vectors.len())?;
        writeln!(
            f,
            "  Linear Dependency: {}",
            if analysis.is_independent() {
                "Independent"
            } else {
                "Dependent"
            }
        )?;

        if let Some(det) = analysis.determinant() {
            writeln!(f, "  Determinant: {det:.4}")?;
            writeln!(
                f,
                "  ({})",
                if analysis.determinant_is_zero() {
                    "Zero determinant indicates linear dependency."
                } else {
                    "Non-zero determinant indicates linear independence."
                }
            )?;
        }

        writeln!(f, "\nReduced Row Echelon Form:")?;
        for row in analysis.rref().row_iter() {
            writeln!(f, "  [{}]", row.iter().map(|v| format!("{v:.2}")).join(", "))?;
        }

        if let Some(dependency) = analysis.dependency() {
            writeln!(f, "\nDependency Relation:\n  {dependency}")?;
        }

        Ok(())
    }
}
