//! Linear dependence analysis for small vector sets.
//!
//! Given an ordered set of equal-length vectors (2 or 3 components in the applications this was
//! written for, though the algorithms are dimension-agnostic), this library determines whether
//! the set is linearly independent and reports:
//!
//! - the rank of the matrix formed by stacking the vectors as rows,
//! - the determinant, when the set is square (2 vectors of 2 components, or 3 of 3),
//! - the reduced row echelon form (RREF) of that matrix,
//! - a human-readable summary of the dependency, when the set is dependent.
//!
//! # Goals & Non-Goals
//!
//! - Stay a pure computation library: every call is independent and reentrant, there is no
//!   shared state, no caching, and no I/O. Rendering the results (plots, HTML, files) is the
//!   caller's business; [`report`] only produces plain text.
//! - Handle the near-degenerate inputs that show up in practice: a vector set that is an exact
//!   scalar multiple up to floating-point rounding must still classify as dependent. A fixed
//!   tolerance of `1e-10` governs pivot selection everywhere.
//! - Don't support arbitrary-dimension determinants or exact/symbolic arithmetic. Inputs are at
//!   most a handful of short vectors; nothing here is optimized and nothing needs to be.
//!
//! # Examples
//!
//! ```
//! let analysis = lindep::analyze(&[vec![1.0, 2.0], vec![2.0, 4.0]])?;
//! assert_eq!(analysis.rank(), 1);
//! assert!(!analysis.is_independent());
//! assert_eq!(analysis.determinant(), Some(0.0));
//! # Ok::<(), lindep::AnalysisError>(())
//! ```

use log::LevelFilter;

mod analysis;
mod determinant;
mod elimination;
mod error;
pub mod report;

pub use analysis::{analyze, Analysis};
pub use determinant::{det2, det3};
pub use elimination::{rank, rref, TOLERANCE};
pub use error::AnalysisError;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and this library will log at *debug* level; `RUST_LOG` overrides apply on
/// top of that.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
