//! Conformance suite for the `graded` crate.
//!
//! Runs every algebraic law the crate is specified against as an
//! executable validator over concrete fixture scenarios and aggregates
//! the outcomes into a structured, serializable report.
//!
//! # Conformance Scope
//!
//! | Area | Laws |
//! |------|------|
//! | Elements | component round-trip, total projection, grading respect |
//! | Homogeneity | three-formulation equivalence, closure containment and fixed points |
//! | Algebra | sup/product witnesses, derived meets, radical bound |
//! | Primality | principal scenario, boundary preconditions, leading-index selection |
//!
//! # Entry Point
//!
//! ```
//! let report = graded_conformance::run_all();
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod fixtures;
pub mod report;
pub mod validators;

use std::path::Path;

use anyhow::Context;

pub use report::{CheckResult, ConformanceReport, Severity};

/// Runs all validators and returns the aggregated report.
///
/// Validators run in dependency order: elements first, then
/// homogeneity, the ideal algebra, and the primality procedure.
#[must_use]
pub fn run_all() -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.extend(validators::element::validate());
    report.extend(validators::homogeneity::validate());
    report.extend(validators::algebra::validate());
    report.extend(validators::primality::validate());
    report
}

/// Runs all validators and writes the JSON report to `path`.
///
/// # Errors
///
/// Returns an error when the report cannot be serialized or the file
/// cannot be written.
pub fn write_report(path: &Path) -> anyhow::Result<ConformanceReport> {
    let report = run_all();
    let json = report
        .to_json()
        .context("failed to serialize the conformance report")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(report)
}
