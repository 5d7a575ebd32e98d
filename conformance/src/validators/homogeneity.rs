//! Homogeneity validators: the three formulations agree and the
//! homogeneous closure behaves as an interior operator.

use graded::{ComponentClosed, Ideal};

use crate::fixtures::{in_one_plus_t, in_power, sample_elements, Elem};
use crate::report::{CheckResult, ConformanceReport};

/// Validates the homogeneity formulations over the fixture ideals.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();

    validate_forms_agree(&mut report);
    validate_closure_containment(&mut report);
    validate_closure_fixed_points(&mut report);

    report
}

/// Generator, self-generation, and component-closure forms give the
/// same verdict on every fixture ideal.
fn validate_forms_agree(report: &mut ConformanceReport) {
    let mut failures = Vec::new();

    for n in 0..4u32 {
        let ideal = Ideal::new([Elem::monomial(n, 1)], in_power(n));
        let verdicts = (
            ideal.has_homogeneous_generators(),
            ideal.is_self_generated(),
            ideal.is_component_closed(),
        );
        if verdicts != (true, true, true) {
            failures.push(format!("(t^{n}) expected all-true, got {verdicts:?}"));
        }
    }

    let mixed = Ideal::new([Elem::from_terms([(0, 1), (1, 1)])], in_one_plus_t);
    let verdicts = (
        mixed.has_homogeneous_generators(),
        mixed.is_self_generated(),
        mixed.is_component_closed(),
    );
    if verdicts != (false, false, false) {
        failures.push(format!("(1 + t) expected all-false, got {verdicts:?}"));
    }

    if failures.is_empty() {
        report.push(CheckResult::pass(
            "homogeneity/equivalence",
            "the three formulations agree on all fixture ideals",
        ));
    } else {
        report.push(CheckResult::fail_with_details(
            "homogeneity/equivalence",
            "formulations disagree",
            failures,
        ));
    }
}

/// The closure is contained in the ideal on every sample element.
fn validate_closure_containment(report: &mut ConformanceReport) {
    let mixed = Ideal::new([Elem::from_terms([(0, 1), (1, 1)])], in_one_plus_t);
    let closure = mixed.homogeneous_closure();

    let ok = sample_elements()
        .iter()
        .all(|x| !closure.contains(x) || mixed.contains(x));
    report.check(
        "homogeneity/closure-containment",
        "every closure member is an ideal member",
        ok,
    );
}

/// The closure fixes homogeneous ideals and strictly shrinks mixed
/// ones.
fn validate_closure_fixed_points(report: &mut ConformanceReport) {
    let principal = Ideal::new([Elem::monomial(2, 1)], in_power(2));
    let closure = principal.homogeneous_closure();
    let fixed = sample_elements()
        .iter()
        .all(|x| closure.contains(x) == principal.contains(x));
    report.check(
        "homogeneity/closure-fixed-point",
        "the closure of a homogeneous ideal is the ideal",
        fixed,
    );

    let mixed = Ideal::new([Elem::from_terms([(0, 1), (1, 1)])], in_one_plus_t);
    let generator = Elem::from_terms([(0, 1), (1, 1)]);
    report.check(
        "homogeneity/closure-shrinks-mixed",
        "the closure of (1 + t) excludes its generator",
        mixed.contains(&generator) && !mixed.homogeneous_closure().contains(&generator),
    );
}
