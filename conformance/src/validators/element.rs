//! Graded-element validators: projection round-trip and grading
//! respect of the convolution product.

use graded::GradedElement;

use crate::fixtures::{sample_elements, Elem};
use crate::report::{CheckResult, ConformanceReport};

/// Validates the element-level laws over the fixture spread.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();

    validate_round_trip(&mut report);
    validate_projection_totality(&mut report);
    validate_grading_respect(&mut report);
    validate_convolution_expansion(&mut report);

    report
}

/// Every element is the sum of its components; the empty support sums
/// to zero.
fn validate_round_trip(report: &mut ConformanceReport) {
    let failures: Vec<String> = sample_elements()
        .iter()
        .filter(|x| x.sum_of_components() != **x)
        .map(|x| format!("sum_of_components diverged at {x}"))
        .collect();

    if failures.is_empty() {
        report.push(CheckResult::pass(
            "element/round-trip",
            "sum_of_components is the identity on all samples",
        ));
    } else {
        report.push(CheckResult::fail_with_details(
            "element/round-trip",
            "sum_of_components diverged",
            failures,
        ));
    }

    report.check(
        "element/round-trip-zero",
        "the empty support sums to zero",
        Elem::zero().sum_of_components().is_zero(),
    );
}

/// Projection is total: indices outside the support project to zero.
fn validate_projection_totality(report: &mut ConformanceReport) {
    let ok = sample_elements().iter().all(|x| {
        (0u32..10).all(|i| {
            let p = x.project(i);
            p.is_homogeneous() && p.coefficient(i) == x.coefficient(i)
        })
    });
    report.check(
        "element/projection",
        "projection is total, homogeneous, and agrees with the coefficient",
        ok,
    );
}

/// Products of homogeneous elements are homogeneous at the summed
/// index.
fn validate_grading_respect(report: &mut ConformanceReport) {
    let pairs = [(0u32, 3i64, 2u32, -4i64), (1, 1, 1, 1), (5, 2, 0, 7)];
    let ok = pairs.iter().all(|&(i, a, j, b)| {
        let product = &Elem::monomial(i, a) * &Elem::monomial(j, b);
        product.is_homogeneous()
            && product.leading_index() == Some(i + j)
            && product.coefficient(i + j) == a * b
    });
    report.check(
        "element/grading",
        "homogeneous products land at the summed index",
        ok,
    );
}

/// Convolution agrees with the schoolbook polynomial product.
fn validate_convolution_expansion(report: &mut ConformanceReport) {
    let a = Elem::from_terms([(0, 1), (1, 1)]);
    let b = Elem::from_terms([(0, 1), (1, -1)]);
    report.check(
        "element/convolution",
        "(1 + t)(1 - t) == 1 - t^2",
        &a * &b == Elem::from_terms([(0, 1), (2, -1)]),
    );

    let c = Elem::from_terms([(1, 1), (2, 1)]);
    report.check(
        "element/convolution-squares",
        "(t + t^2)^2 == t^2 + 2t^3 + t^4",
        &c * &c == GradedElement::from_terms([(2, 1), (3, 2), (4, 1)]),
    );
}
