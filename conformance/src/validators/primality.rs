//! Primality validators: the principal-ideal scenario, the boundary
//! preconditions, and leading-index selection.

use std::cell::Cell;

use graded::{Error, Factor, PrimalityEngine};

use crate::fixtures::{Elem, Elem6, Hom, Hom6, Z6};
use crate::report::ConformanceReport;

/// Validates the primality procedure over the fixture scenarios.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();

    validate_principal_scenario(&mut report);
    validate_product_precondition(&mut report);
    validate_whole_ring_boundary(&mut report);
    validate_leading_index_selection(&mut report);

    report
}

fn t_engine() -> Result<PrimalityEngine<u32, i64, fn(&Hom) -> bool, fn(&Hom, &Hom) -> Factor>, Error>
{
    fn members(h: &Hom) -> bool {
        h.index() >= 1
    }
    fn pair(a: &Hom, _b: &Hom) -> Factor {
        if a.index() >= 1 {
            Factor::Left
        } else {
            Factor::Right
        }
    }
    PrimalityEngine::new(members as fn(&Hom) -> bool, pair as fn(&Hom, &Hom) -> Factor)
}

/// The ideal (t) with a correct pair decision: factor location names
/// the member side for arbitrary mixed factors.
fn validate_principal_scenario(report: &mut ConformanceReport) {
    let Ok(engine) = t_engine() else {
        report.check("primality/engine", "(t) must construct", false);
        return;
    };

    let left = engine.locate_factor(
        &Elem::from_terms([(1, 2), (3, 1)]),
        &Elem::from_terms([(0, 5), (2, -1)]),
    );
    let right = engine.locate_factor(
        &Elem::from_terms([(0, 5), (2, -1)]),
        &Elem::monomial(1, 1),
    );
    report.check(
        "primality/principal",
        "factor location names the member side of (t)-pairs",
        left == Ok(Factor::Left) && right == Ok(Factor::Right),
    );
}

/// Pairs whose product lies outside the ideal are rejected.
fn validate_product_precondition(report: &mut ConformanceReport) {
    let Ok(engine) = t_engine() else {
        report.check("primality/engine", "(t) must construct", false);
        return;
    };
    let outcome = engine.locate_factor(
        &Elem::from_terms([(0, 1), (1, 1)]),
        &Elem::from_terms([(0, 2), (3, 1)]),
    );
    report.check(
        "primality/product-precondition",
        "a product outside the ideal is rejected",
        outcome == Err(Error::ProductNotInIdeal),
    );
}

/// The whole ring is rejected at construction, before any pair is
/// examined.
fn validate_whole_ring_boundary(report: &mut ConformanceReport) {
    let outcome =
        PrimalityEngine::new(|_: &Hom| true, |_: &Hom, _: &Hom| Factor::Left).map(|_| ());
    report.check(
        "primality/whole-ring",
        "the whole ring is rejected regardless of the pair oracle",
        outcome == Err(Error::WholeRing),
    );
}

/// With support {0, 2, 5} and only the index-2 component inside, the
/// leading outside index is 5 - the order maximum. Zero divisors mod 6
/// make the product a member while both factors keep outside
/// components, so the pair decision observes the selected indices.
fn validate_leading_index_selection(report: &mut ConformanceReport) {
    let seen = Cell::new(None);
    let oracle = |a: &Hom6, b: &Hom6| {
        seen.set(Some((a.index(), b.index())));
        Factor::Left
    };
    let engine = PrimalityEngine::new(|h: &Hom6| h.index() >= 2, oracle);
    let Ok(engine) = engine else {
        report.check("primality/leading-index", "(t^2) mod 6 must construct", false);
        return;
    };

    let x = Elem6::from_terms([(0, Z6::new(2)), (2, Z6::new(3)), (5, Z6::new(2))]);
    let y = Elem6::from_terms([(0, Z6::new(3)), (1, Z6::new(3))]);
    let outcome = engine.locate_factor(&x, &y);

    report.check(
        "primality/leading-index",
        "the procedure selects the maximal outside indices (5, 1)",
        outcome
            == Err(Error::OracleContractViolation {
                reported: Factor::Left,
            })
            && seen.get() == Some((5, 1)),
    );
}
