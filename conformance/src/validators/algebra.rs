//! Ideal-algebra validators: witness constructions for sum and
//! product, derived intersections, and the radical bound.

use graded::{
    ComponentClosed, Error, FamilyIntersection, HomogeneousElement, HomogeneousIdeal,
};

use crate::fixtures::{hom_in_power, Elem, Hom};
use crate::report::ConformanceReport;

fn principal(n: u32) -> HomogeneousIdeal<u32, i64, impl Fn(&Hom) -> bool + Copy> {
    HomogeneousIdeal::new(
        HomogeneousElement::new(n, 1).into_iter(),
        hom_in_power(n),
    )
}

/// Validates the algebra operations over principal fixture ideals.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();

    validate_sup(&mut report);
    validate_product(&mut report);
    validate_inf(&mut report);
    validate_family(&mut report);
    validate_radical_bound(&mut report);

    report
}

fn validate_sup(report: &mut ConformanceReport) {
    let t1 = principal(1);
    let t2 = principal(2);
    let gens = t1.sup_generators(&t2);
    report.check(
        "algebra/sup-witness",
        "the join witness is the union of the generating sets",
        gens.len() == 2 && gens.iter().all(|g| g.index() == 1 || g.index() == 2),
    );

    let joined = t1.sup(&t2, hom_in_power(1));
    let homogeneous = [Elem::monomial(1, 3), Elem::from_terms([(1, 1), (4, 2)])]
        .iter()
        .all(|x| {
            !joined.contains(x) || x.components().all(|c| joined.contains_homogeneous(&c))
        });
    report.check(
        "algebra/sup-homogeneous",
        "the join is component-closed on samples",
        homogeneous,
    );
}

fn validate_product(report: &mut ConformanceReport) {
    let t1 = principal(1);
    let t2 = principal(2);
    let gens = t1.product_generators(&t2);
    let expected: Vec<Hom> = HomogeneousElement::new(3, 1).into_iter().collect();
    report.check(
        "algebra/product-witness",
        "the product witness is the set of pairwise generator products",
        gens == expected,
    );

    let product = t1.product(&t2, hom_in_power(3));
    report.check(
        "algebra/product-membership",
        "the product ideal sits below both operands",
        product.contains(&Elem::monomial(3, 5)) && !product.contains(&Elem::monomial(2, 5)),
    );
}

fn validate_inf(report: &mut ConformanceReport) {
    let t1 = principal(1);
    let t2 = principal(2);
    let both = t1.inf(&t2);

    let member = Elem::from_terms([(2, 3), (5, 7)]);
    let closed = both.contains(&member)
        && member
            .components()
            .all(|c| both.contains_homogeneous(&c));
    report.check(
        "algebra/inf",
        "the meet is the common refinement and is component-closed",
        closed && !both.contains(&Elem::monomial(1, 1)),
    );
}

fn validate_family(report: &mut ConformanceReport) {
    let t1 = principal(1);
    let t2 = principal(2);
    let t3 = principal(3);
    let family = FamilyIntersection::new(vec![&t1, &t2, &t3]);
    report.check(
        "algebra/family-intersection",
        "an element lies in the family meet iff it lies in every member",
        family.contains(&Elem::monomial(3, 1)) && !family.contains(&Elem::monomial(2, 1)),
    );

    let empty = FamilyIntersection::<u32, i64>::new(Vec::new());
    report.check(
        "algebra/family-empty",
        "the empty family intersects to the whole ring",
        empty.is_whole_ring(),
    );
}

fn validate_radical_bound(report: &mut ConformanceReport) {
    let square = principal(2);
    let line = principal(1);

    let bound = square.radical_upper_bound(vec![&line]);
    report.check(
        "algebra/radical-bound",
        "the radical bound over {(t)} contains t above (t^2)",
        bound.is_ok_and(|b| b.contains(&Elem::monomial(1, 1))),
    );

    let gap = line.radical_upper_bound(vec![&square]);
    report.check(
        "algebra/radical-gap",
        "a candidate that omits the ideal is rejected with its position",
        matches!(
            gap,
            Err(Error::RadicalFamilyGap {
                member: 0,
                generator: 0,
            })
        ),
    );
}
