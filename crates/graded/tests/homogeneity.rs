//! Scenario tests for the three homogeneity formulations and the
//! homogeneous closure, over integer-polynomial-style rings.

use graded::{ComponentClosed, GradedElement, HomogeneousElement, Ideal};

type E = GradedElement<u32, i64>;
type H = HomogeneousElement<u32, i64>;

/// Membership in the principal ideal (t^n): support at indices >= n.
fn in_power(n: u32) -> impl Fn(&E) -> bool {
    move |x: &E| x.support().all(|i| i >= n)
}

/// Membership in (1 + t): evaluation at t = -1 vanishes.
fn in_one_plus_t(x: &E) -> bool {
    x.components()
        .map(|c| {
            let sign = if c.index() % 2 == 0 { 1 } else { -1 };
            sign * c.coefficient()
        })
        .sum::<i64>()
        == 0
}

/// Membership in (3): every coefficient divisible by three.
fn in_three(x: &E) -> bool {
    x.components().all(|c| c.coefficient() % 3 == 0)
}

#[test]
fn three_forms_agree_on_homogeneous_scenarios() {
    for n in 0..4 {
        let ideal = Ideal::new([E::monomial(n, 1)], in_power(n));
        assert!(ideal.has_homogeneous_generators(), "(t^{n}) generator form");
        assert!(ideal.is_component_closed(), "(t^{n}) component closure");
        assert!(ideal.is_self_generated(), "(t^{n}) self generation");
        assert!(ideal.is_homogeneous());
    }

    // (3) is homogeneous with a degree-zero generator.
    let three = Ideal::new([E::monomial(0, 3)], in_three);
    assert!(three.has_homogeneous_generators());
    assert!(three.is_component_closed());
    assert!(three.is_self_generated());
}

#[test]
fn three_forms_agree_on_mixed_scenarios() {
    let mixed = Ideal::new([E::from_terms([(0, 1), (1, 1)])], in_one_plus_t);
    assert!(!mixed.has_homogeneous_generators());
    assert!(!mixed.is_component_closed());
    assert!(!mixed.is_self_generated());
    assert!(!mixed.is_homogeneous());
}

#[test]
fn component_closure_holds_for_arbitrary_members_not_just_generators() {
    // Generators witness the check; the property extends to members
    // assembled from them by ring combinations.
    let ideal = Ideal::new([E::monomial(1, 1)], in_power(1));
    let member = &E::from_terms([(0, 4), (2, -1)]) * &E::monomial(1, 3);
    assert!(ideal.contains(&member));
    for c in member.components() {
        assert!(ideal.contains(&c.lift()));
    }
}

#[test]
fn closure_is_contained_in_the_ideal() {
    // For the mixed ideal (1 + t) the closure collapses to zero; in
    // particular every closure member is an ideal member.
    let mixed = Ideal::new([E::from_terms([(0, 1), (1, 1)])], in_one_plus_t);
    let closure = mixed.homogeneous_closure();

    let candidates = [
        E::zero(),
        E::monomial(0, 1),
        E::monomial(1, -1),
        E::from_terms([(0, 2), (1, 2)]),
        E::from_terms([(0, 1), (1, 1)]),
    ];
    for x in &candidates {
        if closure.contains(x) {
            assert!(mixed.contains(x), "closure member escaped the ideal: {x}");
        }
    }
    assert!(closure.contains(&E::zero()));
    assert!(!closure.contains(&E::from_terms([(0, 1), (1, 1)])));
}

#[test]
fn closure_fixes_exactly_the_homogeneous_ideals() {
    // Homogeneous: closure membership coincides with membership.
    let principal = Ideal::new([E::monomial(2, 1)], in_power(2));
    let closure = principal.homogeneous_closure();
    let samples = [
        E::zero(),
        E::monomial(1, 1),
        E::monomial(2, 5),
        E::from_terms([(2, 1), (7, -2)]),
        E::from_terms([(0, 1), (2, 1)]),
    ];
    for x in &samples {
        assert_eq!(closure.contains(x), principal.contains(x), "at {x}");
    }

    // Mixed: the closure is strictly smaller.
    let mixed = Ideal::new([E::from_terms([(0, 1), (1, 1)])], in_one_plus_t);
    let gen = E::from_terms([(0, 1), (1, 1)]);
    assert!(mixed.contains(&gen));
    assert!(!mixed.homogeneous_closure().contains(&gen));
}

#[test]
fn closure_agrees_with_the_ideal_on_homogeneous_elements() {
    let three = Ideal::new([E::monomial(0, 3)], in_three);
    let closure = three.homogeneous_closure();
    for h in [H::new(0, 3).unwrap(), H::new(4, 6).unwrap(), H::new(2, 2).unwrap()] {
        assert_eq!(
            closure.contains_homogeneous(&h),
            three.contains(&h.lift())
        );
    }
}

#[test]
fn closure_seeds_generate_for_homogeneous_ideals() {
    let ideal = Ideal::new([E::from_terms([(1, 2), (3, 5)])], in_power(1));
    // The generator is mixed but the ideal is homogeneous; both
    // components are members and appear among the seeds.
    assert!(ideal.is_component_closed());
    let seeds = ideal.homogeneous_closure().seed_generators();
    assert_eq!(
        seeds,
        vec![H::new(1, 2).unwrap(), H::new(3, 5).unwrap()]
    );
}
