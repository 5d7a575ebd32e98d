//! Scenario tests for the primality procedure.
//!
//! The main scenario is the principal homogeneous ideal (t) with
//! nonnegative integer grading and integer coefficients; the
//! leading-index selection test uses coefficients mod 6, where zero
//! divisors allow a member product with non-member factors on both
//! sides.

use std::cell::Cell;
use std::ops::{Add, Mul, Neg, Sub};

use graded::{
    closure_pair_oracle, Coefficient, Error, Factor, GradedElement, HomogeneousElement, Ideal,
    PrimalityEngine,
};

type E = GradedElement<u32, i64>;
type H = HomogeneousElement<u32, i64>;

fn in_t(h: &H) -> bool {
    h.index() >= 1
}

fn t_pair_oracle(a: &H, _b: &H) -> Factor {
    if a.index() >= 1 {
        Factor::Left
    } else {
        Factor::Right
    }
}

fn t_engine() -> PrimalityEngine<u32, i64, fn(&H) -> bool, fn(&H, &H) -> Factor> {
    PrimalityEngine::new(in_t as fn(&H) -> bool, t_pair_oracle as fn(&H, &H) -> Factor)
        .expect("(t) is a proper ideal")
}

#[test]
fn principal_ideal_is_certified_prime() {
    let engine = t_engine();

    // Pairs with product in (t): the procedure names a member factor.
    let cases = [
        (E::monomial(1, 1), E::from_terms([(0, 5), (2, 1)]), Factor::Left),
        (E::from_terms([(0, 5), (2, 1)]), E::monomial(1, 1), Factor::Right),
        (E::from_terms([(1, 2), (4, -3)]), E::from_terms([(0, 1), (1, 1)]), Factor::Left),
        (E::zero(), E::from_terms([(0, 7)]), Factor::Left),
    ];
    for (x, y, expected) in cases {
        assert_eq!(engine.locate_factor(&x, &y), Ok(expected), "{x} * {y}");
    }
}

#[test]
fn pairs_with_product_outside_are_rejected() {
    let engine = t_engine();

    // Neither factor is a multiple of t and the product is not either.
    let x = E::from_terms([(0, 1), (1, 1)]);
    let y = E::from_terms([(0, 2), (3, 1)]);
    assert_eq!(engine.locate_factor(&x, &y), Err(Error::ProductNotInIdeal));

    // Units in particular.
    assert_eq!(
        engine.locate_factor(&E::one(), &E::one()),
        Err(Error::ProductNotInIdeal)
    );
}

#[test]
fn whole_ring_is_rejected_regardless_of_oracle() {
    // A membership oracle that accepts everything makes the ideal the
    // whole ring; construction fails before any pair is examined, even
    // with a pathological pair oracle.
    let err = PrimalityEngine::new(|_: &H| true, |_: &H, _: &H| Factor::Left)
        .map(|_| ())
        .unwrap_err();
    assert_eq!(err, Error::WholeRing);
}

#[test]
fn closure_of_a_prime_stays_prime() {
    // (1 + t) is prime (evaluation at t = -1 onto the integers) but
    // not homogeneous; its homogeneous closure is the zero ideal,
    // which is again prime. The closure's pair decision is derived
    // from the underlying factor decision by lifting.
    fn eval_minus_one(x: &E) -> i64 {
        x.components()
            .map(|c| {
                let sign = if c.index() % 2 == 0 { 1 } else { -1 };
                sign * c.coefficient()
            })
            .sum()
    }

    let j = Ideal::new(
        [E::from_terms([(0, 1), (1, 1)])],
        |x: &E| eval_minus_one(x) == 0,
    );
    let decide = |x: &E, _y: &E| {
        if eval_minus_one(x) == 0 {
            Factor::Left
        } else {
            Factor::Right
        }
    };
    let engine = PrimalityEngine::new(j.homogeneous_closure(), closure_pair_oracle(decide))
        .expect("the closure of a proper ideal is proper");

    // Over an integral domain only trivial pairs multiply into the
    // zero ideal; the member factor is the zero side.
    let x = E::from_terms([(0, 1), (1, 1)]);
    assert_eq!(engine.locate_factor(&x, &E::zero()), Ok(Factor::Right));
    assert_eq!(engine.locate_factor(&E::zero(), &x), Ok(Factor::Left));

    // A nonzero product never lands in the closure, even when it lies
    // in the underlying prime.
    let y = E::from_terms([(0, 1), (1, -1)]);
    assert_eq!(engine.locate_factor(&x, &y), Err(Error::ProductNotInIdeal));
}

// =============================================================================
// Coefficients mod 6: zero divisors exercise the leading-index split
// =============================================================================

/// The ring of integers mod 6. 2 * 3 == 0, so products of nonzero
/// components can vanish.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Z6(u8);

impl Z6 {
    fn new(v: u8) -> Self {
        Self(v % 6)
    }
}

impl Add for Z6 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl Sub for Z6 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 + 6 - rhs.0)
    }
}

impl Neg for Z6 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(6 - self.0)
    }
}

impl Mul for Z6 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.0 * rhs.0)
    }
}

impl Coefficient for Z6 {
    fn zero() -> Self {
        Self(0)
    }

    fn one() -> Self {
        Self(1)
    }
}

type E6 = GradedElement<u32, Z6>;
type H6 = HomogeneousElement<u32, Z6>;

#[test]
fn leading_index_selects_the_order_maximum() {
    // Ideal: everything supported at indices >= 2 (not prime). The
    // x factor is supported on {0, 2, 5} with only the index-2
    // component inside, so its outside set is {0, 5} and the leading
    // outside index must be 5 - the order maximum, not the first
    // encountered or the densest.
    let seen = Cell::new(None);
    let oracle = |a: &H6, b: &H6| {
        seen.set(Some((a.index(), b.index())));
        Factor::Left
    };
    let engine =
        PrimalityEngine::new(|h: &H6| h.index() >= 2, oracle).expect("(t^2) is proper");

    let x = E6::from_terms([
        (0, Z6::new(2)),
        (2, Z6::new(3)),
        (5, Z6::new(2)),
    ]);
    let y = E6::from_terms([(0, Z6::new(3)), (1, Z6::new(3))]);

    // 2 * 3 == 0 mod 6 clears the low coefficients of x * y, so the
    // product is a member while both factors have outside components.
    let product = &x * &y;
    assert!(product.support().all(|i| i >= 2));

    let result = engine.locate_factor(&x, &y);
    assert_eq!(
        result,
        Err(Error::OracleContractViolation {
            reported: Factor::Left
        })
    );
    // The pair decision saw the leading outside components.
    assert_eq!(seen.get(), Some((5, 1)));
}

#[test]
fn incoherent_membership_is_detected() {
    // A membership predicate that accepts a convolution sum while
    // rejecting the summand the expansion forces into the ideal: even
    // coefficients are members, plus the single point 13 at index 6.
    // The cross term 2t * 2t^5 is absorbed (even), the target
    // component 13 t^6 of the product is accepted, so the leading
    // pair product 9 t^6 is derived to be a member - and the
    // predicate rejects it.
    let membership = |h: &H| {
        h.coefficient() % 2 == 0 || (h.index() == 6 && *h.coefficient() == 13)
    };
    let engine = PrimalityEngine::new(membership, |_: &H, _: &H| Factor::Left)
        .expect("the unit has an odd coefficient");

    let x = E::from_terms([(1, 2), (3, 3)]);
    let y = E::from_terms([(3, 3), (5, 2)]);
    // x * y = 6t^4 + 13t^6 + 6t^8, every component accepted.
    assert_eq!(
        engine.locate_factor(&x, &y),
        Err(Error::IncoherentMembership)
    );
}
