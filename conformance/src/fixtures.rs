//! Fixture scenarios for the conformance validators.
//!
//! The reference ring is integer-polynomial style: nonnegative integer
//! grading with `i64` coefficients. A second coefficient ring, the
//! integers mod 6, supplies zero divisors for the scenarios that need
//! a member product with non-member factors on both sides.

use std::ops::{Add, Mul, Neg, Sub};

use graded::{Coefficient, GradedElement, HomogeneousElement};

/// Reference graded element: `u32` grading, integer coefficients.
pub type Elem = GradedElement<u32, i64>;
/// Reference homogeneous element.
pub type Hom = HomogeneousElement<u32, i64>;

/// Membership in the principal ideal generated at `index`: every
/// support index at least `index`.
pub fn in_power(index: u32) -> impl Fn(&Elem) -> bool + Copy {
    move |x: &Elem| x.support().all(|i| i >= index)
}

/// Homogeneous-membership form of [`in_power`].
pub fn hom_in_power(index: u32) -> impl Fn(&Hom) -> bool + Copy {
    move |h: &Hom| h.index() >= index
}

/// Membership in the mixed principal ideal (1 + t): evaluation at
/// t = -1 vanishes.
pub fn in_one_plus_t(x: &Elem) -> bool {
    x.components()
        .map(|c| {
            let sign = if c.index() % 2 == 0 { 1 } else { -1 };
            sign * c.coefficient()
        })
        .sum::<i64>()
        == 0
}

/// A spread of sample elements: zero, monomials, and mixed supports.
pub fn sample_elements() -> Vec<Elem> {
    vec![
        Elem::zero(),
        Elem::one(),
        Elem::monomial(1, 1),
        Elem::monomial(4, -7),
        Elem::from_terms([(0, 2), (2, -3), (5, 1)]),
        Elem::from_terms([(1, 4), (2, 4), (3, 4)]),
        Elem::from_terms([(0, -1), (7, 1)]),
    ]
}

/// The integers mod 6, the smallest ring with zero divisors that is
/// not a prime-power quotient: 2 * 3 == 0.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Z6(u8);

impl Z6 {
    /// Builds the residue of `v` mod 6.
    pub fn new(v: u8) -> Self {
        Self(v % 6)
    }

    /// The residue value in `0..6`.
    pub fn value(self) -> u8 {
        self.0
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

/// Graded element over the mod-6 coefficients.
pub type Elem6 = GradedElement<u32, Z6>;
/// Homogeneous element over the mod-6 coefficients.
pub type Hom6 = HomogeneousElement<u32, Z6>;
