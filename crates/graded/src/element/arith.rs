//! Ring arithmetic on graded elements.
//!
//! Addition, subtraction, and negation are pointwise; multiplication is
//! the convolution product: the component of `x * y` at index `k` is
//! the sum of `x_i * y_j` over all support pairs with `i + j == k`.
//! Supports are finite, so only finitely many pairs contribute.

use std::collections::BTreeMap;
use std::ops::{Add, Mul, Neg, Sub};

use crate::coefficient::Coefficient;
use crate::grading::Grading;

use super::GradedElement;

impl<G: Grading, R: Coefficient> Add for GradedElement<G, R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut terms = self.terms;
        for (index, coeff) in rhs.terms {
            let sum = match terms.remove(&index) {
                Some(existing) => existing + coeff,
                None => coeff,
            };
            if !sum.is_zero() {
                terms.insert(index, sum);
            }
        }
        Self::from_map(terms)
    }
}

impl<G: Grading, R: Coefficient> Neg for GradedElement<G, R> {
    type Output = Self;

    fn neg(self) -> Self {
        let terms: BTreeMap<G, R> = self
            .terms
            .into_iter()
            .map(|(index, coeff)| (index, -coeff))
            .collect();
        Self::from_map(terms)
    }
}

impl<G: Grading, R: Coefficient> Sub for GradedElement<G, R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<G: Grading, R: Coefficient> Mul for &GradedElement<G, R> {
    type Output = GradedElement<G, R>;

    fn mul(self, rhs: Self) -> GradedElement<G, R> {
        let mut acc: BTreeMap<G, R> = BTreeMap::new();
        for (&i, a) in self.terms() {
            for (&j, b) in rhs.terms() {
                let target = i + j;
                let product = a.clone() * b.clone();
                let sum = match acc.remove(&target) {
                    Some(existing) => existing + product,
                    None => product,
                };
                if !sum.is_zero() {
                    acc.insert(target, sum);
                }
            }
        }
        GradedElement::from_map(acc)
    }
}

impl<G: Grading, R: Coefficient> Mul for GradedElement<G, R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type E = GradedElement<u32, i64>;

    #[test]
    fn addition_is_pointwise_with_cancellation() {
        let x = E::from_terms([(0, 1), (2, 3)]);
        let y = E::from_terms([(2, -3), (4, 5)]);
        assert_eq!(x.clone() + y, E::from_terms([(0, 1), (4, 5)]));
        assert!((x.clone() - x).is_zero());
    }

    #[test]
    fn negation_is_additive_inverse() {
        let x = E::from_terms([(1, 7), (3, -2)]);
        assert!((x.clone() + (-x)).is_zero());
    }

    #[test]
    fn convolution_matches_polynomial_product() {
        // (1 + t) * (1 - t) = 1 - t^2
        let a = E::from_terms([(0, 1), (1, 1)]);
        let b = E::from_terms([(0, 1), (1, -1)]);
        assert_eq!(&a * &b, E::from_terms([(0, 1), (2, -1)]));
    }

    #[test]
    fn homogeneous_product_lands_at_summed_index() {
        let a = E::monomial(2, 3);
        let b = E::monomial(5, -2);
        let ab = &a * &b;
        assert_eq!(ab, E::monomial(7, -6));
        assert!(ab.is_homogeneous());
    }

    #[test]
    fn zero_annihilates() {
        let x = E::from_terms([(0, 1), (3, 4)]);
        assert!((&x * &E::zero()).is_zero());
        assert_eq!(&x * &E::one(), x);
    }

    #[test]
    fn convolution_sums_all_index_pairs() {
        // (t + t^2) * (t + t^2) = t^2 + 2t^3 + t^4
        let a = E::from_terms([(1, 1), (2, 1)]);
        assert_eq!(&a * &a, E::from_terms([(2, 1), (3, 2), (4, 1)]));
    }

    #[test]
    fn distributes_over_addition() {
        let a = E::from_terms([(0, 2), (1, -1)]);
        let b = E::from_terms([(1, 3)]);
        let c = E::from_terms([(0, -4), (2, 1)]);
        let left = &a * &(b.clone() + c.clone());
        let right = (&a * &b) + (&a * &c);
        assert_eq!(left, right);
    }
}
