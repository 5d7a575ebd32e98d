//! Graded elements: finitely supported maps from indices to coefficients.
//!
//! A [`GradedElement`] stores only its nonzero components, keyed by
//! grading index in a sorted map. The sorted keys make the support
//! iteration ascending and the leading index a last-key lookup, which
//! is exactly what the leading-index membership argument consumes.
//!
//! # Invariant
//!
//! Every stored coefficient is nonzero. All constructors and arithmetic
//! normalize zero coefficients away, so extensional equality of
//! elements is plain map equality.
//!
//! # Example
//!
//! ```
//! use graded::GradedElement;
//!
//! let x = GradedElement::from_terms([(0u32, 2i64), (3, -1)]);
//! assert_eq!(x.coefficient(0), 2);
//! assert_eq!(x.coefficient(1), 0);
//! assert_eq!(x.leading_index(), Some(3));
//! assert_eq!(x.sum_of_components(), x);
//! ```

mod arith;
mod homogeneous;

pub use homogeneous::HomogeneousElement;

use std::collections::BTreeMap;
use std::fmt;

use crate::coefficient::Coefficient;
use crate::grading::Grading;

/// An element of the graded ring: a finite map from grading indices to
/// nonzero coefficients.
///
/// Addition is pointwise, multiplication is convolution (see the `Mul`
/// implementation). Values are immutable; every operation produces a
/// new element.
#[derive(Clone, PartialEq, Eq)]
pub struct GradedElement<G: Grading, R: Coefficient> {
    terms: BTreeMap<G, R>,
}

/// Serialized as a sequence of `(index, coefficient)` pairs;
/// deserialization routes through [`GradedElement::from_terms`], so
/// the nonzero-coefficient invariant survives untrusted input.
#[cfg(feature = "serde")]
mod serde_impls {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Coefficient, GradedElement, Grading};

    impl<G, R> Serialize for GradedElement<G, R>
    where
        G: Grading + Serialize,
        R: Coefficient + Serialize,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.terms.iter())
        }
    }

    impl<'de, G, R> Deserialize<'de> for GradedElement<G, R>
    where
        G: Grading + Deserialize<'de>,
        R: Coefficient + Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let terms = Vec::<(G, R)>::deserialize(deserializer)?;
            Ok(Self::from_terms(terms))
        }
    }
}

impl<G: Grading, R: Coefficient> GradedElement<G, R> {
    /// The zero element (empty support).
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    /// The multiplicative identity: the unit coefficient at index zero.
    ///
    /// In the trivial coefficient ring (`one == zero`) this is the zero
    /// element, which is also the correct unit there.
    #[must_use]
    pub fn one() -> Self {
        Self::monomial(G::ZERO, R::one())
    }

    /// A single-component element: `coeff` at `index`.
    ///
    /// A zero coefficient yields the zero element.
    ///
    /// # Example
    ///
    /// ```
    /// use graded::GradedElement;
    ///
    /// let m = GradedElement::monomial(2u32, 5i64);
    /// assert_eq!(m.support().collect::<Vec<_>>(), vec![2]);
    /// assert!(GradedElement::monomial(2u32, 0i64).is_zero());
    /// ```
    #[must_use]
    pub fn monomial(index: G, coeff: R) -> Self {
        let mut terms = BTreeMap::new();
        if !coeff.is_zero() {
            terms.insert(index, coeff);
        }
        Self { terms }
    }

    /// Builds an element from `(index, coefficient)` pairs.
    ///
    /// Duplicate indices are accumulated with ring addition; zero sums
    /// are dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use graded::GradedElement;
    ///
    /// let x = GradedElement::from_terms([(1u32, 2i64), (1, -2), (0, 7)]);
    /// assert_eq!(x, GradedElement::monomial(0, 7));
    /// ```
    #[must_use]
    pub fn from_terms(terms: impl IntoIterator<Item = (G, R)>) -> Self {
        let mut out = BTreeMap::<G, R>::new();
        for (index, coeff) in terms {
            let sum = match out.remove(&index) {
                Some(existing) => existing + coeff,
                None => coeff,
            };
            if !sum.is_zero() {
                out.insert(index, sum);
            }
        }
        Self { terms: out }
    }

    /// Returns true if this is the zero element.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of indices in the support.
    #[inline]
    #[must_use]
    pub fn support_len(&self) -> usize {
        self.terms.len()
    }

    /// Iterates the support in ascending index order.
    pub fn support(&self) -> impl Iterator<Item = G> + '_ {
        self.terms.keys().copied()
    }

    /// The coefficient at `index`, zero if the index is outside the
    /// support. Total.
    #[must_use]
    pub fn coefficient(&self, index: G) -> R {
        self.terms.get(&index).cloned().unwrap_or_else(R::zero)
    }

    /// The component at `index`, lifted back into the graded ring as a
    /// (possibly zero) homogeneous element. Total.
    ///
    /// # Example
    ///
    /// ```
    /// use graded::GradedElement;
    ///
    /// let x = GradedElement::from_terms([(0u32, 1i64), (2, 4)]);
    /// assert_eq!(x.project(2), GradedElement::monomial(2, 4));
    /// assert!(x.project(1).is_zero());
    /// ```
    #[must_use]
    pub fn project(&self, index: G) -> Self {
        Self::monomial(index, self.coefficient(index))
    }

    /// Iterates the nonzero homogeneous components in ascending index
    /// order.
    pub fn components(&self) -> impl Iterator<Item = HomogeneousElement<G, R>> + '_ {
        self.terms
            .iter()
            .map(|(&index, coeff)| HomogeneousElement::new_unchecked(index, coeff.clone()))
    }

    /// Reassembles the element as the sum of its components.
    ///
    /// This is the identity for every element; the empty support sums
    /// to zero.
    #[must_use]
    pub fn sum_of_components(&self) -> Self {
        self.components()
            .fold(Self::zero(), |acc, c| acc + c.lift())
    }

    /// The maximal index of the support, or `None` for zero.
    ///
    /// # Example
    ///
    /// ```
    /// use graded::GradedElement;
    ///
    /// let x = GradedElement::from_terms([(0u32, 1i64), (5, 2), (2, 3)]);
    /// assert_eq!(x.leading_index(), Some(5));
    /// assert_eq!(GradedElement::<u32, i64>::zero().leading_index(), None);
    /// ```
    #[must_use]
    pub fn leading_index(&self) -> Option<G> {
        self.terms.keys().next_back().copied()
    }

    /// Returns true if the support has at most one index.
    ///
    /// The zero element is homogeneous (it lies in every component).
    #[inline]
    #[must_use]
    pub fn is_homogeneous(&self) -> bool {
        self.terms.len() <= 1
    }

    /// Narrows to the `(index, coefficient)` pair of a nonzero
    /// homogeneous element.
    ///
    /// Returns `None` for the zero element and for elements supported
    /// on more than one index.
    #[must_use]
    pub fn as_homogeneous(&self) -> Option<HomogeneousElement<G, R>> {
        if self.terms.len() == 1 {
            self.components().next()
        } else {
            None
        }
    }

    pub(crate) fn terms(&self) -> &BTreeMap<G, R> {
        &self.terms
    }

    pub(crate) fn from_map(terms: BTreeMap<G, R>) -> Self {
        debug_assert!(terms.values().all(|c| !c.is_zero()));
        Self { terms }
    }
}

impl<G: Grading, R: Coefficient> Default for GradedElement<G, R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<G: Grading, R: Coefficient> fmt::Debug for GradedElement<G, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.terms.iter()).finish()
    }
}

impl<G: Grading + fmt::Display, R: Coefficient + fmt::Display> fmt::Display
    for GradedElement<G, R>
{
    /// Polynomial-style rendering, leading index first: `4*e(2) + 1*e(0)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        for (n, (index, coeff)) in self.terms.iter().rev().enumerate() {
            if n > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{coeff}*e({index})")?;
        }
        Ok(())
    }
}
