//! Ideals of the graded ring and their decision seams.
//!
//! Membership in a finitely generated ideal of an arbitrary ring is not
//! decidable from the generating set alone, so an [`Ideal`] couples its
//! finite generating set with an explicit membership predicate supplied
//! at construction. The ring supplies decision procedures; this crate
//! supplies the algorithms on top of them — the same inversion the
//! primality procedure uses for its pair oracle.
//!
//! Homogeneous ideals use the cheaper seam [`ComponentClosed`]: a
//! membership predicate on single homogeneous elements, extended to
//! arbitrary elements by component closure. That extension is the
//! canonical representation of "homogeneous ideal" here; the generator
//! and self-generation formulations are derived queries (see
//! [`Ideal::is_homogeneous`] and friends).

mod algebra;
mod homogeneity;
mod prime;

pub use algebra::{FamilyIntersection, Intersection};
pub use homogeneity::{Closure, HomogeneousIdeal};
pub use prime::{closure_pair_oracle, is_prime, Factor, PairOracle, PrimalityEngine};

use crate::coefficient::Coefficient;
use crate::element::{GradedElement, HomogeneousElement};
use crate::grading::Grading;

/// Decides membership of arbitrary graded elements in an ideal.
///
/// Implemented for any `Fn(&GradedElement<G, R>) -> bool`, so a closure
/// is a membership oracle:
///
/// ```
/// use graded::{GradedElement, Ideal};
///
/// // Multiples of the index-1 generator: every coefficient sits at
/// // index >= 1 (principal ideal (t) in integer-polynomial style).
/// let ideal = Ideal::new(
///     [GradedElement::monomial(1u32, 1i64)],
///     |x: &GradedElement<u32, i64>| x.support().all(|i| i >= 1),
/// );
/// assert!(ideal.contains(&GradedElement::monomial(3, 7)));
/// assert!(!ideal.contains(&GradedElement::one()));
/// ```
pub trait Membership<G: Grading, R: Coefficient> {
    /// Returns true if `x` is a member of the ideal.
    fn contains(&self, x: &GradedElement<G, R>) -> bool;
}

impl<G, R, F> Membership<G, R> for F
where
    G: Grading,
    R: Coefficient,
    F: Fn(&GradedElement<G, R>) -> bool,
{
    #[inline]
    fn contains(&self, x: &GradedElement<G, R>) -> bool {
        self(x)
    }
}

/// The canonical view of a homogeneous ideal: membership of homogeneous
/// elements, extended to everything by component closure.
///
/// An arbitrary element belongs to a homogeneous ideal exactly when
/// every one of its components does, so the single required method
/// determines full membership. Implemented for any
/// `Fn(&HomogeneousElement<G, R>) -> bool`.
pub trait ComponentClosed<G: Grading, R: Coefficient> {
    /// Membership of a single nonzero homogeneous element.
    fn contains_homogeneous(&self, h: &HomogeneousElement<G, R>) -> bool;

    /// Membership of an arbitrary element: all components are members.
    ///
    /// The zero element has no components and belongs to every ideal.
    fn contains(&self, x: &GradedElement<G, R>) -> bool {
        x.components().all(|c| self.contains_homogeneous(&c))
    }

    /// Returns true if the ideal contains the ring unit, i.e. is the
    /// whole ring. Over the trivial coefficient ring every ideal is.
    fn is_whole_ring(&self) -> bool {
        match HomogeneousElement::new(G::ZERO, R::one()) {
            Some(unit) => self.contains_homogeneous(&unit),
            None => true,
        }
    }
}

impl<G, R, F> ComponentClosed<G, R> for F
where
    G: Grading,
    R: Coefficient,
    F: Fn(&HomogeneousElement<G, R>) -> bool,
{
    #[inline]
    fn contains_homogeneous(&self, h: &HomogeneousElement<G, R>) -> bool {
        self(h)
    }
}

/// A full membership predicate restricted to homogeneous elements.
///
/// Bridges the two seams: an [`Ideal`]'s graded-element oracle becomes
/// the [`ComponentClosed`] oracle of its certified homogeneous form
/// (see [`Ideal::into_homogeneous`]).
#[derive(Clone, Copy, Debug)]
pub struct Restriction<M>(M);

impl<G, R, M> ComponentClosed<G, R> for Restriction<M>
where
    G: Grading,
    R: Coefficient,
    M: Membership<G, R>,
{
    fn contains_homogeneous(&self, h: &HomogeneousElement<G, R>) -> bool {
        self.0.contains(&h.lift())
    }
}

/// An ideal of the graded ring: a finite generating set plus the
/// membership decision for the ideal it generates.
///
/// The generating set is the construction witness; the membership
/// predicate is the decision procedure. Coherence between the two is a
/// caller contract, the same as the pair oracle of
/// [`PrimalityEngine`].
pub struct Ideal<G: Grading, R: Coefficient, M> {
    gens: Vec<GradedElement<G, R>>,
    members: M,
}

impl<G: Grading, R: Coefficient, M: Membership<G, R>> Ideal<G, R, M> {
    /// Builds an ideal from a generating set and its membership
    /// decision. Zero generators are dropped.
    pub fn new(gens: impl IntoIterator<Item = GradedElement<G, R>>, members: M) -> Self {
        Self {
            gens: gens.into_iter().filter(|g| !g.is_zero()).collect(),
            members,
        }
    }

    /// The generating set (zero generators removed).
    #[must_use]
    pub fn generators(&self) -> &[GradedElement<G, R>] {
        &self.gens
    }

    /// Membership of `x` in the ideal.
    #[must_use]
    pub fn contains(&self, x: &GradedElement<G, R>) -> bool {
        self.members.contains(x)
    }

    /// Returns true if the ideal contains the ring unit.
    #[must_use]
    pub fn is_whole_ring(&self) -> bool {
        self.members.contains(&GradedElement::one())
    }

    pub(crate) fn into_parts(self) -> (Vec<GradedElement<G, R>>, M) {
        (self.gens, self.members)
    }
}

impl<M> Restriction<M> {
    pub(crate) fn new(members: M) -> Self {
        Self(members)
    }
}
