//! Lattice and ring operations on homogeneous ideals.
//!
//! Sum and product have explicit witness generating sets built from the
//! operands' generators; intersection does not (it is not expressible
//! from the operand witnesses) and is represented canonically by its
//! component-closed membership instead. The radical is a specification
//! form over caller-supplied candidate primes, never an enumeration.

use crate::coefficient::Coefficient;
use crate::element::HomogeneousElement;
use crate::error::Error;
use crate::grading::Grading;

use super::{ComponentClosed, HomogeneousIdeal};

impl<G: Grading, R: Coefficient, M: ComponentClosed<G, R>> HomogeneousIdeal<G, R, M> {
    /// Witness generators of the smallest ideal containing both
    /// operands: the union of the two generating sets.
    #[must_use]
    pub fn sup_generators<M2: ComponentClosed<G, R>>(
        &self,
        other: &HomogeneousIdeal<G, R, M2>,
    ) -> Vec<HomogeneousElement<G, R>> {
        let mut gens = self.generators().to_vec();
        gens.extend_from_slice(other.generators());
        gens
    }

    /// The smallest homogeneous ideal containing both operands, with
    /// the union witness set and a caller-supplied membership decision
    /// for the joined ideal.
    ///
    /// Sum membership is not derivable from the operands' decisions
    /// (it quantifies over decompositions), so the decision is an
    /// explicit argument, exactly as at construction.
    pub fn sup<M2, N>(
        &self,
        other: &HomogeneousIdeal<G, R, M2>,
        members: N,
    ) -> HomogeneousIdeal<G, R, N>
    where
        M2: ComponentClosed<G, R>,
        N: ComponentClosed<G, R>,
    {
        HomogeneousIdeal::new(self.sup_generators(other), members)
    }

    /// Witness generators of the ideal product: all pairwise generator
    /// products. Each is homogeneous at the summed index; pairs whose
    /// coefficient product vanishes contribute nothing.
    #[must_use]
    pub fn product_generators<M2: ComponentClosed<G, R>>(
        &self,
        other: &HomogeneousIdeal<G, R, M2>,
    ) -> Vec<HomogeneousElement<G, R>> {
        self.generators()
            .iter()
            .flat_map(|s| other.generators().iter().filter_map(|t| s.mul(t)))
            .collect()
    }

    /// The product ideal, with the pairwise witness set and a
    /// caller-supplied membership decision.
    pub fn product<M2, N>(
        &self,
        other: &HomogeneousIdeal<G, R, M2>,
        members: N,
    ) -> HomogeneousIdeal<G, R, N>
    where
        M2: ComponentClosed<G, R>,
        N: ComponentClosed<G, R>,
    {
        HomogeneousIdeal::new(self.product_generators(other), members)
    }

    /// The largest ideal contained in both operands.
    ///
    /// No witness set is synthesized: the intersection of homogeneous
    /// ideals is determined by its membership, which derives directly
    /// from the operands (member of both), and component closure
    /// composes — a component of a common member stays a common member.
    pub fn inf<'a>(&'a self, other: &'a dyn ComponentClosed<G, R>) -> Intersection<'a, G, R> {
        Intersection::new(self, other)
    }

    /// Over-approximates the radical by the intersection of a finite
    /// family of homogeneous prime ideals containing this ideal.
    ///
    /// The radical is the intersection of *all* homogeneous primes
    /// containing the ideal — an unbounded family that cannot be
    /// enumerated. This form is checkable against the candidates the
    /// caller supplies and shrinks toward the radical as the family
    /// grows. Primality of the candidates is the caller's contract
    /// (certify each one with [`super::PrimalityEngine`]); containment
    /// of this ideal is checked here, on the generators.
    ///
    /// # Errors
    ///
    /// [`Error::RadicalFamilyGap`] when a candidate fails to contain
    /// one of this ideal's generators.
    pub fn radical_upper_bound<'a>(
        &self,
        primes: Vec<&'a dyn ComponentClosed<G, R>>,
    ) -> Result<FamilyIntersection<'a, G, R>, Error> {
        for (member, prime) in primes.iter().enumerate() {
            for (generator, gen) in self.generators().iter().enumerate() {
                if !prime.contains_homogeneous(gen) {
                    return Err(Error::RadicalFamilyGap { member, generator });
                }
            }
        }
        Ok(FamilyIntersection::new(primes))
    }
}

/// Intersection of two homogeneous ideals, in canonical
/// component-closed form.
///
/// # Example
///
/// ```
/// use graded::{ComponentClosed, GradedElement, HomogeneousElement, HomogeneousIdeal, Intersection};
///
/// let at_least = |n: u32| move |h: &HomogeneousElement<u32, i64>| h.index() >= n;
/// let t1 = HomogeneousIdeal::new([HomogeneousElement::new(1u32, 1i64).unwrap()], at_least(1));
/// let t2 = HomogeneousIdeal::new([HomogeneousElement::new(2u32, 1i64).unwrap()], at_least(2));
///
/// let both = t1.inf(&t2);
/// assert!(both.contains(&GradedElement::monomial(2, 5)));
/// assert!(!both.contains(&GradedElement::monomial(1, 5)));
/// ```
pub struct Intersection<'a, G: Grading, R: Coefficient> {
    left: &'a dyn ComponentClosed<G, R>,
    right: &'a dyn ComponentClosed<G, R>,
}

impl<'a, G: Grading, R: Coefficient> Intersection<'a, G, R> {
    /// Intersects two component-closed ideals.
    #[must_use]
    pub fn new(left: &'a dyn ComponentClosed<G, R>, right: &'a dyn ComponentClosed<G, R>) -> Self {
        Self { left, right }
    }
}

impl<G: Grading, R: Coefficient> ComponentClosed<G, R> for Intersection<'_, G, R> {
    fn contains_homogeneous(&self, h: &HomogeneousElement<G, R>) -> bool {
        self.left.contains_homogeneous(h) && self.right.contains_homogeneous(h)
    }
}

/// Intersection of an arbitrary finite family of homogeneous ideals.
///
/// Component closure composes across the family: a component of an
/// element lying in every member again lies in every member. The empty
/// family intersects to the whole ring.
pub struct FamilyIntersection<'a, G: Grading, R: Coefficient> {
    members: Vec<&'a dyn ComponentClosed<G, R>>,
}

impl<'a, G: Grading, R: Coefficient> FamilyIntersection<'a, G, R> {
    /// Intersects every ideal in the family.
    #[must_use]
    pub fn new(members: Vec<&'a dyn ComponentClosed<G, R>>) -> Self {
        Self { members }
    }
}

impl<G: Grading, R: Coefficient> core::fmt::Debug for FamilyIntersection<'_, G, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FamilyIntersection")
            .field("members", &self.members.len())
            .finish()
    }
}

impl<G: Grading, R: Coefficient> ComponentClosed<G, R> for FamilyIntersection<'_, G, R> {
    fn contains_homogeneous(&self, h: &HomogeneousElement<G, R>) -> bool {
        self.members.iter().all(|m| m.contains_homogeneous(h))
    }
}
