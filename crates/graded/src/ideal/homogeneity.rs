//! Homogeneity of ideals: three equivalent formulations and the
//! homogeneous closure operator.
//!
//! An ideal `I` is homogeneous when any of the following hold, and the
//! three are equivalent:
//!
//! 1. **Generator form** — `I` is generated by homogeneous elements.
//! 2. **Self-generation form** — `I` equals the ideal generated by its
//!    own homogeneous members.
//! 3. **Component-closure form** — for every member `x` and index `i`,
//!    the component of `x` at `i` is again a member.
//!
//! Form 3 is the canonical internal representation (it is the one a
//! membership predicate can check incrementally); forms 1 and 2 are
//! derived queries. For a finitely generated ideal, form 3 for *all*
//! members reduces to form 3 for the generators: a member is a finite
//! combination of generators, its component at `i` collects the terms
//! of the combination whose generator components land at `i`, and each
//! of those stays in the ideal by absorption. Conversely, a
//! component-closed ideal is generated by the components of its
//! generators, which are homogeneous.

use crate::coefficient::Coefficient;
use crate::element::{GradedElement, HomogeneousElement};
use crate::error::Error;
use crate::grading::Grading;

use super::{ComponentClosed, Ideal, Membership, Restriction};

impl<G: Grading, R: Coefficient, M: Membership<G, R>> Ideal<G, R, M> {
    /// Generator form (1): every generator in the witness set is
    /// homogeneous.
    ///
    /// Sufficient for homogeneity, not necessary — an ideal can be
    /// homogeneous while its particular witness set is not.
    #[must_use]
    pub fn has_homogeneous_generators(&self) -> bool {
        self.generators().iter().all(GradedElement::is_homogeneous)
    }

    /// Component-closure form (3), the canonical decision: every
    /// component of every generator is a member.
    ///
    /// # Example
    ///
    /// ```
    /// use graded::{GradedElement, Ideal};
    ///
    /// // (1 + t) in integer-polynomial style: member iff evaluation
    /// // at t = -1 vanishes.
    /// let ideal = Ideal::new(
    ///     [GradedElement::from_terms([(0u32, 1i64), (1, 1)])],
    ///     |x: &GradedElement<u32, i64>| {
    ///         x.components()
    ///             .map(|c| {
    ///                 let sign = if c.index() % 2 == 0 { 1 } else { -1 };
    ///                 sign * c.coefficient()
    ///             })
    ///             .sum::<i64>()
    ///             == 0
    ///     },
    /// );
    /// // Neither component 1 nor t lies in (1 + t).
    /// assert!(!ideal.is_component_closed());
    /// ```
    #[must_use]
    pub fn is_component_closed(&self) -> bool {
        self.generators()
            .iter()
            .all(|g| g.components().all(|c| self.contains(&c.lift())))
    }

    /// Self-generation form (2): every generator already lies in the
    /// ideal generated by the homogeneous members, i.e. in the
    /// homogeneous closure.
    #[must_use]
    pub fn is_self_generated(&self) -> bool {
        let closure = self.homogeneous_closure();
        self.generators().iter().all(|g| closure.contains(g))
    }

    /// Decides homogeneity: the generator form as a short-circuit,
    /// otherwise the canonical component-closure check.
    #[must_use]
    pub fn is_homogeneous(&self) -> bool {
        self.has_homogeneous_generators() || self.is_component_closed()
    }

    /// The homogeneous closure: the ideal generated by the homogeneous
    /// members of this ideal.
    ///
    /// The closure is always homogeneous, is contained in this ideal,
    /// and agrees with it on homogeneous elements; it equals this ideal
    /// exactly when this ideal is homogeneous. See [`Closure`].
    #[must_use]
    pub fn homogeneous_closure(&self) -> Closure<'_, G, R, M> {
        Closure { ideal: self }
    }

    /// Certifies this ideal as homogeneous through its witness set.
    ///
    /// Each generator must be homogeneous; the generating set becomes a
    /// set of `(index, coefficient)` pairs and membership is the same
    /// predicate restricted to homogeneous elements. An ideal that is
    /// homogeneous but presented by mixed generators should be
    /// decomposed through [`Ideal::homogeneous_closure`] first.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedGenerator`] when a generator is supported on
    /// more than one index.
    pub fn into_homogeneous(self) -> Result<HomogeneousIdeal<G, R, Restriction<M>>, Error> {
        let (gens, members) = self.into_parts();
        let mut homogeneous = Vec::with_capacity(gens.len());
        for (position, gen) in gens.iter().enumerate() {
            if !gen.is_homogeneous() {
                return Err(Error::MalformedGenerator {
                    position,
                    support_len: gen.support_len(),
                });
            }
            if let Some(h) = gen.as_homogeneous() {
                homogeneous.push(h);
            }
        }
        Ok(HomogeneousIdeal {
            gens: homogeneous,
            members: Restriction::new(members),
        })
    }
}

/// The homogeneous closure of an ideal, as a component-closed view.
///
/// A homogeneous element lies in the closure exactly when it lies in
/// the underlying ideal (it is then one of the closure's generators);
/// an arbitrary element lies in the closure exactly when all of its
/// components do. Membership is the authoritative representation:
/// [`Closure::seed_generators`] is a witness seed drawn from the
/// underlying generating set, not an exhaustive generating set.
pub struct Closure<'a, G: Grading, R: Coefficient, M> {
    ideal: &'a Ideal<G, R, M>,
}

impl<G: Grading, R: Coefficient, M: Membership<G, R>> Closure<'_, G, R, M> {
    /// Member components of the underlying generating set.
    ///
    /// Every returned element is a homogeneous member of the underlying
    /// ideal, hence a generator of the closure. When the underlying
    /// ideal is homogeneous these seeds generate the whole closure; in
    /// general they need not.
    #[must_use]
    pub fn seed_generators(&self) -> Vec<HomogeneousElement<G, R>> {
        self.ideal
            .generators()
            .iter()
            .flat_map(GradedElement::components)
            .filter(|c| self.ideal.contains(&c.lift()))
            .collect()
    }
}

impl<G: Grading, R: Coefficient, M: Membership<G, R>> ComponentClosed<G, R>
    for Closure<'_, G, R, M>
{
    fn contains_homogeneous(&self, h: &HomogeneousElement<G, R>) -> bool {
        self.ideal.contains(&h.lift())
    }
}

/// A homogeneous ideal in canonical form: homogeneous witness
/// generators plus a [`ComponentClosed`] membership decision.
///
/// # Example
///
/// ```
/// use graded::{ComponentClosed, GradedElement, HomogeneousElement, HomogeneousIdeal};
///
/// // (t): everything supported at index >= 1.
/// let ideal = HomogeneousIdeal::new(
///     [HomogeneousElement::new(1u32, 1i64).unwrap()],
///     |h: &HomogeneousElement<u32, i64>| h.index() >= 1,
/// );
/// assert!(ideal.contains(&GradedElement::from_terms([(1, 3), (4, -1)])));
/// assert!(!ideal.contains(&GradedElement::one()));
/// assert!(!ideal.is_whole_ring());
/// ```
pub struct HomogeneousIdeal<G: Grading, R: Coefficient, M> {
    gens: Vec<HomogeneousElement<G, R>>,
    members: M,
}

impl<G: Grading, R: Coefficient, M> core::fmt::Debug for HomogeneousIdeal<G, R, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HomogeneousIdeal")
            .field("gens", &self.gens.len())
            .finish()
    }
}

impl<G: Grading, R: Coefficient, M: ComponentClosed<G, R>> HomogeneousIdeal<G, R, M> {
    /// Builds a homogeneous ideal from homogeneous generators and a
    /// homogeneous-membership decision.
    pub fn new(gens: impl IntoIterator<Item = HomogeneousElement<G, R>>, members: M) -> Self {
        Self {
            gens: gens.into_iter().collect(),
            members,
        }
    }

    /// Builds from graded generators, rejecting any that are not
    /// homogeneous. Zero generators are dropped.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedGenerator`] when a generator is supported on
    /// more than one index.
    pub fn from_graded(
        gens: impl IntoIterator<Item = GradedElement<G, R>>,
        members: M,
    ) -> Result<Self, Error> {
        let mut homogeneous = Vec::new();
        for (position, gen) in gens.into_iter().enumerate() {
            if !gen.is_homogeneous() {
                return Err(Error::MalformedGenerator {
                    position,
                    support_len: gen.support_len(),
                });
            }
            if let Some(h) = gen.as_homogeneous() {
                homogeneous.push(h);
            }
        }
        Ok(Self {
            gens: homogeneous,
            members,
        })
    }

    /// The homogeneous witness generators.
    #[must_use]
    pub fn generators(&self) -> &[HomogeneousElement<G, R>] {
        &self.gens
    }
}

impl<G: Grading, R: Coefficient, M: ComponentClosed<G, R>> ComponentClosed<G, R>
    for HomogeneousIdeal<G, R, M>
{
    fn contains_homogeneous(&self, h: &HomogeneousElement<G, R>) -> bool {
        self.members.contains_homogeneous(h)
    }
}
