//! Primality of homogeneous ideals from a pairwise condition on
//! homogeneous elements.
//!
//! For a homogeneous ideal, primality over *arbitrary* ring elements
//! reduces to primality over homogeneous pairs. The reduction is the
//! leading-index argument, the graded analogue of the highest-term
//! arguments used for polynomial rings:
//!
//! Suppose `x * y` is a member. Tabulate the components of `x` that
//! fall outside the ideal; if there are none, `x` is a member by
//! component closure, and symmetrically for `y`. Otherwise let `m1`
//! and `m2` be the leading (maximal) outside indices. Expanding the
//! convolution at `m1 + m2`, every contributing pair other than
//! `(m1, m2)` has `i > m1` (so the `x`-component is a member by
//! maximality of `m1`) or `i < m1`, which forces `j > m2` by
//! cancellation (so the `y`-component is a member); either way the
//! cross term is absorbed into the ideal. Subtracting the absorbed
//! terms from the member `project(x*y, m1+m2)` forces the leading pair
//! product into the ideal — and the pair decision then reports one of
//! two components that were tabulated *outside* the ideal. With
//! coherent oracles the situation is unreachable, so reaching it is
//! reported as a contract violation rather than trusted.
//!
//! The order and cancellation laws this leans on are carried by the
//! [`Grading`] bound; there is nothing to check at runtime, which is
//! why a lawless index type makes the procedure silently wrong.

use std::fmt;
use std::marker::PhantomData;

use crate::coefficient::Coefficient;
use crate::element::{GradedElement, HomogeneousElement};
use crate::error::Error;
use crate::grading::Grading;

use super::ComponentClosed;

/// Which element of a factor pair lies in the ideal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Factor {
    /// The left factor is a member.
    Left,
    /// The right factor is a member.
    Right,
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Pairwise primality decision on homogeneous elements.
///
/// # Contract
///
/// Callers invoke this only on pairs of nonzero homogeneous elements
/// whose product is a member of the ideal; the oracle must then report
/// a factor that is a member. Implemented for any
/// `Fn(&HomogeneousElement<G, R>, &HomogeneousElement<G, R>) -> Factor`.
pub trait PairOracle<G: Grading, R: Coefficient> {
    /// Reports a member factor of a homogeneous pair whose product is
    /// a member.
    fn member_factor(
        &self,
        left: &HomogeneousElement<G, R>,
        right: &HomogeneousElement<G, R>,
    ) -> Factor;
}

impl<G, R, F> PairOracle<G, R> for F
where
    G: Grading,
    R: Coefficient,
    F: Fn(&HomogeneousElement<G, R>, &HomogeneousElement<G, R>) -> Factor,
{
    #[inline]
    fn member_factor(
        &self,
        left: &HomogeneousElement<G, R>,
        right: &HomogeneousElement<G, R>,
    ) -> Factor {
        self(left, right)
    }
}

/// Primality of a homogeneous ideal, as a decision procedure over
/// arbitrary factor pairs.
///
/// The engine couples a component-closed ideal with a [`PairOracle`]
/// restricted to homogeneous pairs. Construction enforces the
/// precondition that the ideal is proper; the constructed value then
/// decides, for any `x`, `y` with `x * y` in the ideal, which factor
/// is a member — the runtime content of "the ideal is prime".
///
/// # Example
///
/// ```
/// use graded::{Factor, GradedElement, HomogeneousElement, PrimalityEngine};
///
/// type H = HomogeneousElement<u32, i64>;
///
/// // (t) in integer-polynomial style: prime, proper, homogeneous.
/// let engine = PrimalityEngine::new(
///     |h: &H| h.index() >= 1,
///     |a: &H, b: &H| if a.index() >= 1 { Factor::Left } else { Factor::Right },
/// )
/// .unwrap();
///
/// let x = GradedElement::from_terms([(1u32, 2i64), (3, 1)]);
/// let y = GradedElement::from_terms([(0u32, 5i64), (2, -1)]);
/// assert_eq!(engine.locate_factor(&x, &y), Ok(Factor::Left));
/// ```
pub struct PrimalityEngine<G: Grading, R: Coefficient, I, O> {
    ideal: I,
    oracle: O,
    _marker: PhantomData<(G, R)>,
}

impl<G, R, I, O> PrimalityEngine<G, R, I, O>
where
    G: Grading,
    R: Coefficient,
    I: ComponentClosed<G, R>,
    O: PairOracle<G, R>,
{
    /// Couples a proper homogeneous ideal with its pair decision.
    ///
    /// # Errors
    ///
    /// [`Error::WholeRing`]: the whole ring is excluded from primality
    /// by precondition, and is rejected here, before any pair is
    /// examined.
    pub fn new(ideal: I, oracle: O) -> Result<Self, Error> {
        if ideal.is_whole_ring() {
            return Err(Error::WholeRing);
        }
        Ok(Self {
            ideal,
            oracle,
            _marker: PhantomData,
        })
    }

    /// The underlying ideal.
    pub fn ideal(&self) -> &I {
        &self.ideal
    }

    /// Decides which factor of `x * y` lies in the ideal.
    ///
    /// This is the leading-index procedure described in the module
    /// documentation. Neither factor needs to be homogeneous.
    ///
    /// # Errors
    ///
    /// - [`Error::ProductNotInIdeal`]: `x * y` is not a member; the
    ///   question is not defined for such pairs.
    /// - [`Error::IncoherentMembership`]: the convolution expansion
    ///   forces the leading pair product into the ideal but the
    ///   membership oracle rejects it.
    /// - [`Error::OracleContractViolation`]: the pair oracle reported a
    ///   factor whose leading component was tabulated outside the
    ///   ideal. With coherent oracles this also means the pairwise
    ///   condition fails, i.e. the ideal is not prime.
    pub fn locate_factor(
        &self,
        x: &GradedElement<G, R>,
        y: &GradedElement<G, R>,
    ) -> Result<Factor, Error> {
        if !self.ideal.contains(&(x * y)) {
            return Err(Error::ProductNotInIdeal);
        }

        // Components outside the ideal, ascending; the last entry is
        // the leading outside component.
        let outside_x: Vec<HomogeneousElement<G, R>> = x
            .components()
            .filter(|c| !self.ideal.contains_homogeneous(c))
            .collect();
        let Some(lead_x) = outside_x.last() else {
            // Every component of x is a member, hence so is x.
            return Ok(Factor::Left);
        };
        let outside_y: Vec<HomogeneousElement<G, R>> = y
            .components()
            .filter(|c| !self.ideal.contains_homogeneous(c))
            .collect();
        let Some(lead_y) = outside_y.last() else {
            return Ok(Factor::Right);
        };

        let m1 = lead_x.index();
        let m2 = lead_y.index();
        let target = m1 + m2;

        // Case split over the contributing pairs at the target index.
        // i > m1: the x-component is a member by maximality of m1.
        // i < m1: then j > m2 by cancellation, and the y-component is
        // a member by maximality of m2. Both directions are asserted
        // against the tabulation above.
        for i in x.support() {
            for j in y.support() {
                if i + j != target || i == m1 {
                    continue;
                }
                if i > m1 {
                    debug_assert!(
                        outside_x.iter().all(|c| c.index() != i),
                        "component above the leading outside index must be a member"
                    );
                } else {
                    debug_assert!(
                        j > m2 && outside_y.iter().all(|c| c.index() != j),
                        "grading order/cancellation laws violated in the case split"
                    );
                }
            }
        }

        // Every cross term at the target index is absorbed, and
        // project(x*y, target) is a member, so the leading pair
        // product is forced into the ideal.
        if let Some(lead_product) = lead_x.mul(lead_y) {
            if !self.ideal.contains_homogeneous(&lead_product) {
                return Err(Error::IncoherentMembership);
            }
        }

        // The pair decision must now name a member factor, but both
        // leading components were tabulated outside the ideal.
        let reported = self.oracle.member_factor(lead_x, lead_y);
        Err(Error::OracleContractViolation { reported })
    }
}

/// Builds the primality decision procedure for a homogeneous ideal.
///
/// Alias for [`PrimalityEngine::new`]; the returned engine is the
/// certificate, deciding any concrete factor pair on demand.
///
/// # Errors
///
/// [`Error::WholeRing`] when the ideal contains the ring unit.
pub fn is_prime<G, R, I, O>(ideal: I, oracle: O) -> Result<PrimalityEngine<G, R, I, O>, Error>
where
    G: Grading,
    R: Coefficient,
    I: ComponentClosed<G, R>,
    O: PairOracle<G, R>,
{
    PrimalityEngine::new(ideal, oracle)
}

/// Derives the pair decision of a homogeneous closure from the factor
/// decision of the underlying prime ideal.
///
/// A homogeneous element lies in the closure of `J` exactly when it
/// lies in `J`, so a pair decision for `J` restricts to one for the
/// closure by lifting both factors. This is the replacement step used
/// by the radical: a prime `J` above a homogeneous ideal can be
/// replaced by its homogeneous closure, which stays prime (certify
/// with [`PrimalityEngine::new`] over
/// [`super::Ideal::homogeneous_closure`] and this oracle) and stays
/// above the ideal.
pub fn closure_pair_oracle<G, R, F>(
    decide: F,
) -> impl Fn(&HomogeneousElement<G, R>, &HomogeneousElement<G, R>) -> Factor
where
    G: Grading,
    R: Coefficient,
    F: Fn(&GradedElement<G, R>, &GradedElement<G, R>) -> Factor,
{
    move |left, right| decide(&left.lift(), &right.lift())
}
