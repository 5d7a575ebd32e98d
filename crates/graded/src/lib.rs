//! Homogeneous ideals over graded rings.
//!
//! A **graded ring** decomposes into additive components indexed by an
//! ordered monoid, with multiplication adding indices — the way
//! polynomial degrees add. This crate represents its elements as
//! finite `(index, coefficient)` maps and builds decision procedures
//! on top of them:
//!
//! - [`GradedElement`]: finitely supported elements, with projection
//!   onto components and the convolution product.
//! - [`Ideal`] / [`HomogeneousIdeal`]: ideals given by a finite
//!   generating set plus an explicit membership decision, with the
//!   three equivalent formulations of homogeneity and the homogeneous
//!   closure operator.
//! - [`Intersection`] / [`FamilyIntersection`] and the witness
//!   constructions for sums and products of homogeneous ideals.
//! - [`PrimalityEngine`]: primality of a homogeneous ideal reduced to
//!   a pairwise condition on homogeneous elements, by the
//!   leading-index argument.
//!
//! # Decision seams
//!
//! Ideal membership over an arbitrary coefficient ring is not
//! computable from a generating set alone, so every construction that
//! needs it takes the decision procedure as an explicit argument — a
//! closure over graded elements for arbitrary ideals, a closure over
//! homogeneous elements for homogeneous ones, and a pair decision for
//! primality. The ring supplies the decisions; the crate supplies the
//! algorithms and checks the contracts it can check.
//!
//! # Example
//!
//! ```
//! use graded::{Factor, GradedElement, HomogeneousElement, PrimalityEngine};
//!
//! type H = HomogeneousElement<u32, i64>;
//!
//! // The principal ideal (t): members are supported at index >= 1.
//! let engine = PrimalityEngine::new(
//!     |h: &H| h.index() >= 1,
//!     |a: &H, b: &H| if a.index() >= 1 { Factor::Left } else { Factor::Right },
//! )
//! .unwrap();
//!
//! // (2t + t^3) * (5 - t^2) is a multiple of t; the left factor is
//! // the one in the ideal.
//! let x = GradedElement::from_terms([(1u32, 2i64), (3, 1)]);
//! let y = GradedElement::from_terms([(0u32, 5i64), (2, -1)]);
//! assert_eq!(engine.locate_factor(&x, &y), Ok(Factor::Left));
//! ```
//!
//! # Design principles
//!
//! - **Pure values**: elements and ideals are immutable; every
//!   operation returns a new value, and nothing does I/O.
//! - **Total over finite data**: supports and generating sets are
//!   finite; the unbounded objects (radicals, arbitrary families) are
//!   verifiable predicates over candidates, never enumerations.
//! - **Laws at the type level**: the order/cancellation prerequisites
//!   of the leading-index argument are carried by the [`Grading`]
//!   bound, not runtime flags.

// Capability traits for indices and coefficients.
pub mod coefficient;
pub mod grading;

// Graded elements: projection, components, convolution.
pub mod element;

// Ideals: membership seams, homogeneity, algebra, primality.
pub mod ideal;

// Precondition-violation errors.
pub mod error;

pub use coefficient::Coefficient;
pub use element::{GradedElement, HomogeneousElement};
pub use error::Error;
pub use grading::Grading;
pub use ideal::{
    closure_pair_oracle, is_prime, Closure, ComponentClosed, Factor, FamilyIntersection,
    HomogeneousIdeal, Ideal, Intersection, Membership, PairOracle, PrimalityEngine, Restriction,
};

/// Prelude module for convenient imports.
///
/// ```
/// use graded::prelude::*;
/// ```
pub mod prelude {
    pub use crate::coefficient::Coefficient;
    pub use crate::element::{GradedElement, HomogeneousElement};
    pub use crate::error::Error;
    pub use crate::grading::Grading;
    pub use crate::ideal::{
        closure_pair_oracle, is_prime, Closure, ComponentClosed, Factor, FamilyIntersection,
        HomogeneousIdeal, Ideal, Intersection, Membership, PairOracle, PrimalityEngine,
    };
}
