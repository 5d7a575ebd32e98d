//! Precondition-violation errors.
//!
//! Every operation in this crate is a total decision procedure over
//! finite data; nothing here models I/O or recoverable runtime faults.
//! The variants are exactly the caller-contract breaches: malformed
//! generating sets, the whole-ring primality precondition, and oracle
//! incoherence detected by the leading-index procedure. Normal inputs
//! (empty supports, the zero ideal, the whole ring as a plain ideal)
//! never error.

use thiserror::Error;

use crate::ideal::Factor;

/// Errors surfaced by ideal construction and the primality procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A generator claimed to be homogeneous is supported on more than
    /// one index. Rejected at ideal construction.
    #[error("generator {position} is not homogeneous: support spans {support_len} indices")]
    MalformedGenerator {
        /// Position of the offending generator in the supplied set.
        position: usize,
        /// Its support size (necessarily greater than one).
        support_len: usize,
    },

    /// The ideal is the whole ring, which is excluded from primality by
    /// precondition. Rejected before the algorithm runs.
    #[error("the whole ring is not a primality candidate")]
    WholeRing,

    /// `locate_factor` was called on a pair whose product is not a
    /// member of the ideal. Caller contract, not a recoverable state.
    #[error("the product of the supplied factors is not a member of the ideal")]
    ProductNotInIdeal,

    /// The membership oracle rejected the leading pair product even
    /// though the convolution expansion places it in the ideal.
    #[error("membership oracle rejected the leading pair product forced into the ideal")]
    IncoherentMembership,

    /// The pair oracle reported a factor whose leading component the
    /// membership oracle had already excluded.
    #[error("pair oracle reported the {reported} factor, whose leading component is outside the ideal")]
    OracleContractViolation {
        /// The factor the pair oracle claimed to be a member.
        reported: Factor,
    },

    /// A candidate supplied to a radical bound fails to contain the
    /// ideal it is supposed to sit above.
    #[error("radical family member {member} does not contain generator {generator} of the ideal")]
    RadicalFamilyGap {
        /// Position of the offending candidate in the family.
        member: usize,
        /// Position of the generator it excludes.
        generator: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_contract() {
        let e = Error::MalformedGenerator {
            position: 3,
            support_len: 2,
        };
        assert_eq!(
            e.to_string(),
            "generator 3 is not homogeneous: support spans 2 indices"
        );
        assert_eq!(
            Error::OracleContractViolation {
                reported: Factor::Left
            }
            .to_string(),
            "pair oracle reported the left factor, whose leading component is outside the ideal"
        );
    }
}
