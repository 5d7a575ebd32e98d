//! Law validators (elements, homogeneity, ideal algebra, primality).

pub mod algebra;
pub mod element;
pub mod homogeneity;
pub mod primality;
