//! Domain entities exchanged between the repository and its callers.

pub mod product;
pub mod stats;
