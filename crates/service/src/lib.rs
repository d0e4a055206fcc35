//! Service layer for quiz results on top of `models`.
//! - Separates the result store contract from data access.
//! - Reuses the entity and scores codec defined in the `models` crate.

pub mod errors;
pub mod runtime;
pub mod results;
#[cfg(test)]
pub mod test_support;
