//! Basic vocabulary shared by product producers and the product registry.
//!
//! # Sub-modules
//!
//! - [`type_identity`] - Comparable identity for a concrete Rust type
//! - [`transition`] - Processing transitions and the legacy branch categories

pub mod transition;
pub mod type_identity;

pub use transition::{BranchType, Transition};
pub use type_identity::TypeIdentity;
