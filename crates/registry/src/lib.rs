//! Product declarations and the product catalog.
//!
//! A module declares every product it will create before it runs, through a
//! [`ProductDeclarations`] list. Each declaration returns a typed [`PutTokenT`]
//! the module keeps for its later writes, and the framework bulk-loads the list
//! into a [`ProductSink`] such as [`ProductRegistry`].
//!
//! # Modules
//!
//! - [`token`] - Erased and type-tagged put tokens
//! - [`declare`] - Declaration list, alias setters and the bulk-loader
//! - [`catalog`] - Sink seam, product descriptions and the registry
//! - [`module`] - Identity of the declaring module

pub mod catalog;
pub mod declare;
pub mod module;
pub mod token;

pub use catalog::{
	CatalogEntry, Collision, CollisionKind, DuplicatePolicy, ProductDescription, ProductKey,
	ProductRegistry, ProductSink, RegistryError,
};
pub use declare::{AliasSetter, AliasSetterT, DeclarationRecord, ProductDeclarations};
pub use kiln_primitives::{BranchType, Transition, TypeIdentity};
pub use module::ModuleDescription;
pub use token::{PutToken, PutTokenT};

#[cfg(test)]
mod tests;
