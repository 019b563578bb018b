//! Product catalog.
//!
//! # Purpose
//!
//! Declarations from every module end up here, attributed to their module, so
//! the framework can answer who produces what and reject inconsistent
//! configurations before anything runs.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`ProductSink`] | Destination of a module's bulk-load. |
//! | [`ProductDescription`] | One declaration attributed to its module. |
//! | [`ProductKey`] | Uniqueness key: transition, type, module, instance, process. |
//! | [`ProductRegistry`] | Ordered catalog with duplicate and alias checks. |
//! | [`CatalogEntry`] | Serializable projection of a registered product. |
//!
//! # Invariants
//!
//! - A product key is registered at most once.
//!   - Enforced in: [`ProductRegistry::insert`].
//!   - Tested by: `catalog::tests::test_duplicate_product_rejected`
//!   - Failure symptom: two modules write the same product and readers see either.
//!
//! - An alias names at most one product per [`kiln_primitives::BranchType`].
//!   - Enforced in: [`ProductRegistry::insert`].
//!   - Tested by: `catalog::tests::test_alias_conflict_across_modules`
//!   - Failure symptom: an alias resolves to a product of another module.
//!
//! - Rejected products leave the registry unchanged.
//!   - Enforced in: [`ProductRegistry::insert`] (checks precede inserts).
//!   - Tested by: `catalog::tests::test_rejection_leaves_registry_untouched`
//!   - Failure symptom: a failed load leaves half of a product's indices behind.

mod collision;
mod description;
mod error;
mod registry;

#[cfg(test)]
mod tests;

use std::convert::Infallible;

pub use collision::{Collision, CollisionKind, DuplicatePolicy};
pub use description::{CatalogEntry, ProductDescription, ProductKey};
pub use error::RegistryError;
pub use registry::ProductRegistry;

/// Destination for a module's declared products.
///
/// Implementors decide what counts as a conflict; the bulk-loader only forwards
/// products in order and stops at the first error.
pub trait ProductSink {
	type Error;

	/// Accepts one product.
	fn add_product(&mut self, product: ProductDescription) -> Result<(), Self::Error>;
}

impl ProductSink for Vec<ProductDescription> {
	type Error = Infallible;

	fn add_product(&mut self, product: ProductDescription) -> Result<(), Infallible> {
		self.push(product);
		Ok(())
	}
}

impl<S: ProductSink + ?Sized> ProductSink for &mut S {
	type Error = S::Error;

	fn add_product(&mut self, product: ProductDescription) -> Result<(), S::Error> {
		(**self).add_product(product)
	}
}
