use kiln_primitives::BranchType;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::collision::{Collision, CollisionKind, DuplicatePolicy};
use super::description::{CatalogEntry, ProductDescription, ProductKey};
use super::error::RegistryError;
use super::ProductSink;

/// Process-wide catalog of declared products.
///
/// Products are kept in ingest order. Lookups by key and by alias are backed by
/// hash indices into that order.
#[derive(Debug, Default)]
pub struct ProductRegistry {
	products: Vec<ProductDescription>,
	by_key: FxHashMap<ProductKey, usize>,
	by_alias: FxHashMap<BranchType, FxHashMap<String, usize>>,
	collisions: Vec<Collision>,
	policy: DuplicatePolicy,
}

impl ProductRegistry {
	/// Creates an empty registry that rejects duplicates.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty registry using [`DuplicatePolicy::for_build`].
	pub fn for_build() -> Self {
		Self::new().duplicate_policy(DuplicatePolicy::for_build())
	}

	/// Sets the duplicate handling policy.
	pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	pub fn policy(&self) -> DuplicatePolicy {
		self.policy
	}

	/// Returns the number of registered products.
	pub fn len(&self) -> usize {
		self.products.len()
	}

	/// Returns true if nothing has been registered.
	pub fn is_empty(&self) -> bool {
		self.products.is_empty()
	}

	/// Returns every registered product in ingest order.
	pub fn products(&self) -> &[ProductDescription] {
		&self.products
	}

	/// Looks up a product by its key.
	pub fn get(&self, key: &ProductKey) -> Option<&ProductDescription> {
		self.by_key.get(key).map(|&idx| &self.products[idx])
	}

	/// Looks up the product bound to `alias` within `branch_type`.
	pub fn by_alias(&self, branch_type: BranchType, alias: &str) -> Option<&ProductDescription> {
		self.by_alias
			.get(&branch_type)?
			.get(alias)
			.map(|&idx| &self.products[idx])
	}

	/// Iterates over the products registered by the module labelled `label`.
	pub fn products_for_module<'a>(
		&'a self,
		label: &'a str,
	) -> impl Iterator<Item = &'a ProductDescription> + 'a {
		self.products.iter().filter(move |p| p.module_label == label)
	}

	/// Returns the conflicts tolerated under [`DuplicatePolicy::KeepFirst`].
	pub fn collisions(&self) -> &[Collision] {
		&self.collisions
	}

	/// Returns the serializable catalog in ingest order.
	pub fn catalog(&self) -> Vec<CatalogEntry> {
		self.products.iter().map(ProductDescription::catalog_entry).collect()
	}

	/// Registers one product.
	///
	/// Both checks run before anything is inserted, so a rejected product leaves
	/// the registry untouched.
	pub fn insert(&mut self, mut product: ProductDescription) -> Result<(), RegistryError> {
		let key = product.key();

		if let Some(&existing) = self.by_key.get(&key) {
			let existing_key = self.products[existing].key();
			return self.tolerate(
				Collision {
					kind: CollisionKind::DuplicateProduct,
					existing: existing_key,
					incoming: key,
				},
				|| RegistryError::DuplicateProduct {
					module_label: product.module_label.clone(),
					type_name: product.type_identity.name(),
					instance_name: product.instance_name.clone(),
					transition: product.transition,
					process_name: product.process_name.clone(),
				},
			);
		}

		let branch_type = product.branch_type();
		let mut bind_alias = !product.alias.is_empty();
		if bind_alias
			&& let Some(&owner) = self
				.by_alias
				.get(&branch_type)
				.and_then(|aliases| aliases.get(&product.alias))
		{
			let owner = &self.products[owner];
			let err = RegistryError::AliasConflict {
				alias: product.alias.clone(),
				branch_type,
				existing_module: owner.module_label.clone(),
				incoming_module: product.module_label.clone(),
			};
			let collision = Collision {
				kind: CollisionKind::AliasConflict {
					alias: product.alias.clone(),
				},
				existing: owner.key(),
				incoming: key.clone(),
			};
			self.tolerate(collision, || err)?;
			product.alias.clear();
			bind_alias = false;
		}

		let idx = self.products.len();
		debug!(
			idx,
			module = %product.module_label,
			product = product.type_identity.name(),
			instance = %product.instance_name,
			transition = %product.transition,
			listener = product.from_listener,
			"registered product"
		);
		if bind_alias {
			self.by_alias
				.entry(branch_type)
				.or_default()
				.insert(product.alias.clone(), idx);
		}
		self.by_key.insert(key, idx);
		self.products.push(product);
		Ok(())
	}

	/// Applies the duplicate policy to a detected collision.
	fn tolerate(
		&mut self,
		collision: Collision,
		err: impl FnOnce() -> RegistryError,
	) -> Result<(), RegistryError> {
		match self.policy {
			DuplicatePolicy::Reject => Err(err()),
			DuplicatePolicy::KeepFirst => {
				warn!(%collision, "registry collision tolerated");
				self.collisions.push(collision);
				Ok(())
			}
		}
	}
}

impl ProductSink for ProductRegistry {
	type Error = RegistryError;

	fn add_product(&mut self, product: ProductDescription) -> Result<(), RegistryError> {
		self.insert(product)
	}
}
