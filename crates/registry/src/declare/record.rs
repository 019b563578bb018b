use kiln_primitives::{Transition, TypeIdentity};

/// One declared product.
///
/// Records are created by the declaration operations only. The alias is the one
/// mutable field and is written exclusively through an alias setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationRecord {
	transition: Transition,
	type_identity: TypeIdentity,
	instance_name: String,
	pub(crate) alias: String,
}

impl DeclarationRecord {
	pub(crate) fn new(
		transition: Transition,
		type_identity: TypeIdentity,
		instance_name: String,
	) -> Self {
		Self {
			transition,
			type_identity,
			instance_name,
			alias: String::new(),
		}
	}

	/// Returns the transition during which the product is created.
	pub fn transition(&self) -> Transition {
		self.transition
	}

	/// Returns the declared product type.
	pub fn type_identity(&self) -> TypeIdentity {
		self.type_identity
	}

	/// Returns the instance name, empty when none was given.
	pub fn instance_name(&self) -> &str {
		&self.instance_name
	}

	/// Returns the persistent alias, empty unless one was set.
	pub fn alias(&self) -> &str {
		&self.alias
	}

	pub fn has_alias(&self) -> bool {
		!self.alias.is_empty()
	}
}
