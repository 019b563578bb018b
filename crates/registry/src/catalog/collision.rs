//! Collision vocabulary and duplicate handling policy.

use super::description::ProductKey;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Fail the registration with a [`super::RegistryError`].
	#[default]
	Reject,
	/// Keep what was registered first, record a [`Collision`] and carry on.
	KeepFirst,
}

impl DuplicatePolicy {
	/// [`Self::Reject`] in debug builds, [`Self::KeepFirst`] in release builds.
	pub const fn for_build() -> Self {
		match cfg!(debug_assertions) {
			true => Self::Reject,
			false => Self::KeepFirst,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollisionKind {
	/// Same product key registered twice; the incoming product was dropped.
	DuplicateProduct,
	/// Alias already bound in the same branch type; the incoming product was
	/// registered without its alias.
	AliasConflict { alias: String },
}

/// A conflict tolerated under [`DuplicatePolicy::KeepFirst`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
	pub kind: CollisionKind,
	/// Key of the product that kept the binding.
	pub existing: ProductKey,
	/// Key of the product that lost it.
	pub incoming: ProductKey,
}

impl std::fmt::Display for Collision {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match &self.kind {
			CollisionKind::DuplicateProduct => {
				write!(f, "duplicate product {} dropped", self.incoming)
			}
			CollisionKind::AliasConflict { alias } => write!(
				f,
				"alias {alias:?} kept by {}, dropped from {}",
				self.existing, self.incoming
			),
		}
	}
}
