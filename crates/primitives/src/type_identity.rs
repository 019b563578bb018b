use core::any::{TypeId, type_name};
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

/// Identity of a concrete Rust type, captured once and compared cheaply.
///
/// Equality and hashing use [`TypeId`] only. The type name is carried along for
/// diagnostics and for ordering catalogs deterministically.
#[derive(Clone, Copy)]
pub struct TypeIdentity {
	id: TypeId,
	name: &'static str,
}

impl TypeIdentity {
	/// Returns the identity of `T`.
	pub fn of<T: ?Sized + 'static>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			name: type_name::<T>(),
		}
	}

	/// Returns the underlying [`TypeId`].
	pub fn type_id(self) -> TypeId {
		self.id
	}

	/// Returns the fully qualified type name.
	pub fn name(self) -> &'static str {
		self.name
	}

	/// Returns true if this identity denotes `T`.
	pub fn is<T: ?Sized + 'static>(self) -> bool {
		self.id == TypeId::of::<T>()
	}
}

impl PartialEq for TypeIdentity {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for TypeIdentity {}

impl Hash for TypeIdentity {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl PartialOrd for TypeIdentity {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for TypeIdentity {
	fn cmp(&self, other: &Self) -> Ordering {
		self.name.cmp(other.name).then_with(|| self.id.cmp(&other.id))
	}
}

impl core::fmt::Debug for TypeIdentity {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_tuple("TypeIdentity").field(&self.name).finish()
	}
}

impl core::fmt::Display for TypeIdentity {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.name)
	}
}
