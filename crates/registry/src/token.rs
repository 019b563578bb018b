//! Put tokens.
//!
//! # Purpose
//!
//! A put token is the handle a producer receives when it declares a product. It
//! records the position of the declaration in the producer's declaration list
//! and nothing else, so it is `Copy`, `Send` and `Sync` and costs one `u32`.
//!
//! # Invariants
//!
//! - A [`PutTokenT<T>`] can only be obtained by declaring a product of type `T`.
//!   Erasing the tag is always possible; re-attaching one is not expressible.
//!   - Enforced in: `PutTokenT::new` is crate-private, no `From<PutToken>` exists.
//!   - Tested by: the `compile_fail` tripwires below.
//!   - Failure symptom: a token writes a product under a type it was never declared with.
//!
//! ```compile_fail
//! use kiln_registry::{PutToken, PutTokenT};
//! let erased = PutToken::new(0);
//! let _typed: PutTokenT<u32> = erased.into();
//! ```
//!
//! ```compile_fail
//! use kiln_registry::PutTokenT;
//! let _typed = PutTokenT::<u32>::new(0);
//! ```

use core::marker::PhantomData;

const UNINITIALIZED: u32 = u32::MAX;

/// Type-erased put token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PutToken(u32);

impl PutToken {
	/// Creates a token addressing the declaration at `index`.
	pub const fn new(index: u32) -> Self {
		Self(index)
	}

	/// Returns the declaration position this token addresses.
	pub const fn index(self) -> u32 {
		self.0
	}

	/// Returns true for a token that was never issued by a declaration.
	pub const fn is_uninitialized(self) -> bool {
		self.0 == UNINITIALIZED
	}
}

impl Default for PutToken {
	fn default() -> Self {
		Self(UNINITIALIZED)
	}
}

impl core::fmt::Display for PutToken {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Put token tagged with the product type it was declared for.
pub struct PutTokenT<T> {
	index: u32,
	_marker: PhantomData<fn() -> T>,
}

impl<T> PutTokenT<T> {
	pub(crate) const fn new(index: u32) -> Self {
		Self {
			index,
			_marker: PhantomData,
		}
	}

	/// Returns the declaration position this token addresses.
	pub fn index(self) -> u32 {
		self.index
	}

	/// Returns true for a token that was never issued by a declaration.
	pub fn is_uninitialized(self) -> bool {
		self.index == UNINITIALIZED
	}

	/// Drops the type tag, keeping the position.
	pub fn erased(self) -> PutToken {
		PutToken(self.index)
	}
}

impl<T> Clone for PutTokenT<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for PutTokenT<T> {}

impl<T> PartialEq for PutTokenT<T> {
	fn eq(&self, other: &Self) -> bool {
		self.index == other.index
	}
}

impl<T> Eq for PutTokenT<T> {}

impl<T> core::hash::Hash for PutTokenT<T> {
	fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
		self.index.hash(state);
	}
}

impl<T> Default for PutTokenT<T> {
	fn default() -> Self {
		Self::new(UNINITIALIZED)
	}
}

impl<T> core::fmt::Debug for PutTokenT<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "PutTokenT<{}>({})", core::any::type_name::<T>(), self.index)
	}
}

impl<T> From<PutTokenT<T>> for PutToken {
	fn from(token: PutTokenT<T>) -> Self {
		token.erased()
	}
}

#[cfg(test)]
mod tests {
	use super::{PutToken, PutTokenT};

	struct Hits;

	fn assert_send_sync<T: Send + Sync + Copy>() {}

	#[test]
	fn test_erasing_keeps_position() {
		let typed = PutTokenT::<Hits>::new(7);
		let erased: PutToken = typed.into();
		assert_eq!(erased.index(), 7);
		assert_eq!(typed.erased(), erased);
	}

	#[test]
	fn test_tokens_are_plain_values() {
		assert_send_sync::<PutToken>();
		// Tag type does not need to be thread-safe itself.
		assert_send_sync::<PutTokenT<std::rc::Rc<Hits>>>();
		assert_eq!(
			core::mem::size_of::<PutTokenT<Hits>>(),
			core::mem::size_of::<u32>()
		);
	}

	#[test]
	fn test_default_tokens_are_uninitialized() {
		assert!(PutToken::default().is_uninitialized());
		assert!(PutTokenT::<Hits>::default().is_uninitialized());
		assert!(!PutToken::new(0).is_uninitialized());
	}

	#[test]
	fn test_display_and_debug() {
		assert_eq!(PutToken::new(3).to_string(), "#3");
		let dbg = format!("{:?}", PutTokenT::<u32>::new(3));
		assert_eq!(dbg, "PutTokenT<u32>(3)");
	}
}
