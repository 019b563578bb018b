//! Product declarations.
//!
//! # Purpose
//!
//! A module states, while it is being constructed, every product it will create
//! and during which [`Transition`] it creates it. Each declaration appends one
//! [`DeclarationRecord`] to the module's [`ProductDeclarations`] and hands back
//! an alias setter that carries the issued put token.
//!
//! # Mental Model
//!
//! 1. **Declare:** `declare::<T>()` and its variants append a record and return an
//!    [`AliasSetterT`]. The untyped [`ProductDeclarations::declare_type`] returns an
//!    [`AliasSetter`] instead.
//! 2. **Alias (optional):** `.set_alias("name")` writes the alias of the record just
//!    appended.
//! 3. **Keep the token:** `.into_token()` yields the [`PutTokenT`](crate::PutTokenT) the module stores
//!    for its later writes.
//! 4. **Load:** the framework hands the records to a [`ProductSink`](crate::ProductSink) once with
//!    [`ProductDeclarations::add_to_registry`].
//!
//! ```
//! use kiln_primitives::BranchType;
//! use kiln_registry::ProductDeclarations;
//!
//! struct Tracks;
//! struct RunSummary;
//!
//! let mut decls = ProductDeclarations::new();
//! let tracks = decls.declare::<Tracks>().set_alias("generalTracks").into_token();
//! let summary = decls.declare_in::<RunSummary>(BranchType::InRun, "").into_token();
//! assert_eq!((tracks.index(), summary.index()), (0, 1));
//! assert_eq!(decls.records()[0].alias(), "generalTracks");
//! ```
//!
//! # Invariants
//!
//! - The list is append-only and a token's position is the index of its record.
//!   - Enforced in: [`ProductDeclarations::declare_type`] (the single append site).
//!   - Tested by: `declare::invariants::test_token_positions_follow_call_order`
//!   - Failure symptom: a put token writes into the slot of another product.
//!
//! - An alias setter writes only the record it was issued for, and cannot outlive
//!   the next declaration.
//!   - Enforced in: [`AliasSetter`] borrows the list mutably.
//!   - Tested by: `declare::invariants::test_alias_targets_own_record`, and the
//!     `compile_fail` tripwire below.
//!   - Failure symptom: an alias lands on a later product, or on freed memory.
//!
//! ```compile_fail
//! use kiln_registry::ProductDeclarations;
//! let mut decls = ProductDeclarations::new();
//! let first = decls.declare::<u32>();
//! decls.declare::<u64>();
//! first.set_alias("stale");
//! ```
//!
//! - Legacy and modern transition selectors produce identical records.
//!   - Enforced in: `impl From<BranchType> for Transition`, applied once in
//!     [`ProductDeclarations::declare_type`].
//!   - Tested by: `declare::invariants::test_legacy_selector_matches_modern`
//!   - Failure symptom: the same product is catalogued under two transitions.

mod alias;
mod load;
mod record;

#[cfg(any(test, doc))]
pub(crate) mod invariants;


pub use alias::{AliasSetter, AliasSetterT};
use kiln_primitives::{Transition, TypeIdentity};
pub use record::DeclarationRecord;
use tracing::trace;

use crate::token::PutToken;

/// Ordered, append-only list of the products one module declares.
#[derive(Debug, Default, Clone)]
pub struct ProductDeclarations {
	records: Vec<DeclarationRecord>,
}

impl ProductDeclarations {
	/// Creates an empty declaration list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Declares a per-event product of type `T` with an empty instance name.
	pub fn declare<T: 'static>(&mut self) -> AliasSetterT<'_, T> {
		self.declare_in::<T>(Transition::Event, String::new())
	}

	/// Declares a per-event product of type `T` under `instance_name`.
	pub fn declare_named<T: 'static>(
		&mut self,
		instance_name: impl Into<String>,
	) -> AliasSetterT<'_, T> {
		self.declare_in::<T>(Transition::Event, instance_name)
	}

	/// Declares a product of type `T` created during `transition`.
	///
	/// Accepts a [`Transition`] or a legacy [`kiln_primitives::BranchType`].
	pub fn declare_in<T: 'static>(
		&mut self,
		transition: impl Into<Transition>,
		instance_name: impl Into<String>,
	) -> AliasSetterT<'_, T> {
		self.declare_type(TypeIdentity::of::<T>(), transition, instance_name)
			.narrow::<T>()
	}

	/// Declares a per-event product whose type is only known at runtime.
	pub fn declare_type_event(
		&mut self,
		type_identity: TypeIdentity,
		instance_name: impl Into<String>,
	) -> AliasSetter<'_> {
		self.declare_type(type_identity, Transition::Event, instance_name)
	}

	/// Declares a product whose type is only known at runtime.
	///
	/// Every other declaration operation funnels through here.
	pub fn declare_type(
		&mut self,
		type_identity: TypeIdentity,
		transition: impl Into<Transition>,
		instance_name: impl Into<String>,
	) -> AliasSetter<'_> {
		let transition = transition.into();
		let instance_name = instance_name.into();
		let index = self.records.len();
		let token = issue_token(index);
		trace!(
			index,
			%transition,
			product = type_identity.name(),
			instance = %instance_name,
			"declared product"
		);

		self.records.push(DeclarationRecord::new(
			transition,
			type_identity,
			instance_name,
		));
		AliasSetter::new(&mut self.records[index], token)
	}

	/// Returns every record in declaration order.
	pub fn records(&self) -> &[DeclarationRecord] {
		&self.records
	}

	/// Iterates over the records in declaration order.
	pub fn iter(&self) -> core::slice::Iter<'_, DeclarationRecord> {
		self.records.iter()
	}

	/// Returns the record a token was issued for.
	pub fn get(&self, token: impl Into<PutToken>) -> Option<&DeclarationRecord> {
		let token = token.into();
		self.records.get(token.index() as usize)
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

impl<'a> IntoIterator for &'a ProductDeclarations {
	type Item = &'a DeclarationRecord;
	type IntoIter = core::slice::Iter<'a, DeclarationRecord>;

	fn into_iter(self) -> Self::IntoIter {
		self.records.iter()
	}
}

/// Converts a declaration position into its token.
///
/// `u32::MAX` is reserved for uninitialized tokens, so the last usable
/// position is one below it.
fn issue_token(index: usize) -> PutToken {
	debug_assert!(index < u32::MAX as usize, "declaration position {index} exceeds the token range");
	PutToken::new(index as u32)
}
