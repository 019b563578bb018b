use super::record::DeclarationRecord;
use crate::token::{PutToken, PutTokenT};

/// Builder returned by an untyped declaration.
///
/// Holds the freshly appended record mutably, so no further declaration can be
/// made on the same list until the setter is dropped or turned into its token.
#[derive(Debug)]
pub struct AliasSetter<'a> {
	record: &'a mut DeclarationRecord,
	token: PutToken,
}

impl<'a> AliasSetter<'a> {
	pub(crate) fn new(record: &'a mut DeclarationRecord, token: PutToken) -> Self {
		Self { record, token }
	}

	/// Sets the persistent alias of the declared product, replacing any earlier one.
	pub fn set_alias(mut self, alias: impl Into<String>) -> Self {
		self.record.alias = alias.into();
		self
	}

	/// Returns the issued token.
	pub fn token(&self) -> PutToken {
		self.token
	}

	/// Consumes the setter, returning the issued token.
	pub fn into_token(self) -> PutToken {
		self.token
	}

	/// Returns the record this setter points at.
	pub fn record(&self) -> &DeclarationRecord {
		self.record
	}

	/// Attaches the product type to the setter.
	///
	/// Only the declaration operations call this, right after appending a record
	/// of type `T`, so the tag always matches the record.
	pub(crate) fn narrow<T: 'static>(self) -> AliasSetterT<'a, T> {
		debug_assert!(self.record.type_identity().is::<T>());
		AliasSetterT {
			token: PutTokenT::new(self.token.index()),
			record: self.record,
		}
	}
}

impl From<AliasSetter<'_>> for PutToken {
	fn from(setter: AliasSetter<'_>) -> Self {
		setter.token
	}
}

/// Builder returned by a typed declaration.
#[derive(Debug)]
pub struct AliasSetterT<'a, T> {
	record: &'a mut DeclarationRecord,
	token: PutTokenT<T>,
}

impl<T> AliasSetterT<'_, T> {
	/// Sets the persistent alias of the declared product, replacing any earlier one.
	pub fn set_alias(mut self, alias: impl Into<String>) -> Self {
		self.record.alias = alias.into();
		self
	}

	/// Returns the issued token.
	pub fn token(&self) -> PutTokenT<T> {
		self.token
	}

	/// Consumes the setter, returning the issued token.
	pub fn into_token(self) -> PutTokenT<T> {
		self.token
	}

	/// Consumes the setter, returning the issued token without its type tag.
	pub fn into_erased(self) -> PutToken {
		self.token.erased()
	}

	/// Returns the record this setter points at.
	pub fn record(&self) -> &DeclarationRecord {
		self.record
	}
}

impl<T> From<AliasSetterT<'_, T>> for PutTokenT<T> {
	fn from(setter: AliasSetterT<'_, T>) -> Self {
		setter.token
	}
}

impl<T> From<AliasSetterT<'_, T>> for PutToken {
	fn from(setter: AliasSetterT<'_, T>) -> Self {
		setter.token.erased()
	}
}
