use kiln_primitives::{BranchType, Transition, TypeIdentity};
use serde::Serialize;

use crate::declare::DeclarationRecord;
use crate::module::ModuleDescription;

/// A declaration attributed to the module that made it.
///
/// This is what the bulk-loader hands to a [`super::ProductSink`]. Token positions
/// are deliberately absent; they only matter to the declaring module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDescription {
	pub module_label: String,
	pub module_type: String,
	pub process_name: String,
	pub transition: Transition,
	pub type_identity: TypeIdentity,
	pub instance_name: String,
	pub alias: String,
	/// Declared by a listener module rather than a scheduled producer.
	pub from_listener: bool,
}

impl ProductDescription {
	/// Attributes `record` to `module`.
	pub fn new(
		record: &DeclarationRecord,
		module: &ModuleDescription,
		from_listener: bool,
	) -> Self {
		Self {
			module_label: module.label().to_owned(),
			module_type: module.module_type().to_owned(),
			process_name: module.process_name().to_owned(),
			transition: record.transition(),
			type_identity: record.type_identity(),
			instance_name: record.instance_name().to_owned(),
			alias: record.alias().to_owned(),
			from_listener,
		}
	}

	/// Returns the key the registry deduplicates on.
	pub fn key(&self) -> ProductKey {
		ProductKey {
			transition: self.transition,
			type_identity: self.type_identity,
			module_label: self.module_label.clone(),
			instance_name: self.instance_name.clone(),
			process_name: self.process_name.clone(),
		}
	}

	pub fn branch_type(&self) -> BranchType {
		self.transition.branch_type()
	}

	pub fn is_end_transition(&self) -> bool {
		self.transition.is_end_transition()
	}

	/// Projects the description onto its serializable catalog form.
	pub fn catalog_entry(&self) -> CatalogEntry {
		CatalogEntry {
			module_label: self.module_label.clone(),
			module_type: self.module_type.clone(),
			process_name: self.process_name.clone(),
			transition: self.transition,
			branch_type: self.branch_type(),
			type_name: self.type_identity.name(),
			instance_name: self.instance_name.clone(),
			alias: self.alias.clone(),
			from_listener: self.from_listener,
		}
	}
}

/// Identity of a product across the whole process.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductKey {
	pub transition: Transition,
	pub type_identity: TypeIdentity,
	pub module_label: String,
	pub instance_name: String,
	pub process_name: String,
}

impl std::fmt::Display for ProductKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{}:{}:{}:{}:{}",
			self.transition,
			self.type_identity,
			self.module_label,
			self.instance_name,
			self.process_name
		)
	}
}

/// Serializable view of one registered product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
	pub module_label: String,
	pub module_type: String,
	pub process_name: String,
	pub transition: Transition,
	pub branch_type: BranchType,
	pub type_name: &'static str,
	#[serde(skip_serializing_if = "String::is_empty")]
	pub instance_name: String,
	#[serde(skip_serializing_if = "String::is_empty")]
	pub alias: String,
	pub from_listener: bool,
}
