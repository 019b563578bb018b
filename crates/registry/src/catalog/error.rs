use kiln_primitives::{BranchType, Transition};

/// Registration errors reported by [`super::ProductRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// The module already registered a product with the same transition, type and
	/// instance name.
	#[error(
		"duplicate product: module={module_label} type={type_name} instance={instance_name:?} transition={transition} process={process_name}"
	)]
	DuplicateProduct {
		module_label: String,
		type_name: &'static str,
		instance_name: String,
		transition: Transition,
		process_name: String,
	},
	/// The alias is already bound to another product of the same branch type.
	#[error(
		"alias {alias:?} in {branch_type} already used by module={existing_module}, requested by module={incoming_module}"
	)]
	AliasConflict {
		alias: String,
		branch_type: BranchType,
		existing_module: String,
		incoming_module: String,
	},
}
