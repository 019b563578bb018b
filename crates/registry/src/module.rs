/// Identity of the module that declares products.
///
/// The declaration core never inspects it; it is copied into every product
/// description handed to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleDescription {
	label: String,
	module_type: String,
	process_name: String,
}

impl ModuleDescription {
	/// Creates a description for the module instance `label` of type `module_type`
	/// running in process `process_name`.
	pub fn new(
		label: impl Into<String>,
		module_type: impl Into<String>,
		process_name: impl Into<String>,
	) -> Self {
		Self {
			label: label.into(),
			module_type: module_type.into(),
			process_name: process_name.into(),
		}
	}

	/// Returns the configured instance label.
	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn module_type(&self) -> &str {
		&self.module_type
	}

	pub fn process_name(&self) -> &str {
		&self.process_name
	}
}

impl core::fmt::Display for ModuleDescription {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "{}:{}@{}", self.module_type, self.label, self.process_name)
	}
}
