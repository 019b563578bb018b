use tracing::debug;

use super::{DeclarationRecord, ProductDeclarations};
use crate::catalog::{ProductDescription, ProductSink};
use crate::module::ModuleDescription;

impl ProductDeclarations {
	/// Registers `records` with `sink` on behalf of `module`, preserving order.
	///
	/// `records` is usually a slice of [`ProductDeclarations::records`]; pass a
	/// sub-slice to load a range. Stops at the first error the sink reports.
	pub fn add_to_registry<'r, S>(
		records: impl IntoIterator<Item = &'r DeclarationRecord>,
		module: &ModuleDescription,
		sink: &mut S,
		is_listener: bool,
	) -> Result<(), S::Error>
	where
		S: ProductSink + ?Sized,
	{
		let mut count = 0usize;
		for record in records {
			sink.add_product(ProductDescription::new(record, module, is_listener))?;
			count += 1;
		}
		debug!(module = %module, count, listener = is_listener, "loaded product declarations");
		Ok(())
	}

	/// Registers every declared product with `sink` on behalf of `module`.
	pub fn register<S>(
		&self,
		module: &ModuleDescription,
		sink: &mut S,
		is_listener: bool,
	) -> Result<(), S::Error>
	where
		S: ProductSink + ?Sized,
	{
		Self::add_to_registry(&self.records, module, sink, is_listener)
	}
}
