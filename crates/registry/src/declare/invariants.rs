#![allow(dead_code)]

use kiln_primitives::{BranchType, Transition, TypeIdentity};

use super::ProductDeclarations;

struct Hits;
struct Clusters;

/// Invariant: token positions follow declaration order.
///
/// The k-th declaration on a fresh list returns position k-1 and the list grows
/// by exactly one record per call.
#[cfg_attr(test, test)]
pub(crate) fn test_token_positions_follow_call_order() {
	let mut decls = ProductDeclarations::new();
	let a = decls.declare::<Hits>().into_token();
	let b = decls.declare_named::<Clusters>("barrel").into_token();
	let c = decls
		.declare_type_event(TypeIdentity::of::<Hits>(), "endcap")
		.into_token();

	assert_eq!([a.index(), b.index(), c.index()], [0, 1, 2]);
	assert_eq!(decls.len(), 3);
	assert_eq!(decls.get(b).unwrap().instance_name(), "barrel");
	assert_eq!(decls.get(c).unwrap().type_identity(), TypeIdentity::of::<Hits>());
}

/// Invariant: an alias setter writes only its own record.
#[cfg_attr(test, test)]
pub(crate) fn test_alias_targets_own_record() {
	let mut decls = ProductDeclarations::new();
	decls.declare::<Hits>();
	decls.declare_named::<Clusters>("aux").set_alias("first").set_alias("second");
	decls.declare_named::<Hits>("other");

	let aliases: Vec<_> = decls.iter().map(|r| r.alias()).collect();
	assert_eq!(aliases, ["", "second", ""]);
}

/// Invariant: legacy and modern selectors produce identical records.
#[cfg_attr(test, test)]
pub(crate) fn test_legacy_selector_matches_modern() {
	for branch in BranchType::ALL {
		let mut legacy = ProductDeclarations::new();
		legacy.declare_in::<Hits>(branch, "x").set_alias("h");

		let mut modern = ProductDeclarations::new();
		modern
			.declare_in::<Hits>(Transition::from(branch), "x")
			.set_alias("h");

		assert_eq!(legacy.records(), modern.records(), "{branch:?}");
	}
}
