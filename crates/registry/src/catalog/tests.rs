use kiln_primitives::{BranchType, Transition};
use pretty_assertions::assert_eq;

use super::{Collision, CollisionKind, DuplicatePolicy, ProductKey, ProductRegistry, RegistryError};
use crate::declare::ProductDeclarations;
use crate::module::ModuleDescription;

struct Hits;
struct Tracks;

fn module(label: &str) -> ModuleDescription {
	ModuleDescription::new(label, "TestProducer", "RECO")
}

#[test]
fn test_registration_preserves_order() {
	let mut decls = ProductDeclarations::new();
	decls.declare::<Hits>();
	decls.declare_named::<Tracks>("aux");

	let mut registry = ProductRegistry::new();
	decls.register(&module("m"), &mut registry, false).unwrap();

	let instances: Vec<_> = registry
		.products()
		.iter()
		.map(|p| p.instance_name.as_str())
		.collect();
	assert_eq!(instances, ["", "aux"]);
	assert_eq!(registry.len(), 2);
	assert!(registry.collisions().is_empty());
}

#[test]
fn test_duplicate_product_rejected() {
	let mut decls = ProductDeclarations::new();
	decls.declare_named::<Hits>("x");
	decls.declare_named::<Hits>("x");

	let mut registry = ProductRegistry::new().duplicate_policy(DuplicatePolicy::Reject);
	let err = decls.register(&module("m"), &mut registry, false).unwrap_err();

	assert!(matches!(
		err,
		RegistryError::DuplicateProduct { ref module_label, ref instance_name, transition: Transition::Event, .. }
			if module_label == "m" && instance_name == "x"
	));
	assert_eq!(registry.len(), 1, "first declaration stays registered");
}

#[test]
fn test_same_product_from_two_modules_is_not_a_duplicate() {
	let mut decls = ProductDeclarations::new();
	decls.declare::<Hits>();

	let mut registry = ProductRegistry::new();
	decls.register(&module("a"), &mut registry, false).unwrap();
	decls.register(&module("b"), &mut registry, false).unwrap();
	assert_eq!(registry.len(), 2);
}

#[test]
fn test_same_type_in_different_transitions_is_not_a_duplicate() {
	let mut decls = ProductDeclarations::new();
	decls.declare_in::<Hits>(Transition::BeginRun, "");
	decls.declare_in::<Hits>(Transition::EndRun, "");

	let mut registry = ProductRegistry::new();
	decls.register(&module("m"), &mut registry, false).unwrap();
	assert_eq!(registry.len(), 2);
}

#[test]
fn test_keep_first_records_collision() {
	let mut decls = ProductDeclarations::new();
	decls.declare_named::<Hits>("x").set_alias("first");
	decls.declare_named::<Hits>("x").set_alias("second");

	let mut registry = ProductRegistry::new().duplicate_policy(DuplicatePolicy::KeepFirst);
	decls.register(&module("m"), &mut registry, false).unwrap();

	assert_eq!(registry.len(), 1);
	assert_eq!(registry.products()[0].alias, "first");
	assert_eq!(registry.collisions().len(), 1);
	assert_eq!(registry.collisions()[0].kind, CollisionKind::DuplicateProduct);
	assert!(registry.by_alias(BranchType::InEvent, "second").is_none());
}

#[test]
fn test_alias_conflict_across_modules() {
	let mut a = ProductDeclarations::new();
	a.declare::<Hits>().set_alias("hits");
	let mut b = ProductDeclarations::new();
	b.declare::<Tracks>().set_alias("hits");

	let mut registry = ProductRegistry::new();
	a.register(&module("a"), &mut registry, false).unwrap();
	let err = b.register(&module("b"), &mut registry, false).unwrap_err();

	assert_eq!(
		err,
		RegistryError::AliasConflict {
			alias: "hits".into(),
			branch_type: BranchType::InEvent,
			existing_module: "a".into(),
			incoming_module: "b".into(),
		}
	);
	assert_eq!(registry.by_alias(BranchType::InEvent, "hits").unwrap().module_label, "a");
}

#[test]
fn test_alias_is_scoped_by_branch_type() {
	let mut decls = ProductDeclarations::new();
	decls.declare::<Hits>().set_alias("summary");
	decls.declare_in::<Hits>(BranchType::InRun, "").set_alias("summary");

	let mut registry = ProductRegistry::new();
	decls.register(&module("m"), &mut registry, false).unwrap();

	let run = registry.by_alias(BranchType::InRun, "summary").unwrap();
	assert_eq!(run.transition, Transition::EndRun);
	assert!(run.is_end_transition());
	assert_eq!(
		registry.by_alias(BranchType::InEvent, "summary").unwrap().transition,
		Transition::Event
	);
}

#[test]
fn test_keep_first_drops_conflicting_alias_only() {
	let mut decls = ProductDeclarations::new();
	decls.declare::<Hits>().set_alias("shared");
	decls.declare::<Tracks>().set_alias("shared");

	let mut registry = ProductRegistry::new().duplicate_policy(DuplicatePolicy::KeepFirst);
	decls.register(&module("m"), &mut registry, false).unwrap();

	assert_eq!(registry.len(), 2);
	assert_eq!(registry.products()[1].alias, "");
	let aliases: Vec<_> = registry.catalog().into_iter().map(|e| e.alias).collect();
	assert_eq!(aliases, ["shared", ""]);
	let owner = registry.by_alias(BranchType::InEvent, "shared").unwrap();
	assert!(owner.type_identity.is::<Hits>());
	assert!(matches!(
		registry.collisions()[0].kind,
		CollisionKind::AliasConflict { ref alias } if alias == "shared"
	));
}

#[test]
fn test_rejection_leaves_registry_untouched() {
	let mut first = ProductDeclarations::new();
	first.declare::<Hits>().set_alias("hits");
	let mut registry = ProductRegistry::new();
	first.register(&module("a"), &mut registry, false).unwrap();

	let mut second = ProductDeclarations::new();
	second.declare::<Tracks>().set_alias("hits");
	assert!(second.register(&module("b"), &mut registry, false).is_err());

	assert_eq!(registry.len(), 1);
	assert_eq!(registry.products_for_module("b").count(), 0);
	assert!(registry.collisions().is_empty());
}

#[test]
fn test_lookup_by_key() {
	let mut decls = ProductDeclarations::new();
	decls.declare_named::<Tracks>("pixel");

	let mut registry = ProductRegistry::new();
	decls.register(&module("tracker"), &mut registry, true).unwrap();

	let key = registry.products()[0].key();
	let found = registry.get(&key).unwrap();
	assert!(found.from_listener);
	assert_eq!(found.module_type, "TestProducer");
	assert_eq!(found.process_name, "RECO");
}

#[test]
fn test_catalog_serializes() {
	let mut decls = ProductDeclarations::new();
	decls.declare_in::<Hits>(BranchType::InLumi, "").set_alias("lumiHits");

	let mut registry = ProductRegistry::new();
	decls.register(&module("m"), &mut registry, false).unwrap();

	let json = serde_json::to_value(registry.catalog()).unwrap();
	let entry = &json[0];
	assert_eq!(entry["module_label"], "m");
	assert_eq!(entry["transition"], "EndLuminosityBlock");
	assert_eq!(entry["branch_type"], "InLumi");
	assert_eq!(entry["alias"], "lumiHits");
	assert_eq!(entry["from_listener"], false);
	assert!(entry.get("instance_name").is_none());
}

#[test]
fn test_error_messages_name_the_product() {
	let err = RegistryError::AliasConflict {
		alias: "hits".into(),
		branch_type: BranchType::InRun,
		existing_module: "a".into(),
		incoming_module: "b".into(),
	};
	assert_eq!(
		err.to_string(),
		"alias \"hits\" in Run already used by module=a, requested by module=b"
	);
}

#[test]
fn test_policy_selection() {
	assert_eq!(ProductRegistry::new().policy(), DuplicatePolicy::Reject);
	let expected = if cfg!(debug_assertions) {
		DuplicatePolicy::Reject
	} else {
		DuplicatePolicy::KeepFirst
	};
	assert_eq!(DuplicatePolicy::for_build(), expected);
	assert_eq!(ProductRegistry::for_build().policy(), expected);
	assert_eq!(
		ProductRegistry::new()
			.duplicate_policy(DuplicatePolicy::KeepFirst)
			.policy(),
		DuplicatePolicy::KeepFirst
	);
}

#[test]
fn test_collision_messages_name_both_products() {
	let key = |label: &str| ProductKey {
		transition: Transition::EndRun,
		type_identity: kiln_primitives::TypeIdentity::of::<u32>(),
		module_label: label.into(),
		instance_name: "aux".into(),
		process_name: "RECO".into(),
	};
	assert_eq!(key("a").to_string(), "EndRun:u32:a:aux:RECO");

	let duplicate = Collision {
		kind: CollisionKind::DuplicateProduct,
		existing: key("a"),
		incoming: key("a"),
	};
	assert_eq!(duplicate.to_string(), "duplicate product EndRun:u32:a:aux:RECO dropped");

	let alias = Collision {
		kind: CollisionKind::AliasConflict {
			alias: "runHits".into(),
		},
		existing: key("a"),
		incoming: key("b"),
	};
	assert_eq!(
		alias.to_string(),
		"alias \"runHits\" kept by EndRun:u32:a:aux:RECO, dropped from EndRun:u32:b:aux:RECO"
	);
}
