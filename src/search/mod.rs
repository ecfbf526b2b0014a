/* src/search/mod.rs */

//!
//! Duplicate search over a collection of configurations.

#[cfg(feature = "logging")]
use log::debug;

use crate::compare::{SkipSpec, equivalent};
use crate::tree::ConfigEntry;

/// A set of mutually equal configurations.
#[derive(Debug, Clone)]
pub struct DuplicateGroup<'a, I> {
	/// Ids of the members, in input order. The first one is the reference.
	pub ids: Vec<&'a I>,
	/// The reference configuration shared by every member.
	pub config: &'a ConfigEntry,
}

impl<I> DuplicateGroup<'_, I> {
	/// Number of members.
	pub fn len(&self) -> usize {
		self.ids.len()
	}

	/// Never true: a group always holds its reference.
	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	/// True when at least two members share the configuration.
	pub fn is_duplicate(&self) -> bool {
		self.ids.len() >= 2
	}
}

/// Returns, in input order, every candidate equal to `reference` under `skip`.
pub fn find_matches<'a>(
	reference: &ConfigEntry,
	candidates: &'a [ConfigEntry],
	skip: &SkipSpec,
) -> Vec<&'a ConfigEntry> {
	candidates
		.iter()
		.filter(|candidate| equivalent(reference, candidate, skip))
		.collect()
}

/// Splits `entries` into groups of equal configurations.
///
/// Entries are visited in order. The first entry left in the pool becomes
/// the reference of a new group, every remaining pool entry equal to it
/// joins the group, and the whole group leaves the pool. Every id ends up in
/// exactly one group; entries without duplicates form singleton groups.
pub fn partition_duplicates<'a, I>(
	entries: &'a [(I, ConfigEntry)],
	skip: &SkipSpec,
) -> Vec<DuplicateGroup<'a, I>> {
	let mut pool: Vec<usize> = (0..entries.len()).collect();
	let mut groups = Vec::new();

	while !pool.is_empty() {
		let first = pool.remove(0);
		let (reference_id, reference) = &entries[first];

		let (matched, remaining): (Vec<usize>, Vec<usize>) = pool
			.iter()
			.copied()
			.partition(|&i| equivalent(reference, &entries[i].1, skip));
		pool = remaining;

		let mut ids = Vec::with_capacity(matched.len() + 1);
		ids.push(reference_id);
		ids.extend(matched.into_iter().map(|i| &entries[i].0));

		groups.push(DuplicateGroup {
			ids,
			config: reference,
		});
	}

	#[cfg(feature = "logging")]
	debug!(
		"Grouped {} configurations into {} groups ({} with duplicates)",
		entries.len(),
		groups.len(),
		groups.iter().filter(|g| g.is_duplicate()).count()
	);

	groups
}
