//! Tab-bar toolbar item registry.

use std::collections::hash_map::Entry;
use std::sync::Arc;

use lattice_command::CommandEnablement;
use rustc_hash::FxHashMap;

use crate::error::ToolbarError;
use crate::item::ToolbarItem;

/// Registry of tab-bar toolbar items, keyed by item id.
///
/// Owns its item map exclusively; external code mutates it only through
/// [`register_item`](Self::register_item). The enablement oracle is supplied
/// at construction and consulted on every query.
pub struct ToolbarRegistry<W> {
	items: FxHashMap<String, ToolbarItem<W>>,
	enablement: Arc<dyn CommandEnablement>,
}

impl<W> ToolbarRegistry<W> {
	/// Creates an empty registry backed by the given enablement oracle.
	pub fn new(enablement: Arc<dyn CommandEnablement>) -> Self {
		Self {
			items: FxHashMap::default(),
			enablement,
		}
	}

	/// Registers the given item under its id.
	///
	/// Fails with [`ToolbarError::DuplicateItem`] when an item with the same
	/// id already exists; the existing item is left untouched.
	pub fn register_item(&mut self, item: ToolbarItem<W>) -> Result<(), ToolbarError> {
		match self.items.entry(item.id.clone()) {
			Entry::Occupied(_) => {
				tracing::warn!(id = %item.id, "rejected duplicate toolbar item registration");
				Err(ToolbarError::DuplicateItem { id: item.id })
			}
			Entry::Vacant(slot) => {
				tracing::debug!(id = %item.id, command = %item.command, "registered toolbar item");
				slot.insert(item);
				Ok(())
			}
		}
	}

	/// Returns the items to show for the given widget, leftmost first.
	///
	/// An item is included iff its command is currently enabled and its own
	/// activity predicate accepts the widget. The result is ordered by
	/// priority ascending, ties broken by id ascending, so equal-priority
	/// items render in a stable order regardless of registration order.
	pub fn active_items_for(&self, widget: &W) -> Vec<&ToolbarItem<W>> {
		let mut active: Vec<&ToolbarItem<W>> = self
			.items
			.values()
			.filter(|item| self.enablement.is_enabled(&item.command))
			.filter(|item| (item.is_active)(widget))
			.collect();
		active.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.id.cmp(&b.id)));
		active
	}

	/// Returns the item registered under the given id.
	pub fn get(&self, id: &str) -> Option<&ToolbarItem<W>> {
		self.items.get(id)
	}

	/// Returns the number of registered items.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if no items are registered.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}
