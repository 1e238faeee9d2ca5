//! Toolbar item definition type.

use std::sync::Arc;

use lattice_command::Command;

/// Decides whether an item applies to the widget the toolbar is drawn for.
///
/// The widget handle `W` is opaque to the registry; it is passed through to
/// predicates untouched.
pub type ActivityPredicate<W> = Arc<dyn Fn(&W) -> bool + Send + Sync>;

/// Definition of a single tab-bar toolbar item.
pub struct ToolbarItem<W> {
	/// Unique identifier of the toolbar item.
	pub id: String,
	/// Id of the command to execute. The command is owned by the command
	/// registry, not by this item.
	pub command: String,
	/// Returns true if the item is active for the given widget.
	pub is_active: ActivityPredicate<W>,
	/// Ordering priority. Can be negative. The smaller the number the further
	/// left the item is placed in the toolbar.
	pub priority: i16,
	/// Optional tooltip. Falls back to the command label when absent.
	pub tooltip: Option<String>,
	/// Optional icon class. Falls back to the command's icon class, then its
	/// label, when absent.
	pub icon_class: Option<String>,
}

impl<W> ToolbarItem<W> {
	/// Creates an item bound to the given command, active for every widget
	/// until [`active_when`](Self::active_when) narrows it.
	pub fn new(id: impl Into<String>, command: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			command: command.into(),
			is_active: Arc::new(|_| true),
			priority: 0,
			tooltip: None,
			icon_class: None,
		}
	}

	/// Sets the activity predicate.
	pub fn active_when(mut self, predicate: impl Fn(&W) -> bool + Send + Sync + 'static) -> Self {
		self.is_active = Arc::new(predicate);
		self
	}

	/// Sets the ordering priority.
	pub fn with_priority(mut self, priority: i16) -> Self {
		self.priority = priority;
		self
	}

	/// Sets the tooltip.
	pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
		self.tooltip = Some(tooltip.into());
		self
	}

	/// Sets the icon class.
	pub fn with_icon_class(mut self, icon_class: impl Into<String>) -> Self {
		self.icon_class = Some(icon_class.into());
		self
	}

	/// Tooltip to render for this item: the item's own tooltip, else the
	/// command's label.
	pub fn tooltip_for<'a>(&'a self, command: &'a Command) -> Option<&'a str> {
		self.tooltip.as_deref().or(command.label.as_deref())
	}

	/// Icon class to render for this item: the item's own icon class, else
	/// the command's icon class, else the command's label.
	pub fn icon_for<'a>(&'a self, command: &'a Command) -> Option<&'a str> {
		self.icon_class
			.as_deref()
			.or(command.icon_class.as_deref())
			.or(command.label.as_deref())
	}
}

impl<W> core::fmt::Debug for ToolbarItem<W> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("ToolbarItem")
			.field("id", &self.id)
			.field("command", &self.command)
			.field("priority", &self.priority)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Tooltip and icon fall back to command metadata when the item carries
	/// none of its own.
	#[test]
	fn test_fallback_to_command_metadata() {
		let command = Command::new("refresh")
			.with_label("Refresh")
			.with_icon_class("codicon-refresh");
		let item: ToolbarItem<()> = ToolbarItem::new("explorer.refresh", "refresh");

		assert_eq!(item.tooltip_for(&command), Some("Refresh"));
		assert_eq!(item.icon_for(&command), Some("codicon-refresh"));
	}

	/// Item-level tooltip and icon take precedence over command metadata.
	#[test]
	fn test_item_metadata_wins() {
		let command = Command::new("refresh")
			.with_label("Refresh")
			.with_icon_class("codicon-refresh");
		let item: ToolbarItem<()> = ToolbarItem::new("explorer.refresh", "refresh")
			.with_tooltip("Refresh Explorer")
			.with_icon_class("codicon-sync");

		assert_eq!(item.tooltip_for(&command), Some("Refresh Explorer"));
		assert_eq!(item.icon_for(&command), Some("codicon-sync"));
	}

	/// With no icon anywhere, the command label stands in for the icon.
	#[test]
	fn test_icon_falls_back_to_label() {
		let command = Command::new("refresh").with_label("Refresh");
		let item: ToolbarItem<()> = ToolbarItem::new("explorer.refresh", "refresh");
		assert_eq!(item.icon_for(&command), Some("Refresh"));
	}
}
