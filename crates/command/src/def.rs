//! Command definition type.

/// Definition of a command known to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
	/// Unique identifier of the command.
	pub id: String,
	/// Display label. UI surfaces fall back to this when an item carries no
	/// tooltip or icon of its own.
	pub label: Option<String>,
	/// Icon class rendered next to (or instead of) the label.
	pub icon_class: Option<String>,
}

impl Command {
	/// Creates a command with the given id and no label or icon.
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: None,
			icon_class: None,
		}
	}

	/// Sets the display label.
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Sets the icon class.
	pub fn with_icon_class(mut self, icon_class: impl Into<String>) -> Self {
		self.icon_class = Some(icon_class.into());
		self
	}
}
