//! Toolbar registry errors.

/// Toolbar registration errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ToolbarError {
	/// Two toolbar items were registered under the same id. This is a
	/// programmer error between contributions; initialization should fail
	/// loudly rather than pick a winner.
	#[error("a toolbar item is already registered with the '{id}' ID")]
	DuplicateItem { id: String },

	/// A contribution failed wholesale while registering its items.
	#[error("toolbar contribution error: {0}")]
	Contribution(String),
}
