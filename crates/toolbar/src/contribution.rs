//! Contribution hook for toolbar items.

use crate::error::ToolbarError;
use crate::registry::ToolbarRegistry;

/// A module that contributes toolbar items to the shell.
///
/// Implementations are collected by whatever assembles the shell and invoked
/// exactly once, sequentially, during initialization.
pub trait ToolbarContribution<W> {
	/// Registers this contribution's items into the given registry.
	fn register_toolbar_items(&self, registry: &mut ToolbarRegistry<W>) -> Result<(), ToolbarError>;
}

/// Runs each contribution against the registry in order.
///
/// Stops at the first failure so a duplicate id between contributions aborts
/// initialization instead of leaving a half-populated toolbar unnoticed.
pub fn install_contributions<W>(
	registry: &mut ToolbarRegistry<W>,
	contributions: &[&dyn ToolbarContribution<W>],
) -> Result<(), ToolbarError> {
	for contribution in contributions {
		contribution.register_toolbar_items(registry)?;
	}
	tracing::debug!(
		contributions = contributions.len(),
		items = registry.len(),
		"installed toolbar contributions"
	);
	Ok(())
}
