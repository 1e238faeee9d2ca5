//! Enablement traits consulted by UI surfaces.

/// Authority queried for whether a command is currently enabled.
///
/// Implemented by [`CommandRegistry`](crate::CommandRegistry); consumers that
/// only need the query (toolbars, menus) should depend on this trait rather
/// than the concrete registry.
pub trait CommandEnablement {
	/// Returns true if the command with the given id can currently run.
	fn is_enabled(&self, command: &str) -> bool;
}

/// Per-command handler surface.
///
/// Execution lives elsewhere in the shell; the registry only consults handlers
/// for enablement. A command with no handler at all is never enabled.
pub trait CommandHandler {
	/// Returns true if this handler can currently serve its command.
	fn is_enabled(&self) -> bool {
		true
	}
}

/// Handler that is always enabled, for commands without dynamic state.
pub struct AlwaysEnabled;

impl CommandHandler for AlwaysEnabled {}

impl<F> CommandHandler for F
where
	F: Fn() -> bool,
{
	fn is_enabled(&self) -> bool {
		self()
	}
}
