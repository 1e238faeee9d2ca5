//! Command registry with handler-based enablement.

use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

use crate::def::Command;
use crate::enablement::{CommandEnablement, CommandHandler};

/// Command registration errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CommandError {
	/// Two commands were registered under the same id.
	#[error("a command is already registered with the '{id}' ID")]
	DuplicateCommand { id: String },
}

/// Registry of all commands known to the shell.
///
/// Populated once during shell initialization and queried afterwards.
/// Registration rejects duplicate ids; the first registration always wins.
#[derive(Default)]
pub struct CommandRegistry {
	commands: FxHashMap<String, Command>,
	handlers: FxHashMap<String, Vec<Box<dyn CommandHandler>>>,
}

impl CommandRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers the given command.
	///
	/// Fails with [`CommandError::DuplicateCommand`] when a command with the
	/// same id already exists; the existing command is left untouched.
	pub fn register(&mut self, command: Command) -> Result<(), CommandError> {
		match self.commands.entry(command.id.clone()) {
			Entry::Occupied(_) => {
				tracing::warn!(id = %command.id, "rejected duplicate command registration");
				Err(CommandError::DuplicateCommand { id: command.id })
			}
			Entry::Vacant(slot) => {
				tracing::debug!(id = %command.id, "registered command");
				slot.insert(command);
				Ok(())
			}
		}
	}

	/// Attaches a handler to the command with the given id.
	///
	/// Handlers may be attached before the command itself is registered; they
	/// are not consulted until it is.
	pub fn register_handler(
		&mut self,
		id: impl Into<String>,
		handler: impl CommandHandler + 'static,
	) {
		self.handlers
			.entry(id.into())
			.or_default()
			.push(Box::new(handler));
	}

	/// Returns the command registered under the given id.
	pub fn get(&self, id: &str) -> Option<&Command> {
		self.commands.get(id)
	}

	/// Returns the number of registered commands.
	pub fn len(&self) -> usize {
		self.commands.len()
	}

	/// Returns true if no commands are registered.
	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}
}

impl CommandEnablement for CommandRegistry {
	/// A command is enabled iff it is registered and at least one of its
	/// handlers reports enabled.
	fn is_enabled(&self, command: &str) -> bool {
		self.commands.contains_key(command)
			&& self
				.handlers
				.get(command)
				.is_some_and(|handlers| handlers.iter().any(|h| h.is_enabled()))
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;
	use std::sync::atomic::{AtomicBool, Ordering};

	use super::*;
	use crate::enablement::AlwaysEnabled;

	/// Registering two commands under the same id fails on the second call
	/// and keeps the first registration.
	#[test]
	fn test_duplicate_command_rejected() {
		let mut registry = CommandRegistry::new();
		registry
			.register(Command::new("save").with_label("Save"))
			.expect("first registration should succeed");

		let err = registry
			.register(Command::new("save").with_label("Save As"))
			.expect_err("second registration should fail");
		assert!(matches!(err, CommandError::DuplicateCommand { id } if id == "save"));

		let stored = registry.get("save").expect("first command should remain");
		assert_eq!(stored.label.as_deref(), Some("Save"));
		assert_eq!(registry.len(), 1);
	}

	/// A registered command with no handler is not enabled.
	#[test]
	fn test_command_without_handler_disabled() {
		let mut registry = CommandRegistry::new();
		registry.register(Command::new("save")).unwrap();
		assert!(!registry.is_enabled("save"));
	}

	/// An unknown command id is never enabled, even with a handler attached.
	#[test]
	fn test_unknown_command_disabled() {
		let mut registry = CommandRegistry::new();
		registry.register_handler("ghost", AlwaysEnabled);
		assert!(!registry.is_enabled("ghost"));
	}

	/// Enablement follows the handler's current answer.
	#[test]
	fn test_handler_drives_enablement() {
		let mut registry = CommandRegistry::new();
		registry.register(Command::new("undo")).unwrap();

		let can_undo = Arc::new(AtomicBool::new(false));
		let flag = Arc::clone(&can_undo);
		registry.register_handler("undo", move || flag.load(Ordering::Relaxed));

		assert!(!registry.is_enabled("undo"));
		can_undo.store(true, Ordering::Relaxed);
		assert!(registry.is_enabled("undo"));
	}

	/// One enabled handler is enough when several are attached.
	#[test]
	fn test_any_enabled_handler_wins() {
		let mut registry = CommandRegistry::new();
		registry.register(Command::new("paste")).unwrap();
		registry.register_handler("paste", || false);
		registry.register_handler("paste", AlwaysEnabled);
		assert!(registry.is_enabled("paste"));
	}
}
