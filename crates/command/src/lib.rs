//! Command descriptors and the command enablement authority.
//!
//! A [`Command`] names something the shell can do; handlers decide whether it
//! can be done right now. UI surfaces (toolbars, menus) never execute anything
//! through this crate, they only ask [`CommandEnablement::is_enabled`] before
//! showing a control bound to a command.

pub mod def;
pub mod enablement;
pub mod registry;

pub use def::Command;
pub use enablement::{AlwaysEnabled, CommandEnablement, CommandHandler};
pub use registry::{CommandError, CommandRegistry};
