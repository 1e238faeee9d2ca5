//! Tab-bar toolbar item registry.
//!
//! Contributions declare toolbar items bound to a command id; the tab-bar
//! rendering layer asks [`ToolbarRegistry::active_items_for`] which items to
//! show for a widget. An item is shown when its command is currently enabled
//! (per [`CommandEnablement`](lattice_command::CommandEnablement)) and its own
//! activity predicate accepts the widget.
//!
//! The registry is created once at shell startup, populated by running each
//! [`ToolbarContribution`] exactly once, and queried for the lifetime of the
//! process. There is no unregistration.

pub mod contribution;
pub mod error;
pub mod item;
pub mod registry;

pub use contribution::{ToolbarContribution, install_contributions};
pub use error::ToolbarError;
pub use item::{ActivityPredicate, ToolbarItem};
pub use registry::ToolbarRegistry;
