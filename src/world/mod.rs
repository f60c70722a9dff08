//! World module - the sandbox arena.

mod builder;
mod layout;
mod plugin;

pub use builder::{build_sandbox, SandboxEntity};
pub use layout::{Block, SandboxLayout};
pub use plugin::{setup_sandbox, WorldPlugin};
