// graft-cli/src/lib.rs
//
// Library portion of the Graft CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;

// Re-export items needed by the binary or integration tests
pub use cli::{CheckArgs, Cli, Commands, InfoArgs, NewArgs};
pub use commands::check::run_check;
pub use commands::info::run_info;
pub use commands::new::run_new;
