//! Built-in commands.

mod authenticate;
mod launch;
mod update;

pub use authenticate::AuthenticateCommand;
pub use launch::LaunchCommand;
pub use update::UpdateCommand;
