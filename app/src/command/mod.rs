//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own type, dispatched
//! statically from `main` without boxing or runtime casting. Adding a new
//! command means implementing `CommandStrategy` for a new strategy type.

mod extract;
mod init;
mod stats;
mod version;

pub use extract::{ExtractInput, ExtractStrategy};
pub use init::InitStrategy;
pub use stats::{StatsInput, StatsStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via the associated type,
/// enabling type-safe parameter passing without runtime casting.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
