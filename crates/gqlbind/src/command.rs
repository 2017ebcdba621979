use crate::Cli;
use crate::CommandResult;

/// A `gqlbind` subcommand. The global [`Cli`] flags are handed over so a
/// command can tune its own output (e.g. `--verbose`).
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
