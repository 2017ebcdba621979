mod build;

use crate::Cli;
use crate::CommandResult;
use build::BuildCmd;
pub(crate) use build::DEFAULT_CONFIG_FILE;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlbind")]
pub(crate) enum CommandEnum {
    /// Build the object model for a schema and print a summary of it.
    Build(Box<BuildCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Build(cmd) => cmd.run(cli).await
        }
    }
}
