use clap::CommandFactory;
use crate::commands;
use std::path::Path;

#[derive(clap::Parser, Debug)]
#[command(
    name = "gqlbind",
    version,
    about = "Builds the generated-code object model for a GraphQL schema.",
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable verbose output (also logs every unbound field).",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// With no subcommand, print the help text followed by a pointer at
    /// `build` that reflects whether a config file is in the working
    /// directory.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        let config_present = Path::new(commands::DEFAULT_CONFIG_FILE).is_file();
        println!();
        println!("{}", usage_hint(config_present));
        Ok(())
    }
}

pub(crate) fn usage_hint(config_present: bool) -> String {
    if config_present {
        format!(
            "Found `{}`. Run `gqlbind build <FILE_OR_DIR_PATHS>` to build \
            the object model with it.",
            commands::DEFAULT_CONFIG_FILE,
        )
    } else {
        format!(
            "Run `gqlbind build <FILE_OR_DIR_PATHS>` to build the object \
            model. Pass `--config <PATH>` or add a `{}` file to bind schema \
            types to native structures.",
            commands::DEFAULT_CONFIG_FILE,
        )
    }
}
