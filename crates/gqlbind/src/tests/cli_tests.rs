use crate::cli::usage_hint;
use crate::commands::CommandEnum;
use crate::Cli;
use clap::CommandFactory;
use clap::Parser;

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn build_with_config_and_paths() {
    let cli = Cli::try_parse_from([
        "gqlbind",
        "-v",
        "build",
        "--config",
        "bindings.yml",
        "schema.graphqls",
        "more/",
    ]).expect("arguments parse");

    assert!(cli.verbose);
    assert!(matches!(cli.cmd, Some(CommandEnum::Build(_))));
}

#[test]
fn no_subcommand_parses_to_default() {
    let cli = Cli::try_parse_from(["gqlbind"]).expect("arguments parse");

    assert!(!cli.verbose);
    assert!(cli.cmd.is_none());
}

#[test]
fn build_without_paths_is_rejected() {
    let err = Cli::try_parse_from(["gqlbind", "build"]).unwrap_err();

    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn usage_hint_points_at_build() {
    let with_config = usage_hint(true);
    assert!(with_config.contains("gqlbind build"));
    assert!(with_config.contains("Found `gqlbind.yml`"));

    let without_config = usage_hint(false);
    assert!(without_config.contains("gqlbind build"));
    assert!(without_config.contains("--config"));
}
