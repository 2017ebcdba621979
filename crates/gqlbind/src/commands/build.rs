use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use gqlbind_core::Config;
use gqlbind_core::model::Model;
use gqlbind_core::model::ModelBuilder;
use gqlbind_core::model::Object;
use gqlbind_core::types::TypeTable;
use std::collections::HashSet;
use std::fmt::Write;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

pub(crate) const DEFAULT_CONFIG_FILE: &str = "gqlbind.yml";

#[derive(Debug, clap::Args)]
pub(crate) struct BuildCmd {
    #[arg(
        help="Path to a YAML binding configuration file. Defaults to \
             `gqlbind.yml` in the working directory when that file exists.",
        long,
    )]
    config: Option<PathBuf>,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    schema_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl BuildCmd {
    fn build_model(&self) -> anyhow::Result<(usize, Model)> {
        let config = self.load_config()?;
        let file_paths = self.find_schema_files()?;
        if file_paths.is_empty() {
            anyhow::bail!("No schema files were found");
        }
        let num_files = file_paths.len();

        let table = TypeTable::builder()
            .load_files(file_paths)?
            .build(&config)?;
        let model = ModelBuilder::new(&table, &config).build()?;
        Ok((num_files, model))
    }

    fn find_schema_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        // Normalize the set of file extensions to filter with
        let schema_exts: HashSet<String> =
            self.schema_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry.with_context(|| format!(
                    "Failed to scan for schema files at/under {}",
                    path.display(),
                ))?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }
                log::trace!("Found file at {entry_path:#?}.");
                if let Some(ext) = entry_path.extension().map(|s| s.to_string_lossy())
                    && schema_exts.contains(&*ext) {
                    file_paths.push(canonicalize(entry_path)?);
                }
            }
        }

        // A single file passed explicitly is loaded even if its extension
        // isn't one of the --schema-exts.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            let first_arg_path = canonicalize(first_arg_path)?;
            log::warn!(
                "Proceeding to load {first_arg_path:#?} even though it doesn't \
                match any of the --schema-exts ({}).",
                schema_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path);
        }

        log::debug!("Found {} schema files to load.", file_paths.len());
        Ok(file_paths)
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        let config_path = match &self.config {
            Some(config_path) => Some(config_path.to_owned()),
            None => Some(PathBuf::from(DEFAULT_CONFIG_FILE))
                .filter(|default_path| default_path.is_file()),
        };
        match config_path {
            Some(config_path) => {
                log::debug!("Loading configuration from {config_path:#?}.");
                Ok(Config::load_file(config_path)?)
            },
            None => {
                log::debug!("No configuration file found; using defaults.");
                Ok(Config::default())
            },
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for BuildCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let (num_files, model) = match self.build_model() {
            Ok(result) => result,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to build the object model: {err:#}",
                output_utils::RED_X,
            )),
        };

        CommandResult::stdout(format_args!(
            "{} Built {} objects from {num_files} schema files:\n{}",
            output_utils::GREEN_CHECK,
            model.objects().len(),
            render_model(&model),
        ))
    }
}

fn canonicalize(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve the path {}", path.display()))
}

fn render_model(model: &Model) -> String {
    let mut out = String::new();
    for object in model.objects() {
        render_object(&mut out, object);
    }

    let num_diagnostics = model.diagnostics().count();
    if num_diagnostics > 0 {
        let _ = write!(
            out,
            "\n{num_diagnostics} fields could not be bound to a native member \
            and will be resolved by hand-written resolvers.",
        );
    } else {
        out.push_str("\nEvery field bound to a native member or configured resolver.");
    }
    out
}

fn render_object(out: &mut String, object: &Object) {
    let mut flags = vec![];
    if object.root() {
        flags.push("root");
    }
    if object.in_typemap() {
        flags.push("in typemap");
    }
    if object.disable_concurrency() {
        flags.push("serial");
    }
    if object.stream() {
        flags.push("stream");
    }

    let _ = write!(out, "  {} {}", object.kind(), object.name());
    if let Some(native) = object.native() {
        let _ = write!(out, " => {native}");
    }
    if !flags.is_empty() {
        let _ = write!(out, " [{}]", flags.join(", "));
    }
    if object.has_resolvers() {
        let _ = write!(out, " (resolver: {})", object.resolver_interface().path());
    }
    out.push('\n');

    for field in object.fields() {
        let _ = write!(
            out,
            "    {}: {} -> {}",
            field.name(),
            field.type_ref(),
            field.generated_name(),
        );
        if field.is_resolver() {
            out.push_str(" (resolver)");
        } else if let Some(access) = field.access() {
            let _ = write!(out, " (.{})", access.member());
        }
        out.push('\n');

        for arg in field.arguments() {
            let _ = write!(
                out,
                "      {}: {} -> {}",
                arg.name(),
                arg.type_ref(),
                arg.generated_name(),
            );
            if let Some(default_value) = arg.default_value() {
                let _ = write!(out, " = {default_value}");
            }
            out.push('\n');
        }
    }
}
