use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ConfigError>;

fn default_exec_module() -> String {
    "exec".to_string()
}

/// User-supplied binding overrides.
///
/// Usually loaded from a YAML file:
///
/// ```yaml
/// exec:
///   module: generated::exec
/// struct_tag: json
/// models:
///   User:
///     model: app::model::User
///     members:
///       - name: ID
///       - name: FullName
///         tags: { json: name }
///     fields:
///       friends:
///         resolver: true
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub exec: ExecConfig,
    pub models: IndexMap<String, TypeMapEntry>,
    pub struct_tag: Option<String>,
}
impl Config {
    /// The per-field overrides for `type_name.field_name`, if any.
    pub fn field_override(
        &self,
        type_name: &str,
        field_name: &str,
    ) -> Option<&FieldOverride> {
        self.models
            .get(type_name)
            .and_then(|entry| entry.fields.get(field_name))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|err| ConfigError::ParseError {
            file: None,
            err: err.to_string(),
        })
    }

    pub fn load_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = std::fs::read_to_string(file_path).map_err(|err| {
            ConfigError::ReadError {
                file: file_path.to_path_buf(),
                err: err.to_string(),
            }
        })?;
        serde_yaml::from_str(content.as_str()).map_err(|err| {
            ConfigError::ParseError {
                file: Some(file_path.to_path_buf()),
                err: err.to_string(),
            }
        })
    }

    /// Indicates whether the user has bound `type_name` to a native type of
    /// their own rather than letting the emitter generate one.
    pub fn user_defined(&self, type_name: &str) -> bool {
        self.models
            .get(type_name)
            .is_some_and(|entry| entry.model.is_some())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExecConfig {
    /// Module (or package) path that the synthesized resolver interfaces are
    /// generated into.
    pub module: String,
}
impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            module: default_exec_module(),
        }
    }
}

/// Binding configuration for one schema type.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypeMapEntry {
    pub fields: IndexMap<String, FieldOverride>,
    pub kind: NativeKind,
    pub members: Vec<NativeMember>,
    /// Path of the native type this schema type is bound to.
    pub model: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldOverride {
    /// Explicit name for the generated field (before normalization).
    pub field_name: Option<String>,
    /// Always back this field with a hand-written resolver.
    pub resolver: bool,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NativeKind {
    Map,
    #[default]
    Struct,
}

/// A member (variable or method) of a user-bound native structure.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NativeMember {
    pub method: bool,
    pub name: String,
    /// Number of parameters a method member accepts.
    pub params: usize,
    /// Struct tags attached to a variable member (tag key -> tag value).
    pub tags: IndexMap<String, String>,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Failed to parse the configuration{}: {err}", display_file(file.as_deref()))]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error("Failed to read the configuration file at {}: {err}", file.display())]
    ReadError {
        file: PathBuf,
        err: String,
    },
}

fn display_file(file: Option<&Path>) -> String {
    file.map(|file| format!(" at {}", file.display()))
        .unwrap_or_default()
}
