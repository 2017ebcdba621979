use crate::ast;
use crate::Config;
use crate::DirectiveDef;
use crate::LiteralError;
use crate::loc;
use crate::NativeKind;
use crate::types::NamedType;
use crate::types::NativeType;
use crate::types::RootOperationKind;
use crate::types::TypeKind;
use crate::types::TypeTable;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, TypeTableBuildError>;

const BUILTIN_SCALAR_NAMES: [&str; 5] = [
    "Boolean",
    "Float",
    "ID",
    "Int",
    "String",
];

/// Utility for populating a [`TypeTable`] from one or more schema documents.
///
/// All schema documents are loaded first; type extensions are merged into
/// their extended definitions and user bindings are attached when
/// [`TypeTableBuilder::build`] is called.
#[derive(Debug)]
pub struct TypeTableBuilder {
    definitions: IndexMap<String, (loc::SourceLocation, ast::TypeDefinition)>,
    directive_defs: IndexMap<String, DirectiveDef>,
    extensions: Vec<(loc::SourceLocation, ast::TypeExtension)>,
    schema_def: Option<(loc::SourceLocation, ast::SchemaDefinition)>,
    str_load_counter: u16,
}
impl TypeTableBuilder {
    pub fn build(mut self, config: &Config) -> Result<TypeTable> {
        for (ext_srcloc, ext) in std::mem::take(&mut self.extensions) {
            self.merge_type_extension(ext_srcloc, ext)?;
        }

        for builtin_def in DirectiveDef::builtins() {
            if !self.directive_defs.contains_key(builtin_def.name()) {
                self.directive_defs.insert(
                    builtin_def.name().to_string(),
                    builtin_def,
                );
            }
        }

        for model_type_name in config.models.keys() {
            if !self.definitions.contains_key(model_type_name)
                && !BUILTIN_SCALAR_NAMES.contains(&model_type_name.as_str()) {
                log::warn!(
                    "The configuration binds a `{model_type_name}` type, but \
                    no type with that name is defined in the schema."
                );
            }
        }

        let mut types = IndexMap::new();
        for scalar_name in BUILTIN_SCALAR_NAMES {
            types.insert(scalar_name.to_string(), Arc::new(
                NamedType::builtin_scalar(
                    scalar_name,
                    native_type_for(config, scalar_name),
                ),
            ));
        }
        for (type_name, (def_location, definition)) in self.definitions {
            let named_type = NamedType {
                def_location,
                kind: TypeKind::from(&definition),
                name: type_name.to_owned(),
                native: native_type_for(config, type_name.as_str()),
                definition: Some(definition),
            };
            types.insert(type_name, Arc::new(named_type));
        }

        let (query_type, mutation_type, subscription_type) =
            match self.schema_def {
                Some((schema_srcloc, schema_def)) => {
                    let query_type = schema_def.query
                        .ok_or(TypeTableBuildError::NoQueryOperationTypeDefined)?;
                    let roots = [
                        (RootOperationKind::Query, Some(&query_type)),
                        (RootOperationKind::Mutation, schema_def.mutation.as_ref()),
                        (RootOperationKind::Subscription, schema_def.subscription.as_ref()),
                    ];
                    for (operation, type_name) in roots {
                        if let Some(type_name) = type_name {
                            check_root_operation_type(
                                &types,
                                operation,
                                type_name,
                                &schema_srcloc,
                            )?;
                        }
                    }
                    (query_type, schema_def.mutation, schema_def.subscription)
                },

                None => {
                    let conventional_root = |type_name: &str| {
                        types.get(type_name)
                            .filter(|t: &&Arc<NamedType>| t.kind() == TypeKind::Object)
                            .map(|_| type_name.to_string())
                    };
                    let query_type = conventional_root("Query")
                        .ok_or(TypeTableBuildError::NoQueryOperationTypeDefined)?;
                    (
                        query_type,
                        conventional_root("Mutation"),
                        conventional_root("Subscription"),
                    )
                },
            };

        Ok(TypeTable {
            directive_defs: self.directive_defs,
            mutation_type,
            query_type,
            subscription_type,
            types,
        })
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let content = std::fs::read_to_string(file_path).map_err(|err| {
                TypeTableBuildError::SchemaFileReadError {
                    file: file_path.to_path_buf(),
                    err: err.to_string(),
                }
            })?;
            self = self.load_str(Some(file_path.to_path_buf()), content.as_str())?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc = ast::parse_schema(content).map_err(|err| {
            TypeTableBuildError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            }
        })?;

        for def in ast_doc.definitions {
            match def {
                ast::Definition::DirectiveDefinition(directive_def) =>
                    self.visit_directive_def(&file_path, directive_def)?,

                ast::Definition::SchemaDefinition(schema_def) =>
                    self.visit_schema_def(&file_path, schema_def)?,

                ast::Definition::TypeDefinition(type_def) =>
                    self.visit_type_def(&file_path, type_def)?,

                ast::Definition::TypeExtension(type_ext) => {
                    let ext_srcloc = loc::SourceLocation::from_schema_ast_position(
                        Some(&file_path),
                        type_extension_position(&type_ext),
                    );
                    self.extensions.push((ext_srcloc, type_ext));
                },
            }
        }

        Ok(self)
    }

    fn merge_type_extension(
        &mut self,
        ext_srcloc: loc::SourceLocation,
        ext: ast::TypeExtension,
    ) -> Result<()> {
        let type_name = type_extension_name(&ext).to_string();
        let Some((_, type_def)) = self.definitions.get_mut(&type_name) else {
            return Err(TypeTableBuildError::ExtensionOfUndefinedType {
                extension_location: ext_srcloc,
                type_name,
            });
        };

        match (type_def, ext) {
            (ast::TypeDefinition::Enum(def), ast::TypeExtension::Enum(ext)) => {
                def.directives.extend(ext.directives);
                def.values.extend(ext.values);
            },

            (ast::TypeDefinition::InputObject(def), ast::TypeExtension::InputObject(ext)) => {
                def.directives.extend(ext.directives);
                def.fields.extend(ext.fields);
            },

            (ast::TypeDefinition::Interface(def), ast::TypeExtension::Interface(ext)) => {
                def.directives.extend(ext.directives);
                def.fields.extend(ext.fields);
                def.implements_interfaces.extend(ext.implements_interfaces);
            },

            (ast::TypeDefinition::Object(def), ast::TypeExtension::Object(ext)) => {
                def.directives.extend(ext.directives);
                def.fields.extend(ext.fields);
                def.implements_interfaces.extend(ext.implements_interfaces);
            },

            (ast::TypeDefinition::Scalar(def), ast::TypeExtension::Scalar(ext)) => {
                def.directives.extend(ext.directives);
            },

            (ast::TypeDefinition::Union(def), ast::TypeExtension::Union(ext)) => {
                def.directives.extend(ext.directives);
                def.types.extend(ext.types);
            },

            (type_def, ext) => {
                return Err(TypeTableBuildError::InvalidExtensionType {
                    extended_type_kind: TypeKind::from(&*type_def),
                    extension_kind: TypeKind::from(&ext),
                    extension_location: ext_srcloc,
                    type_name,
                });
            },
        }

        Ok(())
    }

    pub fn new() -> Self {
        Self {
            definitions: IndexMap::new(),
            directive_defs: IndexMap::new(),
            extensions: vec![],
            schema_def: None,
            str_load_counter: 0,
        }
    }

    fn visit_directive_def(
        &mut self,
        file_path: &Path,
        def: ast::DirectiveDefinition,
    ) -> Result<()> {
        let def_srcloc = loc::SourceLocation::from_schema_ast_position(
            Some(file_path),
            &def.position,
        );
        if let Some(existing_def) = self.directive_defs.get(def.name.as_str()) {
            return Err(TypeTableBuildError::DuplicateDirectiveDefinition {
                def1: existing_def.def_location().to_owned(),
                def2: def_srcloc,
                directive_name: def.name.to_string(),
            });
        }

        let directive_def = DirectiveDef::from_ast(def_srcloc, &def)?;
        self.directive_defs.insert(def.name.to_string(), directive_def);
        Ok(())
    }

    fn visit_schema_def(
        &mut self,
        file_path: &Path,
        def: ast::SchemaDefinition,
    ) -> Result<()> {
        let def_srcloc = loc::SourceLocation::from_schema_ast_position(
            Some(file_path),
            &def.position,
        );
        if let Some((existing_srcloc, _)) = &self.schema_def {
            return Err(TypeTableBuildError::DuplicateSchemaDefinition {
                def1: existing_srcloc.to_owned(),
                def2: def_srcloc,
            });
        }
        self.schema_def = Some((def_srcloc, def));
        Ok(())
    }

    fn visit_type_def(
        &mut self,
        file_path: &Path,
        def: ast::TypeDefinition,
    ) -> Result<()> {
        let type_name = type_definition_name(&def).to_string();
        let def_srcloc = loc::SourceLocation::from_schema_ast_position(
            Some(file_path),
            type_definition_position(&def),
        );

        if type_name.starts_with("__") {
            return Err(TypeTableBuildError::InvalidDunderPrefixedTypeName {
                def_location: def_srcloc,
                type_name,
            });
        }

        if BUILTIN_SCALAR_NAMES.contains(&type_name.as_str()) {
            return Err(TypeTableBuildError::DuplicateTypeDefinition {
                def1: loc::SourceLocation::GraphQLBuiltIn,
                def2: def_srcloc,
                type_name,
            });
        }

        if let Some((existing_srcloc, _)) = self.definitions.get(&type_name) {
            return Err(TypeTableBuildError::DuplicateTypeDefinition {
                def1: existing_srcloc.to_owned(),
                def2: def_srcloc,
                type_name,
            });
        }

        self.definitions.insert(type_name, (def_srcloc, def));
        Ok(())
    }
}
impl Default for TypeTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn check_root_operation_type(
    types: &IndexMap<String, Arc<NamedType>>,
    operation: RootOperationKind,
    type_name: &str,
    schema_srcloc: &loc::SourceLocation,
) -> Result<()> {
    match types.get(type_name) {
        Some(named_type) if named_type.kind() == TypeKind::Object => Ok(()),

        Some(named_type) => Err(TypeTableBuildError::RootOperationTypeNotObject {
            actual_kind: named_type.kind(),
            operation,
            schema_location: schema_srcloc.to_owned(),
            type_name: type_name.to_string(),
        }),

        None => Err(TypeTableBuildError::UndefinedRootOperationType {
            operation,
            schema_location: schema_srcloc.to_owned(),
            type_name: type_name.to_string(),
        }),
    }
}

fn native_type_for(config: &Config, type_name: &str) -> Option<NativeType> {
    let entry = config.models.get(type_name)?;
    let path = entry.model.to_owned()?;
    Some(match entry.kind {
        NativeKind::Map => NativeType::Map { path },
        NativeKind::Struct => NativeType::Struct {
            members: entry.members.to_owned(),
            path,
        },
    })
}

fn type_definition_name(def: &ast::TypeDefinition) -> &str {
    match def {
        ast::TypeDefinition::Enum(t) => t.name.as_str(),
        ast::TypeDefinition::InputObject(t) => t.name.as_str(),
        ast::TypeDefinition::Interface(t) => t.name.as_str(),
        ast::TypeDefinition::Object(t) => t.name.as_str(),
        ast::TypeDefinition::Scalar(t) => t.name.as_str(),
        ast::TypeDefinition::Union(t) => t.name.as_str(),
    }
}

fn type_definition_position(def: &ast::TypeDefinition) -> &ast::Pos {
    match def {
        ast::TypeDefinition::Enum(t) => &t.position,
        ast::TypeDefinition::InputObject(t) => &t.position,
        ast::TypeDefinition::Interface(t) => &t.position,
        ast::TypeDefinition::Object(t) => &t.position,
        ast::TypeDefinition::Scalar(t) => &t.position,
        ast::TypeDefinition::Union(t) => &t.position,
    }
}

fn type_extension_name(ext: &ast::TypeExtension) -> &str {
    match ext {
        ast::TypeExtension::Enum(t) => t.name.as_str(),
        ast::TypeExtension::InputObject(t) => t.name.as_str(),
        ast::TypeExtension::Interface(t) => t.name.as_str(),
        ast::TypeExtension::Object(t) => t.name.as_str(),
        ast::TypeExtension::Scalar(t) => t.name.as_str(),
        ast::TypeExtension::Union(t) => t.name.as_str(),
    }
}

fn type_extension_position(ext: &ast::TypeExtension) -> &ast::Pos {
    match ext {
        ast::TypeExtension::Enum(t) => &t.position,
        ast::TypeExtension::InputObject(t) => &t.position,
        ast::TypeExtension::Interface(t) => &t.position,
        ast::TypeExtension::Object(t) => &t.position,
        ast::TypeExtension::Scalar(t) => &t.position,
        ast::TypeExtension::Union(t) => &t.position,
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TypeTableBuildError {
    #[error(
        "Multiple directive definitions found for `@{directive_name}` \
        ({def1} and {def2})"
    )]
    DuplicateDirectiveDefinition {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
        directive_name: String,
    },

    #[error("Multiple schema definitions found ({def1} and {def2})")]
    DuplicateSchemaDefinition {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error(
        "Multiple definitions of the `{type_name}` type found ({def1} and \
        {def2})"
    )]
    DuplicateTypeDefinition {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Attempted to extend the `{type_name}` type at {extension_location}, \
        but no type with that name is defined"
    )]
    ExtensionOfUndefinedType {
        extension_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "The default value of the `{argument_name}` argument on \
        `@{directive_name}` ({location}) is not valid: {err}"
    )]
    InvalidDirectiveArgumentDefault {
        argument_name: String,
        directive_name: String,
        err: LiteralError,
        location: loc::SourceLocation,
    },

    #[error(
        "Type names must not begin with `__`, but `{type_name}` is defined at \
        {def_location}"
    )]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type is a {extended_type_kind} type, but it is \
        extended as a {extension_kind} type at {extension_location}"
    )]
    InvalidExtensionType {
        extended_type_kind: TypeKind,
        extension_kind: TypeKind,
        extension_location: loc::SourceLocation,
        type_name: String,
    },

    #[error("No query operation type is defined for this schema")]
    NoQueryOperationTypeDefined,

    #[error("Failed to parse schema file {}: {err}", file.display())]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error(
        "The {} root operation type must be an object type, but \
        `{type_name}` is a {actual_kind} type ({schema_location})",
        operation.name(),
    )]
    RootOperationTypeNotObject {
        actual_kind: TypeKind,
        operation: RootOperationKind,
        schema_location: loc::SourceLocation,
        type_name: String,
    },

    #[error("Failed to read schema file {}: {err}", file.display())]
    SchemaFileReadError {
        file: PathBuf,
        err: String,
    },

    #[error(
        "The schema definition ({schema_location}) names `{type_name}` as its \
        {} root operation type, but no type with that name is defined",
        operation.name(),
    )]
    UndefinedRootOperationType {
        operation: RootOperationKind,
        schema_location: loc::SourceLocation,
        type_name: String,
    },
}
