use crate::ast;
use crate::loc;
use crate::types::TypeTable;
use crate::types::TypeTableBuildError;
use crate::LiteralError;
use crate::Value;
use indexmap::IndexMap;
use thiserror::Error;

/// A directive definition known to the [`TypeTable`]: either one of the
/// GraphQL built-ins or a `directive @name(...) on ...` definition from the
/// schema.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDef {
    pub(crate) arguments: IndexMap<String, DirectiveArgumentDef>,
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) name: String,
    pub(crate) repeatable: bool,
}
impl DirectiveDef {
    /// Definitions for the directives every GraphQL schema provides.
    pub(crate) fn builtins() -> Vec<Self> {
        let bool_arg = |name: &str| DirectiveArgumentDef {
            default_value: None,
            name: name.to_string(),
            value_type: ast::Type::NonNullType(Box::new(
                ast::Type::NamedType("Boolean".to_string()),
            )),
        };
        let builtin = |name: &str, arguments: Vec<DirectiveArgumentDef>| Self {
            arguments: arguments.into_iter()
                .map(|arg| (arg.name.to_owned(), arg))
                .collect(),
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            name: name.to_string(),
            repeatable: false,
        };

        vec![
            builtin("deprecated", vec![DirectiveArgumentDef {
                default_value: Some(Value::String(
                    "No longer supported".to_string(),
                )),
                name: "reason".to_string(),
                value_type: ast::Type::NamedType("String".to_string()),
            }]),
            builtin("include", vec![bool_arg("if")]),
            builtin("skip", vec![bool_arg("if")]),
            builtin("specifiedBy", vec![DirectiveArgumentDef {
                default_value: None,
                name: "url".to_string(),
                value_type: ast::Type::NonNullType(Box::new(
                    ast::Type::NamedType("String".to_string()),
                )),
            }]),
        ]
    }

    pub(crate) fn from_ast(
        def_location: loc::SourceLocation,
        def: &ast::DirectiveDefinition,
    ) -> Result<Self, TypeTableBuildError> {
        let mut arguments = IndexMap::new();
        for arg in &def.arguments {
            let default_value = match &arg.default_value {
                Some(ast_value) => Some(Value::from_ast(ast_value).map_err(|err| {
                    TypeTableBuildError::InvalidDirectiveArgumentDefault {
                        argument_name: arg.name.to_string(),
                        directive_name: def.name.to_string(),
                        location: def_location.with_ast_position(&arg.position),
                        err,
                    }
                })?),
                None => None,
            };
            arguments.insert(arg.name.to_string(), DirectiveArgumentDef {
                default_value,
                name: arg.name.to_string(),
                value_type: arg.value_type.to_owned(),
            });
        }

        Ok(Self {
            arguments,
            def_location,
            name: def.name.to_string(),
            repeatable: def.repeatable,
        })
    }

    pub fn arguments(&self) -> &IndexMap<String, DirectiveArgumentDef> {
        &self.arguments
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn repeatable(&self) -> bool {
        self.repeatable
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveArgumentDef {
    pub(crate) default_value: Option<Value>,
    pub(crate) name: String,
    pub(crate) value_type: ast::Type,
}
impl DirectiveArgumentDef {
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value_type(&self) -> &ast::Type {
        &self.value_type
    }
}

/// One resolved directive *usage*: the directive's name plus the literal
/// value of each of its arguments.
///
/// Arguments are ordered the way the directive's definition declares them.
/// An argument the usage omits is present only if the definition gives it a
/// default value.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) location: loc::SourceLocation,
    pub(crate) name: String,
}
impl Directive {
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name)
    }

    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    /// Where this directive was applied in the schema.
    pub fn location(&self) -> &loc::SourceLocation {
        &self.location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Materializes raw directive usages into [`Directive`]s.
#[derive(Clone, Copy, Debug)]
pub struct DirectiveResolver<'a> {
    table: &'a TypeTable,
}
impl<'a> DirectiveResolver<'a> {
    pub fn new(table: &'a TypeTable) -> Self {
        Self { table }
    }

    /// Resolve every usage in `usages`, preserving their order.
    ///
    /// `annotated_item_srcloc` is the location of the schema item the
    /// directives are attached to; it supplies the file for each usage's
    /// location.
    pub fn resolve(
        &self,
        annotated_item_srcloc: &loc::SourceLocation,
        usages: &[ast::Directive],
    ) -> Result<Vec<Directive>, DirectiveResolutionError> {
        usages.iter()
            .map(|usage| self.resolve_one(annotated_item_srcloc, usage))
            .collect()
    }

    fn resolve_one(
        &self,
        annotated_item_srcloc: &loc::SourceLocation,
        usage: &ast::Directive,
    ) -> Result<Directive, DirectiveResolutionError> {
        let directive_name = usage.name.as_str();
        let def = self.table.directive_def(directive_name).ok_or_else(|| {
            DirectiveResolutionError::UnknownDirective {
                directive_name: directive_name.to_string(),
            }
        })?;

        let mut provided = IndexMap::new();
        for (arg_name, ast_value) in &usage.arguments {
            if !def.arguments.contains_key(arg_name) {
                return Err(DirectiveResolutionError::UndeclaredArgument {
                    argument_name: arg_name.to_string(),
                    directive_name: directive_name.to_string(),
                });
            }
            let value = Value::from_ast(ast_value).map_err(|err| {
                DirectiveResolutionError::InvalidArgumentValue {
                    argument_name: arg_name.to_string(),
                    directive_name: directive_name.to_string(),
                    err,
                }
            })?;
            if provided.insert(arg_name.as_str(), value).is_some() {
                return Err(DirectiveResolutionError::DuplicateArgument {
                    argument_name: arg_name.to_string(),
                    directive_name: directive_name.to_string(),
                });
            }
        }

        let arguments = def.arguments.values()
            .filter_map(|arg_def| {
                provided.shift_remove(arg_def.name.as_str())
                    .or_else(|| arg_def.default_value.to_owned())
                    .map(|value| (arg_def.name.to_owned(), value))
            })
            .collect();

        Ok(Directive {
            arguments,
            location: annotated_item_srcloc.with_ast_position(&usage.position),
            name: directive_name.to_string(),
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DirectiveResolutionError {
    #[error(
        "The `{argument_name}` argument is passed to `@{directive_name}` more \
        than once"
    )]
    DuplicateArgument {
        argument_name: String,
        directive_name: String,
    },

    #[error(
        "The `{argument_name}` argument passed to `@{directive_name}` could \
        not be evaluated: {err}"
    )]
    InvalidArgumentValue {
        argument_name: String,
        directive_name: String,
        err: LiteralError,
    },

    #[error(
        "The `@{directive_name}` directive does not declare an argument named \
        `{argument_name}`"
    )]
    UndeclaredArgument {
        argument_name: String,
        directive_name: String,
    },

    #[error("There is no directive defined with the name `@{directive_name}`")]
    UnknownDirective {
        directive_name: String,
    },
}
