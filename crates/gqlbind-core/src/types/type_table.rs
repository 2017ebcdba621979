use crate::ast;
use crate::DirectiveDef;
use crate::loc;
use crate::model::BuildError;
use crate::types::NamedType;
use crate::types::TypeRef;
use crate::types::TypeTableBuilder;
use indexmap::IndexMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, BuildError>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RootOperationKind {
    Mutation,
    Query,
    Subscription,
}
impl RootOperationKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }
}

/// The read-only lookup table of every named type and directive definition
/// in the schema.
///
/// A [`TypeTable`] is fully populated by [`TypeTableBuilder`] before any
/// object is built and is never mutated afterwards, so it is simply passed
/// by reference to everything that needs it.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeTable {
    pub(super) directive_defs: IndexMap<String, DirectiveDef>,
    pub(super) mutation_type: Option<String>,
    pub(super) query_type: String,
    pub(super) subscription_type: Option<String>,
    pub(super) types: IndexMap<String, Arc<NamedType>>,
}
impl TypeTable {
    pub fn builder() -> TypeTableBuilder {
        TypeTableBuilder::new()
    }

    pub fn directive_def(&self, name: &str) -> Option<&DirectiveDef> {
        self.directive_defs.get(name)
    }

    pub fn directive_defs(&self) -> &IndexMap<String, DirectiveDef> {
        &self.directive_defs
    }

    pub fn get(&self, type_name: &str) -> Option<&Arc<NamedType>> {
        self.types.get(type_name)
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }

    pub fn query_type_name(&self) -> &str {
        self.query_type.as_str()
    }

    /// Resolve a schema type expression to a [`TypeRef`].
    ///
    /// `ref_location` is the location of the schema item that carries the
    /// type expression (the AST does not record positions for the type
    /// expressions themselves).
    pub fn resolve_type(
        &self,
        ast_type: &ast::Type,
        ref_location: &loc::SourceLocation,
    ) -> Result<TypeRef> {
        self.resolve_type_impl(ast_type, ref_location, /* nullable = */ true)
    }

    fn resolve_type_impl(
        &self,
        ast_type: &ast::Type,
        ref_location: &loc::SourceLocation,
        nullable: bool,
    ) -> Result<TypeRef> {
        match ast_type {
            ast::Type::ListType(inner) => Ok(TypeRef::List {
                inner: Box::new(
                    self.resolve_type_impl(inner, ref_location, true)?,
                ),
                nullable,
            }),

            ast::Type::NamedType(name) => match self.types.get(name) {
                Some(named_type) => Ok(TypeRef::Named {
                    named_type: Arc::clone(named_type),
                    nullable,
                }),
                None => Err(BuildError::UnknownType {
                    ref_location: ref_location.to_owned(),
                    type_name: name.to_string(),
                }),
            },

            ast::Type::NonNullType(inner) =>
                self.resolve_type_impl(inner, ref_location, false),
        }
    }

    /// Which root operation (if any) the type named `type_name` serves.
    pub fn root_operation_kind(
        &self,
        type_name: &str,
    ) -> Option<RootOperationKind> {
        if self.query_type == type_name {
            Some(RootOperationKind::Query)
        } else if self.mutation_type.as_deref() == Some(type_name) {
            Some(RootOperationKind::Mutation)
        } else if self.subscription_type.as_deref() == Some(type_name) {
            Some(RootOperationKind::Subscription)
        } else {
            None
        }
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type.as_deref()
    }

    /// Every named type, built-in scalars first and then in schema
    /// declaration order.
    pub fn types(&self) -> impl Iterator<Item = &Arc<NamedType>> {
        self.types.values()
    }
}
