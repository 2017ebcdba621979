use crate::binding::BindingDiagnostic;
use crate::Directive;
use crate::model::Field;
use crate::types::NamedType;
use crate::types::NativeType;
use crate::types::TypeKind;
use std::sync::Arc;

/// The resolver interface synthesized for every object: `<TypeName>Resolver`
/// in the configured exec module.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolverInterface {
    pub(super) module: String,
    pub(super) name: String,
}
impl ResolverInterface {
    pub fn module(&self) -> &str {
        self.module.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn path(&self) -> String {
        format!("{}::{}", self.module, self.name)
    }
}

/// One generated top-level type.
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    pub(super) binding_diagnostics: Vec<BindingDiagnostic>,
    pub(super) directives: Vec<Directive>,
    pub(super) disable_concurrency: bool,
    pub(super) fields: Vec<Field>,
    pub(super) implements: Vec<Arc<NamedType>>,
    pub(super) in_typemap: bool,
    pub(super) named_type: Arc<NamedType>,
    pub(super) resolver_interface: ResolverInterface,
    pub(super) root: bool,
    pub(super) stream: bool,
}
impl Object {
    /// Fields that could not be bound to a member of this object's native
    /// structure (and are resolver-backed as a result).
    pub fn binding_diagnostics(&self) -> &Vec<BindingDiagnostic> {
        &self.binding_diagnostics
    }

    pub fn directives(&self) -> &Vec<Directive> {
        &self.directives
    }

    /// True for the mutation root: its fields must be resolved one after
    /// another.
    pub fn disable_concurrency(&self) -> bool {
        self.disable_concurrency
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Fields in schema declaration order (`__`-prefixed fields excluded).
    pub fn fields(&self) -> &Vec<Field> {
        &self.fields
    }

    /// Whether any field needs a hand-written resolver.
    pub fn has_resolvers(&self) -> bool {
        self.fields.iter().any(Field::is_resolver)
    }

    /// Interfaces this object implements, in declaration order.
    pub fn implements(&self) -> &Vec<Arc<NamedType>> {
        &self.implements
    }

    /// Whether this object appears in the generated type table: true for
    /// root operation types and for types bound to a user-defined model.
    pub fn in_typemap(&self) -> bool {
        self.in_typemap
    }

    pub fn is_input(&self) -> bool {
        self.named_type.kind() == TypeKind::InputObject
    }

    pub fn kind(&self) -> TypeKind {
        self.named_type.kind()
    }

    pub fn name(&self) -> &str {
        self.named_type.name()
    }

    pub fn named_type(&self) -> &Arc<NamedType> {
        &self.named_type
    }

    pub fn native(&self) -> Option<&NativeType> {
        self.named_type.native()
    }

    pub fn resolver_interface(&self) -> &ResolverInterface {
        &self.resolver_interface
    }

    pub fn root(&self) -> bool {
        self.root
    }

    /// True for the subscription root: its fields resolve to a stream of
    /// values rather than a single value.
    pub fn stream(&self) -> bool {
        self.stream
    }
}
