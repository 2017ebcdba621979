use crate::binding::FieldAccess;
use crate::binding::FieldBinding;
use crate::Directive;
use crate::loc;
use crate::model::FieldArgument;
use crate::types::NamedType;
use crate::types::ParentTypeRef;
use crate::types::TypeRef;
use crate::types::TypeTable;
use crate::Value;

/// One field of an [`Object`](crate::model::Object).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(super) access: Option<FieldAccess>,
    pub(super) arguments: Vec<FieldArgument>,
    pub(super) def_location: loc::SourceLocation,
    pub(super) default_value: Option<Value>,
    pub(super) directives: Vec<Directive>,
    pub(super) generated_name: String,
    pub(super) is_resolver: bool,
    pub(super) name: String,
    pub(super) parent_type: ParentTypeRef,
    pub(super) type_ref: TypeRef,
}
impl Field {
    /// How the generated code reads this field from its native structure.
    /// `None` until the field is bound, and always `None` for
    /// resolver-backed fields.
    pub fn access(&self) -> Option<&FieldAccess> {
        self.access.as_ref()
    }

    /// Record the outcome of binding this field to a native member. Returns
    /// the diagnostic message when the field could not be bound.
    pub(super) fn apply_binding(&mut self, binding: FieldBinding) -> Option<String> {
        match binding {
            FieldBinding::Bound(access) => {
                self.access = Some(access);
                None
            },
            FieldBinding::Resolver => None,
            FieldBinding::Unbound { message } => {
                self.access = None;
                self.is_resolver = true;
                Some(message)
            },
        }
    }

    pub fn arguments(&self) -> &Vec<FieldArgument> {
        &self.arguments
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn directives(&self) -> &Vec<Directive> {
        &self.directives
    }

    /// The identifier of this field in generated code.
    pub fn generated_name(&self) -> &str {
        self.generated_name.as_str()
    }

    /// Whether this field's value is computed by a hand-written resolver
    /// rather than read from a native structure member.
    pub fn is_resolver(&self) -> bool {
        self.is_resolver
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parent_type<'table>(
        &self,
        table: &'table TypeTable,
    ) -> &'table NamedType {
        self.parent_type
            .deref(table)
            .expect("parent type is present in the type table")
    }

    pub fn parent_type_name(&self) -> &str {
        self.parent_type.name()
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }
}
