use crate::Directive;
use crate::loc;
use crate::types::TypeRef;
use crate::Value;

/// One argument of a [`Field`](crate::model::Field).
#[derive(Clone, Debug, PartialEq)]
pub struct FieldArgument {
    pub(super) def_location: loc::SourceLocation,
    pub(super) default_value: Option<Value>,
    pub(super) directives: Vec<Directive>,
    pub(super) generated_name: String,
    pub(super) name: String,
    pub(super) type_ref: TypeRef,
}
impl FieldArgument {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn directives(&self) -> &Vec<Directive> {
        &self.directives
    }

    /// The variable name used for this argument in generated code. Equal to
    /// the schema name unless that name is a
    /// [reserved identifier](crate::naming::RESERVED_IDENTIFIERS).
    pub fn generated_name(&self) -> &str {
        self.generated_name.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }
}
