use crate::model::Field;
use crate::types::NamedType;

/// Matches the fields of an object to members of the native type the object
/// is bound to.
pub trait NativeTypeBinder {
    /// Produce exactly one [`FieldBinding`] per entry in `fields`, in the
    /// same order.
    fn bind_object(
        &self,
        object_type: &NamedType,
        fields: &[Field],
    ) -> Vec<FieldBinding>;
}

/// How generated code reads a struct-bound field's value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldAccess {
    Method {
        member: String,
    },
    Variable {
        member: String,
    },
}
impl FieldAccess {
    pub fn member(&self) -> &str {
        match self {
            Self::Method { member } => member.as_str(),
            Self::Variable { member } => member.as_str(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldBinding {
    Bound(FieldAccess),
    /// The field was already resolver-backed, so no binding was attempted.
    Resolver,
    /// No member matched. The field must be resolver-backed.
    Unbound {
        message: String,
    },
}

/// A non-fatal report that a field could not be bound to a native member and
/// will be satisfied by a resolver instead.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BindingDiagnostic {
    pub field_name: String,
    pub message: String,
}
