use crate::DirectiveResolutionError;
use crate::LiteralError;
use crate::loc;
use crate::types::TypeKind;
use thiserror::Error;

/// A fatal error encountered while building the object model.
///
/// Every variant names enough of the schema (object, field, and argument as
/// applicable) to locate the offending definition.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BuildError {
    #[error(
        "Failed to resolve a directive applied to `{annotated_item}` \
        ({location}): {err}"
    )]
    DirectiveResolution {
        annotated_item: String,
        err: DirectiveResolutionError,
        location: loc::SourceLocation,
    },

    #[error(
        "`{invalid_type}` cannot be used as the type of {}: only scalar, enum, \
        and input object types are allowed in input positions ({location})",
        input_position(object_name, field_name, argument_name.as_deref()),
    )]
    InputPositionViolation {
        argument_name: Option<String>,
        field_name: String,
        invalid_type: String,
        invalid_type_kind: TypeKind,
        location: loc::SourceLocation,
        object_name: String,
    },

    #[error(
        "The default value for `{}` is not valid ({location}): {err}",
        schema_coordinate(object_name, field_name, argument_name.as_deref()),
    )]
    InvalidDefaultValue {
        argument_name: Option<String>,
        err: LiteralError,
        field_name: String,
        location: loc::SourceLocation,
        object_name: String,
    },

    #[error("There is no type defined with the name `{type_name}` (referenced at {ref_location})")]
    UnknownType {
        ref_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Objects can only be built from object, interface, or input object \
        types, but `{type_name}` is a {kind} type"
    )]
    UnsupportedTypeKind {
        kind: TypeKind,
        type_name: String,
    },
}

/// Format a field or argument as a schema coordinate (`Type.field` or
/// `Type.field(arg:)`).
pub(crate) fn schema_coordinate(
    object_name: &str,
    field_name: &str,
    argument_name: Option<&str>,
) -> String {
    match argument_name {
        Some(argument_name) => format!("{object_name}.{field_name}({argument_name}:)"),
        None => format!("{object_name}.{field_name}"),
    }
}

fn input_position(
    object_name: &str,
    field_name: &str,
    argument_name: Option<&str>,
) -> String {
    let coordinate = schema_coordinate(object_name, field_name, argument_name);
    if argument_name.is_some() {
        format!("the `{coordinate}` argument")
    } else {
        format!("the `{coordinate}` input field")
    }
}
