use crate::ast;
use crate::DirectiveResolver;
use crate::model::build_error::schema_coordinate;
use crate::model::BuildError;
use crate::model::FieldArgument;
use crate::naming;
use crate::types::NamedType;
use crate::types::TypeTable;
use crate::Value;

type Result<T> = std::result::Result<T, BuildError>;

/// Builds the [`FieldArgument`]s of a field.
#[derive(Clone, Copy, Debug)]
pub struct ArgumentBuilder<'a> {
    table: &'a TypeTable,
}
impl<'a> ArgumentBuilder<'a> {
    pub fn new(table: &'a TypeTable) -> Self {
        Self { table }
    }

    /// Build the argument `arg` declared on the `field_name` field of
    /// `parent_type`.
    ///
    /// Arguments are always in an input position, so the argument's type must
    /// be input-legal regardless of what kind of type `parent_type` is.
    pub fn build(
        &self,
        parent_type: &NamedType,
        field_name: &str,
        arg: &ast::InputValue,
    ) -> Result<FieldArgument> {
        let arg_srcloc = parent_type.def_location().with_ast_position(&arg.position);
        let object_name = parent_type.name();

        let directives = DirectiveResolver::new(self.table)
            .resolve(&arg_srcloc, &arg.directives)
            .map_err(|err| BuildError::DirectiveResolution {
                annotated_item: schema_coordinate(
                    object_name,
                    field_name,
                    Some(arg.name.as_str()),
                ),
                err,
                location: arg_srcloc.to_owned(),
            })?;

        let type_ref = self.table.resolve_type(&arg.value_type, &arg_srcloc)?;

        let default_value = arg.default_value.as_ref()
            .map(Value::from_ast)
            .transpose()
            .map_err(|err| BuildError::InvalidDefaultValue {
                argument_name: Some(arg.name.to_string()),
                err,
                field_name: field_name.to_string(),
                location: arg_srcloc.to_owned(),
                object_name: object_name.to_string(),
            })?;

        if !type_ref.is_input_legal() {
            return Err(BuildError::InputPositionViolation {
                argument_name: Some(arg.name.to_string()),
                field_name: field_name.to_string(),
                invalid_type: type_ref.to_graphql_string(),
                invalid_type_kind: type_ref.innermost_named_type().kind(),
                location: arg_srcloc,
                object_name: object_name.to_string(),
            });
        }

        Ok(FieldArgument {
            def_location: arg_srcloc,
            default_value,
            directives,
            generated_name: naming::sanitize_arg_name(arg.name.as_str()),
            name: arg.name.to_string(),
            type_ref,
        })
    }
}
