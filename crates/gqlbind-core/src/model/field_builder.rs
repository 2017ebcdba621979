use crate::ast;
use crate::Config;
use crate::DirectiveResolver;
use crate::model::ArgumentBuilder;
use crate::model::build_error::schema_coordinate;
use crate::model::BuildError;
use crate::model::Field;
use crate::naming;
use crate::types::NamedType;
use crate::types::ParentTypeRef;
use crate::types::TypeKind;
use crate::types::TypeTable;
use crate::Value;

type Result<T> = std::result::Result<T, BuildError>;

/// The parts of a field declaration the [`FieldBuilder`] needs. Object and
/// interface fields (which can declare arguments) and input object fields
/// (which can declare a default value) both convert into one of these.
#[derive(Clone, Copy, Debug)]
pub struct FieldDecl<'d> {
    pub arguments: &'d [ast::InputValue],
    pub default_value: Option<&'d ast::Value>,
    pub directives: &'d [ast::Directive],
    pub field_type: &'d ast::Type,
    pub name: &'d str,
    pub position: ast::Pos,
}
impl<'d> From<&'d ast::Field> for FieldDecl<'d> {
    fn from(field: &'d ast::Field) -> Self {
        Self {
            arguments: &field.arguments,
            default_value: None,
            directives: &field.directives,
            field_type: &field.field_type,
            name: field.name.as_str(),
            position: field.position,
        }
    }
}
impl<'d> From<&'d ast::InputValue> for FieldDecl<'d> {
    fn from(input_field: &'d ast::InputValue) -> Self {
        Self {
            arguments: &[],
            default_value: input_field.default_value.as_ref(),
            directives: &input_field.directives,
            field_type: &input_field.value_type,
            name: input_field.name.as_str(),
            position: input_field.position,
        }
    }
}

/// Builds one [`Field`] of an object.
#[derive(Clone, Copy, Debug)]
pub struct FieldBuilder<'a> {
    config: &'a Config,
    table: &'a TypeTable,
}
impl<'a> FieldBuilder<'a> {
    pub fn new(table: &'a TypeTable, config: &'a Config) -> Self {
        Self { config, table }
    }

    pub fn build(
        &self,
        parent_type: &NamedType,
        decl: &FieldDecl<'_>,
    ) -> Result<Field> {
        let field_srcloc = parent_type.def_location().with_ast_position(&decl.position);
        let object_name = parent_type.name();

        let directives = DirectiveResolver::new(self.table)
            .resolve(&field_srcloc, decl.directives)
            .map_err(|err| BuildError::DirectiveResolution {
                annotated_item: schema_coordinate(object_name, decl.name, None),
                err,
                location: field_srcloc.to_owned(),
            })?;

        let type_ref = self.table.resolve_type(decl.field_type, &field_srcloc)?;

        let mut generated_name = naming::field_identifier(decl.name);

        let default_value = decl.default_value
            .map(Value::from_ast)
            .transpose()
            .map_err(|err| BuildError::InvalidDefaultValue {
                argument_name: None,
                err,
                field_name: decl.name.to_string(),
                location: field_srcloc.to_owned(),
                object_name: object_name.to_string(),
            })?;

        let mut is_resolver = false;
        if let Some(field_override) = self.config.field_override(object_name, decl.name) {
            if field_override.resolver {
                is_resolver = true;
            }
            if let Some(field_name) = &field_override.field_name {
                generated_name = naming::field_identifier(field_name);
            }
        }

        let argument_builder = ArgumentBuilder::new(self.table);
        let arguments = decl.arguments.iter()
            .map(|arg| argument_builder.build(parent_type, decl.name, arg))
            .collect::<Result<Vec<_>>>()?;

        if parent_type.kind() == TypeKind::InputObject && !type_ref.is_input_legal() {
            return Err(BuildError::InputPositionViolation {
                argument_name: None,
                field_name: decl.name.to_string(),
                invalid_type: type_ref.to_graphql_string(),
                invalid_type_kind: type_ref.innermost_named_type().kind(),
                location: field_srcloc,
                object_name: object_name.to_string(),
            });
        }

        Ok(Field {
            access: None,
            arguments,
            def_location: field_srcloc.to_owned(),
            default_value,
            directives,
            generated_name,
            is_resolver,
            name: decl.name.to_string(),
            parent_type: ParentTypeRef::new(object_name, field_srcloc),
            type_ref,
        })
    }
}
