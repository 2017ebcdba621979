use crate::binding::FieldAccess;
use crate::binding::FieldBinding;
use crate::binding::NativeTypeBinder;
use crate::model::Field;
use crate::NativeMember;
use crate::types::NamedType;
use crate::types::NativeType;
use inherent::inherent;

/// The default [`NativeTypeBinder`]: matches fields to the members declared
/// for a [`NativeType::Struct`] in the configuration.
///
/// A method member is tried first; it matches when its name equals the
/// field's generated identifier (ignoring ASCII case) and it takes one
/// parameter per field argument. A variable member matches when it carries
/// a `struct_tag` tag whose value is the schema field name, or failing that
/// when its name equals the generated identifier (ignoring ASCII case).
#[derive(Clone, Debug, Default)]
pub struct StructMemberBinder {
    struct_tag: Option<String>,
}
impl StructMemberBinder {
    pub fn new(struct_tag: Option<String>) -> Self {
        Self { struct_tag }
    }

    fn bind_field(&self, object_type: &NamedType, field: &Field) -> FieldBinding {
        if field.is_resolver() {
            return FieldBinding::Resolver;
        }

        let members: &[NativeMember] = match object_type.native() {
            Some(NativeType::Struct { members, .. }) => members.as_slice(),
            _ => &[],
        };

        let method_err = match bind_method(members, field) {
            Ok(access) => return FieldBinding::Bound(access),
            Err(err) => err,
        };
        let variable_err = match self.bind_variable(members, field) {
            Ok(access) => return FieldBinding::Bound(access),
            Err(err) => err,
        };

        FieldBinding::Unbound {
            message: format!(
                "Unable to bind {}.{} to {}\n  {method_err}\n  {variable_err}",
                object_type.name(),
                field.name(),
                object_type.native()
                    .map(|native| native.path())
                    .unwrap_or("<no native type>"),
            ),
        }
    }

    fn bind_variable(
        &self,
        members: &[NativeMember],
        field: &Field,
    ) -> Result<FieldAccess, String> {
        let variables = || members.iter().filter(|member| !member.method);

        if let Some(struct_tag) = &self.struct_tag
            && let Some(tagged) = variables().find(|member| {
                member.tags.get(struct_tag).map(String::as_str) == Some(field.name())
            }) {
            return Ok(FieldAccess::Variable {
                member: tagged.name.to_owned(),
            });
        }

        variables()
            .find(|member| member.name.eq_ignore_ascii_case(field.generated_name()))
            .map(|member| FieldAccess::Variable {
                member: member.name.to_owned(),
            })
            .ok_or_else(|| match &self.struct_tag {
                Some(struct_tag) => format!(
                    "no variable named {} or tagged `{struct_tag}:\"{}\"`",
                    field.generated_name(),
                    field.name(),
                ),
                None => format!("no variable named {}", field.generated_name()),
            })
    }
}

#[inherent]
impl NativeTypeBinder for StructMemberBinder {
    pub fn bind_object(
        &self,
        object_type: &NamedType,
        fields: &[Field],
    ) -> Vec<FieldBinding> {
        fields.iter()
            .map(|field| self.bind_field(object_type, field))
            .collect()
    }
}

fn bind_method(
    members: &[NativeMember],
    field: &Field,
) -> Result<FieldAccess, String> {
    let method = members.iter()
        .find(|member| {
            member.method
                && member.name.eq_ignore_ascii_case(field.generated_name())
        })
        .ok_or_else(|| format!("no method named {}", field.generated_name()))?;

    let num_args = field.arguments().len();
    if method.params != num_args {
        return Err(format!(
            "method {} takes {} parameters, but the field declares {num_args} \
            arguments",
            method.name,
            method.params,
        ));
    }

    Ok(FieldAccess::Method {
        member: method.name.to_owned(),
    })
}
