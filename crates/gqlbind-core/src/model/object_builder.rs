use crate::ast;
use crate::binding::BindingDiagnostic;
use crate::binding::NativeTypeBinder;
use crate::Config;
use crate::DirectiveResolver;
use crate::model::BuildError;
use crate::model::Field;
use crate::model::FieldBuilder;
use crate::model::FieldDecl;
use crate::model::Object;
use crate::model::ResolverInterface;
use crate::types::NamedType;
use crate::types::RootOperationKind;
use crate::types::TypeKind;
use crate::types::TypeTable;
use std::sync::Arc;

type Result<T> = std::result::Result<T, BuildError>;

/// Builds a single [`Object`] from an object, interface, or input object
/// type in the [`TypeTable`].
pub struct ObjectBuilder<'a> {
    binder: &'a dyn NativeTypeBinder,
    config: &'a Config,
    table: &'a TypeTable,
}
impl<'a> ObjectBuilder<'a> {
    pub fn new(
        table: &'a TypeTable,
        config: &'a Config,
        binder: &'a dyn NativeTypeBinder,
    ) -> Self {
        Self {
            binder,
            config,
            table,
        }
    }

    pub fn build(&self, named_type: &Arc<NamedType>) -> Result<Object> {
        let type_name = named_type.name();
        let kind = named_type.kind();
        let (ast_directives, interface_names, decls): (
            &[ast::Directive],
            &[String],
            Vec<FieldDecl<'_>>,
        ) = match named_type.definition() {
                Some(ast::TypeDefinition::Object(def)) => (
                    &def.directives,
                    &def.implements_interfaces,
                    def.fields.iter().map(FieldDecl::from).collect(),
                ),
                Some(ast::TypeDefinition::Interface(def)) => (
                    &def.directives,
                    &def.implements_interfaces,
                    def.fields.iter().map(FieldDecl::from).collect(),
                ),
                Some(ast::TypeDefinition::InputObject(def)) => (
                    &def.directives,
                    &[],
                    def.fields.iter().map(FieldDecl::from).collect(),
                ),
                _ => return Err(BuildError::UnsupportedTypeKind {
                    kind,
                    type_name: type_name.to_string(),
                }),
            };

        let directives = DirectiveResolver::new(self.table)
            .resolve(named_type.def_location(), ast_directives)
            .map_err(|err| BuildError::DirectiveResolution {
                annotated_item: type_name.to_string(),
                err,
                location: named_type.def_location().to_owned(),
            })?;
        let implements = self.resolve_interfaces(named_type, interface_names)?;
        let mut fields = self.build_fields(named_type, &decls)?;

        let root_kind = self.table.root_operation_kind(type_name);
        let root = root_kind.is_some();
        let in_typemap = root || self.config.user_defined(type_name);

        let binding_diagnostics = if in_typemap && kind != TypeKind::InputObject
            && !named_type.native().is_some_and(|native| native.is_map()) {
            self.bind_fields(named_type, &mut fields)
        } else {
            vec![]
        };

        Ok(Object {
            binding_diagnostics,
            directives,
            disable_concurrency: root_kind == Some(RootOperationKind::Mutation),
            fields,
            implements,
            in_typemap,
            named_type: Arc::clone(named_type),
            resolver_interface: ResolverInterface {
                module: self.config.exec.module.to_owned(),
                name: format!("{type_name}Resolver"),
            },
            root,
            stream: root_kind == Some(RootOperationKind::Subscription),
        })
    }

    fn bind_fields(
        &self,
        named_type: &NamedType,
        fields: &mut [Field],
    ) -> Vec<BindingDiagnostic> {
        let bindings = self.binder.bind_object(named_type, fields);
        debug_assert_eq!(bindings.len(), fields.len());

        let mut diagnostics = vec![];
        for (field, binding) in fields.iter_mut().zip(bindings) {
            if let Some(message) = field.apply_binding(binding) {
                log::warn!("{message}");
                log::warn!("  Adding resolver method");
                diagnostics.push(BindingDiagnostic {
                    field_name: field.name().to_string(),
                    message,
                });
            }
        }
        diagnostics
    }

    fn build_fields(
        &self,
        named_type: &NamedType,
        decls: &[FieldDecl<'_>],
    ) -> Result<Vec<Field>> {
        let field_builder = FieldBuilder::new(self.table, self.config);
        decls.iter()
            .filter(|decl| !decl.name.starts_with("__"))
            .map(|decl| field_builder.build(named_type, decl))
            .collect()
    }

    fn resolve_interfaces(
        &self,
        named_type: &NamedType,
        interface_names: &[String],
    ) -> Result<Vec<Arc<NamedType>>> {
        interface_names.iter()
            .map(|iface_name| {
                self.table.get(iface_name)
                    .map(Arc::clone)
                    .ok_or_else(|| BuildError::UnknownType {
                        ref_location: named_type.def_location().to_owned(),
                        type_name: iface_name.to_string(),
                    })
            })
            .collect()
    }
}
