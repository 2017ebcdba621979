use crate::binding::BindingDiagnostic;
use crate::binding::NativeTypeBinder;
use crate::binding::StructMemberBinder;
use crate::Config;
use crate::model::BuildError;
use crate::model::Object;
use crate::model::ObjectBuilder;
use crate::types::TypeKind;
use crate::types::TypeTable;

type Result<T> = std::result::Result<T, BuildError>;

/// Builds the [`Object`] for every object and input object type in a
/// [`TypeTable`].
///
/// Fields are bound with a [`StructMemberBinder`] unless a different
/// [`NativeTypeBinder`] is supplied via [`ModelBuilder::with_binder`].
pub struct ModelBuilder<'a> {
    binder: Option<&'a dyn NativeTypeBinder>,
    config: &'a Config,
    table: &'a TypeTable,
}
impl<'a> ModelBuilder<'a> {
    pub fn new(table: &'a TypeTable, config: &'a Config) -> Self {
        Self {
            binder: None,
            config,
            table,
        }
    }

    pub fn with_binder(mut self, binder: &'a dyn NativeTypeBinder) -> Self {
        self.binder = Some(binder);
        self
    }

    /// Build every object, stopping at the first [`BuildError`].
    pub fn build(self) -> Result<Model> {
        let default_binder = StructMemberBinder::new(self.config.struct_tag.to_owned());
        let binder: &dyn NativeTypeBinder = match self.binder {
            Some(binder) => binder,
            None => &default_binder,
        };
        let object_builder = ObjectBuilder::new(self.table, self.config, binder);

        let mut objects = vec![];
        for named_type in self.table.types() {
            if !matches!(named_type.kind(), TypeKind::InputObject | TypeKind::Object) {
                continue;
            }
            let object = object_builder.build(named_type)?;
            log::debug!(
                "Built {} `{}` ({} fields, {} resolvers)",
                object.kind(),
                object.name(),
                object.fields().len(),
                object.fields().iter().filter(|field| field.is_resolver()).count(),
            );
            objects.push(object);
        }

        Ok(Model { objects })
    }
}

/// The objects built from a schema, in schema declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    objects: Vec<Object>,
}
impl Model {
    /// Every binding diagnostic reported while building, paired with the
    /// name of the object it was reported for.
    pub fn diagnostics(&self) -> impl Iterator<Item = (&str, &BindingDiagnostic)> {
        self.objects.iter().flat_map(|object| {
            object.binding_diagnostics()
                .iter()
                .map(move |diag| (object.name(), diag))
        })
    }

    /// Input objects only.
    pub fn inputs(&self) -> impl Iterator<Item = &Object> {
        self.objects.iter().filter(|object| object.is_input())
    }

    pub fn into_objects(self) -> Vec<Object> {
        self.objects
    }

    pub fn object(&self, name: &str) -> Option<&Object> {
        self.objects.iter().find(|object| object.name() == name)
    }

    pub fn objects(&self) -> &Vec<Object> {
        &self.objects
    }

    /// Root operation objects, in schema declaration order.
    pub fn roots(&self) -> impl Iterator<Item = &Object> {
        self.objects.iter().filter(|object| object.root())
    }
}
