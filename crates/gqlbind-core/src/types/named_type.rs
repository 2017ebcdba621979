use crate::ast;
use crate::loc;
use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use crate::types::NativeType;
use crate::types::TypeKind;
use crate::types::TypeTable;

pub type ParentTypeRef = NamedRef<TypeTable, loc::SourceLocation, NamedType>;

/// An entry in the [`TypeTable`]: one named schema type together with the
/// native type it is bound to (if the user bound it to one).
#[derive(Clone, Debug, PartialEq)]
pub struct NamedType {
    pub(super) def_location: loc::SourceLocation,
    pub(super) definition: Option<ast::TypeDefinition>,
    pub(super) kind: TypeKind,
    pub(super) name: String,
    pub(super) native: Option<NativeType>,
}
impl NamedType {
    pub(super) fn builtin_scalar(
        name: &str,
        native: Option<NativeType>,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            definition: None,
            kind: TypeKind::Scalar,
            name: name.to_string(),
            native,
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The schema definition for this type (with any type extensions already
    /// merged in). Built-in scalars have no schema definition.
    pub fn definition(&self) -> Option<&ast::TypeDefinition> {
        self.definition.as_ref()
    }

    pub fn is_input_legal(&self) -> bool {
        self.kind.is_input_legal()
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn native(&self) -> Option<&NativeType> {
        self.native.as_ref()
    }
}
impl DerefByName for NamedType {
    type Source = TypeTable;
    type RefLocation = loc::SourceLocation;

    fn deref_name<'a>(
        table: &'a TypeTable,
        name: &str,
    ) -> Result<&'a NamedType, DerefByNameError> {
        table.get(name)
            .map(|named_type| named_type.as_ref())
            .ok_or_else(|| DerefByNameError::DanglingReference(name.to_string()))
    }
}
