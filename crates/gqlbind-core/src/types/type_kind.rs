use crate::ast;

/// The category of a named schema type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl TypeKind {
    /// Scalars, enums and input objects are the only types that may appear
    /// in input positions (field arguments and input object fields).
    pub fn is_input_legal(&self) -> bool {
        matches!(self, Self::Enum | Self::InputObject | Self::Scalar)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Enum => "Enum",
            Self::InputObject => "InputObject",
            Self::Interface => "Interface",
            Self::Object => "Object",
            Self::Scalar => "Scalar",
            Self::Union => "Union",
        }
    }
}
impl std::convert::From<&ast::TypeDefinition> for TypeKind {
    fn from(value: &ast::TypeDefinition) -> Self {
        match value {
            ast::TypeDefinition::Enum(_) => Self::Enum,
            ast::TypeDefinition::InputObject(_) => Self::InputObject,
            ast::TypeDefinition::Interface(_) => Self::Interface,
            ast::TypeDefinition::Object(_) => Self::Object,
            ast::TypeDefinition::Scalar(_) => Self::Scalar,
            ast::TypeDefinition::Union(_) => Self::Union,
        }
    }
}
impl std::convert::From<&ast::TypeExtension> for TypeKind {
    fn from(value: &ast::TypeExtension) -> Self {
        match value {
            ast::TypeExtension::Enum(_) => Self::Enum,
            ast::TypeExtension::InputObject(_) => Self::InputObject,
            ast::TypeExtension::Interface(_) => Self::Interface,
            ast::TypeExtension::Object(_) => Self::Object,
            ast::TypeExtension::Scalar(_) => Self::Scalar,
            ast::TypeExtension::Union(_) => Self::Union,
        }
    }
}
impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
