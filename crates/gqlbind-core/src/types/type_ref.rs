use crate::types::NamedType;
use crate::types::NativeType;
use std::sync::Arc;

/// A schema type expression resolved against the [`TypeTable`](crate::types::TypeTable).
///
/// The list/non-null wrapping of the original expression is preserved
/// exactly. The innermost named type is shared with every other reference to
/// the same name, so two references resolved from the same table point at
/// the same [`NamedType`] (see [`Arc::ptr_eq`]).
#[derive(Clone, Debug, PartialEq)]
pub enum TypeRef {
    List {
        inner: Box<TypeRef>,
        nullable: bool,
    },
    Named {
        named_type: Arc<NamedType>,
        nullable: bool,
    },
}
impl TypeRef {
    /// Recursively unwrap list wrappers and return the innermost named type.
    pub fn innermost_named_type(&self) -> &Arc<NamedType> {
        match self {
            Self::List { inner, .. } => inner.innermost_named_type(),
            Self::Named { named_type, .. } => named_type,
        }
    }

    /// Indicates whether the innermost named type may be used in an input
    /// position.
    pub fn is_input_legal(&self) -> bool {
        self.innermost_named_type().is_input_legal()
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List { .. })
    }

    /// The native type bound to the innermost named type, if any.
    pub fn native(&self) -> Option<&NativeType> {
        self.innermost_named_type().native()
    }

    pub fn nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. } => *nullable,
            Self::Named { nullable, .. } => *nullable,
        }
    }

    pub fn to_graphql_string(&self) -> String {
        self.to_string()
    }
}
impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List { inner, nullable } => write!(
                f,
                "[{inner}]{}",
                if *nullable { "" } else { "!" },
            ),

            Self::Named { named_type, nullable } => write!(
                f,
                "{}{}",
                named_type.name(),
                if *nullable { "" } else { "!" },
            ),
        }
    }
}
