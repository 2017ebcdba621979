mod named_type;
mod native_type;
mod type_kind;
mod type_ref;
mod type_table;
mod type_table_builder;

pub use named_type::NamedType;
pub use named_type::ParentTypeRef;
pub use native_type::NativeType;
pub use type_kind::TypeKind;
pub use type_ref::TypeRef;
pub use type_table::RootOperationKind;
pub use type_table::TypeTable;
pub use type_table_builder::TypeTableBuildError;
pub use type_table_builder::TypeTableBuilder;

#[cfg(test)]
mod tests;
