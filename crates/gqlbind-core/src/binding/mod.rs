//! Binding of built objects' fields to the members of user-supplied native
//! structures.
//!
//! Binding never fails: every field either binds to a member or is reported
//! with a diagnostic and left to a hand-written resolver.

mod native_type_binder;
mod struct_member_binder;

pub use native_type_binder::BindingDiagnostic;
pub use native_type_binder::FieldAccess;
pub use native_type_binder::FieldBinding;
pub use native_type_binder::NativeTypeBinder;
pub use struct_member_binder::StructMemberBinder;
