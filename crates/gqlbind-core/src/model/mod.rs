mod argument_builder;
mod build_error;
mod field;
mod field_argument;
mod field_builder;
mod model_builder;
mod object;
mod object_builder;

pub use argument_builder::ArgumentBuilder;
pub use build_error::BuildError;
pub use field::Field;
pub use field_argument::FieldArgument;
pub use field_builder::FieldBuilder;
pub use field_builder::FieldDecl;
pub use model_builder::Model;
pub use model_builder::ModelBuilder;
pub use object::Object;
pub use object::ResolverInterface;
pub use object_builder::ObjectBuilder;

#[cfg(test)]
mod tests;
