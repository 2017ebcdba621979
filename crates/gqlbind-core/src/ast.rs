//! `'static`, `String`-backed aliases for the `graphql_parser` schema AST
//! nodes consumed by the builders in this crate.

pub use graphql_parser::Pos;
pub use graphql_parser::schema::ParseError;

pub type Definition = graphql_parser::schema::Definition<'static, String>;
pub type Directive = graphql_parser::schema::Directive<'static, String>;
pub type DirectiveDefinition = graphql_parser::schema::DirectiveDefinition<'static, String>;
pub type Document = graphql_parser::schema::Document<'static, String>;
pub type EnumType = graphql_parser::schema::EnumType<'static, String>;
pub type Field = graphql_parser::schema::Field<'static, String>;
pub type InputObjectType = graphql_parser::schema::InputObjectType<'static, String>;
pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
pub type InterfaceType = graphql_parser::schema::InterfaceType<'static, String>;
pub type ObjectType = graphql_parser::schema::ObjectType<'static, String>;
pub type ScalarType = graphql_parser::schema::ScalarType<'static, String>;
pub type SchemaDefinition = graphql_parser::schema::SchemaDefinition<'static, String>;
pub type Type = graphql_parser::schema::Type<'static, String>;
pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;
pub type UnionType = graphql_parser::schema::UnionType<'static, String>;
pub type Value = graphql_parser::schema::Value<'static, String>;

pub fn parse_schema(content: &str) -> Result<Document, ParseError> {
    Ok(graphql_parser::schema::parse_schema::<String>(content)?.into_static())
}
