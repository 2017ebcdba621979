use crate::ast;
use crate::loc;
use crate::model::BuildError;
use crate::test_utils;
use crate::types::TypeKind;
use crate::types::TypeRef;
use std::sync::Arc;

fn parse_type(type_expr: &str) -> ast::Type {
    let doc = ast::parse_schema(format!("type T {{ f: {type_expr} }}").as_str())
        .expect("schema parses");
    match doc.definitions.into_iter().next() {
        Some(ast::Definition::TypeDefinition(ast::TypeDefinition::Object(obj))) =>
            obj.fields.into_iter().next().expect("field is present").field_type,
        other => panic!("unexpected definition: {other:?}"),
    }
}

fn srcloc() -> loc::SourceLocation {
    loc::SourceLocation::from_schema_ast_position(
        None,
        &ast::Pos { line: 3, column: 5 },
    )
}

const SCHEMA: &str = "
    type Query { user: User }
    type User { id: ID! }
    input UserFilter { id: ID }
    enum Role { ADMIN }
";

#[test]
fn wrapping_is_preserved() -> Result<(), BuildError> {
    let table = test_utils::build_table(SCHEMA).expect("schema builds");
    for type_expr in ["User", "User!", "[User]", "[User!]!", "[[Role!]]!"] {
        let type_ref = table.resolve_type(&parse_type(type_expr), &srcloc())?;
        assert_eq!(type_ref.to_graphql_string(), type_expr);
    }
    Ok(())
}

#[test]
fn structure_accessors() -> Result<(), BuildError> {
    let table = test_utils::build_table(SCHEMA).expect("schema builds");
    let type_ref = table.resolve_type(&parse_type("[User!]"), &srcloc())?;
    assert!(type_ref.is_list());
    assert!(type_ref.nullable());
    let TypeRef::List { inner, .. } = &type_ref else {
        panic!("expected a list type");
    };
    assert!(!inner.is_list());
    assert!(!inner.nullable());
    assert_eq!(type_ref.innermost_named_type().name(), "User");
    assert_eq!(type_ref.innermost_named_type().kind(), TypeKind::Object);
    Ok(())
}

#[test]
fn named_type_identity_is_shared() -> Result<(), BuildError> {
    let table = test_utils::build_table(SCHEMA).expect("schema builds");
    let first = table.resolve_type(&parse_type("User"), &srcloc())?;
    let second = table.resolve_type(&parse_type("[User!]!"), &srcloc())?;
    assert!(Arc::ptr_eq(
        first.innermost_named_type(),
        second.innermost_named_type(),
    ));
    assert!(Arc::ptr_eq(
        first.innermost_named_type(),
        table.get("User").expect("User is defined"),
    ));
    Ok(())
}

#[test]
fn input_legality_follows_innermost_type() -> Result<(), BuildError> {
    let table = test_utils::build_table(SCHEMA).expect("schema builds");
    for (type_expr, input_legal) in [
        ("ID", true),
        ("[Role!]", true),
        ("UserFilter!", true),
        ("User", false),
        ("[[User]]", false),
    ] {
        let type_ref = table.resolve_type(&parse_type(type_expr), &srcloc())?;
        assert_eq!(type_ref.is_input_legal(), input_legal, "{type_expr}");
    }
    Ok(())
}

#[test]
fn unknown_type_is_reported() {
    let table = test_utils::build_table(SCHEMA).expect("schema builds");
    let result = table.resolve_type(&parse_type("[NoSuchType!]"), &srcloc());
    assert_eq!(result, Err(BuildError::UnknownType {
        ref_location: srcloc(),
        type_name: "NoSuchType".to_string(),
    }));
}
