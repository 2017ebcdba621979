use crate::ast;
use crate::DirectiveResolutionError;
use crate::DirectiveResolver;
use crate::loc;
use crate::test_utils;
use crate::types::TypeTable;
use crate::Value;
use proptest::prelude::*;

fn field_directives(table: &TypeTable, type_name: &str, field_name: &str) -> Vec<ast::Directive> {
    let named_type = table.get(type_name).expect("type is present");
    match named_type.definition() {
        Some(ast::TypeDefinition::Object(obj)) => obj.fields.iter()
            .find(|field| field.name == field_name)
            .map(|field| field.directives.to_owned())
            .expect("field is present"),
        other => panic!("expected an object type definition, got {other:?}"),
    }
}

fn srcloc() -> loc::SourceLocation {
    loc::SourceLocation::from_schema_ast_position(
        None,
        &ast::Pos { line: 1, column: 1 },
    )
}

#[test]
fn builtin_deprecated_fills_default_reason() -> Result<(), DirectiveResolutionError> {
    let table = test_utils::build_table("
        type Query {
            old: String @deprecated
            older: String @deprecated(reason: \"use `new`\")
        }
    ").expect("schema builds");
    let resolver = DirectiveResolver::new(&table);

    let old = resolver.resolve(&srcloc(), &field_directives(&table, "Query", "old"))?;
    assert_eq!(old.len(), 1);
    assert_eq!(old[0].name(), "deprecated");
    assert_eq!(
        old[0].argument("reason").and_then(Value::as_str),
        Some("No longer supported"),
    );

    let older = resolver.resolve(&srcloc(), &field_directives(&table, "Query", "older"))?;
    assert_eq!(
        older[0].argument("reason").and_then(Value::as_str),
        Some("use `new`"),
    );

    Ok(())
}

#[test]
fn arguments_follow_definition_order() -> Result<(), DirectiveResolutionError> {
    let table = test_utils::build_table("
        directive @cost(weight: Int = 1, multiplier: String, complexity: Int) on FIELD_DEFINITION
        type Query {
            items: [String] @cost(complexity: 3, multiplier: \"first\")
        }
    ").expect("schema builds");

    let directives = DirectiveResolver::new(&table)
        .resolve(&srcloc(), &field_directives(&table, "Query", "items"))?;
    let cost = &directives[0];
    assert_eq!(
        cost.arguments().keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["weight", "multiplier", "complexity"],
    );
    assert_eq!(cost.argument("weight"), Some(&Value::Int(1)));
    assert_eq!(cost.argument("complexity"), Some(&Value::Int(3)));

    Ok(())
}

#[test]
fn omitted_argument_without_default_is_absent() -> Result<(), DirectiveResolutionError> {
    let table = test_utils::build_table("
        directive @cost(weight: Int) on FIELD_DEFINITION
        type Query {
            items: [String] @cost
        }
    ").expect("schema builds");

    let directives = DirectiveResolver::new(&table)
        .resolve(&srcloc(), &field_directives(&table, "Query", "items"))?;
    assert!(directives[0].arguments().is_empty());

    Ok(())
}

#[test]
fn usages_keep_declaration_order() -> Result<(), DirectiveResolutionError> {
    let table = test_utils::build_table("
        directive @a on FIELD_DEFINITION
        directive @b on FIELD_DEFINITION
        type Query {
            items: [String] @b @deprecated @a
        }
    ").expect("schema builds");

    let directives = DirectiveResolver::new(&table)
        .resolve(&srcloc(), &field_directives(&table, "Query", "items"))?;
    assert_eq!(
        directives.iter().map(|d| d.name()).collect::<Vec<_>>(),
        vec!["b", "deprecated", "a"],
    );

    Ok(())
}

#[test]
fn unknown_directive_is_an_error() {
    let table = test_utils::build_table("
        type Query {
            items: [String] @nope
        }
    ").expect("schema builds");

    let result = DirectiveResolver::new(&table)
        .resolve(&srcloc(), &field_directives(&table, "Query", "items"));
    assert_eq!(result, Err(DirectiveResolutionError::UnknownDirective {
        directive_name: "nope".to_string(),
    }));
}

#[test]
fn undeclared_argument_is_an_error() {
    let table = test_utils::build_table("
        type Query {
            items: [String] @deprecated(why: \"because\")
        }
    ").expect("schema builds");

    let result = DirectiveResolver::new(&table)
        .resolve(&srcloc(), &field_directives(&table, "Query", "items"));
    assert_eq!(result, Err(DirectiveResolutionError::UndeclaredArgument {
        argument_name: "why".to_string(),
        directive_name: "deprecated".to_string(),
    }));
}

#[test]
fn repeated_argument_is_an_error() {
    let table = test_utils::build_table("
        type Query {
            items: [String] @deprecated(reason: \"first\", reason: \"second\")
        }
    ").expect("schema builds");

    let result = DirectiveResolver::new(&table)
        .resolve(&srcloc(), &field_directives(&table, "Query", "items"));
    assert_eq!(result, Err(DirectiveResolutionError::DuplicateArgument {
        argument_name: "reason".to_string(),
        directive_name: "deprecated".to_string(),
    }));
}

#[test]
fn variable_argument_is_an_error() {
    let table = test_utils::build_table("
        directive @limit(max: Int) on FIELD_DEFINITION
        type Query {
            items: [String] @limit(max: $max)
        }
    ").expect("schema builds");

    let result = DirectiveResolver::new(&table)
        .resolve(&srcloc(), &field_directives(&table, "Query", "items"));
    assert!(matches!(
        result,
        Err(DirectiveResolutionError::InvalidArgumentValue { argument_name, .. })
            if argument_name == "max",
    ));
}

proptest! {
    #[test]
    fn resolution_is_deterministic(weight in any::<i32>(), label in "[a-zA-Z ]{0,20}") {
        let table = test_utils::build_table(format!("
            directive @tag(weight: Int, label: String = \"none\") on FIELD_DEFINITION
            type Query {{
                items: [String] @tag(label: \"{label}\", weight: {weight})
            }}
        ").as_str()).expect("schema builds");
        let usages = field_directives(&table, "Query", "items");
        let resolver = DirectiveResolver::new(&table);

        let first = resolver.resolve(&srcloc(), &usages);
        let second = resolver.resolve(&srcloc(), &usages);
        prop_assert_eq!(&first, &second);

        let directives = first.expect("directive resolves");
        prop_assert_eq!(directives[0].argument("weight"), Some(&Value::Int(weight as i64)));
        prop_assert_eq!(
            directives[0].argument("label").and_then(Value::as_str),
            Some(label.as_str()),
        );
    }
}
