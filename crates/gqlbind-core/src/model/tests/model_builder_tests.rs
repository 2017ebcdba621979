use crate::binding::FieldAccess;
use crate::binding::FieldBinding;
use crate::binding::NativeTypeBinder;
use crate::Config;
use crate::model::BuildError;
use crate::model::Field;
use crate::model::ModelBuilder;
use crate::test_utils;
use crate::types::NamedType;

type Result<T> = std::result::Result<T, BuildError>;

const SCHEMA: &str = "
    type Query { user(id: ID!): User, node: Node }
    interface Node { id: ID! }
    type User implements Node { id: ID!, name: String }
    input UserFilter { name: String }
    enum Role { ADMIN }
    type Mutation { setRole(role: Role): User }
";

/// Binds every field to a variable named after its identifier.
struct BindEverything;
impl NativeTypeBinder for BindEverything {
    fn bind_object(&self, _object_type: &NamedType, fields: &[Field]) -> Vec<FieldBinding> {
        fields.iter()
            .map(|field| FieldBinding::Bound(FieldAccess::Variable {
                member: field.generated_name().to_string(),
            }))
            .collect()
    }
}

#[test]
fn builds_objects_and_inputs_in_declaration_order() -> Result<()> {
    let table = test_utils::build_table(SCHEMA).expect("schema builds");
    let config = Config::default();
    let model = ModelBuilder::new(&table, &config).build()?;

    assert_eq!(
        model.objects().iter().map(|o| o.name()).collect::<Vec<_>>(),
        vec!["Query", "User", "UserFilter", "Mutation"],
    );
    assert_eq!(
        model.roots().map(|o| o.name()).collect::<Vec<_>>(),
        vec!["Query", "Mutation"],
    );
    assert_eq!(
        model.inputs().map(|o| o.name()).collect::<Vec<_>>(),
        vec!["UserFilter"],
    );
    assert!(model.object("Node").is_none());
    assert!(model.object("Role").is_none());
    assert!(model.object("User").is_some_and(|o| !o.in_typemap()));
    Ok(())
}

#[test]
fn diagnostics_are_collected_per_object() -> Result<()> {
    let table = test_utils::build_table(SCHEMA).expect("schema builds");
    let config = Config::default();
    let model = ModelBuilder::new(&table, &config).build()?;

    assert_eq!(
        model.diagnostics()
            .map(|(object_name, diag)| (object_name, diag.field_name.as_str()))
            .collect::<Vec<_>>(),
        vec![("Query", "user"), ("Query", "node"), ("Mutation", "setRole")],
    );
    Ok(())
}

#[test]
fn custom_binder_replaces_struct_binding() -> Result<()> {
    let table = test_utils::build_table(SCHEMA).expect("schema builds");
    let config = Config::default();
    let model = ModelBuilder::new(&table, &config)
        .with_binder(&BindEverything)
        .build()?;

    assert_eq!(model.diagnostics().count(), 0);
    let query = model.object("Query").expect("Query is built");
    assert!(!query.has_resolvers());
    assert_eq!(
        query.field("user").and_then(|f| f.access()).map(FieldAccess::member),
        Some("User"),
    );
    Ok(())
}

#[test]
fn stops_at_the_first_error() {
    let table = test_utils::build_table("
        type Query { a: Int }
        input Broken { user: Query }
        type AlsoBroken { b: Missing }
    ").expect("schema builds");
    let config = Config::default();
    let result = ModelBuilder::new(&table, &config).build();
    assert!(matches!(
        result,
        Err(BuildError::InputPositionViolation { object_name, .. }) if object_name == "Broken",
    ));
}

#[test]
fn build_is_deterministic() -> Result<()> {
    let table = test_utils::build_table(SCHEMA).expect("schema builds");
    let config = Config::default();
    let first = ModelBuilder::new(&table, &config).build()?;
    let second = ModelBuilder::new(&table, &config).build()?;
    assert_eq!(first, second);
    assert_eq!(first.into_objects().len(), 4);
    Ok(())
}
