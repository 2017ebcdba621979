use crate::Config;
use crate::ConfigError;
use crate::NativeKind;
use crate::test_utils;

#[test]
fn empty_config_uses_defaults() {
    let config = test_utils::parse_config("{}");
    assert_eq!(config.exec.module, "exec");
    assert!(config.models.is_empty());
    assert_eq!(config.struct_tag, None);
    assert_eq!(config, Config::default());
}

#[test]
fn full_config_parses() {
    let config = test_utils::parse_config("
exec:
  module: generated::exec
struct_tag: json
models:
  User:
    model: app::model::User
    members:
      - name: ID
      - name: FullName
        tags: { json: name }
      - name: Friends
        method: true
        params: 1
    fields:
      friends:
        resolver: true
      name:
        field_name: fullName
  Metadata:
    model: app::model::Metadata
    kind: map
");
    assert_eq!(config.exec.module, "generated::exec");
    assert_eq!(config.struct_tag.as_deref(), Some("json"));

    let user = config.models.get("User").expect("User model entry");
    assert_eq!(user.kind, NativeKind::Struct);
    assert_eq!(user.model.as_deref(), Some("app::model::User"));
    assert_eq!(user.members.len(), 3);
    assert_eq!(user.members[1].tags.get("json").map(String::as_str), Some("name"));
    assert!(user.members[2].method);
    assert_eq!(user.members[2].params, 1);

    let metadata = config.models.get("Metadata").expect("Metadata model entry");
    assert_eq!(metadata.kind, NativeKind::Map);

    let friends = config.field_override("User", "friends").expect("friends override");
    assert!(friends.resolver);
    assert_eq!(friends.field_name, None);
    let name = config.field_override("User", "name").expect("name override");
    assert!(!name.resolver);
    assert_eq!(name.field_name.as_deref(), Some("fullName"));
    assert!(config.field_override("User", "id").is_none());
    assert!(config.field_override("Post", "id").is_none());
}

#[test]
fn user_defined_requires_a_model_path() {
    let config = test_utils::parse_config("
models:
  User:
    model: app::model::User
  Query:
    fields:
      me:
        resolver: true
");
    assert!(config.user_defined("User"));
    assert!(!config.user_defined("Query"));
    assert!(!config.user_defined("Post"));
}

#[test]
fn unknown_keys_are_rejected() {
    let result = Config::from_yaml_str("modles: {}");
    assert!(matches!(result, Err(ConfigError::ParseError { file: None, .. })));
}

#[test]
fn missing_file_is_a_read_error() {
    let result = Config::load_file("/nonexistent/gqlbind.yml");
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}
