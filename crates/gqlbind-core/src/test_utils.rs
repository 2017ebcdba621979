use crate::binding::StructMemberBinder;
use crate::Config;
use crate::model::BuildError;
use crate::model::Object;
use crate::model::ObjectBuilder;
use crate::types::TypeTable;
use crate::types::TypeTableBuildError;

pub fn parse_config(yaml: &str) -> Config {
    Config::from_yaml_str(yaml).expect("config parses")
}

pub fn build_table(schema: &str) -> Result<TypeTable, TypeTableBuildError> {
    build_table_with_config(schema, &Config::default())
}

pub fn build_table_with_config(
    schema: &str,
    config: &Config,
) -> Result<TypeTable, TypeTableBuildError> {
    TypeTable::builder()
        .load_str(None, schema)?
        .build(config)
}

/// Build the named type from `table` with the default struct binder.
pub fn build_object(
    table: &TypeTable,
    config: &Config,
    type_name: &str,
) -> Result<Object, BuildError> {
    let binder = StructMemberBinder::new(config.struct_tag.to_owned());
    let named_type = table.get(type_name).expect("type is present in the type table");
    ObjectBuilder::new(table, config, &binder).build(named_type)
}
