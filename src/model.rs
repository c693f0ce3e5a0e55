//! Model lookup and the name resolution shared by every generator.

use crate::dmmf::Model;

/// Find the model named `type_name`. A miss means the type is a scalar or
/// some type the datamodel does not define.
pub fn find_by_type<'a>(models: &'a [Model], type_name: &str) -> Option<&'a Model> {
    models.iter().find(|m| m.name == type_name)
}

/// Table name a model renders under: its `dbName` when mapping to the
/// database schema and one is set, else its logical name.
pub fn table_name(model: &Model, map_to_db_schema: bool) -> &str {
    match (&model.db_name, map_to_db_schema) {
        (Some(db_name), true) => db_name,
        _ => &model.name,
    }
}

/// `schema.` for namespaced models, empty otherwise.
pub fn schema_prefix(model: &Model) -> String {
    model
        .schema
        .as_ref()
        .map(|s| format!("{}.", s))
        .unwrap_or_default()
}

/// Name a relation field points at: the target model's table name, or the
/// raw type name when the target is not a known model.
pub fn resolve_type_name<'a>(models: &'a [Model], type_name: &'a str, map_to_db_schema: bool) -> &'a str {
    match find_by_type(models, type_name) {
        Some(model) => table_name(model, map_to_db_schema),
        None => type_name,
    }
}
