//! `Ref` lines for relations that carry foreign key columns.

use crate::dmmf::{Field, Model};
use crate::keywords;
use crate::model::{find_by_type, schema_prefix, table_name};

pub fn generate_relations(models: &[Model], map_to_db_schema: bool) -> Vec<String> {
    let mut refs = Vec::new();

    for model in models {
        for field in model.fields.iter().filter(|f| f.has_foreign_keys()) {
            let from_fields = field.relation_from_fields.as_deref().unwrap_or_default();
            let to_fields = field.relation_to_fields.as_deref().unwrap_or_default();
            let target = find_by_type(models, &field.typ);

            let to_table = match target {
                Some(t) => format!("{}{}", schema_prefix(t), table_name(t, map_to_db_schema)),
                None => field.typ.clone(),
            };
            let operator = if is_one_to_one(field, target) { "-" } else { ">" };

            refs.push(format!(
                "{} {}:{}{}.{} {} {}.{}{}",
                keywords::REF,
                field.relation_name.as_deref().unwrap_or_default(),
                schema_prefix(model),
                table_name(model, map_to_db_schema),
                combine_keys(from_fields),
                operator,
                to_table,
                combine_keys(to_fields),
                referential_actions(field),
            ));
        }
    }

    tracing::debug!(refs = refs.len(), "generated relation refs");
    refs
}

/// The opposite side lives on the target model under the same relation
/// name; a non-list opposite side makes the relation one-to-one.
fn is_one_to_one(field: &Field, target: Option<&Model>) -> bool {
    target
        .and_then(|t| {
            t.fields.iter().find(|other| {
                other.relation_name == field.relation_name && !std::ptr::eq(*other, field)
            })
        })
        .is_some_and(|other| !other.is_list)
}

fn combine_keys(keys: &[String]) -> String {
    match keys {
        [single] => single.clone(),
        _ => format!("({})", keys.join(", ")),
    }
}

fn referential_actions(field: &Field) -> String {
    match &field.relation_on_delete {
        Some(action) => format!(" [delete: {}]", action),
        None => String::new(),
    }
}
