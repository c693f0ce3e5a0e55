//! Join tables for implicit many-to-many relations.
//!
//! An implicit many-to-many relation is two list relation fields sharing a
//! relation name with no foreign key columns on either side. The datamodel
//! has no table for it, so one is synthesized with a column per side.

use std::collections::VecDeque;

use crate::dmmf::{Field, Model};
use crate::error::{GenerateError, Result};
use crate::keywords;
use crate::model::{find_by_type, schema_prefix, table_name};

/// One side of an implicit many-to-many relation, paired with the key
/// fields of the model that declares it.
#[derive(Debug, Clone)]
struct JoinSide<'a> {
    owner: &'a Model,
    field: &'a Field,
    relation_to_fields: Vec<String>,
}

impl JoinSide<'_> {
    fn relation_name(&self) -> &str {
        self.field.relation_name.as_deref().unwrap_or_default()
    }
}

/// Render one `Table` block per implicit many-to-many relation.
///
/// List relation fields without a counterpart in the candidate set are the
/// back side of a one-to-many relation and are skipped.
pub fn generate_many_to_many_tables(models: &[Model], map_to_db_schema: bool) -> Result<Vec<String>> {
    let mut pending: VecDeque<JoinSide<'_>> = collect_join_sides(models).into();
    let mut tables = Vec::new();

    while let Some(first) = pending.pop_front() {
        let relation = first.relation_name().to_string();

        match pending.iter().find(|side| side.relation_name() == relation) {
            Some(second) => {
                tables.push(format!(
                    "{} {}{} {{\n{}\n{}\n}}",
                    keywords::TABLE,
                    schema_prefix(first.owner),
                    relation,
                    join_column(&first, models, map_to_db_schema)?,
                    join_column(second, models, map_to_db_schema)?,
                ));
            }
            None => {
                tracing::debug!(
                    relation = %relation,
                    model = %first.owner.name,
                    field = %first.field.name,
                    "skipping list relation without a many-to-many counterpart"
                );
            }
        }

        pending.retain(|side| side.relation_name() != relation);
    }

    tracing::debug!(tables = tables.len(), "generated join tables");
    Ok(tables)
}

fn collect_join_sides(models: &[Model]) -> Vec<JoinSide<'_>> {
    models
        .iter()
        .flat_map(|model| {
            model
                .fields
                .iter()
                .filter(|f| f.is_implicit_list_relation())
                .map(move |field| JoinSide {
                    owner: model,
                    field,
                    relation_to_fields: model.id_field_names(),
                })
        })
        .collect()
}

fn join_column(side: &JoinSide<'_>, models: &[Model], map_to_db_schema: bool) -> Result<String> {
    let target = find_by_type(models, &side.field.typ).ok_or_else(|| GenerateError::ModelNotFound {
        relation: side.relation_name().to_string(),
        type_name: side.field.typ.clone(),
    })?;

    let id_name = side
        .relation_to_fields
        .first()
        .ok_or_else(|| GenerateError::MissingIdentifier {
            model: side.owner.name.clone(),
        })?;

    let id_field = target.field(id_name).ok_or_else(|| GenerateError::IdentifierNotFound {
        model: target.name.clone(),
        field: id_name.clone(),
    })?;

    Ok(format!(
        "  {}Id {} [ref: > {}{}.{}]",
        side.field.name.to_lowercase(),
        id_field.typ,
        schema_prefix(target),
        table_name(target, map_to_db_schema),
        id_name
    ))
}
