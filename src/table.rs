//! Table blocks: one per model, grouped by schema namespace.

use crate::dmmf::{Field, FieldKind, Model};
use crate::keywords::{self, escape_note};
use crate::model::{resolve_type_name, schema_prefix, table_name};

/// Render every model as a `Table` block.
///
/// Models are grouped by namespace (first-seen order), each group preceded
/// by a `// Schema: <name>` comment. Models keep their input order within a
/// group.
pub fn generate_tables(
    models: &[Model],
    map_to_db_schema: bool,
    include_relation_fields: bool,
) -> Vec<String> {
    let mut groups: Vec<(&str, Vec<&Model>)> = Vec::new();
    for model in models {
        let schema = model.schema.as_deref().unwrap_or(keywords::DEFAULT_SCHEMA);
        match groups.iter_mut().find(|(name, _)| *name == schema) {
            Some((_, members)) => members.push(model),
            None => groups.push((schema, vec![model])),
        }
    }

    let mut result = Vec::with_capacity(models.len() + groups.len());
    for (schema, members) in groups {
        result.push(format!("// Schema: {}", schema));
        for model in members {
            result.push(generate_table(model, models, map_to_db_schema, include_relation_fields));
        }
    }

    tracing::debug!(tables = models.len(), "generated table blocks");
    result
}

fn generate_table(
    model: &Model,
    models: &[Model],
    map_to_db_schema: bool,
    include_relation_fields: bool,
) -> String {
    let mut output = format!(
        "{} {}{} {{\n",
        keywords::TABLE,
        schema_prefix(model),
        table_name(model, map_to_db_schema)
    );

    let lines: Vec<String> = model
        .fields
        .iter()
        .filter(|f| include_relation_fields || !f.is_relation())
        .map(|f| generate_field(f, models, map_to_db_schema))
        .collect();
    output.push_str(&lines.join("\n"));

    output.push_str(&generate_indexes(model));

    if let Some(doc) = &model.documentation {
        if !doc.is_empty() {
            output.push_str(&format!("\n\n  {}: '{}'", keywords::NOTE, escape_note(doc)));
        }
    }

    output.push_str("\n}");
    output
}

fn generate_field(field: &Field, models: &[Model], map_to_db_schema: bool) -> String {
    let type_name = if map_to_db_schema {
        resolve_type_name(models, &field.typ, true)
    } else {
        field.typ.as_str()
    };

    // Relation lists are virtual; only scalar lists are real array columns.
    let suffix = if field.is_list && !field.is_relation() { "[]" } else { "" };

    format!(
        "  {} {}{}{}",
        field.name,
        type_name,
        suffix,
        generate_column_settings(field)
    )
}

fn generate_column_settings(field: &Field) -> String {
    let mut settings: Vec<String> = Vec::new();

    if field.is_id {
        settings.push(keywords::PK.to_string());
    }

    match field.default_function() {
        Some(keywords::AUTOINCREMENT_FN) => settings.push(keywords::INCREMENT.to_string()),
        Some(keywords::NOW_FN) => settings.push(keywords::NOW_DEFAULT.to_string()),
        _ => {}
    }

    if field.is_unique {
        settings.push(keywords::UNIQUE.to_string());
    }

    // Primary keys are implicitly not null.
    if field.is_required && !field.is_id {
        settings.push(keywords::NOT_NULL.to_string());
    }

    if field.has_default_value {
        if let Some(value) = field.default.as_ref().and_then(|d| d.literal()) {
            let quoted = field.typ == keywords::SCALAR_STRING
                || field.typ == keywords::SCALAR_JSON
                || field.kind == FieldKind::Enum;
            if quoted {
                settings.push(format!("{}: '{}'", keywords::DEFAULT, value));
            } else {
                settings.push(format!("{}: {}", keywords::DEFAULT, value));
            }
        }
    }

    if let Some(doc) = &field.documentation {
        if !doc.is_empty() {
            settings.push(format!("{}: '{}'", keywords::NOTE, escape_note(doc)));
        }
    }

    if settings.is_empty() {
        String::new()
    } else {
        format!(" [{}]", settings.join(", "))
    }
}

fn generate_indexes(model: &Model) -> String {
    let primary_fields = model
        .primary_key
        .as_ref()
        .map(|pk| pk.fields.as_slice())
        .unwrap_or_default();
    let composite_uniques: Vec<&Vec<String>> =
        model.unique_fields.iter().filter(|u| u.len() > 1).collect();

    if primary_fields.is_empty() && composite_uniques.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(composite_uniques.len() + 1);
    if !primary_fields.is_empty() {
        lines.push(format!("    ({}) [{}]", primary_fields.join(", "), keywords::PK));
    }
    for unique in composite_uniques {
        lines.push(format!("    ({}) [{}]", unique.join(", "), keywords::UNIQUE));
    }

    format!("\n\n  {} {{\n{}\n  }}", keywords::INDEXES, lines.join("\n"))
}
