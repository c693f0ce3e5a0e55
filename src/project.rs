use crate::keywords::{self, escape_note};

pub const AUTO_GENERATED_COMMENT: &str = "//// ------------------------------------------------------\n\
//// THIS FILE WAS AUTOMATICALLY GENERATED (DO NOT MODIFY)\n\
//// ------------------------------------------------------";

/// Render the `Project` block. Without a project name there is none.
pub fn generate_project(
    name: Option<&str>,
    database_type: Option<&str>,
    note: Option<&str>,
) -> Option<String> {
    let name = name?;

    let mut lines = Vec::new();
    if let Some(database_type) = database_type {
        lines.push(format!("  {}: '{}'", keywords::DATABASE_TYPE, database_type));
    }
    if let Some(note) = note {
        lines.push(format!("  {}: '{}'", keywords::NOTE, escape_note(note)));
    }

    Some(format!(
        "{} \"{}\" {{\n{}\n}}",
        keywords::PROJECT,
        name,
        lines.join("\n")
    ))
}
