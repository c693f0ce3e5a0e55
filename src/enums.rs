use crate::dmmf::Enum;
use crate::keywords::{self, escape_note};

/// Render each enum as an `Enum` block listing its values.
///
/// Enums always keep their model name: enum fields reference them by that
/// name in table blocks regardless of `dbName` mapping.
pub fn generate_enums(enums: &[Enum]) -> Vec<String> {
    enums
        .iter()
        .map(|e| {
            let values: Vec<String> = e
                .values
                .iter()
                .map(|v| match &v.documentation {
                    Some(doc) if !doc.is_empty() => format!(
                        "  {} [{}: '{}']",
                        v.name,
                        keywords::NOTE_INLINE,
                        escape_note(doc)
                    ),
                    _ => format!("  {}", v.name),
                })
                .collect();
            format!("{} {} {{\n{}\n}}", keywords::ENUM, e.name, values.join("\n"))
        })
        .collect()
}
