pub mod config;
pub mod dmmf;
pub mod enums;
pub mod error;
pub mod keywords;
pub mod many_to_many;
pub mod model;
pub mod project;
pub mod relations;
pub mod table;

use wasm_bindgen::prelude::*;

pub use config::GeneratorConfig;
pub use dmmf::{Datamodel, Document};
pub use error::{ConfigError, GenerateError, Result};

use enums::generate_enums;
use many_to_many::generate_many_to_many_tables;
use project::{AUTO_GENERATED_COMMENT, generate_project};
use relations::generate_relations;
use table::generate_tables;

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Render a datamodel as a DBML document.
///
/// Blocks are separated by a blank line, in order: banner, project, tables,
/// join tables, enums, refs.
pub fn generate_dbml(datamodel: &Datamodel, config: &GeneratorConfig) -> Result<String> {
    let models = &datamodel.models;

    let mut blocks = vec![AUTO_GENERATED_COMMENT.to_string()];
    blocks.extend(generate_project(
        config.project_name.as_deref(),
        config.project_database_type.as_deref(),
        config.project_note.as_deref(),
    ));
    blocks.extend(generate_tables(
        models,
        config.map_to_db_schema,
        config.include_relation_fields,
    ));
    if config.many_to_many {
        blocks.extend(generate_many_to_many_tables(models, config.map_to_db_schema)?);
    }
    blocks.extend(generate_enums(&datamodel.enums));
    blocks.extend(generate_relations(models, config.map_to_db_schema));

    tracing::debug!(
        models = models.len(),
        enums = datamodel.enums.len(),
        blocks = blocks.len(),
        "generated dbml"
    );
    Ok(blocks.join("\n\n"))
}

/// Render a DMMF JSON document to DBML
#[wasm_bindgen(js_name = "dmmfToDbml")]
pub fn render_dbml(dmmf: &str, options: Option<String>) -> std::result::Result<String, String> {
    render_json(dmmf, options.as_deref()).map_err(|e| e.to_string())
}

fn render_json(dmmf: &str, options: Option<&str>) -> Result<String> {
    let document = Document::from_json(dmmf)?;
    let config = match options {
        Some(json) => GeneratorConfig::from_json(json)?,
        None => GeneratorConfig::default(),
    };
    generate_dbml(&document.datamodel, &config)
}
