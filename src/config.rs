//! Generator options, as passed by the host in its flat `config` map.

use std::collections::BTreeMap;

use crate::error::ConfigError;

pub const DEFAULT_OUTPUT_NAME: &str = "schema.dbml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub output_name: String,
    /// Synthesize join tables for implicit many-to-many relations.
    pub many_to_many: bool,
    /// Render `dbName`s instead of model names.
    pub map_to_db_schema: bool,
    /// Keep relation fields in table blocks.
    pub include_relation_fields: bool,
    pub project_name: Option<String>,
    pub project_database_type: Option<String>,
    pub project_note: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            many_to_many: true,
            map_to_db_schema: false,
            include_relation_fields: true,
            project_name: None,
            project_database_type: None,
            project_note: None,
        }
    }
}

impl GeneratorConfig {
    /// Build a config from string options. Unknown keys are ignored.
    pub fn from_map(options: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for (key, value) in options {
            match key.as_str() {
                "outputName" => config.output_name = value.clone(),
                "manyToMany" => config.many_to_many = parse_flag(key, value)?,
                "mapToDbSchema" => config.map_to_db_schema = parse_flag(key, value)?,
                "includeRelationFields" => config.include_relation_fields = parse_flag(key, value)?,
                "projectName" => config.project_name = Some(value.clone()),
                "projectDatabaseType" => config.project_database_type = Some(value.clone()),
                "projectNote" => config.project_note = Some(value.clone()),
                _ => tracing::debug!(key = %key, "ignoring unknown generator option"),
            }
        }

        Ok(config)
    }

    /// Build a config from a JSON object of options. Values may be strings
    /// or JSON booleans.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let options: BTreeMap<String, serde_json::Value> =
            serde_json::from_str(input).map_err(|e| ConfigError::InvalidJson(e.to_string()))?;

        let options: BTreeMap<String, String> = options
            .into_iter()
            .map(|(key, value)| match value {
                serde_json::Value::String(s) => (key, s),
                other => (key, other.to_string()),
            })
            .collect();

        Self::from_map(&options)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
