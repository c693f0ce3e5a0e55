use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenerateError>;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Relation {relation}: model {type_name} not found")]
    ModelNotFound { relation: String, type_name: String },
    #[error("Model {model} declares no identifier field")]
    MissingIdentifier { model: String },
    #[error("Identifier field {field} not found on model {model}")]
    IdentifierNotFound { model: String, field: String },
    #[error("Invalid generator config: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid DMMF document: {0}")]
    Dmmf(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be \"true\" or \"false\", got {value:?}")]
    InvalidFlag { key: String, value: String },
    #[error("options must be a JSON object: {0}")]
    InvalidJson(String),
}
