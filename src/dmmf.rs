//! Datamodel types as they appear in the DMMF JSON document.

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub datamodel: Datamodel,
}

impl Document {
    /// Parse a DMMF document from its JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datamodel {
    #[serde(default)]
    pub models: Vec<Model>,
    #[serde(default)]
    pub enums: Vec<Enum>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub name: String,
    #[serde(default)]
    pub db_name: Option<String>,
    /// Namespace the model lives in, for multi-schema datasources.
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub primary_key: Option<PrimaryKey>,
    #[serde(default)]
    pub unique_fields: Vec<Vec<String>>,
    #[serde(default)]
    pub documentation: Option<String>,
}

impl Model {
    /// Names of the fields flagged `isId`, in declaration order.
    pub fn id_field_names(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| f.is_id)
            .map(|f| f.name.clone())
            .collect()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryKey {
    #[serde(default)]
    pub name: Option<String>,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Scalar,
    Object,
    Enum,
    Unsupported,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(rename = "type")]
    pub typ: String,
    #[serde(default)]
    pub is_list: bool,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub is_unique: bool,
    #[serde(default)]
    pub is_id: bool,
    #[serde(default)]
    pub has_default_value: bool,
    #[serde(default)]
    pub default: Option<FieldDefault>,
    #[serde(default)]
    pub relation_name: Option<String>,
    #[serde(default)]
    pub relation_from_fields: Option<Vec<String>>,
    #[serde(default)]
    pub relation_to_fields: Option<Vec<String>>,
    #[serde(default)]
    pub relation_on_delete: Option<String>,
    #[serde(default)]
    pub documentation: Option<String>,
}

impl Field {
    pub fn is_relation(&self) -> bool {
        self.relation_name.is_some()
    }

    /// List side of a relation with no foreign key columns declared on it:
    /// either half of an implicit many-to-many, or the back side of a
    /// one-to-many.
    pub fn is_implicit_list_relation(&self) -> bool {
        self.is_relation()
            && self.is_list
            && matches!(&self.relation_from_fields, Some(v) if v.is_empty())
            && matches!(&self.relation_to_fields, Some(v) if v.is_empty())
    }

    /// Owning side of an explicit relation: both key lists are populated.
    pub fn has_foreign_keys(&self) -> bool {
        self.is_relation()
            && matches!(&self.relation_from_fields, Some(v) if !v.is_empty())
            && matches!(&self.relation_to_fields, Some(v) if !v.is_empty())
    }

    pub fn default_function(&self) -> Option<&str> {
        match &self.default {
            Some(FieldDefault::Function(f)) => Some(f.name.as_str()),
            _ => None,
        }
    }
}

/// `default` is either a literal, a list literal, or a function descriptor
/// such as `{ "name": "autoincrement", "args": [] }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldDefault {
    Function(DefaultFunction),
    List(Vec<serde_json::Value>),
    Literal(serde_json::Value),
}

impl FieldDefault {
    /// Render a literal default the way it reads in a schema file.
    /// Function and list defaults have no literal form.
    pub fn literal(&self) -> Option<String> {
        match self {
            FieldDefault::Literal(serde_json::Value::String(s)) => Some(s.clone()),
            FieldDefault::Literal(serde_json::Value::Number(n)) => Some(render_number(n)),
            FieldDefault::Literal(serde_json::Value::Bool(b)) => Some(b.to_string()),
            _ => None,
        }
    }
}

fn render_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if !n.is_i64() && !n.is_u64() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultFunction {
    pub name: String,
    #[serde(default)]
    pub args: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enum {
    pub name: String,
    #[serde(default)]
    pub db_name: Option<String>,
    #[serde(default)]
    pub values: Vec<EnumValue>,
    #[serde(default)]
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub name: String,
    #[serde(default)]
    pub db_name: Option<String>,
    #[serde(default)]
    pub documentation: Option<String>,
}
