//! Markup tokens and scalar names shared by the generators.

pub const TABLE: &str = "Table";
pub const ENUM: &str = "Enum";
pub const REF: &str = "Ref";
pub const PROJECT: &str = "Project";
pub const INDEXES: &str = "indexes";
pub const PK: &str = "pk";
pub const INCREMENT: &str = "increment";
pub const UNIQUE: &str = "unique";
pub const NOT_NULL: &str = "not null";
pub const DEFAULT: &str = "default";
pub const NOTE: &str = "Note";
pub const NOTE_INLINE: &str = "note";
pub const DATABASE_TYPE: &str = "database_type";
pub const NOW_DEFAULT: &str = "default: `now()`";

/// Group name for models that declare no schema namespace.
pub const DEFAULT_SCHEMA: &str = "public";

pub const AUTOINCREMENT_FN: &str = "autoincrement";
pub const NOW_FN: &str = "now";

pub const SCALAR_STRING: &str = "String";
pub const SCALAR_JSON: &str = "Json";

/// Escape single quotes so the text fits in a `'...'` literal.
pub fn escape_note(text: &str) -> String {
    text.replace('\'', "\\'")
}
