//! Per-record-type field tables.
//!
//! A [`FieldTable`] tells the compiler which fields a record type exposes to
//! filters and what semantic type each field has. Tables are `'static` and
//! built in `const` context, so they are shared across threads for free.

use std::fmt;

use strsim::levenshtein;

/// Maximum Levenshtein distance to consider a field name as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// A closed set of named variants, ordered by declaration.
#[derive(Debug, PartialEq, Eq)]
pub struct EnumType {
    name: &'static str,
    variants: &'static [&'static str],
}

impl EnumType {
    /// Declares an enum type. Variant order defines the ordering used by `gt`/`lt`.
    pub const fn new(name: &'static str, variants: &'static [&'static str]) -> Self {
        Self { name, variants }
    }

    /// Returns the enum's name, used in error messages.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared variants in order.
    pub fn variants(&self) -> &'static [&'static str] {
        self.variants
    }

    /// Looks up a variant by exact name.
    pub fn variant(&self, name: &str) -> Option<EnumVariant> {
        self.variants
            .iter()
            .position(|v| *v == name)
            .map(|ordinal| EnumVariant {
                ordinal,
                name: self.variants[ordinal],
            })
    }
}

/// A resolved enum variant. Orders by declaration position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EnumVariant {
    ordinal: usize,
    name: &'static str,
}

impl EnumVariant {
    /// Zero-based declaration position.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Variant name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for EnumVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Semantic type of a filterable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// A closed enum such as `role`.
    Enum(&'static EnumType),
    /// A whole number.
    Integer,
    /// Free text, compared case-sensitively.
    Text,
    /// A calendar date.
    Date,
    /// A time of day.
    Time,
    /// A link to another record. Present in the table but not comparable.
    Reference,
}

impl FieldType {
    /// Returns the type name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Enum(_) => "enum",
            FieldType::Integer => "integer",
            FieldType::Text => "text",
            FieldType::Date => "date",
            FieldType::Time => "time",
            FieldType::Reference => "reference",
        }
    }
}

/// A single field declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Canonical field name.
    pub name: &'static str,
    /// Semantic type.
    pub field_type: FieldType,
}

impl FieldDef {
    /// Declares a field.
    pub const fn new(name: &'static str, field_type: FieldType) -> Self {
        Self { name, field_type }
    }
}

/// Case-insensitive lookup from field name to its declaration.
///
/// # Example
///
/// ```
/// use whereclause_rs::filter::{FieldDef, FieldTable, FieldType};
///
/// static FIELDS: [FieldDef; 2] = [
///     FieldDef::new("id", FieldType::Integer),
///     FieldDef::new("name", FieldType::Text),
/// ];
/// static TABLE: FieldTable = FieldTable::new("item", &FIELDS);
///
/// assert_eq!(TABLE.lookup("NAME").map(|f| f.name), Some("name"));
/// assert!(TABLE.lookup("missing").is_none());
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct FieldTable {
    record: &'static str,
    fields: &'static [FieldDef],
}

impl FieldTable {
    /// Declares a field table for the named record type.
    pub const fn new(record: &'static str, fields: &'static [FieldDef]) -> Self {
        Self { record, fields }
    }

    /// Name of the record type this table describes.
    pub fn record(&self) -> &'static str {
        self.record
    }

    /// All field declarations in declaration order.
    pub fn fields(&self) -> &'static [FieldDef] {
        self.fields
    }

    /// Finds a field by name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<&'static FieldDef> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }

    /// Suggests the closest declared field name for a misspelled one.
    pub fn suggest(&self, name: &str) -> Option<String> {
        let name_lower = name.to_lowercase();

        let (best_match, best_distance) = self
            .fields
            .iter()
            .map(|field| (field.name, levenshtein(&name_lower, &field.name.to_lowercase())))
            .min_by_key(|(_, distance)| *distance)?;

        if best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE {
            Some(best_match.to_string())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static COLOR: EnumType = EnumType::new("color", &["RED", "GREEN", "BLUE"]);

    static FIELDS: [FieldDef; 3] = [
        FieldDef::new("id", FieldType::Integer),
        FieldDef::new("color", FieldType::Enum(&COLOR)),
        FieldDef::new("createdOn", FieldType::Date),
    ];

    static TABLE: FieldTable = FieldTable::new("widget", &FIELDS);

    #[test]
    fn test_lookup_case_insensitive() {
        assert_eq!(TABLE.lookup("createdon").map(|f| f.name), Some("createdOn"));
        assert_eq!(TABLE.lookup("CREATEDON").map(|f| f.name), Some("createdOn"));
        assert_eq!(TABLE.lookup("Id").map(|f| f.field_type), Some(FieldType::Integer));
    }

    #[test]
    fn test_lookup_missing() {
        assert!(TABLE.lookup("size").is_none());
    }

    #[test]
    fn test_enum_variant_order() {
        let red = COLOR.variant("RED").unwrap();
        let blue = COLOR.variant("BLUE").unwrap();
        assert_eq!(red.ordinal(), 0);
        assert_eq!(blue.ordinal(), 2);
        assert!(red < blue);
        assert_eq!(blue.to_string(), "BLUE");
    }

    #[test]
    fn test_enum_variant_is_case_sensitive() {
        assert!(COLOR.variant("red").is_none());
        assert!(COLOR.variant("PURPLE").is_none());
    }

    #[test]
    fn test_suggest_close_name() {
        assert_eq!(TABLE.suggest("colour"), Some("color".to_string()));
        assert_eq!(TABLE.suggest("createdAt"), Some("createdOn".to_string()));
    }

    #[test]
    fn test_suggest_nothing_for_distant_or_exact() {
        assert_eq!(TABLE.suggest("temperature"), None);
        assert_eq!(TABLE.suggest("id"), None);
    }
}
