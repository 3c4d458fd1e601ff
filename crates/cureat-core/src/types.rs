//! Core types for cureat-core.
//!
//! A single versioned [`Record`] schema covers every shape the catalog has
//! been published in. The filter engine reads only the fields returned by
//! [`Record::search_fields`]; everything else is payload carried through to
//! the caller untouched.

use crate::error::FilterError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Schema version stamped on records that do not declare one.
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

/// A searchable restaurant entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RecordDoc")]
pub struct Record {
    /// Unique identifier. Numeric ids in the source document are accepted and
    /// stored in their decimal string form.
    pub id: String,
    /// Display name; the primary match field.
    pub name: String,
    /// Secondary match field. Older catalogs publish this list as `tags`;
    /// when a document carries both, the tags follow the keywords.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    pub schema_version: u32,
    /// Free-text secondary match field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    // Payload below this line. Never read by the filter engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    /// Review count label as published, e.g. `"320+"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pros: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cons: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_menu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Wire shape accepted for a [`Record`], legacy field names included.
#[derive(Deserialize)]
struct RecordDoc {
    #[serde(deserialize_with = "string_or_number")]
    id: String,
    name: String,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default = "current_schema_version")]
    schema_version: u32,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default, alias = "image")]
    image_url: Option<String>,
    #[serde(default)]
    rating: Option<f32>,
    #[serde(default)]
    reviews: Option<String>,
    #[serde(default, alias = "summary_price")]
    price_range: Option<String>,
    #[serde(default, alias = "summary_pros")]
    pros: Vec<String>,
    #[serde(default, alias = "summary_cons")]
    cons: Vec<String>,
    #[serde(default)]
    signature_menu: Option<String>,
    #[serde(default, alias = "summary_opening_hours")]
    opening_hours: Option<String>,
    #[serde(default, alias = "summary_phone")]
    phone: Option<String>,
}

impl From<RecordDoc> for Record {
    fn from(doc: RecordDoc) -> Self {
        let mut keywords = doc.keywords;
        for tag in doc.tags {
            if !keywords.contains(&tag) {
                keywords.push(tag);
            }
        }

        Self {
            id: doc.id,
            name: doc.name,
            keywords,
            schema_version: doc.schema_version,
            description: doc.description,
            address: doc.address,
            image_url: doc.image_url,
            rating: doc.rating,
            reviews: doc.reviews,
            price_range: doc.price_range,
            pros: doc.pros,
            cons: doc.cons,
            signature_menu: doc.signature_menu,
            opening_hours: doc.opening_hours,
            phone: doc.phone,
        }
    }
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

/// How the filter engine compares a term against a search field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Prose (`name`, `description`): always substring containment.
    Text,
    /// One keyword entry: compared under the configured keyword match mode.
    Keyword,
}

impl Record {
    /// A record with only the fields the engine needs; payload left empty.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            keywords: Vec::new(),
            schema_version: CURRENT_SCHEMA_VERSION,
            description: None,
            address: None,
            image_url: None,
            rating: None,
            reviews: None,
            price_range: None,
            pros: Vec::new(),
            cons: Vec::new(),
            signature_menu: None,
            opening_hours: None,
            phone: None,
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The text fields the filter engine matches against, and nothing else:
    /// `name`, then every keyword in order, then `description` if present.
    pub fn search_fields(&self) -> impl Iterator<Item = (FieldKind, &str)> {
        std::iter::once((FieldKind::Text, self.name.as_str()))
            .chain(self.keywords.iter().map(|k| (FieldKind::Keyword, k.as_str())))
            .chain(self.description.as_deref().map(|d| (FieldKind::Text, d)))
    }

    /// Parse a dynamically-typed document into records.
    ///
    /// The document must be a JSON array whose every element is a record
    /// object. Anything else is [`FilterError::InvalidInput`].
    pub fn from_json_array(value: &Value) -> Result<Vec<Record>, FilterError> {
        let items = value.as_array().ok_or_else(|| FilterError::InvalidInput {
            reason: format!("expected an array of records, got {}", json_kind(value)),
        })?;

        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                Record::deserialize(item).map_err(|e| FilterError::InvalidInput {
                    reason: format!("record {i}: {e}"),
                })
            })
            .collect()
    }
}

/// Human-readable name of a JSON value's type, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "id must be a string or a number, got {}",
            json_kind(&other)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn legacy_tags_deserialize_as_keywords() {
        let record: Record = serde_json::from_value(json!({
            "id": 7,
            "name": "Spicy Thai Noodles",
            "tags": ["thai", "noodles"],
            "rating": 4.5,
            "reviews": "420+"
        }))
        .unwrap();

        assert_eq!(record.id, "7");
        assert_eq!(record.keywords, vec!["thai", "noodles"]);
        assert_eq!(record.schema_version, CURRENT_SCHEMA_VERSION);
        assert_eq!(record.reviews.as_deref(), Some("420+"));
    }

    #[test]
    fn summary_fields_map_onto_payload() {
        let record: Record = serde_json::from_value(json!({
            "id": "r-1",
            "name": "Cozy Coffee Cafe",
            "keywords": ["coffee"],
            "summary_pros": ["quiet"],
            "summary_cons": ["small"],
            "summary_price": "$$"
        }))
        .unwrap();

        assert_eq!(record.pros, vec!["quiet"]);
        assert_eq!(record.cons, vec!["small"]);
        assert_eq!(record.price_range.as_deref(), Some("$$"));
    }

    #[test]
    fn keywords_and_tags_together_are_merged() {
        let record: Record = serde_json::from_value(json!({
            "id": "1",
            "name": "Pizza",
            "keywords": ["pizza", "italian"],
            "tags": ["italian", "family"]
        }))
        .unwrap();

        assert_eq!(record.keywords, vec!["pizza", "italian", "family"]);
    }

    #[test]
    fn merged_tags_are_serialized_as_keywords() {
        let record: Record = serde_json::from_value(json!({
            "id": "1",
            "name": "Pizza",
            "keywords": ["pizza"],
            "tags": ["italian"]
        }))
        .unwrap();

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["keywords"], json!(["pizza", "italian"]));
        assert!(value.get("tags").is_none());
    }

    #[test]
    fn search_fields_are_name_keywords_then_description() {
        let record = Record::new("1", "Italian Feast Pizza")
            .with_keywords(["pizza", "italian"])
            .with_description("Freshly baked");
        let fields: Vec<(FieldKind, &str)> = record.search_fields().collect();
        assert_eq!(
            fields,
            vec![
                (FieldKind::Text, "Italian Feast Pizza"),
                (FieldKind::Keyword, "pizza"),
                (FieldKind::Keyword, "italian"),
                (FieldKind::Text, "Freshly baked"),
            ]
        );
    }

    #[test]
    fn payload_is_not_a_search_field() {
        let mut record = Record::new("1", "Corner Spot");
        record.address = Some("12 Main St".to_string());
        record.pros = vec!["quiet".to_string()];
        assert_eq!(record.search_fields().count(), 1);
    }

    #[test]
    fn boolean_id_is_rejected() {
        let err = serde_json::from_value::<Record>(json!({ "id": true, "name": "x" })).unwrap_err();
        assert!(err.to_string().contains("id must be a string or a number"));
    }

    #[test]
    fn from_json_array_rejects_non_arrays() {
        for doc in [json!(null), json!({}), json!("pizza"), json!(3)] {
            let err = Record::from_json_array(&doc).unwrap_err();
            assert!(matches!(err, FilterError::InvalidInput { .. }), "{doc}");
        }
    }

    #[test]
    fn from_json_array_reports_bad_element_index() {
        let doc = json!([{ "id": "1", "name": "ok" }, { "id": "2" }]);
        let FilterError::InvalidInput { reason } = Record::from_json_array(&doc).unwrap_err();
        assert!(reason.starts_with("record 1:"), "{reason}");
    }

    #[test]
    fn serialization_omits_empty_payload() {
        let value = serde_json::to_value(Record::new("1", "Burger")).unwrap();
        assert_eq!(value, json!({ "id": "1", "name": "Burger", "schema_version": 2 }));
    }
}
