//! Generic record model.
//!
//! # Responsibility
//! - Provide one storage shape for all entity kinds (employee, candidate,
//!   schedule event) without a fixed per-kind schema.
//! - Offer defensive field accessors for renderers reading fields by name.
//!
//! # Invariants
//! - `id` is the only required field and lives outside the open map.
//! - `fields` never contains an `id` key; constructors strip it.
//! - Serialized form is one flat JSON object (`id` alongside the fields).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Open field map carried by every record besides its `id`.
pub type Fields = BTreeMap<String, FieldValue>;

/// Closed set of value types an open field may hold.
///
/// Untagged so persisted collections stay in the plain field-mapping shape
/// the admin panel always used (`{"name":"X","skills":["a"],"years":4}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Integer-valued field (years of experience, headcount, ...).
    Number(i64),
    /// Free-form text field.
    Text(String),
    /// Sequence of short text items (skill lists, attendee lists, ...).
    List(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn number(value: i64) -> Self {
        Self::Number(value)
    }

    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Returns the text content when this is a `Text` field.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns the numeric content when this is a `Number` field.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the items when this is a `List` field.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// One entity instance: a required unique `id` plus arbitrary named fields.
///
/// The same shape backs every collection; field sets vary per entity kind
/// and no schema is enforced beyond the value-type closed set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique integer identifier within the owning collection.
    pub id: i64,
    /// Open named fields, flattened into the same JSON object as `id`.
    #[serde(flatten)]
    pub fields: Fields,
}

impl Record {
    /// Builds a record from an id and a field map.
    ///
    /// Any `id` key inside `fields` is dropped; the explicit argument wins.
    pub fn new(id: i64, mut fields: Fields) -> Self {
        fields.remove("id");
        Self { id, fields }
    }

    /// Raw field lookup by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Text field lookup; `None` when absent or not text.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    /// Numeric field lookup; `None` when absent or not a number.
    pub fn number(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(FieldValue::as_number)
    }

    /// List field lookup; `None` when absent or not a list.
    pub fn list(&self, name: &str) -> Option<&[String]> {
        self.get(name).and_then(FieldValue::as_list)
    }
}
