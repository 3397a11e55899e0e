//! Input data model: a discovery-style document of named, possibly nested schemas.
//!
//! Only the fields needed to pick a type mapping are modelled. Everything else a
//! real document carries (descriptions, annotations, enums, ...) is ignored by serde.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const KIND_OBJECT: &str = "object";
pub const KIND_ARRAY: &str = "array";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Target namespace (package / module name).
    #[serde(default)]
    pub name: String,
    /// Root schemas keyed by identifier. Order is irrelevant to the output.
    #[serde(default)]
    pub schemas: IndexMap<String, Schema>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub format: String,
    #[serde(rename = "$ref", default)]
    pub reference: String,
    #[serde(default)]
    pub items: Option<Box<Schema>>,
    #[serde(default)]
    pub additional_properties: Option<Box<Schema>>,
    #[serde(default)]
    pub properties: Option<IndexMap<String, Schema>>,
}

impl Document {
    /// Detach the root schemas from the document.
    ///
    /// A root without an explicit `id` is named after its key.
    pub fn into_roots(self) -> Vec<Schema> {
        self.schemas
            .into_iter()
            .map(|(key, mut schema)| {
                if schema.id.is_empty() {
                    schema.id = key;
                }
                schema
            })
            .collect()
    }
}

impl Schema {
    /// A new root struct schema hoisted out of nested structure.
    pub fn synthesized(id: impl Into<String>, properties: IndexMap<String, Schema>) -> Self {
        Self {
            id: id.into(),
            kind: KIND_OBJECT.to_string(),
            properties: Some(properties),
            ..Self::default()
        }
    }

    pub fn is_reference(&self) -> bool {
        !self.reference.is_empty()
    }

    /// Object-as-struct: the only shape the declaration emitter accepts.
    pub fn is_struct(&self) -> bool {
        !self.is_reference()
            && self.kind == KIND_OBJECT
            && self.additional_properties.is_none()
            && self.properties.is_some()
    }
}
