use serde::{Deserialize, Serialize};

use crate::errors::InternalError;
use crate::types::db::bin_record;

/// A name + quantity entry owned by exactly one bin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub quantity: i64,
}

/// A named container record holding an ordered list of items
///
/// Timestamps are milliseconds since the Unix epoch. `id` and `created_at`
/// never change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bin {
    pub id: String,
    pub name: String,
    pub description: String,
    pub items: Vec<Item>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Bin {
    /// A fresh bin with no items, stamped `now` for both timestamps
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>, now: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl TryFrom<bin_record::Model> for Bin {
    type Error = InternalError;

    fn try_from(model: bin_record::Model) -> Result<Self, Self::Error> {
        let items: Vec<Item> = serde_json::from_str(&model.items)
            .map_err(|e| InternalError::parse("bin items", e.to_string()))?;

        Ok(Self {
            id: model.id,
            name: model.name,
            description: model.description,
            items,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl TryFrom<&Bin> for bin_record::ActiveModel {
    type Error = InternalError;

    fn try_from(bin: &Bin) -> Result<Self, Self::Error> {
        use sea_orm::Set;

        let items = serde_json::to_string(&bin.items)
            .map_err(|e| InternalError::parse("bin items", e.to_string()))?;

        Ok(Self {
            id: Set(bin.id.clone()),
            name: Set(bin.name.clone()),
            description: Set(bin.description.clone()),
            items: Set(items),
            created_at: Set(bin.created_at),
            updated_at: Set(bin.updated_at),
        })
    }
}

/// Validated input for creating a bin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBin {
    pub name: String,
    pub description: String,
}

/// Validated full replacement of a bin's editable fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinUpdate {
    pub name: String,
    pub description: String,
    pub items: Vec<Item>,
}

/// Validated search term
///
/// Holds the case-folded query as received; only the length rule looks at the
/// trimmed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub(crate) fn from_validated(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One item matched by a search, with its owning bin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub item_id: String,
    pub item_name: String,
    pub item_quantity: i64,
    pub bin_id: String,
    pub bin_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bin_starts_empty_with_equal_timestamps() {
        let bin = Bin::new("b-1", "Garage", "", 1_700_000_000_000);

        assert!(bin.items.is_empty());
        assert_eq!(bin.created_at, bin.updated_at);
    }

    #[test]
    fn test_model_with_corrupt_items_fails_to_parse() {
        let model = bin_record::Model {
            id: "b-1".to_string(),
            name: "Garage".to_string(),
            description: String::new(),
            items: "not json".to_string(),
            created_at: 1,
            updated_at: 1,
        };

        let result = Bin::try_from(model);
        assert!(matches!(result, Err(InternalError::Parse { .. })));
    }

    #[test]
    fn test_model_items_preserve_order() {
        let model = bin_record::Model {
            id: "b-1".to_string(),
            name: "Garage".to_string(),
            description: "tools".to_string(),
            items: r#"[{"id":"i-2","name":"Saw","quantity":1},{"id":"i-1","name":"Hammer","quantity":2}]"#.to_string(),
            created_at: 10,
            updated_at: 20,
        };

        let bin = Bin::try_from(model).unwrap();
        assert_eq!(bin.items[0].name, "Saw");
        assert_eq!(bin.items[1].name, "Hammer");
        assert_eq!(bin.items[1].quantity, 2);
    }

    #[test]
    fn test_bin_serializes_camel_case() {
        let bin = Bin::new("b-1", "Garage", "", 5);
        let json = serde_json::to_value(&bin).unwrap();

        assert_eq!(json["createdAt"], 5);
        assert_eq!(json["updatedAt"], 5);
        assert!(json.get("created_at").is_none());
    }
}
