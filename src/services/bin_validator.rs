use std::collections::HashSet;

use crate::errors::ValidationError;
use crate::types::internal::{BinUpdate, Item, NewBin, SearchQuery};

pub const BIN_NAME_EMPTY: &str = "Bin name cannot be empty.";
pub const ITEM_NAME_EMPTY: &str = "Item name cannot be empty.";
pub const QUANTITY_TOO_LOW: &str = "Quantity must be at least 1.";
pub const DUPLICATE_ITEM_ID: &str = "Item ids must be unique within a bin.";
pub const SEARCH_TOO_SHORT: &str = "Search query must be at least 2 characters long.";

/// Validates request input at the API boundary, before any store access
///
/// Every rule is checked and all violations are reported together, one
/// message per offending field.
pub struct BinValidator {
    min_query_length: usize,
}

impl BinValidator {
    pub fn new() -> Self {
        Self { min_query_length: 2 }
    }

    /// Validate a create request; a missing description becomes ""
    pub fn validate_new_bin(
        &self,
        name: String,
        description: Option<String>,
    ) -> Result<NewBin, ValidationError> {
        let mut messages = Vec::new();
        if name.is_empty() {
            messages.push(BIN_NAME_EMPTY.to_string());
        }

        if !messages.is_empty() {
            return Err(ValidationError::new(messages));
        }

        Ok(NewBin {
            name,
            description: description.unwrap_or_default(),
        })
    }

    /// Validate a full replacement of a bin's name, description and items
    pub fn validate_update(
        &self,
        name: String,
        description: Option<String>,
        items: Vec<Item>,
    ) -> Result<BinUpdate, ValidationError> {
        let mut messages = Vec::new();
        if name.is_empty() {
            messages.push(BIN_NAME_EMPTY.to_string());
        }

        for item in &items {
            if item.name.is_empty() {
                messages.push(ITEM_NAME_EMPTY.to_string());
            }
            if item.quantity < 1 {
                messages.push(QUANTITY_TOO_LOW.to_string());
            }
        }

        let mut seen = HashSet::new();
        if !items.iter().all(|item| seen.insert(item.id.as_str())) {
            messages.push(DUPLICATE_ITEM_ID.to_string());
        }

        if !messages.is_empty() {
            return Err(ValidationError::new(messages));
        }

        Ok(BinUpdate {
            name,
            description: description.unwrap_or_default(),
            items,
        })
    }

    /// Validate a search term; the trimmed query must be at least 2 characters
    pub fn validate_search(&self, query: Option<&str>) -> Result<SearchQuery, ValidationError> {
        match query {
            Some(raw) if raw.trim().chars().count() >= self.min_query_length => {
                Ok(SearchQuery::from_validated(raw))
            }
            _ => Err(ValidationError::single(SEARCH_TOO_SHORT)),
        }
    }
}

impl Default for BinValidator {
    fn default() -> Self {
        Self::new()
    }
}
