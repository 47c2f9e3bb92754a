//! Pantry item records.

use serde::Serialize;

use super::RecordId;
use super::missing_column::{MissingColumn, required};

/// A persisted pantry item.
///
/// `item_type` is exposed as `type` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PantryItem {
    pub id: RecordId,
    pub name: String,
    pub photo: Option<String>,
    pub categories: String,
    #[serde(rename = "type")]
    pub item_type: String,
}

/// The whitelisted fields accepted when creating a pantry item.
///
/// Only `photo` is nullable in the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PantryItemDraft {
    pub name: Option<String>,
    pub photo: Option<String>,
    pub categories: Option<String>,
    pub item_type: Option<String>,
}

impl PantryItemDraft {
    /// Attach the identifier assigned by the store.
    ///
    /// # Errors
    /// Returns the first required column left unset, in table order.
    pub fn into_item(self, id: RecordId) -> Result<PantryItem, MissingColumn> {
        Ok(PantryItem {
            id,
            name: required(self.name, "pantry_items", "name")?,
            photo: self.photo,
            categories: required(self.categories, "pantry_items", "categories")?,
            item_type: required(self.item_type, "pantry_items", "type")?,
        })
    }
}

/// Partial update of a pantry item.
///
/// `photo` distinguishes "not submitted" (`None`) from "cleared"
/// (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PantryItemChanges {
    pub name: Option<String>,
    pub photo: Option<Option<String>>,
    pub categories: Option<String>,
    pub item_type: Option<String>,
}

impl PantryItemChanges {
    /// True when no field was submitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Apply the submitted fields to `item` in place.
    pub fn apply_to(self, item: &mut PantryItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(photo) = self.photo {
            item.photo = photo;
        }
        if let Some(categories) = self.categories {
            item.categories = categories;
        }
        if let Some(item_type) = self.item_type {
            item.item_type = item_type;
        }
    }
}
