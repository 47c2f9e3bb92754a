//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer; repositories convert them
//! into domain records before returning.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::{
    Activity, ActivityFields, NewUser, PantryItem, PantryItemChanges, PantryItemDraft, Recipe,
    RecipeChanges, RecipeDraft, RecordId, User,
};

use super::schema::{activities, pantry_items, recipes, users};

// ---------------------------------------------------------------------------
// Activities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = activities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ActivityRow {
    pub id: i32,
    pub data: serde_json::Value,
}

impl ActivityRow {
    /// Rebuild the domain record. A stored document that is not an object is
    /// reported back as the conversion error text.
    pub fn into_activity(self) -> Result<Activity, String> {
        let fields = ActivityFields::try_from_value(self.data).map_err(|err| err.to_string())?;
        Ok(Activity {
            id: RecordId::new(self.id),
            fields,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = activities)]
pub(crate) struct NewActivityRow {
    pub data: serde_json::Value,
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub photo: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: RecordId::new(row.id),
            name: row.name,
            email: row.email,
            password: row.password,
            photo: row.photo,
            date_of_birth: row.date_of_birth,
        }
    }
}

/// `None` inserts `DEFAULT`; required columns then fail their NOT NULL
/// constraint inside the store.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub password: Option<&'a str>,
    pub photo: Option<&'a str>,
    pub date_of_birth: Option<NaiveDate>,
}

impl<'a> From<&'a NewUser> for NewUserRow<'a> {
    fn from(user: &'a NewUser) -> Self {
        Self {
            name: user.name.as_deref(),
            email: user.email.as_deref(),
            password: user.password.as_deref(),
            photo: user.photo.as_deref(),
            date_of_birth: user.date_of_birth,
        }
    }
}

// ---------------------------------------------------------------------------
// Recipes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RecipeRow {
    pub id: i32,
    pub name: String,
    pub calories: f64,
    pub fats_value: f64,
    pub carbo_value: f64,
    pub prot_value: f64,
    pub prepare_time: i32,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Self {
            id: RecordId::new(row.id),
            name: row.name,
            calories: row.calories,
            fats_value: row.fats_value,
            carbo_value: row.carbo_value,
            prot_value: row.prot_value,
            prepare_time: row.prepare_time,
        }
    }
}

/// Unset fields insert `DEFAULT` and trip the column's NOT NULL constraint.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = recipes)]
pub(crate) struct NewRecipeRow<'a> {
    pub name: Option<&'a str>,
    pub calories: Option<f64>,
    pub fats_value: Option<f64>,
    pub carbo_value: Option<f64>,
    pub prot_value: Option<f64>,
    pub prepare_time: Option<i32>,
}

impl<'a> From<&'a RecipeDraft> for NewRecipeRow<'a> {
    fn from(draft: &'a RecipeDraft) -> Self {
        Self {
            name: draft.name.as_deref(),
            calories: draft.calories,
            fats_value: draft.fats_value,
            carbo_value: draft.carbo_value,
            prot_value: draft.prot_value,
            prepare_time: draft.prepare_time,
        }
    }
}

/// `None` fields are skipped by Diesel, leaving the column unchanged.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = recipes)]
pub(crate) struct RecipeUpdate<'a> {
    pub name: Option<&'a str>,
    pub calories: Option<f64>,
    pub fats_value: Option<f64>,
    pub carbo_value: Option<f64>,
    pub prot_value: Option<f64>,
    pub prepare_time: Option<i32>,
}

impl<'a> From<&'a RecipeChanges> for RecipeUpdate<'a> {
    fn from(changes: &'a RecipeChanges) -> Self {
        Self {
            name: changes.name.as_deref(),
            calories: changes.calories,
            fats_value: changes.fats_value,
            carbo_value: changes.carbo_value,
            prot_value: changes.prot_value,
            prepare_time: changes.prepare_time,
        }
    }
}

// ---------------------------------------------------------------------------
// Pantry items
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = pantry_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PantryItemRow {
    pub id: i32,
    pub name: String,
    pub photo: Option<String>,
    pub categories: String,
    pub item_type: String,
}

impl From<PantryItemRow> for PantryItem {
    fn from(row: PantryItemRow) -> Self {
        Self {
            id: RecordId::new(row.id),
            name: row.name,
            photo: row.photo,
            categories: row.categories,
            item_type: row.item_type,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = pantry_items)]
pub(crate) struct NewPantryItemRow<'a> {
    pub name: Option<&'a str>,
    pub photo: Option<&'a str>,
    pub categories: Option<&'a str>,
    pub item_type: Option<&'a str>,
}

impl<'a> From<&'a PantryItemDraft> for NewPantryItemRow<'a> {
    fn from(draft: &'a PantryItemDraft) -> Self {
        Self {
            name: draft.name.as_deref(),
            photo: draft.photo.as_deref(),
            categories: draft.categories.as_deref(),
            item_type: draft.item_type.as_deref(),
        }
    }
}

/// `photo: Some(None)` writes NULL; `None` leaves the column unchanged.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = pantry_items)]
pub(crate) struct PantryItemUpdate<'a> {
    pub name: Option<&'a str>,
    pub photo: Option<Option<&'a str>>,
    pub categories: Option<&'a str>,
    pub item_type: Option<&'a str>,
}

impl<'a> From<&'a PantryItemChanges> for PantryItemUpdate<'a> {
    fn from(changes: &'a PantryItemChanges) -> Self {
        Self {
            name: changes.name.as_deref(),
            photo: changes.photo.as_ref().map(Option::as_deref),
            categories: changes.categories.as_deref(),
            item_type: changes.item_type.as_deref(),
        }
    }
}
