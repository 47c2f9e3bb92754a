//! Recipe records with their nutrition summary.

use serde::Serialize;

use super::RecordId;
use super::missing_column::{MissingColumn, required};

/// A persisted recipe.
///
/// Nutrition values are per serving; `prepare_time` is in minutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecordId,
    pub name: String,
    pub calories: f64,
    pub fats_value: f64,
    pub carbo_value: f64,
    pub prot_value: f64,
    pub prepare_time: i32,
}

/// The whitelisted fields accepted when creating a recipe.
///
/// Every column is required by the store. Unset fields are passed through
/// so the insert reports the violation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeDraft {
    pub name: Option<String>,
    pub calories: Option<f64>,
    pub fats_value: Option<f64>,
    pub carbo_value: Option<f64>,
    pub prot_value: Option<f64>,
    pub prepare_time: Option<i32>,
}

impl RecipeDraft {
    /// Attach the identifier assigned by the store.
    ///
    /// # Errors
    /// Returns the first required column left unset, in table order.
    pub fn into_recipe(self, id: RecordId) -> Result<Recipe, MissingColumn> {
        Ok(Recipe {
            id,
            name: required(self.name, "recipes", "name")?,
            calories: required(self.calories, "recipes", "calories")?,
            fats_value: required(self.fats_value, "recipes", "fats_value")?,
            carbo_value: required(self.carbo_value, "recipes", "carbo_value")?,
            prot_value: required(self.prot_value, "recipes", "prot_value")?,
            prepare_time: required(self.prepare_time, "recipes", "prepare_time")?,
        })
    }
}

/// Partial update of a recipe; `None` leaves the stored value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeChanges {
    pub name: Option<String>,
    pub calories: Option<f64>,
    pub fats_value: Option<f64>,
    pub carbo_value: Option<f64>,
    pub prot_value: Option<f64>,
    pub prepare_time: Option<i32>,
}

impl RecipeChanges {
    /// True when no field was submitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Apply the submitted fields to `recipe` in place.
    pub fn apply_to(self, recipe: &mut Recipe) {
        if let Some(name) = self.name {
            recipe.name = name;
        }
        if let Some(calories) = self.calories {
            recipe.calories = calories;
        }
        if let Some(fats_value) = self.fats_value {
            recipe.fats_value = fats_value;
        }
        if let Some(carbo_value) = self.carbo_value {
            recipe.carbo_value = carbo_value;
        }
        if let Some(prot_value) = self.prot_value {
            recipe.prot_value = prot_value;
        }
        if let Some(prepare_time) = self.prepare_time {
            recipe.prepare_time = prepare_time;
        }
    }
}
