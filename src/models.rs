//! # User and Meal Records
//!
//! Mirrors the backend's user documents. A user is replaced wholesale on
//! every successful fetch, never merged, and goals are immutable for the
//! session. Meals are append-only within a session; the list shrinks only
//! through a full refetch.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub calorie_goal: u32,
    pub carbs_goal: u32,
    pub fat_goal: u32,
    pub protein_goal: u32,
    pub meals: Vec<Meal>,
}

impl User {
    pub fn total_calories(&self) -> u32 {
        self.meals.iter().map(|meal| meal.calories).sum()
    }

    pub fn total_carbs(&self) -> u32 {
        self.meals.iter().map(|meal| meal.carbs).sum()
    }

    pub fn total_fat(&self) -> u32 {
        self.meals.iter().map(|meal| meal.fat).sum()
    }

    pub fn total_protein(&self) -> u32 {
        self.meals.iter().map(|meal| meal.protein).sum()
    }

    /// Calories still needed to reach the daily goal, zero once hit.
    pub fn remaining_calories(&self) -> u32 {
        self.calorie_goal.saturating_sub(self.total_calories())
    }
}

/// A logged meal. The name doubles as the identity key within a user's
/// list; it is not globally unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub calories: u32,
    pub carbs: u32,
    pub fat: u32,
    pub protein: u32,
}

/// An unvalidated, in-progress meal entry. Numeric fields stay free-form
/// text until [`MealDraft::validate`] turns the draft into a [`Meal`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealDraft {
    pub name: String,
    pub calories: String,
    pub carbs: String,
    pub fat: String,
    pub protein: String,
}

impl MealDraft {
    /// Blank draft for the manual-entry path.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Checks every field and reports all failures at once, not just the
    /// first. Numeric fields must parse as non-negative integers after
    /// trimming; the name must be non-empty after trimming.
    pub fn validate(&self) -> Result<Meal, Error> {
        let mut invalid = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            invalid.push(Field::Name);
        }

        let calories = parse_count(&self.calories, Field::Calories, &mut invalid);
        let carbs = parse_count(&self.carbs, Field::Carbs, &mut invalid);
        let fat = parse_count(&self.fat, Field::Fat, &mut invalid);
        let protein = parse_count(&self.protein, Field::Protein, &mut invalid);

        if !invalid.is_empty() {
            return Err(Error::Validation(invalid));
        }

        Ok(Meal {
            name: name.to_string(),
            calories,
            carbs,
            fat,
            protein,
        })
    }
}

fn parse_count(raw: &str, field: Field, invalid: &mut Vec<Field>) -> u32 {
    raw.trim().parse().unwrap_or_else(|_| {
        invalid.push(field);
        0
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Calories,
    Carbs,
    Fat,
    Protein,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Calories => "calories",
            Field::Carbs => "carbs",
            Field::Fat => "fat",
            Field::Protein => "protein",
        };
        write!(f, "{name}")
    }
}
