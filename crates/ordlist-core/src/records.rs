//! Record payloads
//!
//! Structured items kept in ordered lists: cars entered through a form and
//! fruits ranked by calories.

use crate::editor::ListEditor;
use crate::snapshot::Snapshot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Car entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Car {
    /// Model year
    pub year: u16,
    /// Manufacturer
    pub brand: String,
    /// Model name
    pub name: String,
}

impl Car {
    /// Create car entry
    #[inline]
    pub fn new(year: u16, brand: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            year,
            brand: brand.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.year, self.brand, self.name)
    }
}

/// Fruit with calorie count
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fruit {
    /// Identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Calories per serving
    pub calories: u32,
}

impl Fruit {
    /// Create fruit entry
    #[inline]
    pub fn new(id: u32, name: impl Into<String>, calories: u32) -> Self {
        Self {
            id,
            name: name.into(),
            calories,
        }
    }
}

impl fmt::Display for Fruit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.calories)
    }
}

/// Sort direction for calorie ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Lowest first
    #[default]
    Ascending,
    /// Highest first
    Descending,
}

/// Sort fruits by calories, keeping entry order among equal counts
pub fn sort_by_calories(fruits: &mut ListEditor<Fruit>, order: SortOrder) {
    match order {
        SortOrder::Ascending => fruits.sort_by_key(|fruit| fruit.calories),
        SortOrder::Descending => fruits.sort_by(|a, b| b.calories.cmp(&a.calories)),
    }
}

/// Sort fruits alphabetically by name
pub fn sort_by_name(fruits: &mut ListEditor<Fruit>) {
    fruits.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Fruits strictly below `limit` calories
#[must_use]
pub fn low_calorie(fruits: &ListEditor<Fruit>, limit: u32) -> Snapshot<Fruit> {
    fruits.filtered(|fruit| fruit.calories < limit)
}
