use std::{fmt, str::FromStr, sync::LazyLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    macros::{id, nutype_string},
    validation::{Field, FieldKind, FieldValue, Rule, RuleTable, ValidationError},
};

pub const SNAKE_NAME_MIN_LENGTH: usize = 2;

pub static SNAKE_DRAFT_RULES: LazyLock<RuleTable<SnakeField>> = LazyLock::new(|| {
    RuleTable::new(vec![
        (
            SnakeField::Name,
            vec![
                Rule::Required("Name is required"),
                Rule::MinLength(SNAKE_NAME_MIN_LENGTH, "Name must be at least 2 characters"),
            ],
        ),
        (
            SnakeField::ScientificName,
            vec![Rule::Required("Scientific name is required")],
        ),
        (SnakeField::Category, vec![]),
    ])
});

id!(SnakeId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    pub id: SnakeId,
    #[serde(flatten)]
    pub details: SnakeDetails,
}

/// The mutable fields of a snake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnakeDetails {
    pub name: SnakeName,
    pub scientific_name: SnakeScientificName,
    pub category: SnakeCategory,
}

nutype_string!(SnakeName);
nutype_string!(SnakeScientificName);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnakeCategory {
    #[default]
    Venomous,
    NonVenomous,
}

impl SnakeCategory {
    pub const ALL: [Self; 2] = [Self::Venomous, Self::NonVenomous];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Venomous => "venomous",
            Self::NonVenomous => "non-venomous",
        }
    }

    /// Human readable label of the category.
    pub fn label(self) -> &'static str {
        match self {
            Self::Venomous => "Venomous",
            Self::NonVenomous => "Non-venomous",
        }
    }
}

impl fmt::Display for SnakeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SnakeCategory {
    type Err = ParseSnakeCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseSnakeCategoryError(s.into()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category `{0}`, expected one of venomous, non-venomous")]
pub struct ParseSnakeCategoryError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category filter `{0}`, expected one of all, venomous, non-venomous")]
pub struct ParseSnakeCategoryFilterError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SnakeField {
    Name,
    ScientificName,
    Category,
}

impl Field for SnakeField {
    fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::ScientificName => "scientificName",
            Self::Category => "category",
        }
    }

    fn kind(self) -> FieldKind {
        FieldKind::Text
    }
}

pub type SnakeValidationError = ValidationError<SnakeField>;

/// The in-progress values of a snake that is being added or edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnakeDraft {
    pub name: String,
    pub scientific_name: String,
    pub category: SnakeCategory,
}

impl SnakeDraft {
    pub fn value(&self, field: SnakeField) -> FieldValue<'_> {
        match field {
            SnakeField::Name => FieldValue::Text(&self.name),
            SnakeField::ScientificName => FieldValue::Text(&self.scientific_name),
            SnakeField::Category => FieldValue::Text(self.category.as_str()),
        }
    }

    /// Validates the draft and returns the trimmed details, or the error of the
    /// first invalid field.
    pub fn validate(&self) -> Result<SnakeDetails, SnakeValidationError> {
        SNAKE_DRAFT_RULES.first_error(|field| self.value(field))?;

        Ok(SnakeDetails {
            name: SnakeName::new(self.name.clone()),
            scientific_name: SnakeScientificName::new(self.scientific_name.clone()),
            category: self.category,
        })
    }
}

impl From<&SnakeDetails> for SnakeDraft {
    fn from(value: &SnakeDetails) -> Self {
        Self {
            name: (*value.name).clone(),
            scientific_name: (*value.scientific_name).clone(),
            category: value.category,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SnakeCategoryFilter {
    #[default]
    All,
    Only(SnakeCategory),
}

impl SnakeCategoryFilter {
    pub fn matches(self, category: SnakeCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == category,
        }
    }
}

impl fmt::Display for SnakeCategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => fmt::Display::fmt(category, f),
        }
    }
}

impl FromStr for SnakeCategoryFilter {
    type Err = ParseSnakeCategoryFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            _ => s
                .parse()
                .map(Self::Only)
                .map_err(|ParseSnakeCategoryError(s)| ParseSnakeCategoryFilterError(s)),
        }
    }
}

impl From<SnakeCategory> for SnakeCategoryFilter {
    fn from(value: SnakeCategory) -> Self {
        Self::Only(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SnakeFilter {
    pub category: SnakeCategoryFilter,
    /// Matched case-insensitively against the snake's name after trimming.
    pub search_text: String,
}

/// The ordered, in-memory collection of all snakes.
///
/// Ids are unique within the collection and snakes keep the position they
/// were inserted at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SnakeCollection(Vec<Snake>);

impl SnakeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snake> {
        self.0.iter()
    }

    pub fn get(&self, id: SnakeId) -> Option<&Snake> {
        self.0.iter().find(|snake| snake.id == id)
    }

    pub fn get_mut(&mut self, id: SnakeId) -> Option<&mut Snake> {
        self.0.iter_mut().find(|snake| snake.id == id)
    }

    pub fn contains(&self, id: SnakeId) -> bool {
        self.get(id).is_some()
    }

    /// Appends a snake to the end of the collection.
    ///
    /// # Panics
    /// Panics if a snake with the same id already exists.
    pub fn push(&mut self, snake: Snake) {
        assert!(
            !self.contains(snake.id),
            "Snake with id {} already exists",
            snake.id
        );
        self.0.push(snake);
    }

    /// Removes the snake with the given id and returns it.
    pub fn remove(&mut self, id: SnakeId) -> Option<Snake> {
        let index = self.0.iter().position(|snake| snake.id == id)?;
        Some(self.0.remove(index))
    }

    /// Returns all snakes matching the filter in collection order.
    pub fn filter<'a>(&'a self, filter: &SnakeFilter) -> impl Iterator<Item = &'a Snake> + 'a {
        let category = filter.category;
        let needle = filter.search_text.trim().to_lowercase();
        self.0.iter().filter(move |snake| {
            category.matches(snake.details.category)
                && snake.details.name.to_lowercase().contains(&needle)
        })
    }
}

impl FromIterator<Snake> for SnakeCollection {
    fn from_iter<T: IntoIterator<Item = Snake>>(iter: T) -> Self {
        iter.into_iter().fold(Self::new(), |mut collection, snake| {
            collection.push(snake);
            collection
        })
    }
}

impl<'a> IntoIterator for &'a SnakeCollection {
    type Item = &'a Snake;
    type IntoIter = std::slice::Iter<'a, Snake>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The dialog currently shown on top of the snake list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SnakeModal {
    #[default]
    Closed,
    Adding,
    Editing(SnakeId),
    ConfirmingDelete(SnakeId),
}

impl SnakeModal {
    pub fn is_form_open(self) -> bool {
        matches!(self, Self::Adding | Self::Editing(_))
    }

    pub fn title(self) -> Option<&'static str> {
        match self {
            Self::Closed => None,
            Self::Adding => Some("Add snake"),
            Self::Editing(_) => Some("Edit snake"),
            Self::ConfirmingDelete(_) => Some("Delete snake?"),
        }
    }

    pub fn submit_label(self) -> Option<&'static str> {
        match self {
            Self::Closed => None,
            Self::Adding => Some("Add"),
            Self::Editing(_) => Some("Save"),
            Self::ConfirmingDelete(_) => Some("Delete"),
        }
    }
}

/// Everything the snake list view needs to render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnakeBoard {
    pub snakes: SnakeCollection,
    pub modal: SnakeModal,
    pub draft: SnakeDraft,
    /// The validation error of the last save attempt.
    pub error: Option<SnakeValidationError>,
    pub filter: SnakeFilter,
}

impl SnakeBoard {
    pub fn new(snakes: SnakeCollection) -> Self {
        Self {
            snakes,
            ..Default::default()
        }
    }

    /// The snakes matching the board's filter.
    pub fn visible(&self) -> impl Iterator<Item = &Snake> + '_ {
        self.snakes.filter(&self.filter)
    }
}
