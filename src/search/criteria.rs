use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CriteriaError;
use crate::models::Difficulty;

/// Structured filter constraints for campsite search.
///
/// `None` means no constraint on that dimension. An empty amenity set
/// (`Some` but empty) also imposes no constraint: requiring every tag of an
/// empty set holds for any record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive exact country match
    pub country: Option<String>,
    pub difficulty: Option<Difficulty>,
    /// Inclusive (min, max) nightly price bounds
    pub price_range: Option<(f64, f64)>,
    /// Minimum guest capacity
    pub capacity: Option<u32>,
    /// Required tags; a record must carry all of them
    pub amenities: Option<HashSet<String>>,
}

impl FilterCriteria {
    /// Invariants enforced at the single mutation entry point
    /// ([`SearchController::set_criteria`](crate::SearchController::set_criteria)).
    pub fn validate(&self) -> Result<(), CriteriaError> {
        if let Some((min, max)) = self.price_range {
            if !min.is_finite() || !max.is_finite() {
                return Err(CriteriaError::NonFinitePriceBound);
            }
            if min > max {
                return Err(CriteriaError::InvertedPriceRange { min, max });
            }
        }
        if self.capacity == Some(0) {
            return Err(CriteriaError::ZeroCapacity);
        }
        Ok(())
    }

    /// Apply a patch, producing the merged criteria. Pure; the caller decides
    /// whether the result replaces the current criteria.
    pub fn merged(&self, patch: &CriteriaPatch) -> FilterCriteria {
        FilterCriteria {
            country: patch.country.apply(&self.country),
            difficulty: patch.difficulty.apply(&self.difficulty),
            price_range: patch.price_range.apply(&self.price_range),
            capacity: patch.capacity.apply(&self.capacity),
            amenities: patch.amenities.apply(&self.amenities),
        }
    }
}

/// One field of a [`CriteriaPatch`]: leave the current value, set a new one,
/// or unset it
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    Keep,
    Set(T),
    Clear,
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Keep
    }
}

impl<T: Clone> Field<T> {
    fn apply(&self, current: &Option<T>) -> Option<T> {
        match self {
            Field::Keep => current.clone(),
            Field::Set(value) => Some(value.clone()),
            Field::Clear => None,
        }
    }
}

/// Partial criteria update; fields left at `Keep` are untouched by the merge
#[derive(Debug, Clone, Default)]
pub struct CriteriaPatch {
    pub country: Field<String>,
    pub difficulty: Field<Difficulty>,
    pub price_range: Field<(f64, f64)>,
    pub capacity: Field<u32>,
    pub amenities: Field<HashSet<String>>,
}

impl CriteriaPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Field::Set(country.into());
        self
    }

    pub fn clear_country(mut self) -> Self {
        self.country = Field::Clear;
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Field::Set(difficulty);
        self
    }

    pub fn clear_difficulty(mut self) -> Self {
        self.difficulty = Field::Clear;
        self
    }

    pub fn price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = Field::Set((min, max));
        self
    }

    pub fn clear_price_range(mut self) -> Self {
        self.price_range = Field::Clear;
        self
    }

    pub fn capacity(mut self, minimum: u32) -> Self {
        self.capacity = Field::Set(minimum);
        self
    }

    pub fn clear_capacity(mut self) -> Self {
        self.capacity = Field::Clear;
        self
    }

    pub fn amenities<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.amenities = Field::Set(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn clear_amenities(mut self) -> Self {
        self.amenities = Field::Clear;
        self
    }
}
