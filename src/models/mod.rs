use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Terrain/trail difficulty grade of a campsite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
    Expert,
}

/// Location information for a campsite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub country: String,
    pub region: String,
    /// (longitude, latitude)
    pub coordinates: (f64, f64),
    /// Meters above sea level
    #[serde(default)]
    pub elevation: i32,
}

/// Core campsite record, immutable once loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campsite {
    pub id: String,
    pub name: String,
    pub location: GeoLocation,
    #[serde(default)]
    pub description: String,
    /// Feature tags ("hiking_trails", "aurora_viewing", ...); set semantics,
    /// membership tests are O(1)
    pub amenities: HashSet<String>,
    pub difficulty: Difficulty,
    /// Maximum simultaneous guests, at least 1
    pub capacity: u32,
    /// Currency-agnostic nightly price, never negative
    pub price_per_night: f64,
    /// Average review score in [0.0, 5.0]; 0.0 when unrated
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub reviews_count: u32,
    /// Bookable dates; dates absent from the calendar count as unavailable
    #[serde(default)]
    pub availability: BTreeMap<NaiveDate, bool>,
}

impl Campsite {
    /// Whether the site is bookable on the given date
    pub fn is_available_on(&self, date: NaiveDate) -> bool {
        self.availability.get(&date).copied().unwrap_or(false)
    }

    /// Record invariants checked at load time; a violation means the source
    /// payload is malformed.
    pub(crate) fn check_invariants(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("empty id".to_string());
        }
        if self.capacity == 0 {
            return Err("capacity must be at least 1".to_string());
        }
        if !self.price_per_night.is_finite() || self.price_per_night < 0.0 {
            return Err(format!("invalid price_per_night {}", self.price_per_night));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(format!("rating {} outside [0.0, 5.0]", self.rating));
        }
        Ok(())
    }
}
