//! WildScape search core: an in-memory campsite catalog with compound
//! filtering, debounced query state and text-completion suggestions.
//!
//! Typical wiring: construct a [`CatalogStore`] over a [`CatalogSource`],
//! await [`CatalogStore::load`], hand the store to a [`SearchController`] and
//! call [`SearchController::refresh`]. Views then drive
//! [`SearchController::set_query`] / [`SearchController::set_criteria`] and
//! read [`SearchController::results`] or watch
//! [`SearchController::subscribe`].

pub mod catalog;
pub mod error;
pub mod models;
pub mod search;

pub use catalog::{CatalogSource, CatalogStore, FixtureSource};
pub use error::{CriteriaError, LoadError};
pub use models::{Campsite, Difficulty, GeoLocation};
pub use search::{
    filter_catalog, matches, suggest, CriteriaPatch, Field, FilterCriteria, SearchConfig,
    SearchController,
};
