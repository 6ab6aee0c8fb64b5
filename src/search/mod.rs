pub mod controller;
pub mod criteria;
pub mod predicate;
pub mod suggest;

pub use controller::{SearchConfig, SearchController};
pub use criteria::{CriteriaPatch, Field, FilterCriteria};
pub use predicate::{filter_catalog, matches};
pub use suggest::{suggest, SUGGESTION_VOCABULARY};
