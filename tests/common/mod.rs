use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::Level;

use wildscape_search::{CatalogSource, CatalogStore, SearchController};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Catalog source over a fixed in-memory payload
pub struct StaticSource(pub Value);

#[async_trait]
impl CatalogSource for StaticSource {
    async fn fetch(&self) -> Result<Value> {
        Ok(self.0.clone())
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}

/// Three-record catalog used across the controller tests:
/// r1 Norway/40/hiking, r2 Norway/80/fishing, r3 Sweden/40/both
pub fn sample_catalog() -> Value {
    json!([
        {
            "id": "r1",
            "name": "Alpine Meadow",
            "location": { "country": "Norway", "region": "Troms", "coordinates": [19.0, 69.6] },
            "amenities": ["hiking_trails"],
            "difficulty": "easy",
            "capacity": 4,
            "price_per_night": 40.0
        },
        {
            "id": "r2",
            "name": "Fjordside Pines",
            "location": { "country": "Norway", "region": "Vestland", "coordinates": [6.0, 61.0] },
            "amenities": ["fishing"],
            "difficulty": "moderate",
            "capacity": 6,
            "price_per_night": 80.0
        },
        {
            "id": "r3",
            "name": "Lake Birch",
            "location": { "country": "Sweden", "region": "Dalarna", "coordinates": [14.5, 61.0] },
            "amenities": ["hiking_trails", "fishing"],
            "difficulty": "easy",
            "capacity": 8,
            "price_per_night": 40.0
        }
    ])
}

/// Store loaded with the sample catalog plus a controller that has done its
/// first recompute
pub async fn ready_controller() -> SearchController {
    let store = Arc::new(CatalogStore::new(StaticSource(sample_catalog())));
    store.load().await.expect("sample catalog loads");
    let controller = SearchController::new(store);
    controller.refresh();
    controller
}

pub fn result_ids(controller: &SearchController) -> Vec<String> {
    controller
        .results()
        .iter()
        .map(|site| site.id.clone())
        .collect()
}
