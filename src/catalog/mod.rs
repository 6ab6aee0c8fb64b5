pub mod source;

pub use source::{CatalogSource, FixtureSource};

use std::sync::{Arc, Mutex};

use serde_json::Value;
use tracing::info;

use crate::error::LoadError;
use crate::models::Campsite;

/// Load-once holder for the full campsite catalog.
///
/// The catalog is populated exactly once from a [`CatalogSource`]; a failed
/// load leaves the store empty and retryable. There are no mutation methods.
pub struct CatalogStore {
    source: Box<dyn CatalogSource>,
    catalog: Mutex<Option<Arc<Vec<Campsite>>>>,
}

impl CatalogStore {
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            catalog: Mutex::new(None),
        }
    }

    /// Populate the catalog from the source. Idempotent: once loaded, further
    /// calls return the cached catalog without re-fetching.
    pub async fn load(&self) -> Result<Arc<Vec<Campsite>>, LoadError> {
        if let Some(catalog) = self.cached() {
            return Ok(catalog);
        }

        info!(source = self.source.source_name(), "loading campsite catalog");
        let payload = self.source.fetch().await?;
        let catalog = Arc::new(parse_catalog(payload)?);
        info!(count = catalog.len(), "campsite catalog loaded");

        let mut slot = self.catalog.lock().expect("catalog lock poisoned");
        // A concurrent load may have won the race; keep the first result
        if let Some(existing) = slot.as_ref() {
            return Ok(existing.clone());
        }
        *slot = Some(catalog.clone());
        Ok(catalog)
    }

    /// The full catalog; empty before `load()` completes
    pub fn get_all(&self) -> Arc<Vec<Campsite>> {
        self.cached().unwrap_or_default()
    }

    /// Look up a single record by id
    pub fn get_by_id(&self, id: &str) -> Option<Campsite> {
        self.get_all().iter().find(|site| site.id == id).cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.cached().is_some()
    }

    fn cached(&self) -> Option<Arc<Vec<Campsite>>> {
        self.catalog.lock().expect("catalog lock poisoned").clone()
    }
}

fn parse_catalog(payload: Value) -> Result<Vec<Campsite>, LoadError> {
    let Value::Array(items) = payload else {
        return Err(LoadError::NotAList);
    };
    let mut catalog = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let record: Campsite = serde_json::from_value(item)
            .map_err(|err| LoadError::InvalidRecord {
                index,
                reason: err.to_string(),
            })?;
        record
            .check_invariants()
            .map_err(|reason| LoadError::InvalidRecord { index, reason })?;
        catalog.push(record);
    }
    Ok(catalog)
}
