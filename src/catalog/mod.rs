//! The read-only resource catalog shared by every service binary.
//!
//! A [`CatalogSpec`] names a service and supplies its fixed record set; a
//! [`Catalog`] holds those records in collection order; a [`CatalogService`]
//! answers the five request types over one catalog.

mod service;

pub use service::{CatalogService, Listing, Probe, ServiceInfo};

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

/// An immutable catalog entry with an integer id unique within its catalog.
pub trait Record: Serialize + Clone + Send + Sync + 'static {
    fn id(&self) -> u64;
}

/// Static parameters of one catalog service instance.
pub trait CatalogSpec: Send + Sync + 'static {
    type Record: Record;

    /// Name reported by the probes, e.g. `order-api`.
    const SERVICE_NAME: &'static str;
    /// Human-readable name, returned as `message` from `/`.
    const TITLE: &'static str;
    const VERSION: &'static str = "1.0.0";
    /// Collection name, used both as the URL segment and the list key.
    const RESOURCE: &'static str;
    /// Singular entity name used in error messages (`Order not found`).
    const KIND: &'static str;
    const DEFAULT_PORT: u16;

    fn records() -> Vec<Self::Record>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate record id {0}")]
    DuplicateId(u64),
}

/// Fixed, ordered record collection. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct Catalog<R: Record> {
    records: IndexMap<u64, R>,
}

impl<R: Record> Catalog<R> {
    /// Builds the catalog, preserving the input order. Rejects repeated ids.
    pub fn new(records: impl IntoIterator<Item = R>) -> Result<Self, CatalogError> {
        let mut map = IndexMap::new();
        for record in records {
            let id = record.id();
            if map.insert(id, record).is_some() {
                return Err(CatalogError::DuplicateId(id));
            }
        }
        Ok(Self { records: map })
    }

    pub fn get(&self, id: u64) -> Option<&R> {
        self.records.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Item {
        id: u64,
        label: &'static str,
    }

    impl Record for Item {
        fn id(&self) -> u64 {
            self.id
        }
    }

    fn item(id: u64, label: &'static str) -> Item {
        Item { id, label }
    }

    #[test]
    fn preserves_insertion_order() {
        let catalog = Catalog::new(vec![item(7, "c"), item(2, "a"), item(5, "b")]).unwrap();
        let ids: Vec<u64> = catalog.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![7, 2, 5]);
    }

    #[test]
    fn get_returns_exact_record() {
        let catalog = Catalog::new(vec![item(1, "one"), item(2, "two")]).unwrap();
        assert_eq!(catalog.get(2), Some(&item(2, "two")));
    }

    #[test]
    fn get_unknown_id_is_none() {
        let catalog = Catalog::new(vec![item(1, "one")]).unwrap();
        assert!(catalog.get(0).is_none());
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::new(vec![item(1, "one"), item(1, "again")]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId(1));
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let catalog: Catalog<Item> = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
    }
}
