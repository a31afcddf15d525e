use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{Catalog, CatalogError, CatalogSpec};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: IndexMap<&'static str, String>,
}

/// Body of `/health` and `/ready`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Probe {
    pub status: &'static str,
    pub service: &'static str,
}

/// `{ "<resource>": [record, ...] }`
#[derive(Debug)]
pub struct Listing<'a, R> {
    key: &'static str,
    records: Vec<&'a R>,
}

impl<R> Listing<'_, R> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Serialize> Serialize for Listing<'_, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.records)?;
        map.end()
    }
}

/// The request-facing operations over one catalog.
pub struct CatalogService<C: CatalogSpec> {
    catalog: Catalog<C::Record>,
}

impl<C: CatalogSpec> CatalogService<C> {
    /// Loads the spec's fixed records. Called once at startup.
    pub fn load() -> Result<Self, CatalogError> {
        Ok(Self {
            catalog: Catalog::new(C::records())?,
        })
    }

    pub fn catalog(&self) -> &Catalog<C::Record> {
        &self.catalog
    }

    pub fn resource_path() -> String {
        format!("/{}", C::RESOURCE)
    }

    pub fn service_info(&self) -> ServiceInfo {
        let mut endpoints = IndexMap::with_capacity(3);
        endpoints.insert("health", "/health".to_string());
        endpoints.insert("ready", "/ready".to_string());
        endpoints.insert(C::RESOURCE, Self::resource_path());
        ServiceInfo {
            message: C::TITLE,
            version: C::VERSION,
            endpoints,
        }
    }

    pub fn liveness(&self) -> Probe {
        Probe {
            status: "healthy",
            service: C::SERVICE_NAME,
        }
    }

    /// Nothing needs warming up yet, so this answers like liveness with its own status.
    pub fn readiness(&self) -> Probe {
        Probe {
            status: "ready",
            service: C::SERVICE_NAME,
        }
    }

    pub fn list_all(&self) -> Listing<'_, C::Record> {
        Listing {
            key: C::RESOURCE,
            records: self.catalog.iter().collect(),
        }
    }

    pub fn get_by_id(&self, id: u64) -> AppResult<&C::Record> {
        self.catalog.get(id).ok_or_else(Self::not_found)
    }

    /// The miss every unknown id gets, including ones too large to store.
    pub fn not_found() -> AppError {
        AppError::NotFound(format!("{} not found", C::KIND))
    }
}
