// crates/worldview-core/src/detail.rs

//! # Detail Resolver & Cache
//!
//! Resolves a country code into a [`CountryDetail`]: the full record with
//! its neighbour codes turned into names. Results are memoized per code for
//! the lifetime of the owning [`DetailResolver`]; there is no time-based
//! eviction, only explicit [`DetailResolver::invalidate`].
//!
//! Concurrent `resolve` calls for the same uncached code are not coalesced.
//! Each fetches independently and the last one to finish owns the entry; the
//! data is treated as immutable for the cache's lifetime so either is fine.

use crate::convert::canonical_code;
use crate::error::{Result, WorldError};
use crate::fetch::CountryClient;
use crate::model::CountryDetail;
use crate::source::CountrySource;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

/// Code → detail map. Keys are canonical (trimmed, upper-case) codes.
///
/// The lock is only held for map access, never across an `.await`.
#[derive(Debug, Default)]
pub struct DetailCache {
    entries: Mutex<HashMap<String, Arc<CountryDetail>>>,
}

impl DetailCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, code: &str) -> Option<Arc<CountryDetail>> {
        self.lock().get(&canonical_code(code)).cloned()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.lock().contains_key(&canonical_code(code))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn insert(&self, code: String, detail: CountryDetail) -> Arc<CountryDetail> {
        let detail = Arc::new(detail);
        self.lock().insert(code, Arc::clone(&detail));
        detail
    }

    fn remove(&self, code: &str) -> bool {
        self.lock().remove(&canonical_code(code)).is_some()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<CountryDetail>>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Owns a [`CountryClient`] and the [`DetailCache`] it fills.
#[derive(Debug)]
pub struct DetailResolver<S> {
    client: CountryClient<S>,
    cache: DetailCache,
}

impl<S: CountrySource> DetailResolver<S> {
    pub fn new(client: CountryClient<S>) -> Self {
        Self {
            client,
            cache: DetailCache::new(),
        }
    }

    pub fn client(&self) -> &CountryClient<S> {
        &self.client
    }

    pub fn cache(&self) -> &DetailCache {
        &self.cache
    }

    /// Cached detail for `code`, fetching it on a miss.
    ///
    /// 1. A missing or blank code fails with [`WorldError::MissingCode`]
    ///    before any request.
    /// 2. A cache hit returns without touching the source.
    /// 3. On a miss the base record is fetched; its failure propagates and
    ///    nothing is cached.
    /// 4. Non-empty border lists are resolved (failures degrade to none).
    /// 5. The assembled detail is cached and returned.
    pub async fn resolve(&self, code: Option<&str>) -> Result<Arc<CountryDetail>> {
        let code = code.map(canonical_code).unwrap_or_default();
        if code.is_empty() {
            return Err(WorldError::MissingCode);
        }

        if let Some(hit) = self.cache.get(&code) {
            debug!(%code, "detail cache hit");
            return Ok(hit);
        }
        debug!(%code, "detail cache miss");

        let base = self.client.fetch_by_code(&code).await?;
        let borders = if base.has_borders() {
            self.client.fetch_borders_by_codes(base.border_codes()).await
        } else {
            Vec::new()
        };

        let detail = base.with_borders(borders);
        info!(%code, borders = detail.borders.len(), "cached country detail");
        Ok(self.cache.insert(code, detail))
    }

    /// Drops the cached entry for `code` so the next [`Self::resolve`]
    /// fetches again. Returns whether an entry was removed.
    pub fn invalidate(&self, code: &str) -> bool {
        let removed = self.cache.remove(code);
        if removed {
            info!(code = %canonical_code(code), "invalidated country detail");
        }
        removed
    }
}
