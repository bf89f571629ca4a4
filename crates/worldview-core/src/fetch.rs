// crates/worldview-core/src/fetch.rs

//! # Country Fetch Layer
//!
//! Wraps the source's query shapes and normalizes every answer into
//! [`Country`] records.
//!
//! Failure policy differs per operation:
//! - list, region and code lookups propagate [`WorldError`]; the bulk list
//!   queries retry transient failures according to the configured
//!   [`RetryPolicy`];
//! - a name search that the source answers with 404 is an empty result;
//! - border resolution never fails: it logs and yields an empty list, so a
//!   detail view still renders without neighbour links.

use crate::config::{RetryPolicy, SourceConfig, BORDER_FIELDS};
use crate::convert::{self, canonical_code};
use crate::error::{Result, WorldError};
use crate::model::{Country, ResolvedBorder};
use crate::raw::{BorderRaw, CountriesRaw, CountryRaw, OneOrMany};
use crate::source::{CountrySource, SourceRequest, SourceResponse};
use crate::text::fold_key;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct CountryClient<S> {
    source: S,
    fields: String,
    retry: RetryPolicy,
}

#[cfg(feature = "http")]
impl CountryClient<crate::source::HttpSource> {
    /// Client over the real HTTP source.
    pub fn from_config(config: SourceConfig) -> Result<Self> {
        let source = crate::source::HttpSource::new(&config)?;
        Ok(Self::new(source, &config))
    }
}

impl<S: CountrySource> CountryClient<S> {
    pub fn new(source: S, config: &SourceConfig) -> Self {
        Self {
            source,
            fields: config.fields.clone(),
            retry: config.retry,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Every country, sorted alphabetically by common name.
    pub async fn fetch_all(&self) -> Result<Vec<Country>> {
        let request = SourceRequest::all(&self.fields);
        let mut countries = self.fetch_list_with_retry(&request).await?;
        sort_alphabetically(&mut countries);
        Ok(countries)
    }

    /// Countries of one region (server-side filter), sorted like [`Self::fetch_all`].
    pub async fn fetch_by_region(&self, region: &str) -> Result<Vec<Country>> {
        let request = SourceRequest::region(region, &self.fields);
        let mut countries = self.fetch_list_with_retry(&request).await?;
        sort_alphabetically(&mut countries);
        Ok(countries)
    }

    /// Fuzzy server-side name match, in source order.
    ///
    /// No match is not an error: a 404 from the source and a blank query both
    /// yield an empty list (the blank query without a request).
    pub async fn fetch_by_name(&self, query: &str) -> Result<Vec<Country>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let request = SourceRequest::name(query, &self.fields);
        let response = self.send(&request).await?;
        if response.status == 404 {
            debug!(%query, "name search matched nothing");
            return Ok(Vec::new());
        }
        let raw: CountriesRaw = decode(&request, response)?;
        Ok(convert::countries_from_raw(raw))
    }

    /// Full record for one code.
    ///
    /// Fails with [`WorldError::NotFound`] when the source answers 404 or an
    /// empty array, and with [`WorldError::MissingCode`] for a blank code.
    pub async fn fetch_by_code(&self, code: &str) -> Result<Country> {
        let code = canonical_code(code);
        if code.is_empty() {
            return Err(WorldError::MissingCode);
        }
        let request = SourceRequest::alpha(&code);
        let response = self.send(&request).await?;
        if response.status == 404 {
            return Err(WorldError::NotFound(code));
        }
        let raw: OneOrMany<CountryRaw> = decode(&request, response)?;
        raw.into_first()
            .map(convert::from_raw)
            .ok_or(WorldError::NotFound(code))
    }

    /// Resolves neighbour codes into `{name, code}` pairs.
    ///
    /// An empty input returns immediately without a request. Any failure is
    /// logged and degrades to an empty list; this call is never retried.
    pub async fn fetch_borders_by_codes(&self, codes: &[String]) -> Vec<ResolvedBorder> {
        if codes.is_empty() {
            return Vec::new();
        }
        let request = SourceRequest::alpha_batch(codes, BORDER_FIELDS);
        match self.try_fetch_borders(&request).await {
            Ok(borders) => borders,
            Err(e) => {
                warn!(error = %e, codes = %codes.join(","), "failed to resolve border names");
                Vec::new()
            }
        }
    }

    async fn try_fetch_borders(&self, request: &SourceRequest) -> Result<Vec<ResolvedBorder>> {
        let response = self.send(request).await?;
        let raw: Vec<BorderRaw> = decode(request, response)?;
        Ok(raw.into_iter().map(convert::border_from_raw).collect())
    }

    async fn send(&self, request: &SourceRequest) -> Result<SourceResponse> {
        debug!(path = %request.path(), "requesting");
        self.source.get(request).await
    }

    async fn fetch_list(&self, request: &SourceRequest) -> Result<Vec<Country>> {
        let response = self.send(request).await?;
        let raw: CountriesRaw = decode(request, response)?;
        Ok(convert::countries_from_raw(raw))
    }

    async fn fetch_list_with_retry(&self, request: &SourceRequest) -> Result<Vec<Country>> {
        let mut attempt = 0;
        loop {
            match self.fetch_list(request).await {
                Ok(countries) => return Ok(countries),
                Err(e) if e.is_retryable() && attempt < self.retry.retries => {
                    attempt += 1;
                    let delay = self.retry.delay_for(attempt);
                    warn!(
                        error = %e,
                        path = %request.path(),
                        attempt,
                        retries = self.retry.retries,
                        "list query failed, retrying"
                    );
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Fails with [`WorldError::Status`] on non-success, otherwise decodes JSON.
fn decode<T: serde::de::DeserializeOwned>(
    request: &SourceRequest,
    response: SourceResponse,
) -> Result<T> {
    if !response.is_success() {
        return Err(WorldError::Status {
            status: response.status,
            url: request.path(),
        });
    }
    Ok(serde_json::from_str(&response.body)?)
}

/// Ascending by common name, ignoring case and diacritics. Stable, so
/// entries that fold to the same key keep their source order.
pub fn sort_alphabetically<B>(countries: &mut [Country<B>]) {
    countries.sort_by_cached_key(|c| fold_key(c.name()));
}
