// crates/worldview-core/src/source.rs

//! # Remote Source
//!
//! The transport seam between the fetch layer and the REST Countries API.
//! [`CountrySource`] only moves bytes: it answers a [`SourceRequest`] with a
//! status and a body and reports transport failures as
//! [`WorldError::Network`](crate::WorldError::Network). Interpreting statuses
//! and decoding bodies is the fetch layer's job.

use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// A read-only query against the source: path segments plus query pairs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceRequest {
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl SourceRequest {
    pub fn new<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
        }
    }

    pub fn with_query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    /// `/all?fields=...`
    pub fn all(fields: &str) -> Self {
        Self::new(["all"]).with_query("fields", fields)
    }

    /// `/region/{region}?fields=...`; the region is passed through as given.
    pub fn region(region: &str, fields: &str) -> Self {
        Self::new(["region", region]).with_query("fields", fields)
    }

    /// `/name/{name}?fields=...`
    pub fn name(name: &str, fields: &str) -> Self {
        Self::new(["name", name]).with_query("fields", fields)
    }

    /// `/alpha/{code}` (full record, no projection)
    pub fn alpha(code: &str) -> Self {
        Self::new(["alpha", code])
    }

    /// `/alpha?codes=c1,c2,...&fields=...`
    pub fn alpha_batch(codes: &[String], fields: &str) -> Self {
        Self::new(["alpha"])
            .with_query("codes", codes.join(","))
            .with_query("fields", fields)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Unencoded path with query string, e.g. `/region/Europe?fields=cca2,name`.
    /// Used for logs, error messages and as the routing key of test sources.
    pub fn path(&self) -> String {
        let mut out = String::new();
        for seg in &self.segments {
            out.push('/');
            out.push_str(seg);
        }
        for (i, (k, v)) in self.query.iter().enumerate() {
            out.push(if i == 0 { '?' } else { '&' });
            out.push_str(k);
            out.push('=');
            out.push_str(v);
        }
        out
    }
}

/// Status and body as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceResponse {
    pub status: u16,
    pub body: String,
}

impl SourceResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Backend abstraction for the remote country data.
///
/// Implementors must be `Send + Sync` so one source can serve the fetch
/// layer and the detail resolver from any task.
#[async_trait]
pub trait CountrySource: Send + Sync {
    async fn get(&self, request: &SourceRequest) -> Result<SourceResponse>;
}

#[async_trait]
impl<T: CountrySource + ?Sized> CountrySource for Arc<T> {
    async fn get(&self, request: &SourceRequest) -> Result<SourceResponse> {
        (**self).get(request).await
    }
}

#[cfg(feature = "http")]
pub use http::HttpSource;

#[cfg(feature = "http")]
mod http {
    use super::{CountrySource, SourceRequest, SourceResponse};
    use crate::config::SourceConfig;
    use crate::error::{Result, WorldError};
    use async_trait::async_trait;
    use reqwest::{Client, Url};
    use tracing::debug;

    /// [`CountrySource`] over HTTPS using a shared `reqwest::Client`.
    #[derive(Debug, Clone)]
    pub struct HttpSource {
        client: Client,
        base: Url,
    }

    impl HttpSource {
        pub fn new(config: &SourceConfig) -> Result<Self> {
            config.validate()?;
            let base = Url::parse(&config.base_url)
                .map_err(|e| WorldError::InvalidConfig(format!("{}: {e}", config.base_url)))?;
            if base.cannot_be_a_base() {
                return Err(WorldError::InvalidConfig(format!(
                    "base URL cannot carry a path: {base}"
                )));
            }
            let client = Client::builder()
                .timeout(config.timeout)
                .user_agent(concat!("worldview/", env!("CARGO_PKG_VERSION")))
                .build()?;
            Ok(Self { client, base })
        }

        /// Percent-encodes segments and query values onto the base URL.
        pub fn url_for(&self, request: &SourceRequest) -> Url {
            let mut url = self.base.clone();
            if let Ok(mut segs) = url.path_segments_mut() {
                segs.pop_if_empty().extend(request.segments());
            }
            if !request.query().is_empty() {
                url.query_pairs_mut().extend_pairs(request.query());
            }
            url
        }
    }

    #[async_trait]
    impl CountrySource for HttpSource {
        async fn get(&self, request: &SourceRequest) -> Result<SourceResponse> {
            let url = self.url_for(request);
            debug!(%url, "GET");
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(SourceResponse { status, body })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn builds_encoded_urls() {
            let src = HttpSource::new(&SourceConfig::default()).unwrap();

            let url = src.url_for(&SourceRequest::name("united states", "cca2,name"));
            assert_eq!(
                url.as_str(),
                "https://restcountries.com/v3.1/name/united%20states?fields=cca2%2Cname"
            );

            let url = src.url_for(&SourceRequest::alpha("FR"));
            assert_eq!(url.as_str(), "https://restcountries.com/v3.1/alpha/FR");
        }

        #[test]
        fn rejects_invalid_base() {
            let cfg = SourceConfig::default().with_base_url("mailto:someone@example.org");
            assert!(HttpSource::new(&cfg).is_err());
        }

        #[test]
        fn rejects_hosts_that_pass_the_scheme_check() {
            let cfg = SourceConfig::default().with_base_url("https://exa mple/v3.1");
            assert!(cfg.validate().is_ok());
            assert!(matches!(
                HttpSource::new(&cfg),
                Err(WorldError::InvalidConfig(_))
            ));
        }
    }
}
