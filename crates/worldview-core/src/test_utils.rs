// crates/worldview-core/src/test_utils.rs

//! Scripted in-memory [`CountrySource`] and JSON fixtures.
//!
//! Routes are keyed by [`SourceRequest::path`]. Queued replies are consumed
//! first, then the route's standing reply answers every further call.
//! Unrouted paths answer 404 like the real source.

use crate::error::{Result, WorldError};
use crate::source::{CountrySource, SourceRequest, SourceResponse};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub enum Reply {
    Response(SourceResponse),
    /// Transport failure.
    Fail(String),
}

impl Reply {
    pub fn json(body: impl Into<String>) -> Self {
        Reply::Response(SourceResponse::ok(body))
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Reply::Response(SourceResponse::new(status, body))
    }

    pub fn fail(msg: &str) -> Self {
        Reply::Fail(msg.to_string())
    }
}

#[derive(Debug, Default)]
pub struct MockSource {
    standing: Mutex<HashMap<String, Reply>>,
    queued: Mutex<HashMap<String, VecDeque<Reply>>>,
    calls: Mutex<Vec<String>>,
    count: AtomicUsize,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(self, path: &str, body: impl Into<String>) -> Self {
        self.with_reply(path, Reply::json(body))
    }

    pub fn with_reply(self, path: &str, reply: Reply) -> Self {
        self.set_reply(path, reply);
        self
    }

    pub fn queue_reply(self, path: &str, reply: Reply) -> Self {
        self.push_reply(path, reply);
        self
    }

    /// Replaces the standing reply of a route, e.g. to simulate the source changing.
    pub fn set_reply(&self, path: &str, reply: Reply) {
        lock(&self.standing).insert(path.to_string(), reply);
    }

    pub fn push_reply(&self, path: &str, reply: Reply) {
        lock(&self.queued)
            .entry(path.to_string())
            .or_default()
            .push_back(reply);
    }

    pub fn call_count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Paths requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    pub fn calls_to(&self, path: &str) -> usize {
        lock(&self.calls).iter().filter(|p| *p == path).count()
    }

    fn next_reply(&self, path: &str) -> Option<Reply> {
        if let Some(reply) = lock(&self.queued).get_mut(path).and_then(VecDeque::pop_front) {
            return Some(reply);
        }
        lock(&self.standing).get(path).cloned()
    }
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl CountrySource for MockSource {
    async fn get(&self, request: &SourceRequest) -> Result<SourceResponse> {
        let path = request.path();
        self.count.fetch_add(1, Ordering::SeqCst);
        lock(&self.calls).push(path.clone());
        match self.next_reply(&path) {
            Some(Reply::Response(r)) => Ok(r),
            Some(Reply::Fail(msg)) => Err(WorldError::Network(msg)),
            None => Ok(SourceResponse::new(
                404,
                r#"{"status":404,"message":"Not Found"}"#,
            )),
        }
    }
}

pub mod fixtures {
    use crate::convert;
    use crate::model::Country;
    use crate::raw::CountryRaw;
    use serde_json::{json, Value};

    /// A record shaped like the `/all?fields=...` projection.
    pub fn country(cca2: &str, common: &str, region: &str, borders: &[&str]) -> Value {
        json!({
            "cca2": cca2,
            "name": {
                "common": common,
                "official": format!("Official {common}"),
                "nativeName": {}
            },
            "region": region,
            "capital": [format!("{common} City")],
            "population": 1000,
            "borders": borders,
            "flags": {
                "png": format!("https://flagcdn.com/w320/{}.png", cca2.to_lowercase()),
                "svg": format!("https://flagcdn.com/{}.svg", cca2.to_lowercase()),
                "alt": format!("The flag of {common}")
            }
        })
    }

    pub fn countries_json(items: &[Value]) -> String {
        Value::Array(items.to_vec()).to_string()
    }

    /// The `/alpha?codes=...&fields=cca2,name` projection.
    pub fn borders_json(items: &[(&str, &str)]) -> String {
        let v: Vec<Value> = items
            .iter()
            .map(|(cca2, common)| json!({ "cca2": cca2, "name": { "common": common } }))
            .collect();
        Value::Array(v).to_string()
    }

    /// Normalized countries built from `(code, name, region)` triples.
    pub fn countries(items: &[(&str, &str, &str)]) -> Vec<Country> {
        items
            .iter()
            .map(|(code, name, region)| {
                serde_json::from_value::<CountryRaw>(country(code, name, region, &[]))
                    .expect("fixture decodes")
            })
            .map(convert::from_raw)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures;

    #[test]
    fn fixtures_keep_every_record() {
        let all = fixtures::countries(&[
            ("FR", "France", "Europe"),
            ("JP", "Japan", "Asia"),
            ("NZ", "New Zealand", "Oceania"),
        ]);
        assert_eq!(all.len(), 3);
        assert_eq!(all[2].code(), "NZ");
        assert_eq!(all[2].capital_display(), "New Zealand City");
    }
}
