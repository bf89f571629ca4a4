// crates/worldview-core/src/lib.rs

//! # worldview-core
//!
//! The data pipeline behind a world-country catalog: fetch records from the
//! REST Countries API, resolve and memoize country details, filter the list by
//! region and name, and paginate the result.
//!
//! ```no_run
//! use worldview_core::{filter_countries, paginate, CountryClient, SourceConfig};
//!
//! # async fn run() -> worldview_core::Result<()> {
//! let client = CountryClient::from_config(SourceConfig::default())?;
//! let all = client.fetch_all().await?;
//!
//! let matches = filter_countries(&all, Some("Europe"), Some("an"));
//! let page = paginate(matches.len(), 20, 1);
//! for c in &matches[page.range()] {
//!     println!("{} ({})", c.name(), c.code());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod convert;
pub mod detail;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod model;
pub mod paginate;
// Shared Raw Input (mirrors the remote JSON)
#[doc(hidden)]
pub mod raw;
pub mod source;
pub mod text;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

// Re-exports
pub use crate::config::{RetryPolicy, SourceConfig, DEFAULT_BASE_URL, DEFAULT_FIELDS};
pub use crate::detail::{DetailCache, DetailResolver};
pub use crate::error::{Result, WorldError};
pub use crate::fetch::CountryClient;
pub use crate::filter::{filter_countries, FilterOutcome, FilterState, StatusSummary};
pub use crate::model::{
    Country, CountryDetail, CountryName, Currency, Demonym, Flags, NativeName, Region,
    ResolvedBorder,
};
pub use crate::paginate::{page_items, paginate, visible_pages, PageItem, PageSlice, Pager};
#[cfg(feature = "http")]
pub use crate::source::HttpSource;
pub use crate::source::{CountrySource, SourceRequest, SourceResponse};
pub use crate::text::{equals_folded, fold_key};
