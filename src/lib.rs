//! worldview-rs
//!
//! Workspace facade over [`worldview_core`]. Demos and downstream experiments
//! can pull everything in with one import:
//!
//! ```no_run
//! use worldview_rs::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let client = CountryClient::from_config(SourceConfig::default())?;
//! let all = client.fetch_all().await?;
//! let europe = FilterState::new().with_region(Some(Region::Europe)).apply(&all);
//! println!("{}", europe.summary);
//! # Ok(())
//! # }
//! ```
pub use worldview_core::*;

pub mod prelude {
    pub use worldview_core::{
        Country, CountryClient, CountryDetail, DetailResolver, FilterState, PageItem, Pager,
        Region, Result, SourceConfig, StatusSummary, WorldError,
    };
}
