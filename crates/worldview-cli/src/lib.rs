//! worldview-cli
//! =============
//!
//! Command-line browser for world-country data, built on
//! [`worldview-core`](https://docs.rs/worldview-core).
//!
//! This crate primarily provides a binary (`worldview`). The library target
//! exists so docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install worldview-cli
//! worldview --help
//! worldview list --region europe --search fra
//! worldview country de
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
