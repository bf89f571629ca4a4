use clap::{Parser, Subcommand};

/// CLI arguments for worldview
#[derive(Debug, Parser)]
#[command(
    name = "worldview",
    version,
    about = "Browse world-country data from the REST Countries API"
)]
pub struct CliArgs {
    /// Base URL of the country source
    #[arg(
        long = "base-url",
        env = "WORLDVIEW_BASE_URL",
        global = true,
        default_value = worldview_core::DEFAULT_BASE_URL
    )]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long = "timeout-secs", global = true, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Extra attempts for failed list queries
    #[arg(long = "retries", global = true, default_value_t = 2)]
    pub retries: u32,

    /// Emit logs as JSON lines (filter with RUST_LOG)
    #[arg(long = "log-json", global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Paging options shared by the list-style commands.
#[derive(Debug, Clone, clap::Args)]
pub struct PageArgs {
    /// 1-based page to show
    #[arg(short = 'p', long = "page", default_value_t = 1)]
    pub page: usize,

    /// Countries per page
    #[arg(
        long = "page-size",
        default_value_t = 20,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub page_size: u64,

    /// Width of the page-number window
    #[arg(long = "max-pages", default_value_t = 4)]
    pub max_pages: usize,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all countries, optionally narrowed by region and name
    List {
        /// Region filter (Africa, Americas, Asia, Europe, Oceania)
        #[arg(short = 'r', long = "region")]
        region: Option<String>,

        /// Case-insensitive substring of the common name
        #[arg(short = 's', long = "search")]
        search: Option<String>,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// Server-side fuzzy search by name
    Search {
        /// Name or part of a name (e.g. "guinea")
        query: String,
    },

    /// List the countries of one region (server-side filter)
    Region {
        /// Region name as the source knows it
        region: String,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// Show details for one or more countries by code
    Country {
        /// ISO 3166-1 alpha-2 codes (e.g. DE, fr)
        #[arg(required = true)]
        codes: Vec<String>,
    },

    /// List the regions offered by the region filter
    Regions,
}
