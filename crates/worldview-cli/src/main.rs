//! worldview — Command-line browser for world-country data
//!
//! This binary is a terminal front-end to the `worldview-core` pipeline. It
//! lists the full catalog with region and name filters, pages through the
//! results, runs server-side name and region queries, and shows country
//! details with resolved neighbours.
//!
//! Usage examples
//! --------------
//!
//! - Browse everything, 20 per page
//!   $ worldview list
//!   $ worldview list --page 3
//!
//! - Narrow by region and name
//!   $ worldview list --region europe --search fra
//!
//! - Ask the source directly
//!   $ worldview search guinea
//!   $ worldview region oceania
//!
//! - Details with neighbours (codes are ISO2, case-insensitive)
//!   $ worldview country de fr
//!
//! Logging
//! -------
//!
//! Diagnostics go to stderr through `tracing`; set `RUST_LOG=debug` to see
//! every request and cache decision, and `--log-json` for JSON lines.
mod args;
mod render;

use crate::args::{CliArgs, Commands, PageArgs};
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use worldview_core::{
    Country, CountryClient, DetailResolver, FilterState, Pager, Region, RetryPolicy, SourceConfig,
    StatusSummary, WorldError,
};

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

const RETRY_HINT: &str =
    "could not reach the country source; check your connection and run the command again";

/// Adds the retry hint only where another attempt can help.
fn with_hint(e: WorldError) -> anyhow::Error {
    if e.is_retryable() {
        anyhow::Error::new(e).context(RETRY_HINT)
    } else {
        e.into()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.log_json);

    let config = SourceConfig::default()
        .with_base_url(args.base_url.as_str())
        .with_timeout(Duration::from_secs(args.timeout_secs))
        .with_retry(RetryPolicy {
            retries: args.retries,
            ..RetryPolicy::default()
        });
    let client = CountryClient::from_config(config)?;

    match args.command {
        Commands::List {
            region,
            search,
            paging,
        } => {
            let region = region
                .as_deref()
                .map(str::parse::<Region>)
                .transpose()?;
            let all = client.fetch_all().await.map_err(with_hint)?;
            let filter = FilterState::new()
                .with_region(region)
                .with_query(search.unwrap_or_default());
            let outcome = filter.apply(&all);
            show_list(&outcome.countries, &outcome.summary, &paging);
        }

        Commands::Region { region, paging } => {
            let countries = client
                .fetch_by_region(&region)
                .await
                .map_err(with_hint)?;
            let refs: Vec<&Country> = countries.iter().collect();
            let summary = StatusSummary::derive(refs.len(), Some(region.as_str()), None);
            show_list(&refs, &summary, &paging);
        }

        Commands::Search { query } => {
            let found = client.fetch_by_name(&query).await.map_err(with_hint)?;
            let summary = StatusSummary::derive(found.len(), None, Some(query.as_str()));
            render::print_status(&summary.to_string());
            for c in &found {
                println!("{} ({}) - {}", c.name(), c.code(), c.region());
            }
        }

        Commands::Country { codes } => {
            let resolver = DetailResolver::new(client);
            for (i, code) in codes.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                match resolver.resolve(Some(code.as_str())).await {
                    Ok(detail) => render::print_detail(&detail),
                    Err(e) if e.is_not_found() => eprintln!("No country found for: {code}"),
                    Err(e) if e.is_retryable() => {
                        eprintln!("Connection lost while loading {code}: {e} (retry to try again)")
                    }
                    Err(e) => eprintln!("Could not load {code}: {e}"),
                }
            }
        }

        Commands::Regions => {
            for r in Region::SELECTABLE {
                println!("{r}");
            }
        }
    }

    Ok(())
}

fn show_list(countries: &[&Country], summary: &StatusSummary, paging: &PageArgs) {
    render::print_status(&summary.to_string());
    if countries.is_empty() {
        println!("No results.");
        return;
    }

    let page_size = usize::try_from(paging.page_size).unwrap_or(Pager::DEFAULT_PAGE_SIZE);
    let mut pager = Pager::new(page_size);
    let page = pager.set_page(paging.page, countries.len());
    if page != paging.page {
        tracing::debug!(requested = paging.page, shown = page, "page clamped");
    }

    render::print_page(countries, pager.slice(countries.len()));
    let items = pager.items(countries.len(), paging.max_pages);
    if let Some(control) = render::page_control(&items, page) {
        println!("{control}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_only_for_transient_failures() {
        let offline = with_hint(WorldError::Network("refused".into()));
        assert_eq!(offline.to_string(), RETRY_HINT);

        let missing = with_hint(WorldError::Status {
            status: 404,
            url: "/region/Atlantis".into(),
        });
        assert!(!missing.to_string().contains("check your connection"));
    }
}
