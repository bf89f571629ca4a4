//! Browsing example for worldview-rs
//!
//! This example demonstrates how to:
//! - Fetch the full country catalog
//! - Narrow it by region and name
//! - Page through the result with a page-number window

use worldview_rs::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== worldview-rs Browse Example ===\n");

    let client = CountryClient::from_config(SourceConfig::default())?;
    let all = client.fetch_all().await?;
    println!("Loaded {} countries\n", all.len());

    // Example 1: everything, first page
    println!("--- Example 1: Global list ---");
    let mut filter = FilterState::new();
    let outcome = filter.apply(&all);
    println!("{}", outcome.summary);
    let mut pager = Pager::default();
    for c in pager.page_of(&outcome.countries) {
        println!("  {} ({})", c.name(), c.code());
    }
    println!();

    // Example 2: one region, second page
    println!("--- Example 2: Europe, page 2 ---");
    filter.set_region(Some(Region::Europe));
    let outcome = filter.apply(&all);
    println!("{}", outcome.summary);
    pager.set_page(2, outcome.len());
    for c in pager.page_of(&outcome.countries) {
        println!("  {} ({})", c.name(), c.code());
    }
    println!("Pages: {:?}\n", pager.items(outcome.len(), 4));

    // Example 3: region plus name query
    println!("--- Example 3: Europe matching \"land\" ---");
    filter.set_query("land");
    pager.reset();
    let outcome = filter.apply(&all);
    println!("{}", outcome.summary);
    for c in pager.page_of(&outcome.countries) {
        println!("  {} - {}", c.name(), c.capital_display());
    }

    Ok(())
}
