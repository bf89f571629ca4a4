//! Country detail example for worldview-rs
//!
//! Resolves a few countries with their neighbours and shows how the
//! detail cache and the error kinds behave.

use worldview_rs::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== worldview-rs Country Detail Example ===\n");

    let resolver = DetailResolver::new(CountryClient::from_config(SourceConfig::default())?);

    for code in ["de", "JP", "zz"] {
        match resolver.resolve(Some(code)).await {
            Ok(detail) => {
                println!("{} ({})", detail.name(), detail.code());
                println!("  Official:   {}", detail.official_name());
                println!("  Population: {}", detail.population_display());
                println!("  Capital:    {}", detail.capital_display());
                let neighbours: Vec<&str> =
                    detail.borders().iter().map(|b| b.name.as_str()).collect();
                if neighbours.is_empty() {
                    println!("  Borders:    none");
                } else {
                    println!("  Borders:    {}", neighbours.join(", "));
                }
            }
            Err(WorldError::NotFound(code)) => println!("No country with code {code}"),
            Err(e) => return Err(e),
        }
        println!();
    }

    // Second lookup is served from the cache.
    let _ = resolver.resolve(Some("DE")).await?;
    println!("Cached details: {}", resolver.cache().len());

    Ok(())
}
