//! Plain-text rendering of catalog pages and detail records.

use worldview_core::{Country, CountryDetail, PageItem, PageSlice};

pub fn print_status(status: &str) {
    println!("> STATUS: {status}");
}

pub fn print_page(countries: &[&Country], slice: PageSlice) {
    for c in &countries[slice.range()] {
        println!(
            "{:<4} {:<40} {:<10} {:>15}",
            c.code(),
            c.name(),
            c.region(),
            c.population_display()
        );
    }
}

/// `‹ 1 … 5 6 [7] 8 … 13 ›`; nothing for a single page.
pub fn page_control(items: &[PageItem], current: usize) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    let mut parts = vec!["‹".to_string()];
    for item in items {
        parts.push(match item {
            PageItem::Page(p) if *p == current => format!("[{p}]"),
            PageItem::Page(p) => p.to_string(),
            PageItem::Ellipsis => "…".to_string(),
        });
    }
    parts.push("›".to_string());
    Some(parts.join(" "))
}

pub fn print_detail(c: &CountryDetail) {
    println!("Country: {}", c.name());
    println!("Official Name: {}", c.official_name());
    println!("Native Name: {}", c.native_official_name().unwrap_or("N/A"));
    println!("Code: {}", c.code());
    println!("Status: {}", c.independence_status());
    println!("Capital: {}", c.capital_display());
    println!("Region: {}", c.region());
    println!("Subregion: {}", c.subregion().unwrap_or("N/A"));
    println!("Population: {}", c.population_display());
    println!("Demonym: {}", c.demonym().unwrap_or("N/A"));
    println!("Languages: {}", join_or_na(&c.language_names()));
    println!("Currencies: {}", join_or_na(&c.currency_names()));
    println!("Flag: {}", c.flags.svg);
    if c.borders().is_empty() {
        println!("Borders: none");
    } else {
        println!("Borders:");
        for b in c.borders() {
            println!("- {} ({})", b.name, b.code);
        }
    }
}

fn join_or_na(items: &[&str]) -> String {
    if items.is_empty() {
        "N/A".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldview_core::page_items;

    #[test]
    fn control_marks_current_page() {
        let items = page_items(7, 13, 4);
        assert_eq!(
            page_control(&items, 7).as_deref(),
            Some("‹ 1 … 5 6 [7] 8 … 13 ›")
        );
        assert!(page_control(&page_items(1, 1, 4), 1).is_none());
    }

    #[test]
    fn empty_lists_read_na() {
        assert_eq!(join_or_na(&[]), "N/A");
        assert_eq!(join_or_na(&["French", "German"]), "French, German");
    }
}
