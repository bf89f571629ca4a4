// End-to-end: fetch → filter → paginate, and detail resolution.

use std::sync::Arc;
use worldview_core::config::{BORDER_FIELDS, DEFAULT_FIELDS};
use worldview_core::test_utils::{fixtures, MockSource, Reply};
use worldview_core::{
    paginate, CountryClient, DetailResolver, FilterState, PageItem, Pager, Region, RetryPolicy,
    SourceConfig, SourceRequest, StatusSummary,
};

fn world(n: usize) -> String {
    let regions = ["Europe", "Asia", "Africa"];
    let items: Vec<_> = (0..n)
        .map(|i| {
            let first = (b'A' + (i / 26) as u8) as char;
            let second = (b'A' + (i % 26) as u8) as char;
            let code = format!("{first}{second}");
            let name = format!("Country {i:03}");
            fixtures::country(&code, &name, regions[i % regions.len()], &[])
        })
        .rev()
        .collect();
    fixtures::countries_json(&items)
}

fn config() -> SourceConfig {
    SourceConfig::default().with_retry(RetryPolicy::none())
}

#[tokio::test]
async fn browse_filter_and_page_through_the_catalog() {
    let all_path = SourceRequest::all(DEFAULT_FIELDS).path();
    let mock = Arc::new(MockSource::new().with_json(&all_path, world(45)));
    let client = CountryClient::new(Arc::clone(&mock), &config());

    let all = client.fetch_all().await.unwrap();
    assert_eq!(all.len(), 45);
    assert_eq!(all[0].name(), "Country 000");

    let mut pager = Pager::new(20);
    let unfiltered = FilterState::new().apply(&all);
    assert_eq!(unfiltered.summary, StatusSummary::Global { count: 45 });
    assert_eq!(pager.total_pages(unfiltered.len()), 3);

    pager.set_page(3, unfiltered.len());
    let last_page = pager.page_of(&unfiltered.countries);
    assert_eq!(last_page.len(), 5);
    assert_eq!(last_page[0].name(), "Country 040");
    assert_eq!(
        pager.items(unfiltered.len(), 4),
        vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3)]
    );

    let europe = FilterState::new().with_region(Some(Region::Europe)).apply(&all);
    pager.reset();
    assert_eq!(europe.len(), 15);
    assert_eq!(europe.summary.to_string(), "REGION: EUROPE - 15 COUNTRIES.");
    assert_eq!(paginate(europe.len(), 20, pager.page()).range(), 0..15);
    assert!(pager.items(europe.len(), 4).is_empty());

    let none = FilterState::new().with_query("zzz").apply(&all);
    assert!(none.is_empty());
    assert_eq!(none.summary.to_string(), "NO DATA MATCHES: ZZZ");
    assert_eq!(paginate(none.len(), 20, 1).total_pages, 0);

    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn detail_view_round_trip() {
    let borders = vec!["AUT".to_string(), "CHE".to_string()];
    let liechtenstein = fixtures::country("LI", "Liechtenstein", "Europe", &["AUT", "CHE"]);
    let mock = Arc::new(
        MockSource::new()
            .with_json(
                &SourceRequest::alpha("LI").path(),
                fixtures::countries_json(&[liechtenstein]),
            )
            .with_json(
                &SourceRequest::alpha_batch(&borders, BORDER_FIELDS).path(),
                fixtures::borders_json(&[("AT", "Austria"), ("CH", "Switzerland")]),
            ),
    );
    let resolver = DetailResolver::new(CountryClient::new(Arc::clone(&mock), &config()));

    let detail = resolver.resolve(Some("li")).await.unwrap();
    assert_eq!(detail.code(), "LI");
    let codes: Vec<_> = detail.borders().iter().map(|b| b.code.as_str()).collect();
    assert_eq!(codes, ["AT", "CH"]);

    resolver.resolve(Some("LI")).await.unwrap();
    assert_eq!(mock.call_count(), 2);

    // Neighbour navigation resolves the linked code next.
    let next = resolver.resolve(Some(detail.borders()[0].code.as_str())).await;
    assert!(next.unwrap_err().is_not_found());
    assert_eq!(resolver.cache().len(), 1);
}

#[tokio::test]
async fn offline_detail_then_recovery() {
    let path = SourceRequest::alpha("IS").path();
    let mock = Arc::new(MockSource::new().with_reply(&path, Reply::fail("connection lost")));
    let resolver = DetailResolver::new(CountryClient::new(Arc::clone(&mock), &config()));

    let err = resolver.resolve(Some("IS")).await.unwrap_err();
    assert!(err.is_network() && !err.is_not_found());

    mock.set_reply(
        &path,
        Reply::json(fixtures::countries_json(&[fixtures::country("IS", "Iceland", "Europe", &[])])),
    );
    assert_eq!(resolver.resolve(Some("IS")).await.unwrap().name(), "Iceland");
}
