use std::sync::Arc;

use ror_stay::listings::{
    filter_listings, Categorical, CsvCatalogImporter, FilterChange, FilterSelection, Listing,
    ListingCatalog, ListingPage, Location, Nearby, PriceRange, Restriction, RoomType,
};

fn fixture_catalog() -> ListingCatalog {
    let data = include_bytes!("fixtures/listings.csv");
    CsvCatalogImporter::from_reader(&data[..]).expect("fixture catalog imports")
}

fn ids(listings: &[&Listing]) -> Vec<String> {
    listings.iter().map(|listing| listing.id.0.clone()).collect()
}

fn every_selection() -> Vec<FilterSelection> {
    let mut selections = vec![FilterSelection::default()];
    for range in PriceRange::all().iter().copied() {
        selections.push(FilterSelection::default().with(FilterChange::PriceRange(Some(range))));
    }
    for location in [Location::BtmLayout, Location::Koramangala, Location::Whitefield] {
        let base = FilterSelection::default().with(FilterChange::Location(Some(location)));
        selections.push(base);
        selections.push(base.with(FilterChange::RoomType(Some(RoomType::Single))));
        selections.push(base.with(FilterChange::Restriction(Some(Restriction::CoLiving))));
        selections.push(base.with(FilterChange::Nearby(Some(Nearby::ChristUniversity))));
    }
    selections
}

fn is_subsequence(result: &[&Listing], all: &[Listing]) -> bool {
    let mut cursor = all.iter();
    result
        .iter()
        .all(|wanted| cursor.any(|candidate| candidate.id == wanted.id))
}

#[test]
fn unset_selection_returns_full_collection_in_order() {
    let catalog = fixture_catalog();
    let result = filter_listings(catalog.listings(), &FilterSelection::default());
    let expected: Vec<&Listing> = catalog.listings().iter().collect();
    assert_eq!(result, expected);
}

#[test]
fn results_are_ordered_subsequences_and_idempotent() {
    let catalog = fixture_catalog();
    for selection in every_selection() {
        let first = filter_listings(catalog.listings(), &selection);
        let second = filter_listings(catalog.listings(), &selection);
        assert!(
            is_subsequence(&first, catalog.listings()),
            "{selection:?} broke ordering"
        );
        assert_eq!(first, second, "{selection:?} was not idempotent");
        assert!(first.iter().all(|listing| selection.matches(listing)));
    }
}

#[test]
fn price_buckets_respect_edges() {
    let catalog = fixture_catalog();
    let by_range = |range: PriceRange| {
        let selection = FilterSelection::default().with(FilterChange::PriceRange(Some(range)));
        ids(&filter_listings(catalog.listings(), &selection))
    };

    assert_eq!(by_range(PriceRange::Under5000), vec!["csv-01"]);
    assert_eq!(by_range(PriceRange::From5000To10000), vec!["csv-02", "csv-03"]);
    assert_eq!(
        by_range(PriceRange::From10000To15000),
        vec!["csv-03", "csv-04", "csv-05"]
    );
    assert_eq!(by_range(PriceRange::From15000To20000), vec!["csv-05", "csv-06"]);
    assert_eq!(by_range(PriceRange::Above20000), vec!["csv-07"]);
}

#[test]
fn listing_without_price_digits_never_matches_a_range_but_stays_visible() {
    let catalog = fixture_catalog();
    for range in PriceRange::all().iter().copied() {
        let selection = FilterSelection::default().with(FilterChange::PriceRange(Some(range)));
        let matched = ids(&filter_listings(catalog.listings(), &selection));
        assert!(!matched.contains(&"csv-08".to_string()), "{range:?} matched csv-08");
    }

    let by_location =
        FilterSelection::default().with(FilterChange::Location(Some(Location::ElectronicCity)));
    assert_eq!(
        ids(&filter_listings(catalog.listings(), &by_location)),
        vec!["csv-08"]
    );
}

#[test]
fn clearing_after_updates_restores_everything() {
    let catalog = Arc::new(fixture_catalog());
    let mut page = ListingPage::new(catalog.clone());

    page.apply(FilterChange::Location(Some(Location::Koramangala)));
    page.apply(FilterChange::RoomType(Some(RoomType::Single)));
    assert_eq!(ids(&page.visible()), vec!["csv-03"]);

    page.apply(FilterChange::Restriction(Some(Restriction::Family)));
    assert!(page.is_empty_result());
    assert!(page.view().empty_state.is_some());

    page.clear();
    assert_eq!(page.count().shown, catalog.len());
    assert!(page.view().empty_state.is_none());
}

#[test]
fn pages_do_not_share_selection() {
    let catalog = Arc::new(fixture_catalog());
    let mut first = ListingPage::new(catalog.clone());
    let second = ListingPage::new(catalog);

    first.apply(FilterChange::Location(Some(Location::Whitefield)));
    assert_eq!(first.count().shown, 2);
    assert_eq!(second.count().shown, 8);
}
