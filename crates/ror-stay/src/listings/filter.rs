use super::domain::{Categorical, Dimension, Listing, Location, Nearby, PriceRange, Restriction, RoomType};
use serde::{Deserialize, Serialize};

/// The user's current constraints. Every field starts unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nearby: Option<Nearby>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_type: Option<RoomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restriction: Option<Restriction>,
}

/// A single-field update. `None` unsets the dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChange {
    Location(Option<Location>),
    Nearby(Option<Nearby>),
    PriceRange(Option<PriceRange>),
    RoomType(Option<RoomType>),
    Restriction(Option<Restriction>),
}

impl FilterChange {
    pub const fn dimension(&self) -> Dimension {
        match self {
            Self::Location(_) => Dimension::Location,
            Self::Nearby(_) => Dimension::Nearby,
            Self::PriceRange(_) => Dimension::PriceRange,
            Self::RoomType(_) => Dimension::RoomType,
            Self::Restriction(_) => Dimension::Restriction,
        }
    }

    /// Resolves a raw control value. Anything outside the allowed table unsets the dimension.
    pub fn from_raw(dimension: Dimension, raw: &str) -> Self {
        let raw = raw.trim();
        match dimension {
            Dimension::Location => Self::Location(Location::parse(raw)),
            Dimension::Nearby => Self::Nearby(Nearby::parse(raw)),
            Dimension::PriceRange => Self::PriceRange(PriceRange::parse(raw)),
            Dimension::RoomType => Self::RoomType(RoomType::parse(raw)),
            Dimension::Restriction => Self::Restriction(Restriction::parse(raw)),
        }
    }

    pub const fn is_unset(&self) -> bool {
        match self {
            Self::Location(value) => value.is_none(),
            Self::Nearby(value) => value.is_none(),
            Self::PriceRange(value) => value.is_none(),
            Self::RoomType(value) => value.is_none(),
            Self::Restriction(value) => value.is_none(),
        }
    }
}

impl FilterSelection {
    pub fn apply(&mut self, change: FilterChange) {
        match change {
            FilterChange::Location(value) => self.location = value,
            FilterChange::Nearby(value) => self.nearby = value,
            FilterChange::PriceRange(value) => self.price_range = value,
            FilterChange::RoomType(value) => self.room_type = value,
            FilterChange::Restriction(value) => self.restriction = value,
        }
    }

    pub fn with(mut self, change: FilterChange) -> Self {
        self.apply(change);
        self
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }

    /// Number of dimensions currently constraining the result.
    pub fn active_count(&self) -> usize {
        [
            self.location.is_some(),
            self.nearby.is_some(),
            self.price_range.is_some(),
            self.room_type.is_some(),
            self.restriction.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        matches_exact(self.location, listing.location)
            && matches_exact(self.nearby, listing.nearby)
            && matches_exact(self.room_type, listing.room_type)
            && matches_exact(self.restriction, listing.restriction)
            && matches_price(self.price_range, listing.monthly_rent())
    }
}

fn matches_exact<T: PartialEq>(wanted: Option<T>, actual: T) -> bool {
    wanted.map_or(true, |wanted| wanted == actual)
}

// An unparseable price never satisfies a set range.
fn matches_price(range: Option<PriceRange>, rent: Option<u64>) -> bool {
    match (range, rent) {
        (None, _) => true,
        (Some(range), Some(rent)) => range.contains(rent),
        (Some(_), None) => false,
    }
}

/// Ordered sub-sequence of `listings` satisfying every set field of `selection`.
pub fn filter_listings<'a>(listings: &'a [Listing], selection: &FilterSelection) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|listing| selection.matches(listing))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::domain::ListingId;

    fn listing(id: &str, location: Location, room_type: RoomType, price: &str) -> Listing {
        Listing {
            id: ListingId::new(id),
            title: format!("Listing {id}"),
            location,
            nearby: Nearby::ForumMall,
            price: price.to_string(),
            room_type,
            restriction: Restriction::CoLiving,
            description: "Furnished room".to_string(),
            image: format!("/images/{id}.jpg"),
        }
    }

    fn ids(result: &[&Listing]) -> Vec<String> {
        result.iter().map(|listing| listing.id.0.clone()).collect()
    }

    #[test]
    fn unset_selection_returns_everything_in_order() {
        let listings = vec![
            listing("a", Location::Whitefield, RoomType::Double, "₹9,000"),
            listing("b", Location::Koramangala, RoomType::Single, "₹12,000"),
            listing("c", Location::BtmLayout, RoomType::Studio, "₹21,000"),
        ];

        let result = filter_listings(&listings, &FilterSelection::default());
        assert_eq!(ids(&result), vec!["a", "b", "c"]);
    }

    #[test]
    fn under_5000_excludes_listing_on_the_edge() {
        let listings = vec![
            listing("cheap", Location::BtmLayout, RoomType::Triple, "₹4,500"),
            listing("edge", Location::BtmLayout, RoomType::Triple, "₹5,000"),
        ];
        let selection =
            FilterSelection::default().with(FilterChange::PriceRange(Some(PriceRange::Under5000)));

        assert_eq!(ids(&filter_listings(&listings, &selection)), vec!["cheap"]);

        let next = selection.with(FilterChange::PriceRange(Some(PriceRange::From5000To10000)));
        assert_eq!(ids(&filter_listings(&listings, &next)), vec!["edge"]);
    }

    #[test]
    fn location_and_room_type_must_both_match() {
        let listings = vec![
            listing("both", Location::Koramangala, RoomType::Single, "₹8,000"),
            listing("location_only", Location::Koramangala, RoomType::Double, "₹8,000"),
            listing("room_only", Location::Indiranagar, RoomType::Single, "₹8,000"),
            listing("both_again", Location::Koramangala, RoomType::Single, "₹15,500"),
        ];
        let selection = FilterSelection::default()
            .with(FilterChange::Location(Some(Location::Koramangala)))
            .with(FilterChange::RoomType(Some(RoomType::Single)));

        assert_eq!(
            ids(&filter_listings(&listings, &selection)),
            vec!["both", "both_again"]
        );
    }

    #[test]
    fn malformed_price_only_fails_price_constraints() {
        let listings = vec![
            listing("unknown", Location::HsrLayout, RoomType::Single, "Price on request"),
            listing("known", Location::HsrLayout, RoomType::Single, "₹25,000"),
        ];

        let by_location =
            FilterSelection::default().with(FilterChange::Location(Some(Location::HsrLayout)));
        assert_eq!(
            ids(&filter_listings(&listings, &by_location)),
            vec!["unknown", "known"]
        );

        let by_price = by_location.with(FilterChange::PriceRange(Some(PriceRange::Above20000)));
        assert_eq!(ids(&filter_listings(&listings, &by_price)), vec!["known"]);
    }

    #[test]
    fn raw_values_outside_the_table_unset_the_dimension() {
        let mut selection = FilterSelection::default()
            .with(FilterChange::Location(Some(Location::Whitefield)));

        selection.apply(FilterChange::from_raw(Dimension::Location, "Atlantis"));
        assert!(selection.location.is_none());

        selection.apply(FilterChange::from_raw(Dimension::RoomType, " Studio "));
        assert_eq!(selection.room_type, Some(RoomType::Studio));
        assert_eq!(selection.active_count(), 1);

        assert!(FilterChange::from_raw(Dimension::PriceRange, "").is_unset());
    }

    #[test]
    fn selection_serializes_with_camel_case_fields() {
        let selection = FilterSelection::default()
            .with(FilterChange::PriceRange(Some(PriceRange::Under5000)));
        let json = serde_json::to_value(selection).expect("serializes");
        assert_eq!(json, serde_json::json!({ "priceRange": "under_5000" }));

        let parsed: FilterSelection =
            serde_json::from_value(serde_json::json!({ "roomType": "double" })).expect("parses");
        assert_eq!(parsed.room_type, Some(RoomType::Double));
        assert!(parsed.location.is_none());
    }
}
