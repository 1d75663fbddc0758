use super::domain::{
    Categorical, Dimension, Listing, ListingId, Location, Nearby, PriceRange, Restriction,
    RoomType,
};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("listing id {0} appears more than once")]
    DuplicateId(ListingId),
}

/// Immutable collection of listings, indexed by id.
#[derive(Debug, Clone)]
pub struct ListingCatalog {
    listings: Vec<Listing>,
    index: HashMap<ListingId, usize>,
}

impl ListingCatalog {
    pub fn new(listings: Vec<Listing>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(listings.len());
        for (position, listing) in listings.iter().enumerate() {
            if index.insert(listing.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(listing.id.clone()));
            }
        }

        Ok(Self { listings, index })
    }

    /// The built-in dataset shown on the landing page.
    pub fn standard() -> Self {
        let listings = standard_listings();
        let index = listings
            .iter()
            .enumerate()
            .map(|(position, listing)| (listing.id.clone(), position))
            .collect();
        Self { listings, index }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: &ListingId) -> Option<&Listing> {
        self.index.get(id).map(|position| &self.listings[*position])
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Allowed values for every selection control. The tables are fixed, so an
    /// imported catalog offers the same options as the built-in one.
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::standard()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DimensionOptions {
    pub dimension: Dimension,
    pub label: &'static str,
    pub options: Vec<FilterOption>,
}

/// Allowed values per dimension, used to populate selection controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub location: Vec<FilterOption>,
    pub nearby: Vec<FilterOption>,
    pub price_range: Vec<FilterOption>,
    pub room_type: Vec<FilterOption>,
    pub restriction: Vec<FilterOption>,
}

impl FilterOptions {
    fn standard() -> Self {
        Self {
            location: options_for::<Location>(),
            nearby: options_for::<Nearby>(),
            price_range: options_for::<PriceRange>(),
            room_type: options_for::<RoomType>(),
            restriction: options_for::<Restriction>(),
        }
    }

    pub fn for_dimension(&self, dimension: Dimension) -> &[FilterOption] {
        match dimension {
            Dimension::Location => &self.location,
            Dimension::Nearby => &self.nearby,
            Dimension::PriceRange => &self.price_range,
            Dimension::RoomType => &self.room_type,
            Dimension::Restriction => &self.restriction,
        }
    }

    /// Dimensions in control order with their labels.
    pub fn grouped(&self) -> Vec<DimensionOptions> {
        Dimension::ordered()
            .into_iter()
            .map(|dimension| DimensionOptions {
                dimension,
                label: dimension.label(),
                options: self.for_dimension(dimension).to_vec(),
            })
            .collect()
    }
}

fn options_for<T: Categorical>() -> Vec<FilterOption> {
    T::all()
        .iter()
        .map(|value| FilterOption {
            key: value.key(),
            label: value.label(),
        })
        .collect()
}

struct Seed {
    id: &'static str,
    title: &'static str,
    location: Location,
    nearby: Nearby,
    price: &'static str,
    room_type: RoomType,
    restriction: Restriction,
    description: &'static str,
}

const SEEDS: [Seed; 12] = [
    Seed {
        id: "ror-001",
        title: "Sunrise PG for Men",
        location: Location::Koramangala,
        nearby: Nearby::ChristUniversity,
        price: "₹8,500",
        room_type: RoomType::Double,
        restriction: Restriction::Boys,
        description: "Twin-sharing room with attached bath, three meals a day and high-speed Wi-Fi.",
    },
    Seed {
        id: "ror-002",
        title: "Lakeview Residency",
        location: Location::Koramangala,
        nearby: Nearby::ForumMall,
        price: "₹12,000",
        room_type: RoomType::Single,
        restriction: Restriction::Girls,
        description: "Private room with balcony, housekeeping and 24x7 security.",
    },
    Seed {
        id: "ror-003",
        title: "Campus Nest",
        location: Location::BtmLayout,
        nearby: Nearby::JainUniversity,
        price: "₹4,500",
        room_type: RoomType::Triple,
        restriction: Restriction::Boys,
        description: "Budget triple-sharing beds a short walk from campus, meals included.",
    },
    Seed {
        id: "ror-004",
        title: "Maple Co-Living",
        location: Location::HsrLayout,
        nearby: Nearby::ForumMall,
        price: "₹15,000",
        room_type: RoomType::Studio,
        restriction: Restriction::CoLiving,
        description: "Fully furnished studio with kitchenette, gym access and community events.",
    },
    Seed {
        id: "ror-005",
        title: "Greenwood Homes",
        location: Location::Whitefield,
        nearby: Nearby::ItplTechPark,
        price: "₹22,000",
        room_type: RoomType::Studio,
        restriction: Restriction::Family,
        description: "Spacious family studio in a gated community with covered parking.",
    },
    Seed {
        id: "ror-006",
        title: "Orchid Ladies Hostel",
        location: Location::Indiranagar,
        nearby: Nearby::ManipalHospital,
        price: "₹9,800",
        room_type: RoomType::Double,
        restriction: Restriction::Girls,
        description: "Double-sharing rooms for working women and nursing staff, laundry included.",
    },
    Seed {
        id: "ror-007",
        title: "TechStay Suites",
        location: Location::ElectronicCity,
        nearby: Nearby::InfosysCampus,
        price: "₹10,000",
        room_type: RoomType::Single,
        restriction: Restriction::CoLiving,
        description: "Single occupancy with shuttle to the campus and a shared workspace.",
    },
    Seed {
        id: "ror-008",
        title: "Student Hub BTM",
        location: Location::BtmLayout,
        nearby: Nearby::ChristUniversity,
        price: "₹5,000",
        room_type: RoomType::Triple,
        restriction: Restriction::Girls,
        description: "Affordable triple-sharing rooms with study hall and daily cleaning.",
    },
    Seed {
        id: "ror-009",
        title: "Indiranagar Loft",
        location: Location::Indiranagar,
        nearby: Nearby::ManipalHospital,
        price: "₹18,500",
        room_type: RoomType::Single,
        restriction: Restriction::CoLiving,
        description: "Loft-style single room near the metro with rooftop lounge.",
    },
    Seed {
        id: "ror-010",
        title: "Koramangala Comfort Stay",
        location: Location::Koramangala,
        nearby: Nearby::ChristUniversity,
        price: "₹6,500",
        room_type: RoomType::Single,
        restriction: Restriction::Boys,
        description: "Compact single room with breakfast and dinner, walking distance to campus.",
    },
    Seed {
        id: "ror-011",
        title: "Whitefield Family Flat",
        location: Location::Whitefield,
        nearby: Nearby::ItplTechPark,
        price: "₹20,000",
        room_type: RoomType::Double,
        restriction: Restriction::Family,
        description: "Two-room family unit with power backup and a children's play area.",
    },
    Seed {
        id: "ror-012",
        title: "Heritage House",
        location: Location::HsrLayout,
        nearby: Nearby::JainUniversity,
        price: "Price on request",
        room_type: RoomType::Double,
        restriction: Restriction::CoLiving,
        description: "Restored bungalow with shared garden; contact the owner for rent details.",
    },
];

fn standard_listings() -> Vec<Listing> {
    SEEDS
        .iter()
        .map(|seed| Listing {
            id: ListingId::new(seed.id),
            title: seed.title.to_string(),
            location: seed.location,
            nearby: seed.nearby,
            price: seed.price.to_string(),
            room_type: seed.room_type,
            restriction: seed.restriction,
            description: seed.description.to_string(),
            image: format!("/images/listings/{}.jpg", seed.id),
        })
        .collect()
}
