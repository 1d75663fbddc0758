use super::domain::{Categorical, Listing, ListingId, Location, Nearby, Restriction, RoomType};
use super::filter::FilterSelection;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ListingCard {
    pub id: ListingId,
    pub title: String,
    pub location: Location,
    pub location_label: &'static str,
    pub nearby: Nearby,
    pub nearby_label: &'static str,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_rent: Option<u64>,
    pub room_type: RoomType,
    pub room_type_label: &'static str,
    pub restriction: Restriction,
    pub restriction_label: &'static str,
    pub description: String,
    pub image: String,
}

impl From<&Listing> for ListingCard {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id.clone(),
            title: listing.title.clone(),
            location: listing.location,
            location_label: listing.location.label(),
            nearby: listing.nearby,
            nearby_label: listing.nearby.label(),
            price: listing.price.clone(),
            monthly_rent: listing.monthly_rent(),
            room_type: listing.room_type,
            room_type_label: listing.room_type.label(),
            restriction: listing.restriction,
            restriction_label: listing.restriction.label(),
            description: listing.description.clone(),
            image: listing.image.clone(),
        }
    }
}

/// Filtered size against catalog size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultCount {
    pub shown: usize,
    pub total: usize,
}

impl ResultCount {
    pub fn label(&self) -> String {
        format!("Showing {} of {} properties", self.shown, self.total)
    }
}

/// Present only when nothing matches the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: &'static str,
    pub clear_action: &'static str,
}

impl EmptyState {
    pub const fn no_results() -> Self {
        Self {
            message: "No properties match your filters.",
            clear_action: "Clear all filters",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingGridView {
    pub selection: FilterSelection,
    pub listings: Vec<ListingCard>,
    pub count: ResultCount,
    pub count_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
}

/// What the contact action surfaces for one listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPrompt {
    pub listing_id: ListingId,
    pub title: String,
    pub description: String,
    pub location: &'static str,
    pub price: String,
}

impl ContactPrompt {
    pub fn for_listing(listing: &Listing) -> Self {
        Self {
            listing_id: listing.id.clone(),
            title: listing.title.clone(),
            description: listing.description.clone(),
            location: listing.location.label(),
            price: listing.price.clone(),
        }
    }

    pub fn message(&self) -> String {
        format!(
            "{}\n{}\nLocation: {}\nPrice: {}",
            self.title, self.description, self.location, self.price
        )
    }
}
