mod catalog;
pub mod domain;
mod filter;
mod import;
mod page;
pub mod router;
pub mod views;

pub use catalog::{CatalogError, DimensionOptions, FilterOption, FilterOptions, ListingCatalog};
pub use domain::{
    parse_price, Categorical, Dimension, Listing, ListingId, Location, Nearby, PriceBounds,
    PriceRange, Restriction, RoomType,
};
pub use filter::{filter_listings, FilterChange, FilterSelection};
pub use import::{CatalogImportError, CsvCatalogImporter};
pub use page::{ContactError, ContactNotifier, ListingPage, ListingPageError};
pub use router::{listing_router, query_selection, ResponseNotifier};
pub use views::{ContactPrompt, EmptyState, ListingCard, ListingGridView, ResultCount};
