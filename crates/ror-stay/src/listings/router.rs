use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::info;

use super::catalog::ListingCatalog;
use super::domain::{Dimension, ListingId};
use super::filter::{FilterChange, FilterSelection};
use super::page::{ContactError, ContactNotifier, ListingPage, ListingPageError};
use super::views::{ContactPrompt, ListingCard};

/// Folds raw query pairs into a selection in request order.
///
/// Keys accept camelCase or snake_case spellings and anything else is ignored.
/// A repeated dimension keeps its last value; values outside the allowed tables unset it.
pub fn query_selection(pairs: &[(String, String)]) -> FilterSelection {
    pairs
        .iter()
        .filter_map(|(key, raw)| {
            query_dimension(key).map(|dimension| FilterChange::from_raw(dimension, raw))
        })
        .fold(FilterSelection::default(), FilterSelection::with)
}

fn query_dimension(key: &str) -> Option<Dimension> {
    match key {
        "location" => Some(Dimension::Location),
        "nearby" => Some(Dimension::Nearby),
        "priceRange" | "price_range" => Some(Dimension::PriceRange),
        "roomType" | "room_type" => Some(Dimension::RoomType),
        "restriction" => Some(Dimension::Restriction),
        _ => None,
    }
}

/// The HTTP response body is the prompt, so notification only records the event.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseNotifier;

impl ContactNotifier for ResponseNotifier {
    fn notify(&self, prompt: &ContactPrompt) -> Result<(), ContactError> {
        info!(listing = %prompt.listing_id, "contact prompt returned to client");
        Ok(())
    }
}

/// Read-only endpoints over the listing catalog. Every request gets its own page.
pub fn listing_router(catalog: Arc<ListingCatalog>) -> Router {
    Router::new()
        .route("/api/v1/listings", get(search_handler))
        .route("/api/v1/listings/:listing_id", get(listing_handler))
        .route("/api/v1/listings/:listing_id/contact", post(contact_handler))
        .route("/api/v1/filters", get(filters_handler))
        .with_state(catalog)
}

pub(crate) async fn search_handler(
    State(catalog): State<Arc<ListingCatalog>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let page = ListingPage::with_selection(catalog, query_selection(&pairs));
    let view = page.view();
    info!(
        shown = view.count.shown,
        total = view.count.total,
        "listing search served"
    );
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn listing_handler(
    State(catalog): State<Arc<ListingCatalog>>,
    Path(listing_id): Path<String>,
) -> Response {
    let id = ListingId(listing_id);
    match catalog.get(&id) {
        Some(listing) => (StatusCode::OK, Json(ListingCard::from(listing))).into_response(),
        None => not_found(&id),
    }
}

pub(crate) async fn filters_handler(State(catalog): State<Arc<ListingCatalog>>) -> Response {
    (StatusCode::OK, Json(catalog.filter_options())).into_response()
}

pub(crate) async fn contact_handler(
    State(catalog): State<Arc<ListingCatalog>>,
    Path(listing_id): Path<String>,
) -> Response {
    let id = ListingId(listing_id);
    let page = ListingPage::new(catalog);
    match page.contact(&id, &ResponseNotifier) {
        Ok(prompt) => (StatusCode::OK, Json(prompt)).into_response(),
        Err(ListingPageError::UnknownListing(id)) => not_found(&id),
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

fn not_found(id: &ListingId) -> Response {
    let payload = json!({
        "error": format!("listing {id} not found"),
        "listing_id": id.as_str(),
    });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}
