use super::catalog::{FilterOptions, ListingCatalog};
use super::domain::{Dimension, Listing, ListingId};
use super::filter::{filter_listings, FilterChange, FilterSelection};
use super::views::{ContactPrompt, EmptyState, ListingCard, ListingGridView, ResultCount};
use std::sync::Arc;
use tracing::{debug, info};

/// Surfaces a contact prompt to the user (modal, notification, terminal).
pub trait ContactNotifier {
    fn notify(&self, prompt: &ContactPrompt) -> Result<(), ContactError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("contact prompt could not be shown: {0}")]
    Display(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ListingPageError {
    #[error("listing {0} not found")]
    UnknownListing(ListingId),
    #[error(transparent)]
    Contact(#[from] ContactError),
}

/// Page-level controller: owns one selection over a shared, immutable catalog.
#[derive(Debug, Clone)]
pub struct ListingPage {
    catalog: Arc<ListingCatalog>,
    selection: FilterSelection,
}

impl ListingPage {
    pub fn new(catalog: Arc<ListingCatalog>) -> Self {
        Self {
            catalog,
            selection: FilterSelection::default(),
        }
    }

    pub fn with_selection(catalog: Arc<ListingCatalog>, selection: FilterSelection) -> Self {
        let mut page = Self::new(catalog);
        page.selection = selection;
        page
    }

    pub fn catalog(&self) -> &ListingCatalog {
        &self.catalog
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn filter_options(&self) -> FilterOptions {
        self.catalog.filter_options()
    }

    pub fn apply(&mut self, change: FilterChange) {
        debug!(dimension = ?change.dimension(), unset = change.is_unset(), "filter selection updated");
        self.selection.apply(change);
    }

    /// Sets a dimension from a raw control value; unknown values unset it.
    pub fn select_raw(&mut self, dimension: Dimension, raw: &str) {
        self.apply(FilterChange::from_raw(dimension, raw));
    }

    pub fn clear(&mut self) {
        debug!("filter selection cleared");
        self.selection.clear();
    }

    /// Recomputed from scratch on every call; the dataset is small and static.
    pub fn visible(&self) -> Vec<&Listing> {
        let visible = filter_listings(self.catalog.listings(), &self.selection);
        debug!(
            shown = visible.len(),
            total = self.catalog.len(),
            active = self.selection.active_count(),
            "listing grid recomputed"
        );
        visible
    }

    pub fn count(&self) -> ResultCount {
        ResultCount {
            shown: self.visible().len(),
            total: self.catalog.len(),
        }
    }

    pub fn is_empty_result(&self) -> bool {
        self.visible().is_empty()
    }

    pub fn view(&self) -> ListingGridView {
        let selection = self.selection;
        let total = self.catalog.len();
        let listings: Vec<ListingCard> = self.visible().into_iter().map(ListingCard::from).collect();
        let count = ResultCount {
            shown: listings.len(),
            total,
        };
        let empty_state = listings.is_empty().then(EmptyState::no_results);

        ListingGridView {
            selection,
            count_label: count.label(),
            listings,
            count,
            empty_state,
        }
    }

    /// Hands the listing's description, location and price to `notifier`. Nothing is stored.
    pub fn contact<N: ContactNotifier + ?Sized>(
        &self,
        id: &ListingId,
        notifier: &N,
    ) -> Result<ContactPrompt, ListingPageError> {
        let listing = self
            .catalog
            .get(id)
            .ok_or_else(|| ListingPageError::UnknownListing(id.clone()))?;
        let prompt = ContactPrompt::for_listing(listing);
        notifier.notify(&prompt)?;
        info!(listing = %id, "contact prompt shown");
        Ok(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::domain::{Location, PriceRange, RoomType};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNotifier {
        shown: Mutex<Vec<ContactPrompt>>,
    }

    impl ContactNotifier for RecordingNotifier {
        fn notify(&self, prompt: &ContactPrompt) -> Result<(), ContactError> {
            self.shown
                .lock()
                .expect("notifier mutex poisoned")
                .push(prompt.clone());
            Ok(())
        }
    }

    struct BrokenNotifier;

    impl ContactNotifier for BrokenNotifier {
        fn notify(&self, _prompt: &ContactPrompt) -> Result<(), ContactError> {
            Err(ContactError::Display("modal closed".to_string()))
        }
    }

    fn page() -> ListingPage {
        ListingPage::new(Arc::new(ListingCatalog::standard()))
    }

    fn visible_ids(page: &ListingPage) -> Vec<String> {
        page.visible()
            .iter()
            .map(|listing| listing.id.0.clone())
            .collect()
    }

    #[test]
    fn new_page_shows_full_catalog() {
        let page = page();
        let count = page.count();
        assert_eq!(count.shown, count.total);
        assert_eq!(count.total, page.catalog().len());
        assert!(!page.is_empty_result());
        assert!(page.view().empty_state.is_none());
    }

    #[test]
    fn updates_narrow_and_clear_restores() {
        let mut page = page();
        let everything = visible_ids(&page);

        page.apply(FilterChange::Location(Some(Location::Koramangala)));
        page.apply(FilterChange::RoomType(Some(RoomType::Single)));
        assert_eq!(visible_ids(&page), vec!["ror-002", "ror-010"]);

        page.apply(FilterChange::PriceRange(Some(PriceRange::Under5000)));
        assert!(page.is_empty_result());
        let view = page.view();
        assert_eq!(view.empty_state, Some(EmptyState::no_results()));
        assert_eq!(view.count, ResultCount { shown: 0, total: 12 });
        assert_eq!(view.count_label, "Showing 0 of 12 properties");

        page.clear();
        assert!(page.selection().is_unset());
        assert_eq!(visible_ids(&page), everything);
    }

    #[test]
    fn select_raw_ignores_values_outside_the_table() {
        let mut page = page();
        page.select_raw(Dimension::Location, "Whitefield");
        assert_eq!(visible_ids(&page), vec!["ror-005", "ror-011"]);

        page.select_raw(Dimension::Location, "whitefield ");
        assert_eq!(page.selection().location, Some(Location::Whitefield));

        page.select_raw(Dimension::Location, "WHITEFIELD");
        assert!(page.selection().location.is_none());
        assert_eq!(page.count().shown, 12);
    }

    #[test]
    fn contact_surfaces_listing_details() {
        let page = page();
        let notifier = RecordingNotifier::default();

        let prompt = page
            .contact(&ListingId::new("ror-006"), &notifier)
            .expect("contact succeeds");
        assert_eq!(prompt.location, "Indiranagar");
        assert_eq!(prompt.price, "₹9,800");
        assert!(prompt.message().contains("Price: ₹9,800"));

        let shown = notifier.shown.lock().expect("notifier mutex poisoned");
        assert_eq!(shown.as_slice(), &[prompt]);
    }

    #[test]
    fn contact_reports_unknown_listing_and_notifier_failures() {
        let page = page();
        let err = page
            .contact(&ListingId::new("ror-999"), &RecordingNotifier::default())
            .expect_err("unknown listing");
        assert!(matches!(err, ListingPageError::UnknownListing(_)));

        let err = page
            .contact(&ListingId::new("ror-001"), &BrokenNotifier)
            .expect_err("notifier fails");
        assert!(matches!(err, ListingPageError::Contact(_)));
    }

    #[test]
    fn contact_does_not_touch_selection() {
        let mut page = page();
        page.apply(FilterChange::Location(Some(Location::BtmLayout)));
        let before = *page.selection();
        page.contact(&ListingId::new("ror-003"), &RecordingNotifier::default())
            .expect("contact succeeds");
        assert_eq!(*page.selection(), before);
    }
}
