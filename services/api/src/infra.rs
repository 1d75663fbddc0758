use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use ror_stay::error::AppError;
use ror_stay::listings::{
    ContactError, ContactNotifier, ContactPrompt, CsvCatalogImporter, ListingCatalog,
};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) started_at: DateTime<Utc>,
    pub(crate) listings: usize,
}

/// Loads the catalog from `csv` when given, otherwise the built-in dataset.
pub(crate) fn load_catalog(csv: Option<PathBuf>) -> Result<Arc<ListingCatalog>, AppError> {
    let catalog = match csv {
        Some(path) => CsvCatalogImporter::from_path(path)?,
        None => {
            let catalog = ListingCatalog::standard();
            info!(listings = catalog.len(), "using built-in listing catalog");
            catalog
        }
    };
    Ok(Arc::new(catalog))
}

/// Prints the prompt the way the landing page modal would show it.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TerminalNotifier;

impl ContactNotifier for TerminalNotifier {
    fn notify(&self, prompt: &ContactPrompt) -> Result<(), ContactError> {
        println!("\nContact owner");
        for line in prompt.message().lines() {
            println!("  {line}");
        }
        Ok(())
    }
}
