use crate::infra::{load_catalog, TerminalNotifier};
use clap::Args;
use ror_stay::config::AppConfig;
use ror_stay::error::AppError;
use ror_stay::listings::{
    Dimension, FilterChange, ListingCatalog, ListingGridView, ListingId, ListingPage, Location,
    PriceRange, RoomType,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// Location label or key (e.g. "Koramangala" or "hsr_layout")
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Nearby point of interest label or key
    #[arg(long)]
    pub(crate) nearby: Option<String>,
    /// Price bucket label or key (e.g. "under_5000")
    #[arg(long)]
    pub(crate) price_range: Option<String>,
    /// Room type label or key
    #[arg(long)]
    pub(crate) room_type: Option<String>,
    /// Restriction label or key
    #[arg(long)]
    pub(crate) restriction: Option<String>,
    /// Listing catalog CSV (defaults to LISTINGS_CSV or the built-in dataset)
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Print the grid as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct OptionsArgs {
    /// Listing catalog CSV (defaults to LISTINGS_CSV or the built-in dataset)
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Print the options as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ContactArgs {
    /// Listing identifier
    pub(crate) listing_id: String,
    /// Listing catalog CSV (defaults to LISTINGS_CSV or the built-in dataset)
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Listing catalog CSV (defaults to LISTINGS_CSV or the built-in dataset)
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

pub(crate) fn run_listing_search(args: SearchArgs) -> Result<(), AppError> {
    let catalog = catalog_for(args.csv.clone())?;
    let page = search_page(catalog, &args);
    let view = page.view();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render_listing_grid(&view);
    }

    Ok(())
}

pub(crate) fn run_listing_options(args: OptionsArgs) -> Result<(), AppError> {
    let options = catalog_for(args.csv)?.filter_options();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    for group in options.grouped() {
        println!("{}", group.label);
        for option in group.options {
            println!("- {} ({})", option.label, option.key);
        }
    }

    Ok(())
}

pub(crate) fn run_contact(args: ContactArgs) -> Result<(), AppError> {
    let catalog = catalog_for(args.csv)?;
    let page = ListingPage::new(catalog);
    page.contact(&ListingId(args.listing_id), &TerminalNotifier)?;
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let catalog = catalog_for(args.csv)?;
    let mut page = ListingPage::new(catalog);

    println!("ROR STAY landing page demo");
    render_listing_grid(&page.view());

    println!("\n> Location: Koramangala");
    page.apply(FilterChange::Location(Some(Location::Koramangala)));
    render_listing_grid(&page.view());

    println!("\n> Room type: Single");
    page.apply(FilterChange::RoomType(Some(RoomType::Single)));
    render_listing_grid(&page.view());

    println!("\n> Price range: Under ₹5,000");
    page.apply(FilterChange::PriceRange(Some(PriceRange::Under5000)));
    render_listing_grid(&page.view());

    println!("\n> Clear all filters");
    page.clear();
    let view = page.view();
    render_listing_grid(&view);

    if let Some(card) = view.listings.first() {
        println!("\n> Contact: {}", card.title);
        page.contact(&card.id, &TerminalNotifier)?;
    }

    Ok(())
}

fn catalog_for(csv: Option<PathBuf>) -> Result<Arc<ListingCatalog>, AppError> {
    let csv = match csv {
        Some(path) => Some(path),
        None => AppConfig::load()?.catalog.csv_path,
    };
    load_catalog(csv)
}

fn search_page(catalog: Arc<ListingCatalog>, args: &SearchArgs) -> ListingPage {
    let mut page = ListingPage::new(catalog);
    let raw_values = [
        (Dimension::Location, &args.location),
        (Dimension::Nearby, &args.nearby),
        (Dimension::PriceRange, &args.price_range),
        (Dimension::RoomType, &args.room_type),
        (Dimension::Restriction, &args.restriction),
    ];

    for (dimension, raw) in raw_values {
        if let Some(raw) = raw {
            page.select_raw(dimension, raw);
        }
    }

    page
}

pub(crate) fn render_listing_grid(view: &ListingGridView) {
    println!("{}", view.count_label);

    if let Some(empty) = &view.empty_state {
        println!("{} [{}]", empty.message, empty.clear_action);
        return;
    }

    for card in &view.listings {
        println!(
            "- {} | {} | {} | near {} | {} | {} | {}",
            card.id,
            card.title,
            card.price,
            card.nearby_label,
            card.location_label,
            card.room_type_label,
            card.restriction_label
        );
    }
}
