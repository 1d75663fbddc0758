use super::catalog::{CatalogError, ListingCatalog};
use super::domain::{
    Categorical, Dimension, Listing, ListingId, Location, Nearby, Restriction, RoomType,
};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read listing catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid listing CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: '{value}' is not an allowed {} value", .dimension.label())]
    UnknownValue {
        row: usize,
        dimension: Dimension,
        value: String,
    },
    #[error("row {row}: listing id is empty")]
    MissingId { row: usize },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Loads a [`ListingCatalog`] from a CSV export.
///
/// Expected header: `ID,Title,Location,Nearby,Price,Room Type,Restriction,Description,Image`.
/// Categorical cells use the display labels (or wire keys); the price cell is kept verbatim.
pub struct CsvCatalogImporter;

impl CsvCatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ListingCatalog, CatalogImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(file)?;
        info!(path = %path.display(), listings = catalog.len(), "listing catalog imported");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ListingCatalog, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut listings = Vec::new();

        for record in csv_reader.records() {
            let record = record?;
            // Line where the record starts; quoted cells may span several lines.
            let row = record
                .position()
                .map_or(listings.len() + 2, |position| position.line() as usize);
            let listing = record
                .deserialize::<ListingRow>(Some(&headers))?
                .into_listing(row)?;
            debug!(id = %listing.id, row, "listing row parsed");
            listings.push(listing);
        }

        Ok(ListingCatalog::new(listings)?)
    }
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Nearby")]
    nearby: String,
    #[serde(rename = "Price", default)]
    price: String,
    #[serde(rename = "Room Type")]
    room_type: String,
    #[serde(rename = "Restriction")]
    restriction: String,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "Image", default)]
    image: String,
}

impl ListingRow {
    fn into_listing(self, row: usize) -> Result<Listing, CatalogImportError> {
        if self.id.is_empty() {
            return Err(CatalogImportError::MissingId { row });
        }

        Ok(Listing {
            location: categorical::<Location>(row, &self.location)?,
            nearby: categorical::<Nearby>(row, &self.nearby)?,
            room_type: categorical::<RoomType>(row, &self.room_type)?,
            restriction: categorical::<Restriction>(row, &self.restriction)?,
            title: if self.title.is_empty() {
                self.id.clone()
            } else {
                self.title
            },
            id: ListingId(self.id),
            price: self.price,
            description: self.description,
            image: self.image,
        })
    }
}

fn categorical<T: Categorical>(row: usize, raw: &str) -> Result<T, CatalogImportError> {
    T::parse(raw).ok_or_else(|| CatalogImportError::UnknownValue {
        row,
        dimension: T::DIMENSION,
        value: raw.to_string(),
    })
}
