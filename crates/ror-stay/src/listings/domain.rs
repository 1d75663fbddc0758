use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a listing, unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub String);

impl ListingId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One filterable attribute of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Location,
    Nearby,
    PriceRange,
    RoomType,
    Restriction,
}

impl Dimension {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Location,
            Self::Nearby,
            Self::PriceRange,
            Self::RoomType,
            Self::Restriction,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Location => "Location",
            Self::Nearby => "Nearby",
            Self::PriceRange => "Price Range",
            Self::RoomType => "Room Type",
            Self::Restriction => "Restriction",
        }
    }
}

/// Shared surface of the fixed categorical value sets.
///
/// `label` is the value shown in controls and stored in catalog files;
/// `key` is the snake_case form used on the wire.
pub trait Categorical: Copy + Eq + Sized + 'static {
    const DIMENSION: Dimension;

    fn all() -> &'static [Self];
    fn label(self) -> &'static str;
    fn key(self) -> &'static str;

    /// Exact, case-sensitive lookup by label, falling back to the wire key.
    fn parse(raw: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|value| value.label() == raw)
            .or_else(|| Self::all().iter().copied().find(|value| value.key() == raw))
    }
}

macro_rules! categorical {
    (
        $(#[$meta:meta])*
        $name:ident => $dimension:expr, {
            $($variant:ident => ($key:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl Categorical for $name {
            const DIMENSION: Dimension = $dimension;

            fn all() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

categorical! {
    /// Neighbourhood a listing sits in.
    Location => Dimension::Location, {
        Koramangala => ("koramangala", "Koramangala"),
        HsrLayout => ("hsr_layout", "HSR Layout"),
        Indiranagar => ("indiranagar", "Indiranagar"),
        BtmLayout => ("btm_layout", "BTM Layout"),
        Whitefield => ("whitefield", "Whitefield"),
        ElectronicCity => ("electronic_city", "Electronic City"),
    }
}

categorical! {
    /// Point of interest close to the listing.
    Nearby => Dimension::Nearby, {
        ChristUniversity => ("christ_university", "Christ University"),
        JainUniversity => ("jain_university", "Jain University"),
        ManipalHospital => ("manipal_hospital", "Manipal Hospital"),
        ForumMall => ("forum_mall", "Forum Mall"),
        ItplTechPark => ("itpl_tech_park", "ITPL Tech Park"),
        InfosysCampus => ("infosys_campus", "Infosys Campus"),
    }
}

categorical! {
    RoomType => Dimension::RoomType, {
        Single => ("single", "Single"),
        Double => ("double", "Double"),
        Triple => ("triple", "Triple"),
        Studio => ("studio", "Studio"),
    }
}

categorical! {
    /// Occupancy category a listing is restricted to.
    Restriction => Dimension::Restriction, {
        Boys => ("boys", "Boys"),
        Girls => ("girls", "Girls"),
        CoLiving => ("co_living", "Co-living"),
        Family => ("family", "Family"),
    }
}

categorical! {
    /// Fixed monthly price buckets, in rupees. Bounds come from [`PriceRange::bounds`].
    PriceRange => Dimension::PriceRange, {
        Under5000 => ("under_5000", "Under ₹5,000"),
        From5000To10000 => ("from_5000_to_10000", "₹5,000 – ₹10,000"),
        From10000To15000 => ("from_10000_to_15000", "₹10,000 – ₹15,000"),
        From15000To20000 => ("from_15000_to_20000", "₹15,000 – ₹20,000"),
        Above20000 => ("above_20000", "Above ₹20,000"),
    }
}

/// Interval rule behind a price bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBounds {
    /// `price < limit`
    Under(u64),
    /// `low <= price <= high`
    Between(u64, u64),
    /// `price > limit`
    Above(u64),
}

impl PriceBounds {
    pub const fn contains(self, price: u64) -> bool {
        match self {
            Self::Under(limit) => price < limit,
            Self::Between(low, high) => price >= low && price <= high,
            Self::Above(limit) => price > limit,
        }
    }
}

impl PriceRange {
    pub const fn bounds(self) -> PriceBounds {
        match self {
            Self::Under5000 => PriceBounds::Under(5_000),
            Self::From5000To10000 => PriceBounds::Between(5_000, 10_000),
            Self::From10000To15000 => PriceBounds::Between(10_000, 15_000),
            Self::From15000To20000 => PriceBounds::Between(15_000, 20_000),
            Self::Above20000 => PriceBounds::Above(20_000),
        }
    }

    pub const fn contains(self, price: u64) -> bool {
        self.bounds().contains(price)
    }
}

/// A rentable property record. Created once when the catalog loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub location: Location,
    pub nearby: Nearby,
    /// Monthly rent exactly as displayed, e.g. "₹12,000".
    pub price: String,
    pub room_type: RoomType,
    pub restriction: Restriction,
    pub description: String,
    pub image: String,
}

impl Listing {
    /// Monthly rent as an integer, or `None` when the display string has no digits.
    pub fn monthly_rent(&self) -> Option<u64> {
        parse_price(&self.price)
    }
}

/// Strips currency symbols and separators and reads the remaining digits.
pub fn parse_price(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
