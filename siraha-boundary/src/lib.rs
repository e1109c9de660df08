use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// A store as it is kept by the data layer.
///
/// Coordinates are stored as text and may be
/// empty, missing or otherwise invalid.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct StoreRecord {
    pub id          : String,
    pub name        : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street      : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city        : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district    : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province    : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country     : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_email : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude    : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude   : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// A store together with its distance and
/// direction from the current position.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct RankedStore {
    pub id               : String,
    pub name             : String,
    pub address          : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_email      : Option<String>,
    pub lat              : f64,
    pub lng              : f64,
    pub distance_km      : f64,
    pub bearing          : String,
    pub display_distance : String,
    pub directions_url   : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NearbyStores {
    pub origin: Coordinate,
    pub stores: Vec<RankedStore>,
    /// Ids of stores with an unknown location.
    pub unlocated: Vec<String>,
}
