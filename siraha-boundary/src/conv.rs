use super::*;
use c::proximity::{RankedPoint, Ranking};
use e::{address::Address, geo::GeoPoint, store::Store};
use siraha_core as c;
use siraha_entities as e;

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

fn parse_location(latitude: Option<&str>, longitude: Option<&str>) -> Option<GeoPoint> {
    match (latitude, longitude) {
        (Some(lat), Some(lng)) => GeoPoint::parse_lat_lng_deg(lat, lng).ok(),
        _ => None,
    }
}

impl From<StoreRecord> for Store {
    fn from(from: StoreRecord) -> Self {
        let StoreRecord {
            id,
            name,
            street,
            city,
            district,
            province,
            country,
            owner_email,
            latitude,
            longitude,
        } = from;
        let location = parse_location(latitude.as_deref(), longitude.as_deref());
        Self {
            id: id.into(),
            name,
            address: Address {
                street: non_empty(street),
                city: non_empty(city),
                district: non_empty(district),
                province: non_empty(province),
                country: non_empty(country),
            },
            owner_email: non_empty(owner_email),
            location,
        }
    }
}

impl From<Store> for StoreRecord {
    fn from(from: Store) -> Self {
        let Store {
            id,
            name,
            address,
            owner_email,
            location,
        } = from;
        let Address {
            street,
            city,
            district,
            province,
            country,
        } = address;
        Self {
            id: id.into(),
            name,
            street,
            city,
            district,
            province,
            country,
            owner_email,
            latitude: location.map(|pos| pos.lat().to_string()),
            longitude: location.map(|pos| pos.lng().to_string()),
        }
    }
}

impl From<GeoPoint> for Coordinate {
    fn from(from: GeoPoint) -> Self {
        let (lat, lng) = from.to_lat_lng_deg();
        Self { lat, lng }
    }
}

impl From<RankedPoint<Store>> for RankedStore {
    fn from(from: RankedPoint<Store>) -> Self {
        let distance_km = from.distance_km();
        let RankedPoint {
            candidate,
            bearing,
            display_distance,
            ..
        } = from;
        let Store {
            id,
            name,
            address,
            owner_email,
            location,
        } = candidate;
        // Only stores with a location are ranked
        let pos = location.unwrap_or_default();
        Self {
            id: id.into(),
            name,
            address: address.to_line(),
            owner_email,
            lat: pos.lat(),
            lng: pos.lng(),
            distance_km,
            bearing: bearing.to_string(),
            display_distance,
            directions_url: c::directions::directions_url(pos).into(),
        }
    }
}

impl From<(GeoPoint, Ranking<Store>)> for NearbyStores {
    fn from((origin, ranking): (GeoPoint, Ranking<Store>)) -> Self {
        let Ranking { ranked, unlocated } = ranking;
        Self {
            origin: origin.into(),
            stores: ranked.into_iter().map(RankedStore::from).collect(),
            unlocated: unlocated.into_iter().map(|s| s.id.into()).collect(),
        }
    }
}
