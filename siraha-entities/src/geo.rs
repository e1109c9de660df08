use std::{fmt, ops::RangeInclusive, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

const LAT_DEG_RANGE: RangeInclusive<f64> = -90.0..=90.0;
const LNG_DEG_RANGE: RangeInclusive<f64> = -180.0..=180.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("Invalid latitude '{0}'")]
    Latitude(String),
    #[error("Invalid longitude '{0}'")]
    Longitude(String),
    #[error("Latitude degrees out of range: {0}")]
    LatitudeRange(f64),
    #[error("Longitude degrees out of range: {0}")]
    LongitudeRange(f64),
    #[error("Failed to parse point '{0}'")]
    Format(String),
}

/// A geographical location in decimal degrees.
///
/// NaN coordinates are representable and mark an invalid point.
/// They propagate through all calculations instead of panicking.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        let lat = lat.into();
        let lng = lng.into();
        debug_assert!(lat.is_nan() || LAT_DEG_RANGE.contains(&lat));
        debug_assert!(lng.is_nan() || LNG_DEG_RANGE.contains(&lng));
        Self { lat, lng }
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        let lat = lat.into();
        let lng = lng.into();
        if LAT_DEG_RANGE.contains(&lat) && LNG_DEG_RANGE.contains(&lng) {
            Some(Self { lat, lng })
        } else {
            None
        }
    }

    pub fn parse_lat_lng_deg(lat_deg_str: &str, lng_deg_str: &str) -> Result<Self, ParseError> {
        let lat_deg_str = lat_deg_str.trim();
        let lng_deg_str = lng_deg_str.trim();
        let lat_deg = lat_deg_str
            .parse::<f64>()
            .map_err(|_| ParseError::Latitude(lat_deg_str.to_owned()))?;
        let lng_deg = lng_deg_str
            .parse::<f64>()
            .map_err(|_| ParseError::Longitude(lng_deg_str.to_owned()))?;
        if !LAT_DEG_RANGE.contains(&lat_deg) {
            return Err(ParseError::LatitudeRange(lat_deg));
        }
        if !LNG_DEG_RANGE.contains(&lng_deg) {
            return Err(ParseError::LongitudeRange(lng_deg));
        }
        Ok(Self {
            lat: lat_deg,
            lng: lng_deg,
        })
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        LAT_DEG_RANGE.contains(&self.lat) && LNG_DEG_RANGE.contains(&self.lng)
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lng.to_radians())
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for GeoPoint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((lat_deg_str, lng_deg_str)) = s.split(',').collect_tuple() {
            GeoPoint::parse_lat_lng_deg(lat_deg_str, lng_deg_str)
        } else {
            Err(ParseError::Format(s.to_owned()))
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub fn from_km(km: f64) -> Self {
        Self(km * 1_000.0)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn to_km(self) -> f64 {
        self.0 / 1_000.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

// The Earth's mean radius.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

impl GeoPoint {
    /// Great-circle distance on a spherical earth using the
    /// Haversine formula.
    ///
    /// Reference: <https://en.wikipedia.org/wiki/Haversine_formula>
    pub fn distance(p1: GeoPoint, p2: GeoPoint) -> Distance {
        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let dlat_half_sin = ((lat2_rad - lat1_rad) / 2.0).sin();
        let dlng_half_sin = ((lng2_rad - lng1_rad) / 2.0).sin();

        let a = dlat_half_sin * dlat_half_sin
            + lat1_rad.cos() * lat2_rad.cos() * dlng_half_sin * dlng_half_sin;
        // Rounding may push `a` marginally above 1 for antipodal points.
        // `clamp` keeps NaN.
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance::from_km(EARTH_RADIUS_KM * c)
    }

    /// Initial bearing (forward azimuth) from `from` to `to`
    /// in degrees, normalized to [0, 360).
    pub fn initial_bearing_deg(from: GeoPoint, to: GeoPoint) -> f64 {
        let (lat1_rad, lng1_rad) = from.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = to.to_lat_lng_rad();
        let dlng = lng2_rad - lng1_rad;

        let y = dlng.sin() * lat2_rad.cos();
        let x = lat1_rad.cos() * lat2_rad.sin() - lat1_rad.sin() * lat2_rad.cos() * dlng.cos();

        let deg = y.atan2(x).to_degrees().rem_euclid(360.0);
        // rem_euclid may round up to exactly 360 for tiny negative angles
        if deg >= 360.0 {
            0.0
        } else {
            deg
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn random_geo_point<T: Rng>(rng: &mut T) -> GeoPoint {
        let lat = rng.gen_range(LAT_DEG_RANGE);
        let lng = rng.gen_range(LNG_DEG_RANGE);
        GeoPoint::from_lat_lng_deg(lat, lng)
    }

    #[test]
    fn latitude_and_longitude_ranges() {
        assert!(GeoPoint::from_lat_lng_deg(-90, -180).is_valid());
        assert!(GeoPoint::from_lat_lng_deg(90, 180).is_valid());
        assert_eq!(None, GeoPoint::try_from_lat_lng_deg(-90.000001, 0.0));
        assert_eq!(None, GeoPoint::try_from_lat_lng_deg(90.000001, 0.0));
        assert_eq!(None, GeoPoint::try_from_lat_lng_deg(0.0, -180.000001));
        assert_eq!(None, GeoPoint::try_from_lat_lng_deg(0.0, 180.000001));
        assert_eq!(None, GeoPoint::try_from_lat_lng_deg(f64::NAN, 0.0));
        assert!(!GeoPoint::from_lat_lng_deg(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn parse_from_str() {
        let p: GeoPoint = "27.7058,85.3292".parse().unwrap();
        assert_eq!(p.to_lat_lng_deg(), (27.7058, 85.3292));
        let p: GeoPoint = " 26.4672 , 87.2744 ".parse().unwrap();
        assert_eq!(p.to_lat_lng_deg(), (26.4672, 87.2744));
        assert_eq!(p, p.to_string().parse().unwrap());

        assert_eq!(
            "27.7".parse::<GeoPoint>(),
            Err(ParseError::Format("27.7".into()))
        );
        assert_eq!(
            "x,85.3".parse::<GeoPoint>(),
            Err(ParseError::Latitude("x".into()))
        );
        assert_eq!(
            "27.7,".parse::<GeoPoint>(),
            Err(ParseError::Longitude("".into()))
        );
        assert_eq!(
            "91,85.3".parse::<GeoPoint>(),
            Err(ParseError::LatitudeRange(91.0))
        );
        assert_eq!(
            "27.7,-181".parse::<GeoPoint>(),
            Err(ParseError::LongitudeRange(-181.0))
        );
        assert!("NaN,0".parse::<GeoPoint>().is_err());
    }

    #[test]
    fn no_distance() {
        let p1 = GeoPoint::from_lat_lng_deg(0.0, 0.0);
        assert_eq!(GeoPoint::distance(p1, p1).to_meters(), 0.0);

        let p2 = GeoPoint::from_lat_lng_deg(-25.0, 55.0);
        assert_eq!(GeoPoint::distance(p2, p2).to_meters(), 0.0);

        let p1 = GeoPoint::from_lat_lng_deg(-15.0, -180.0);
        let p2 = GeoPoint::from_lat_lng_deg(-15.0, 180.0);
        assert!(GeoPoint::distance(p1, p2).to_meters() < 0.000001);
    }

    #[test]
    fn real_distance() {
        let stuttgart = GeoPoint::from_lat_lng_deg(48.7755, 9.1827);
        let mannheim = GeoPoint::from_lat_lng_deg(49.4836, 8.4630);
        assert!(GeoPoint::distance(stuttgart, mannheim) > Distance::from_meters(94_000.0));
        assert!(GeoPoint::distance(stuttgart, mannheim) < Distance::from_meters(95_000.0));

        let new_york = GeoPoint::from_lat_lng_deg(40.714268, -74.005974);
        let sidney = GeoPoint::from_lat_lng_deg(-33.867138, 151.207108);
        assert!(GeoPoint::distance(new_york, sidney) > Distance::from_km(15_980.0));
        assert!(GeoPoint::distance(new_york, sidney) < Distance::from_km(16_000.0));
    }

    #[test]
    fn symmetric_distance() {
        let a = GeoPoint::from_lat_lng_deg(80.0, 0.0);
        let b = GeoPoint::from_lat_lng_deg(90.0, 20.0);
        assert_eq!(GeoPoint::distance(a, b), GeoPoint::distance(b, a));
    }

    #[test]
    fn antipodal_distance() {
        let a = GeoPoint::from_lat_lng_deg(0.0, 0.0);
        let b = GeoPoint::from_lat_lng_deg(0.0, 180.0);
        let d = GeoPoint::distance(a, b).to_km();
        assert!((d - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6, "{d}");
    }

    #[test]
    fn nan_longitude_is_not_half_the_globe() {
        let a = GeoPoint::from_lat_lng_deg(10.0, f64::NAN);
        let b = GeoPoint::from_lat_lng_deg(10.0, 20.0);
        let d = GeoPoint::distance(a, b).to_km();
        assert!(d.is_nan(), "{d}");
    }

    #[test]
    fn distance_with_nan_coordinates() {
        let a = GeoPoint::from_lat_lng_deg(f64::NAN, 10.0);
        let b = GeoPoint::from_lat_lng_deg(20.0, 20.0);
        assert!(GeoPoint::distance(a, b).to_meters().is_nan());
        assert!(!GeoPoint::distance(a, b).is_valid());
    }

    #[test]
    fn random_distances_are_positive_and_symmetric() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let p1 = random_geo_point(&mut rng);
            let p2 = random_geo_point(&mut rng);
            let d = GeoPoint::distance(p1, p2);
            assert!(d.is_valid());
            assert!(d.to_km() <= std::f64::consts::PI * EARTH_RADIUS_KM + 0.001);
            assert_eq!(d, GeoPoint::distance(p2, p1));
        }
    }

    #[test]
    fn bearing_of_cardinal_directions() {
        let origin = GeoPoint::from_lat_lng_deg(0.0, 0.0);
        let north = GeoPoint::initial_bearing_deg(origin, GeoPoint::from_lat_lng_deg(1.0, 0.0));
        let east = GeoPoint::initial_bearing_deg(origin, GeoPoint::from_lat_lng_deg(0.0, 1.0));
        let south = GeoPoint::initial_bearing_deg(origin, GeoPoint::from_lat_lng_deg(-1.0, 0.0));
        let west = GeoPoint::initial_bearing_deg(origin, GeoPoint::from_lat_lng_deg(0.0, -1.0));
        assert!(north.abs() < 1e-9);
        assert!((east - 90.0).abs() < 1e-9);
        assert!((south - 180.0).abs() < 1e-9);
        assert!((west - 270.0).abs() < 1e-9);
    }

    #[test]
    fn random_bearings_are_normalized() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let p1 = random_geo_point(&mut rng);
            let p2 = random_geo_point(&mut rng);
            let deg = GeoPoint::initial_bearing_deg(p1, p2);
            assert!((0.0..360.0).contains(&deg), "{deg}");
        }
    }
}
