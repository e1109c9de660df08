//! Distance and direction based ranking of locations
//! relative to a reference point, e.g. the current
//! position of a user looking for nearby stores.

use std::cmp::Ordering;

use crate::entities::*;

/// Anything that may have a position on the map.
pub trait Located {
    /// `None` if the position is unknown.
    fn location(&self) -> Option<GeoPoint>;
}

impl Located for Store {
    fn location(&self) -> Option<GeoPoint> {
        self.location
    }
}

impl<T: Located> Located for &T {
    fn location(&self) -> Option<GeoPoint> {
        (*self).location()
    }
}

/// A generic point of interest with arbitrary metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<M> {
    pub id: Id,
    pub pos: GeoPoint,
    pub meta: M,
}

impl<M> Located for Candidate<M> {
    fn location(&self) -> Option<GeoPoint> {
        Some(self.pos)
    }
}

/// Great-circle distance in kilometers.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    GeoPoint::distance(a, b).to_km()
}

/// Initial bearing from `a` to `b` in degrees within [0, 360).
pub fn bearing_deg(a: GeoPoint, b: GeoPoint) -> f64 {
    GeoPoint::initial_bearing_deg(a, b)
}

pub fn bearing_compass(a: GeoPoint, b: GeoPoint) -> Compass {
    Compass::from_bearing_deg(bearing_deg(a, b))
}

/// Human readable distance: kilometers with one decimal
/// from 1 km upwards, whole meters below.
pub fn format_distance(km: f64) -> String {
    if km >= 1.0 {
        format!("{km:.1}km")
    } else {
        format!("{:.0}m", (km * 1_000.0).round())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedPoint<T> {
    pub candidate: T,
    pub distance: Distance,
    pub bearing: Compass,
    /// e.g. "350m (NE)" or "4.2km (SW)"
    pub display_distance: String,
}

impl<T> RankedPoint<T> {
    pub fn distance_km(&self) -> f64 {
        self.distance.to_km()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RankedPoint<U> {
        let Self {
            candidate,
            distance,
            bearing,
            display_distance,
        } = self;
        RankedPoint {
            candidate: f(candidate),
            distance,
            bearing,
            display_distance,
        }
    }
}

impl<T: Located> RankedPoint<T> {
    /// Returns the candidate back if it has no valid location.
    pub fn try_new(origin: GeoPoint, candidate: T) -> Result<Self, T> {
        let Some(pos) = candidate.location().filter(|pos| pos.is_valid()) else {
            return Err(candidate);
        };
        let distance = GeoPoint::distance(origin, pos);
        let bearing = bearing_compass(origin, pos);
        let display_distance = format!("{} ({bearing})", format_distance(distance.to_km()));
        Ok(Self {
            candidate,
            distance,
            bearing,
            display_distance,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ranking<T> {
    /// Ordered by ascending distance.
    pub ranked: Vec<RankedPoint<T>>,
    /// Candidates with an unknown location in their original order.
    pub unlocated: Vec<T>,
}

impl<T> Default for Ranking<T> {
    fn default() -> Self {
        Self {
            ranked: Vec::new(),
            unlocated: Vec::new(),
        }
    }
}

impl<T> Ranking<T> {
    pub fn nearest(&self) -> Option<&RankedPoint<T>> {
        self.ranked.first()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty() && self.unlocated.is_empty()
    }

    /// Transforms all candidates while preserving the order.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Ranking<U> {
        let Self { ranked, unlocated } = self;
        Ranking {
            ranked: ranked.into_iter().map(|r| r.map(&mut f)).collect(),
            unlocated: unlocated.into_iter().map(f).collect(),
        }
    }
}

/// Annotates all candidates with their distance and direction
/// from `origin` and orders them by ascending distance.
///
/// The sort is stable, i.e. candidates with equal distances
/// keep their relative order. Candidates without a valid
/// location are not ranked but collected separately.
pub fn rank_by_proximity<T, I>(origin: GeoPoint, candidates: I) -> Ranking<T>
where
    T: Located,
    I: IntoIterator<Item = T>,
{
    if !origin.is_valid() {
        log::warn!("Ranking by proximity to an invalid origin: {origin}");
    }
    let mut ranking =
        candidates
            .into_iter()
            .fold(Ranking::default(), |mut acc, candidate| {
                match RankedPoint::try_new(origin, candidate) {
                    Ok(ranked) => acc.ranked.push(ranked),
                    Err(unlocated) => acc.unlocated.push(unlocated),
                }
                acc
            });
    ranking.ranked.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(Ordering::Equal)
    });
    if !ranking.unlocated.is_empty() {
        log::debug!(
            "{} of {} candidates have an unknown location",
            ranking.unlocated.len(),
            ranking.unlocated.len() + ranking.ranked.len()
        );
    }
    ranking
}
