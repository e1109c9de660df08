use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, FromRepr};

/// The eight cardinal and intercardinal compass points.
///
/// The declaration order (clockwise, starting at north) is significant:
/// it is used for bucketing bearings.
#[rustfmt::skip]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    AsRefStr, Display, EnumCount, EnumIter, EnumString, FromRepr,
)]
#[repr(u8)]
pub enum Compass {
    N  = 0,
    NE = 1,
    E  = 2,
    SE = 3,
    S  = 4,
    SW = 5,
    W  = 6,
    NW = 7,
}

impl Compass {
    /// Width of the arc covered by each compass point in degrees.
    pub const ARC_DEG: f64 = 360.0 / Self::COUNT as f64;

    /// Selects the compass point whose 45° arc contains the bearing.
    ///
    /// Each point covers the half-open arc centered on its angle, i.e.
    /// north covers [-22.5°, 22.5°) after wrapping around. Any finite
    /// bearing is accepted and wrapped into [0°, 360°). Non-finite
    /// bearings fall back to north.
    pub fn from_bearing_deg(bearing_deg: f64) -> Self {
        if !bearing_deg.is_finite() {
            return Self::N;
        }
        let sector = (bearing_deg.rem_euclid(360.0) / Self::ARC_DEG).round() as usize;
        let index = sector % Self::COUNT;
        debug_assert!(index < Self::COUNT);
        Self::from_repr(index as u8).unwrap_or(Self::N)
    }

    /// The center angle of this compass point in degrees.
    pub fn to_deg(self) -> f64 {
        f64::from(self as u8) * Self::ARC_DEG
    }
}
