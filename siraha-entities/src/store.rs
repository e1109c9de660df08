use crate::{address::*, geo::*, id::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    pub id          : Id,
    pub name        : String,
    pub address     : Address,
    pub owner_email : Option<String>,
    /// `None` if the stored coordinates are missing or invalid.
    pub location    : Option<GeoPoint>,
}

impl Store {
    pub fn has_location(&self) -> bool {
        self.location.map(GeoPoint::is_valid).unwrap_or(false)
    }
}
