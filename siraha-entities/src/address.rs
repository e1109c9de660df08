#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub street   : Option<String>,
    pub city     : Option<String>,
    pub district : Option<String>,
    pub province : Option<String>,
    pub country  : Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.street.is_none()
            && self.city.is_none()
            && self.district.is_none()
            && self.province.is_none()
            && self.country.is_none()
    }

    /// Single line representation for popups and list cards,
    /// e.g. "New Road, Kathmandu, Bagmati".
    pub fn to_line(&self) -> String {
        [
            &self.street,
            &self.city,
            &self.district,
            &self.province,
            &self.country,
        ]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}
