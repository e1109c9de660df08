use std::fmt;

use uuid::Uuid;

/// Store identifier, either a human readable slug
/// like `"kathmandu"` or a generated UUID.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Id(String);

impl Id {
    /// A random id in simple UUID format (32 hex digits).
    pub fn new() -> Self {
        Self(Uuid::new_v4().as_simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Id {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<Id> for String {
    fn from(Id(id): Id) -> Self {
        id
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = Id::new();
        assert_ne!(a, Id::new());
        assert_eq!(32, a.as_str().len());
        assert!(a.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn slug_ids() {
        let id = Id::from("kathmandu");
        assert_eq!("kathmandu", id.to_string());
        assert_eq!("kathmandu", String::from(id));
    }
}
