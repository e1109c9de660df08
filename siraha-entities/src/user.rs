use num_derive::{FromPrimitive, ToPrimitive};
use strum::{Display, EnumString};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email : String,
    pub name  : String,
    pub role  : Role,
}

/// Roles are ordered by privilege, each role
/// includes the privileges of the lower ones.
#[rustfmt::skip]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
    FromPrimitive, ToPrimitive, Display, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Role {
    #[default]
    Guest      = 0,
    Customer   = 1,
    StoreOwner = 2,
    Admin      = 3,
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{FromPrimitive, ToPrimitive};

    #[test]
    fn role_order() {
        assert!(Role::Guest < Role::Customer);
        assert!(Role::Customer < Role::StoreOwner);
        assert!(Role::StoreOwner < Role::Admin);
        assert_eq!(Role::Guest, Role::default());
    }

    #[test]
    fn role_conversions() {
        assert_eq!(Some(Role::StoreOwner), Role::from_u8(2));
        assert_eq!(None, Role::from_u8(4));
        assert_eq!(Some(3), Role::Admin.to_u8());
        assert_eq!("store-owner", Role::StoreOwner.to_string());
        assert_eq!(Ok(Role::Customer), "customer".parse());
    }
}
