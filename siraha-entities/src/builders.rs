pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{address_builder::*, store_builder::*, user_builder::*};

pub mod store_builder {

    use super::*;
    use crate::{address::*, geo::*, id::*, store::*};

    #[derive(Debug)]
    pub struct StoreBuild {
        store: Store,
    }

    impl StoreBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.store.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.store.name = name.into();
            self
        }
        pub fn address(mut self, address: Address) -> Self {
            self.store.address = address;
            self
        }
        pub fn owner_email(mut self, email: &str) -> Self {
            self.store.owner_email = Some(email.into());
            self
        }
        pub fn pos(mut self, pos: GeoPoint) -> Self {
            self.store.location = Some(pos);
            self
        }
        pub fn lat_lng(self, lat: f64, lng: f64) -> Self {
            self.pos(GeoPoint::from_lat_lng_deg(lat, lng))
        }
        pub fn no_location(mut self) -> Self {
            self.store.location = None;
            self
        }
        pub fn finish(self) -> Store {
            self.store
        }
    }

    impl Builder for Store {
        type Build = StoreBuild;
        fn build() -> StoreBuild {
            StoreBuild {
                store: Store {
                    id: Id::new(),
                    name: "".into(),
                    address: Address::default(),
                    owner_email: None,
                    location: Some(GeoPoint::from_lat_lng_deg(0.0, 0.0)),
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::user::*;

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = email.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    email: "".into(),
                    name: "".into(),
                    role: Role::default(),
                },
            }
        }
    }
}

pub mod address_builder {

    use super::*;
    use crate::address::*;

    #[derive(Debug)]
    pub struct AddressBuild {
        addr: Address,
    }

    impl AddressBuild {
        pub fn street(mut self, x: &str) -> Self {
            self.addr.street = Some(x.into());
            self
        }
        pub fn city(mut self, x: &str) -> Self {
            self.addr.city = Some(x.into());
            self
        }
        pub fn district(mut self, x: &str) -> Self {
            self.addr.district = Some(x.into());
            self
        }
        pub fn province(mut self, x: &str) -> Self {
            self.addr.province = Some(x.into());
            self
        }
        pub fn country(mut self, x: &str) -> Self {
            self.addr.country = Some(x.into());
            self
        }
        pub fn finish(self) -> Address {
            self.addr
        }
    }

    impl Builder for Address {
        type Build = AddressBuild;
        fn build() -> Self::Build {
            AddressBuild {
                addr: Address::default(),
            }
        }
    }

    #[test]
    fn empty_address() {
        assert!(Address::default().is_empty());
        assert!(!Address::build().street("x").finish().is_empty());
        assert!(!Address::build().city("x").finish().is_empty());
        assert!(!Address::build().district("x").finish().is_empty());
        assert!(!Address::build().province("x").finish().is_empty());
        assert!(!Address::build().country("x").finish().is_empty());
    }

    #[test]
    fn address_line() {
        assert_eq!("", Address::default().to_line());
        let addr = Address::build()
            .street("New Road")
            .city(" Kathmandu ")
            .province("")
            .country("Nepal")
            .finish();
        assert_eq!("New Road, Kathmandu, Nepal", addr.to_line());
    }
}
