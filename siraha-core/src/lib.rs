//! # siraha-core
//!
//! Business logic of the Siraha Bazaar store locator.

pub mod authorization;
pub mod directions;
pub mod location;
pub mod proximity;
pub mod repositories;
pub mod session;
pub mod usecases;

pub mod entities {
    pub use siraha_entities::{address::*, compass::*, geo::*, id::*, store::*, time::*, user::*};
}
