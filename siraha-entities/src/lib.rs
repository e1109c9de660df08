#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # siraha-entities
//!
//! Reusable, agnostic domain entities for Siraha Bazaar.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod compass;
pub mod geo;
pub mod id;
pub mod store;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
