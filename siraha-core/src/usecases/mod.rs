mod error;
mod export_store;
mod nearby_stores;
mod store_directions;

#[cfg(test)]
pub mod tests;

pub use self::{error::Error, export_store::*, nearby_stores::*, store_directions::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
