// Low-level data access traits.
// The relational storage of stores lives outside of
// this crate and is only accessed through these traits.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait StoreRepo {
    fn all_stores(&self) -> Result<Vec<Store>>;

    fn get_store(&self, id: &str) -> Result<Store> {
        self.all_stores()?
            .into_iter()
            .find(|s| s.id.as_str() == id)
            .ok_or(Error::NotFound)
    }

    fn count_stores(&self) -> Result<usize> {
        Ok(self.all_stores()?.len())
    }
}
