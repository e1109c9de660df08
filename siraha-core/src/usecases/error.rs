use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid position")]
    InvalidPosition,
    #[error("The location of the store is unknown")]
    UnknownLocation,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
