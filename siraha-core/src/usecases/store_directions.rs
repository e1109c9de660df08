use super::prelude::*;
use crate::directions::directions_url;
use url::Url;

pub fn store_directions<R>(repo: &R, id: &str) -> Result<Url>
where
    R: StoreRepo,
{
    let store = repo.get_store(id)?;
    let pos = store
        .location
        .filter(|pos| pos.is_valid())
        .ok_or(Error::UnknownLocation)?;
    Ok(directions_url(pos))
}
