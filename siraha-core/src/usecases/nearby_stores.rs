use super::prelude::*;
use crate::proximity::{rank_by_proximity, Ranking};

pub fn nearby_stores<R>(repo: &R, origin: GeoPoint) -> Result<Ranking<Store>>
where
    R: StoreRepo,
{
    if !origin.is_valid() {
        return Err(Error::InvalidPosition);
    }
    let stores = repo.all_stores()?;
    log::debug!("Ranking {} stores around {origin}", stores.len());
    Ok(rank_by_proximity(origin, stores))
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use siraha_entities::builders::*;

    #[test]
    fn rank_all_stores_from_origin() {
        let db = MockDb::default();
        db.stores.borrow_mut().extend([
            Store::build().id("birgunj").lat_lng(27.0104, 84.8770).finish(),
            Store::build().id("nowhere").no_location().finish(),
            Store::build().id("lalitpur").lat_lng(27.6588, 85.3247).finish(),
        ]);
        let origin = GeoPoint::from_lat_lng_deg(27.7058, 85.3292);
        let ranking = nearby_stores(&db, origin).unwrap();
        let ids: Vec<_> = ranking
            .ranked
            .iter()
            .map(|r| r.candidate.id.as_str())
            .collect();
        assert_eq!(vec!["lalitpur", "birgunj"], ids);
        assert_eq!(1, ranking.unlocated.len());
        assert_eq!("nowhere", ranking.unlocated[0].id.as_str());
    }

    #[test]
    fn reject_invalid_origin() {
        let db = MockDb::default();
        let origin = GeoPoint::from_lat_lng_deg(f64::NAN, 85.3292);
        assert!(matches!(
            nearby_stores(&db, origin),
            Err(Error::InvalidPosition)
        ));
    }

    #[test]
    fn no_stores() {
        let db = MockDb::default();
        let origin = GeoPoint::from_lat_lng_deg(0.0, 0.0);
        assert!(nearby_stores(&db, origin).unwrap().is_empty());
    }
}
