use super::prelude::*;
use crate::repositories::Error as RepoError;
use std::cell::RefCell;

#[derive(Default)]
pub struct MockDb {
    pub stores: RefCell<Vec<Store>>,
}

impl StoreRepo for MockDb {
    fn all_stores(&self) -> std::result::Result<Vec<Store>, RepoError> {
        Ok(self.stores.borrow().clone())
    }
}
