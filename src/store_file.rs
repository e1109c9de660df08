use anyhow::{Context, Result};
use siraha_boundary::StoreRecord;
use siraha_core::repositories::{Error as RepoError, StoreRepo};
use siraha_entities::store::Store;
use std::{fs, path::Path};

const SAMPLE_STORES: &str = include_str!("sample_stores.json");

/// Read-only store repository backed by a JSON file.
#[derive(Debug, Default)]
pub struct JsonStoreFile {
    stores: Vec<Store>,
}

impl JsonStoreFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading stores from {}", path.display());
        let json = fs::read_to_string(path)
            .with_context(|| format!("Unable to read store file {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Invalid store file {}", path.display()))
    }

    pub fn sample() -> Result<Self> {
        log::info!("No store file configured => use sample stores");
        Self::from_json(SAMPLE_STORES)
    }

    fn from_json(json: &str) -> Result<Self> {
        let records: Vec<StoreRecord> = serde_json::from_str(json)?;
        let stores: Vec<Store> = records.into_iter().map(Store::from).collect();
        for s in stores.iter().filter(|s| !s.has_location()) {
            log::warn!("Store '{}' ({}) has no valid location", s.name, s.id);
        }
        log::debug!("Loaded {} stores", stores.len());
        Ok(Self { stores })
    }
}

impl StoreRepo for JsonStoreFile {
    fn all_stores(&self) -> Result<Vec<Store>, RepoError> {
        Ok(self.stores.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_sample_stores() {
        let file = JsonStoreFile::sample().unwrap();
        assert_eq!(6, file.count_stores().unwrap());
        let siraha = file.get_store("siraha").unwrap();
        assert!(!siraha.has_location());
        let pokhara = file.get_store("pokhara").unwrap();
        assert_eq!("Lakeside, Pokhara, Kaski, Gandaki, Nepal", pokhara.address.to_line());
        assert!(matches!(file.get_store("janakpur"), Err(RepoError::NotFound)));
    }

    #[test]
    fn reject_malformed_json() {
        assert!(JsonStoreFile::from_json("{\"id\":\"x\"}").is_err());
        assert!(JsonStoreFile::from_json("[{\"name\":\"Missing id\"}]").is_err());
    }

    #[test]
    fn missing_file() {
        let err = JsonStoreFile::load("does-not-exist.json").unwrap_err();
        assert!(err.to_string().contains("does-not-exist.json"));
    }
}
