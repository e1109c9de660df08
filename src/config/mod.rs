use anyhow::{anyhow, Result};
use siraha_core::location::PositionOptions;
use siraha_entities::geo::GeoPoint;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

pub const DEFAULT_CONFIG_FILE_NAME: &str = "siraha.toml";

const ENV_NAME_STORES_FILE: &str = "SIRAHA_STORES_FILE";

#[derive(Debug)]
pub struct Config {
    pub stores: Stores,
    pub location: Location,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(data_file) = env::var(ENV_NAME_STORES_FILE) {
            cfg.stores.data_file = Some(PathBuf::from(data_file));
        }
        Ok(cfg)
    }
}

#[derive(Debug)]
pub struct Stores {
    /// JSON file with store records.
    pub data_file: Option<PathBuf>,
}

#[derive(Debug)]
pub struct Location {
    pub options: PositionOptions,
    /// Used if no position is passed on the command line.
    pub default_position: Option<GeoPoint>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { stores, location } = from;

        let raw::Stores { data_file } = stores.unwrap_or_default();
        let stores = Stores { data_file };

        let raw::Location {
            timeout,
            maximum_age,
            high_accuracy,
            default_lat,
            default_lng,
        } = location.unwrap_or_default();

        let defaults = PositionOptions::default();
        let options = PositionOptions {
            high_accuracy: high_accuracy.unwrap_or(defaults.high_accuracy),
            timeout: timeout.unwrap_or(defaults.timeout),
            maximum_age: maximum_age.unwrap_or(defaults.maximum_age),
        };
        if options.timeout.is_zero() {
            return Err(anyhow!("The location timeout must not be zero"));
        }

        let default_position = match (default_lat, default_lng) {
            (Some(lat), Some(lng)) => {
                let pos = GeoPoint::try_from_lat_lng_deg(lat, lng).ok_or_else(|| {
                    anyhow!("Invalid default position ({lat},{lng})")
                })?;
                log::info!("Use default position {pos}");
                Some(pos)
            }
            (None, None) => None,
            _ => {
                return Err(anyhow!(
                    "Both 'default-lat' and 'default-lng' have to be configured"
                ));
            }
        };

        let location = Location {
            options,
            default_position,
        };

        Ok(Self { stores, location })
    }
}
