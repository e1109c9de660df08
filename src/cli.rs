use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use siraha_boundary::NearbyStores;
use siraha_core::{
    location::{FixedLocation, LocationRequests},
    proximity::Ranking,
    session::SessionContext,
    usecases,
};
use siraha_entities::{geo::GeoPoint, store::Store};
use std::{path::PathBuf, sync::Arc};

use crate::{config::Config, location::acquire_position, store_file::JsonStoreFile};

#[derive(Parser, Debug)]
#[command(author, version, about = "Find the nearest stores of Siraha Bazaar")]
struct Args {
    /// Configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON file with the store records
    #[arg(long, global = true, value_name = "FILE")]
    stores: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all stores ordered by distance from the current position
    Nearby {
        /// Latitude of the current position in degrees
        #[arg(long, allow_negative_numbers = true, requires = "lng")]
        lat: Option<f64>,
        /// Longitude of the current position in degrees
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lng: Option<f64>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the directions link of a store
    Directions {
        #[arg(value_name = "STORE_ID")]
        store_id: String,
    },
}

pub async fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;

    let repo = match args.stores.or(cfg.stores.data_file) {
        Some(path) => JsonStoreFile::load(path)?,
        None => JsonStoreFile::sample()?,
    };

    // Authentication is handled elsewhere.
    let session = SessionContext::new();

    match args.command {
        Command::Nearby { lat, lng, json } => {
            let provider = match (lat, lng) {
                (Some(lat), Some(lng)) => {
                    let pos = GeoPoint::try_from_lat_lng_deg(lat, lng)
                        .ok_or_else(|| anyhow!("Invalid position ({lat},{lng})"))?;
                    FixedLocation(Some(pos))
                }
                _ => FixedLocation(cfg.location.default_position),
            };
            let requests = Arc::new(LocationRequests::new());
            let origin =
                acquire_position(Arc::new(provider), requests, cfg.location.options).await?;
            let ranking = usecases::nearby_stores(&repo, origin)?
                .map(|store| usecases::export_store(store, session.role()));
            if json {
                let nearby = NearbyStores::from((origin, ranking));
                println!("{}", serde_json::to_string_pretty(&nearby)?);
            } else {
                print_ranking(origin, &ranking);
            }
        }
        Command::Directions { store_id } => {
            let url = usecases::store_directions(&repo, &store_id)?;
            println!("{url}");
        }
    }
    Ok(())
}

fn print_ranking(origin: GeoPoint, ranking: &Ranking<Store>) {
    println!("Stores near {origin}:");
    for (i, r) in ranking.ranked.iter().enumerate() {
        let store = &r.candidate;
        println!("{:>3}. {} [{}]", i + 1, store.name, store.id);
        let address = store.address.to_line();
        if !address.is_empty() {
            println!("     {address}");
        }
        println!("     {}", r.display_distance);
    }
    if !ranking.unlocated.is_empty() {
        println!("Stores without a known location:");
        for store in &ranking.unlocated {
            println!("     {} [{}]", store.name, store.id);
        }
    }
}
