use std::process;

mod cli;
mod config;
mod location;
mod store_file;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();
    if let Err(err) = cli::run().await {
        eprintln!("{err:#}");
        process::exit(1);
    }
}
