use dioxus::logger::tracing::{Level, error, info};
use product_catalog::{App, CatalogConfig};

fn main() {
    dioxus::logger::init(Level::INFO).expect("Failed to initialize logger");

    let config = match CatalogConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };

    info!("Using catalog API at {}", config.api_base);

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}
