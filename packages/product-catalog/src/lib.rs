//! A small storefront front-end: a grid of every product in the catalog and a detail page per
//! product, both fed by a remote REST API.
//!
//! The app reads its data through a [`Catalog`] found in context. [`App`] builds one from the
//! [`CatalogConfig`] it is launched with; tests provide their own.

use dioxus::prelude::*;

pub mod api;
pub mod config;
pub mod model;
mod route;
mod state;
pub mod views;

pub use api::{Catalog, FetchError, HttpCatalog, ProductSource};
pub use config::{CatalogConfig, ConfigError};
pub use model::{Field, Product, ProductId};
pub use route::Route;
pub use state::LoadState;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// The app root. Expects a [`CatalogConfig`] in root context.
#[component]
pub fn App() -> Element {
    let config = use_context::<CatalogConfig>();
    use_context_provider(|| Catalog::http(&config));

    rsx! {
        Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
