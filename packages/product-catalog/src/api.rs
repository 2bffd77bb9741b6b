//! Access to the remote catalog API.
//!
//! Views never talk to the network directly. They pull a [`Catalog`] out of context and call it,
//! which lets tests swap the HTTP client for an in-memory [`ProductSource`].

use std::{fmt::Debug, rc::Rc};

use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

use crate::{config::CatalogConfig, model::Product};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server answered {0}")]
    Status(StatusCode),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0} cannot be used as a base url")]
    NotABase(Url),
}

/// Something that can look up products.
///
/// Futures on wasm are not `Send`, so neither are these.
#[async_trait(?Send)]
pub trait ProductSource {
    /// Every product, in the order the source returns them.
    async fn products(&self) -> Result<Vec<Product>, FetchError>;

    /// A single product. `Ok(None)` means the source has no product with this id.
    async fn product(&self, id: &str) -> Result<Option<Product>, FetchError>;
}

/// A shared handle to the [`ProductSource`] the views read from. Provided as context by the app
/// root.
#[derive(Clone)]
pub struct Catalog(Rc<dyn ProductSource>);

impl Catalog {
    pub fn new(source: impl ProductSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    /// A catalog backed by the HTTP API described by `config`.
    pub fn http(config: &CatalogConfig) -> Self {
        Self::new(HttpCatalog::new(config))
    }

    pub async fn products(&self) -> Result<Vec<Product>, FetchError> {
        self.0
            .products()
            .await
            .inspect_err(|err| tracing::warn!("Failed to load products: {err}"))
    }

    pub async fn product(&self, id: &str) -> Result<Option<Product>, FetchError> {
        self.0
            .product(id)
            .await
            .inspect_err(|err| tracing::warn!("Failed to load product {id}: {err}"))
    }
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog").finish_non_exhaustive()
    }
}

/// The production [`ProductSource`]: plain GETs against `{base}api/products/`.
#[derive(Clone, Debug)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base: Url,
}

impl HttpCatalog {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: config.api_base.clone(),
        }
    }

    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url, FetchError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::NotABase(self.base.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response, FetchError> {
        tracing::debug!("GET {url}");
        Ok(self.client.get(url).send().await?)
    }
}

#[async_trait(?Send)]
impl ProductSource for HttpCatalog {
    async fn products(&self) -> Result<Vec<Product>, FetchError> {
        let response = self.get(self.endpoint(["api", "products", ""])?).await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn product(&self, id: &str) -> Result<Option<Product>, FetchError> {
        let response = self
            .get(self.endpoint(["api", "products", id, ""])?)
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => return Ok(None),
            status if !status.is_success() => return Err(FetchError::Status(status)),
            _ => {}
        }

        let body = response.bytes().await?;
        decode_product(&body)
    }
}

/// Decode a single-product body. An empty body, `null`, or `{}` all mean "no such product".
fn decode_product(body: &[u8]) -> Result<Option<Product>, FetchError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    match serde_json::from_slice::<serde_json::Value>(body)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Object(map) if map.is_empty() => Ok(None),
        value => Ok(Some(serde_json::from_value(value)?)),
    }
}
