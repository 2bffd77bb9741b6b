use url::Url;

/// The environment variable that overrides the API base url.
pub const API_URL_ENV: &str = "CATALOG_API_URL";

/// The address of a catalog API started locally with its default settings.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/";

/// The base url baked in at compile time, if any. The browser has no process environment, so
/// this is the only way to point a wasm build somewhere else.
const BUILD_API_URL: Option<&str> = std::option_env!("CATALOG_API_URL");

/// Startup configuration for the catalog app.
///
/// Resolved once in `main` and handed to the app as root context.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogConfig {
    /// Always ends in `/` so relative joins keep any path prefix.
    pub api_base: Url,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid catalog API url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("catalog API url {0:?} cannot be used as a base url")]
    NotABase(String),
}

impl CatalogConfig {
    pub fn new(api_base: &str) -> Result<Self, ConfigError> {
        let mut url = Url::parse(api_base).map_err(|source| ConfigError::InvalidUrl {
            url: api_base.to_string(),
            source,
        })?;

        if url.cannot_be_a_base() {
            return Err(ConfigError::NotABase(api_base.to_string()));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self { api_base: url })
    }

    /// Resolve the config from the runtime environment (native targets only), then the build
    /// environment, then the default local address.
    pub fn from_env() -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(url) = std::env::var(API_URL_ENV) {
            return Self::new(&url);
        }

        Self::new(BUILD_API_URL.unwrap_or(DEFAULT_API_URL))
    }
}
