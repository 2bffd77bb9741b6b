use std::{borrow::Cow, fmt::Display};

use serde::{Deserialize, Deserializer, Serialize};

/// The glyph printed in front of every price.
pub const CURRENCY: &str = "₹";

/// A product as served by the catalog API.
///
/// The backend stores most of these columns as nullable text, so the numeric-looking fields are
/// decoded leniently: a JSON number, a string, or `null` are all accepted.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub img_url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: Field,
    #[serde(default, rename = "MPR")]
    pub mpr: Field,
    #[serde(default)]
    pub bought: Field,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: Field,
    #[serde(default)]
    pub size: Field,
    /// The storefront page the backend scraped this product from.
    #[serde(default)]
    pub url: Option<String>,
}

impl Product {
    /// The image source to render on the detail page.
    pub fn image_src(&self) -> Cow<'_, str> {
        normalize_image_url(&self.img_url)
    }
}

/// Turn a protocol-relative url (`//host/a.jpg`) into an `https:` one.
///
/// Anything else is passed through untouched.
pub fn normalize_image_url(url: &str) -> Cow<'_, str> {
    if url.starts_with("//") {
        Cow::Owned(format!("https:{url}"))
    } else {
        Cow::Borrowed(url)
    }
}

/// The identifier of a product. Used as the list key and as the `/products/:id` route parameter.
#[derive(Serialize, PartialEq, Eq, Hash, Clone, Debug, Default)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self(Scalar::deserialize(deserializer)?.into_string()))
    }
}

/// An optional scalar column rendered as plain text. `null` and missing values render as nothing.
#[derive(Serialize, PartialEq, Eq, Clone, Debug, Default)]
#[serde(transparent)]
pub struct Field(String);

impl Field {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<Scalar>::deserialize(deserializer)?;
        Ok(Self(value.map(Scalar::into_string).unwrap_or_default()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Text(text) => text,
            Scalar::Number(number) => number.to_string(),
        }
    }
}
