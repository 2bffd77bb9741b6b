use dioxus::prelude::*;

use crate::views::{ProductDetail, ProductList, Unmatched};

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    ProductList {},
    #[route("/products/:id")]
    ProductDetail { id: String },
    #[route("/:..segments")]
    Unmatched { segments: Vec<String> },
}
