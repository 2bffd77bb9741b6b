use dioxus::prelude::*;

use crate::{
    api::Catalog,
    model::{Product, CURRENCY},
    state::LoadState,
    Route,
};

/// Every product in the catalog, one card each, in the order the API returned them.
#[component]
pub fn ProductList() -> Element {
    let catalog = use_context::<Catalog>();
    let products = use_resource(move || {
        let catalog = catalog.clone();
        async move { catalog.products().await }
    });

    let products = products.read();
    let state = LoadState::from(&*products);

    match state {
        LoadState::Pending => rsx! { p { class: "status", "Loading..." } },
        LoadState::Failed(_) => rsx! { p { class: "status error", "Error loading products!" } },
        LoadState::Ready(products) => rsx! {
            section { class: "product-list",
                h1 { class: "page-title", "Product List" }
                div { class: "product-grid",
                    for product in products.iter() {
                        ProductCard { key: "{product.id}", product: product.clone() }
                    }
                }
            }
        },
    }
}

#[component]
fn ProductCard(product: Product) -> Element {
    rsx! {
        article { class: "product-card",
            img { class: "card-image", src: "{product.img_url}", alt: "{product.title}" }
            h2 { class: "card-title", "{product.title}" }
            p {
                span { class: "label", "Category:" }
                " {product.category}"
            }
            p {
                span { class: "label", "Price:" }
                " {CURRENCY}{product.price}"
            }
            p {
                span { class: "label", "Description:" }
                " {product.description}"
            }
            p {
                span { class: "label", "Color:" }
                " {product.color}"
            }
            p {
                span { class: "label size", "Size:" }
                " {product.size}"
            }
            Link {
                class: "details-link",
                to: Route::ProductDetail { id: product.id.to_string() },
                button { "View Details" }
            }
        }
    }
}
