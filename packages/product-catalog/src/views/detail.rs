use dioxus::prelude::*;

use crate::{api::Catalog, model::CURRENCY, state::LoadState};

/// A single product, looked up by the `id` route parameter.
///
/// The lookup reruns whenever `id` changes. Rerunning cancels the previous lookup, so a slow
/// response for an old id can never replace the product for the current one. Each result is
/// tagged with the id it was fetched for; until the result for the current id arrives the view
/// is loading, even if the resource still holds the previous product.
#[component]
pub fn ProductDetail(id: String) -> Element {
    let catalog = use_context::<Catalog>();
    let lookup = use_resource(use_reactive((&id,), move |(id,)| {
        let catalog = catalog.clone();
        async move {
            let result = catalog.product(&id).await;
            (id, result)
        }
    }));

    let lookup = lookup.read();
    let state = match &*lookup {
        Some((fetched_for, result)) if *fetched_for == id => LoadState::from(result),
        _ => LoadState::Pending,
    };

    let product = match state {
        LoadState::Pending => return rsx! { p { class: "status", "Loading..." } },
        LoadState::Failed(_) => {
            return rsx! { p { class: "status error", "Error loading product details!" } }
        }
        LoadState::Ready(None) => return rsx! { p { class: "status", "Product not found!" } },
        LoadState::Ready(Some(product)) => product,
    };

    let image = product.image_src();

    rsx! {
        h1 { class: "page-title", "Product Detail Page" }
        div { class: "product-detail",
            h2 { class: "detail-title", "{product.title}" }
            img { class: "detail-image", src: "{image}", alt: "{product.title}" }
            p {
                strong { "Category:" }
                " {product.category}"
            }
            p {
                strong { "Price:" }
                " {CURRENCY}{product.price}"
            }
            p {
                strong { "MPR:" }
                " {CURRENCY}{product.mpr}"
            }
            p {
                strong { "Bought:" }
                " {product.bought}"
            }
            p {
                strong { "Description:" }
                " {product.description}"
            }
            p {
                strong { "Color:" }
                " {product.color}"
            }
            p {
                strong { "Size:" }
                " {product.size}"
            }
            if let Some(url) = &product.url {
                a {
                    class: "source-link",
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "View original listing"
                }
            }
        }
    }
}
