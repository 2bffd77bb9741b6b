mod detail;
mod list;

pub use detail::ProductDetail;
pub use list::ProductList;

use dioxus::prelude::*;

/// Paths the app doesn't know about render nothing.
#[allow(unused_variables)]
#[component]
pub fn Unmatched(segments: Vec<String>) -> Element {
    rsx! {}
}
