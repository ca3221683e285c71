use dioxus::prelude::*;

use crate::Layout;

#[component]
pub fn Search() -> Element {
    rsx! {
        Layout {
            title: "Search",
            form {
                method: "post",
                action: "/search",
                input { r#type: "text", name: "q", placeholder: "Search surveys" }
                button { r#type: "submit", "Search" }
            }
        }
    }
}

/// Search is not wired to any index; the query is echoed back.
#[component]
pub fn SearchResults(query: String) -> Element {
    rsx! {
        Layout {
            title: "Search results",
            p { "No results for \"{query}\"." }
            a { href: "/search", "Search again" }
        }
    }
}
