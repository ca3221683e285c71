use dioxus::prelude::*;

const STYLE: &str = "body { font-family: sans-serif; margin: 0; } \
.navbar { display: flex; gap: 1rem; padding: 0.75rem 1.5rem; background: #1f2937; } \
.navbar a { color: #f9fafb; text-decoration: none; } \
main { padding: 1.5rem; max-width: 48rem; } \
form { display: flex; flex-direction: column; gap: 0.5rem; max-width: 24rem; }";

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav {
            class: "navbar",
            a { href: "/", "Home" }
            a { href: "/survey", "New survey" }
            a { href: "/surveys", "Surveys" }
            a { href: "/search", "Search" }
        }
    }
}

/// Full HTML document shell shared by every page.
#[component]
pub fn Layout(title: String, children: Element) -> Element {
    rsx! {
        html {
            head {
                meta { charset: "utf-8" }
                title { "{title}" }
                style { "{STYLE}" }
            }
            body {
                Navbar {}
                main {
                    h1 { "{title}" }
                    {children}
                }
            }
        }
    }
}
