//! Account and landing views.

use dioxus::prelude::*;

use crate::Layout;

#[component]
pub fn Index(user: String) -> Element {
    rsx! {
        Layout {
            title: "Surveys",
            p { "Logged in as {user}." }
            ul {
                li { a { href: "/survey", "Create a survey" } }
                li { a { href: "/surveys", "Browse published surveys" } }
            }
        }
    }
}

#[component]
pub fn Login() -> Element {
    rsx! {
        Layout {
            title: "Log in",
            form {
                method: "post",
                action: "/login",
                input { r#type: "text", name: "user", placeholder: "Username" }
                input { r#type: "password", name: "password", placeholder: "Password" }
                button { r#type: "submit", "Log in" }
            }
            p {
                "No account yet? "
                a { href: "/signup", "Sign up" }
            }
        }
    }
}

#[component]
pub fn Signup() -> Element {
    rsx! {
        Layout {
            title: "Sign up",
            form {
                method: "post",
                action: "/signup",
                input { r#type: "text", name: "user", placeholder: "Username (letters and digits)" }
                input { r#type: "password", name: "password", placeholder: "Password" }
                input { r#type: "password", name: "confirmp", placeholder: "Confirm password" }
                button { r#type: "submit", "Create account" }
            }
            p {
                "Already registered? "
                a { href: "/login", "Log in" }
            }
        }
    }
}

/// Where every rejected request ends up.
#[component]
pub fn Hacker() -> Element {
    rsx! {
        Layout {
            title: "Nice try",
            p { "That request was not allowed." }
            a { href: "/", "Back to safety" }
        }
    }
}
