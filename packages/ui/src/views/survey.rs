//! # Survey views
//!
//! | Component | Shown for |
//! |-----------|-----------|
//! | [`SurveyCreate`] | `GET /survey`, the authoring form. |
//! | [`SurveySuccess`] | `POST /survey`, confirms the generated id. |
//! | [`ViewSurvey`] | `GET /survey/{id}`, injects the stored HTML unescaped. |
//! | [`SubmissionReceived`] | `POST /survey/{id}`, after a response was recorded. |
//! | [`NoSuchSurvey`] | Either `/survey/{id}` method when nothing is stored under the id. |
//! | [`SurveyList`] | `GET /surveys`. |

use dioxus::prelude::*;

use crate::Layout;

#[component]
pub fn SurveyCreate() -> Element {
    rsx! {
        Layout {
            title: "Create a survey",
            p { "Paste the HTML of your survey form. Its fields are posted back to the survey page." }
            form {
                method: "post",
                action: "/survey",
                textarea { name: "survey_form", rows: "16", cols: "64" }
                button { r#type: "submit", "Publish" }
            }
        }
    }
}

#[component]
pub fn SurveySuccess(survey_id: String) -> Element {
    rsx! {
        Layout {
            title: "Survey published",
            p { "Your survey id is {survey_id}." }
            a { href: "/survey/{survey_id}", "Open it" }
        }
    }
}

#[component]
pub fn ViewSurvey(survey_id: String, form: String) -> Element {
    rsx! {
        Layout {
            title: format!("Survey {}", survey_id),
            div {
                id: "survey",
                dangerous_inner_html: "{form}",
            }
        }
    }
}

#[component]
pub fn SubmissionReceived(survey_id: String) -> Element {
    rsx! {
        Layout {
            title: "Thank you",
            p { "Your response to survey {survey_id} was recorded." }
            a { href: "/surveys", "More surveys" }
        }
    }
}

#[component]
pub fn NoSuchSurvey() -> Element {
    rsx! {
        Layout {
            title: "No such survey",
            p { "There is no survey with that id." }
            a { href: "/surveys", "Browse surveys" }
        }
    }
}

#[component]
pub fn SurveyList(surveys: Vec<String>) -> Element {
    rsx! {
        Layout {
            title: "Published surveys",
            if surveys.is_empty() {
                p { "Nothing published yet." }
            }
            ul {
                for id in surveys.iter() {
                    li {
                        key: "{id}",
                        a { href: "/survey/{id}", "{id}" }
                    }
                }
            }
        }
    }
}
