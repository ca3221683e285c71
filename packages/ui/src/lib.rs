//! This crate contains all server-rendered pages for the workspace.
//!
//! Pages are Dioxus components rendered to a complete HTML document with
//! `dioxus-ssr`. Text is escaped by the renderer; the only raw HTML that reaches
//! the output is a survey body shown by [`views::ViewSurvey`].

use dioxus::dioxus_core::VirtualDom;
use dioxus::prelude::*;

mod navbar;
pub use navbar::{Layout, Navbar};

pub mod views;
use views::*;

/// Every page the server can answer with.
#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    Index { user: String },
    Login,
    Signup,
    Hacker,
    Search,
    SearchResults { query: String },
    SurveyCreate,
    SurveySuccess { survey_id: String },
    ViewSurvey { survey_id: String, form: String },
    SubmissionReceived { survey_id: String },
    NoSuchSurvey,
    SurveyList { surveys: Vec<String> },
}

impl Page {
    /// Render the page to an HTML document.
    pub fn render(self) -> String {
        let mut dom = VirtualDom::new_with_props(PageRoot, PageRootProps { page: self });
        dom.rebuild_in_place();
        format!("<!DOCTYPE html>{}", dioxus_ssr::render(&dom))
    }
}

#[component]
fn PageRoot(page: Page) -> Element {
    match page {
        Page::Index { user } => rsx! { Index { user } },
        Page::Login => rsx! { Login {} },
        Page::Signup => rsx! { Signup {} },
        Page::Hacker => rsx! { Hacker {} },
        Page::Search => rsx! { Search {} },
        Page::SearchResults { query } => rsx! { SearchResults { query } },
        Page::SurveyCreate => rsx! { SurveyCreate {} },
        Page::SurveySuccess { survey_id } => rsx! { SurveySuccess { survey_id } },
        Page::ViewSurvey { survey_id, form } => rsx! { ViewSurvey { survey_id, form } },
        Page::SubmissionReceived { survey_id } => rsx! { SubmissionReceived { survey_id } },
        Page::NoSuchSurvey => rsx! { NoSuchSurvey {} },
        Page::SurveyList { surveys } => rsx! { SurveyList { surveys } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_fields() {
        let html = Page::Login.render();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("name=\"user\""));
        assert!(html.contains("name=\"password\""));
        assert!(html.contains("action=\"/login\""));
    }

    #[test]
    fn test_signup_has_confirmation_field() {
        let html = Page::Signup.render();
        assert!(html.contains("name=\"confirmp\""));
    }

    #[test]
    fn test_view_survey_injects_raw_html() {
        let form = "<form method=\"post\"><input name=\"answer\"></form>";
        let html = Page::ViewSurvey {
            survey_id: "abc".into(),
            form: form.into(),
        }
        .render();
        assert!(html.contains(form));
    }

    #[test]
    fn test_search_results_escape_query() {
        let html = Page::SearchResults {
            query: "<b>bold</b>".into(),
        }
        .render();
        assert!(!html.contains("<b>bold</b>"));
        assert!(html.contains("&lt;b&gt;bold"));
    }

    #[test]
    fn test_survey_list_links_each_id() {
        let html = Page::SurveyList {
            surveys: vec!["one".into(), "two".into()],
        }
        .render();
        assert!(html.contains("href=\"/survey/one\""));
        assert!(html.contains("href=\"/survey/two\""));
    }
}
