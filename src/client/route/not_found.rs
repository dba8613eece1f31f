use dioxus::prelude::*;

use crate::client::{component::page::ErrorPage, constant::SITE_NAME};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
        Title { "Not Found | {SITE_NAME}" }
        ErrorPage { status: 404, message: "Page not found".to_string() }
    }
}
