use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn SuccessBox() -> Element {
    let nav = navigator();

    rsx! {
        div {
            class: "card card-centered success-box",
            h2 { "Application submitted" }
            p { "Thanks for applying. Staff will review your application on Discord." }
            button {
                class: "btn",
                onclick: move |_| {
                    nav.push(Route::Home {});
                },
                "Go home"
            }
        }
    }
}
