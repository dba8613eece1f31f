mod form;
mod success;

use dioxus::prelude::*;

use crate::{
    client::{
        api::application::get_questions,
        component::{
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        model::auth::AuthContext,
    },
    model::application::validate_character_name,
};

use form::ApplicationForm;
use success::SuccessBox;

/// Application page: draws a fresh set of questions on every visit.
#[component]
pub fn Apply() -> Element {
    let auth_context = use_context::<AuthContext>();
    let questions = use_resource(get_questions);
    let mut submitted = use_signal(|| false);

    let user = auth_context.read().user().cloned();

    rsx! {
        Title { "Apply | {SITE_NAME}" }
        if submitted() {
            Page {
                class: "page-centered",
                SuccessBox {}
            }
        } else {
            match (&*questions.read(), user) {
                (Some(Ok(questions)), Some(user)) => rsx! {
                    Page {
                        class: "page-narrow",
                        ApplicationForm {
                            questions: questions.clone(),
                            user,
                            validate: move |name: String| validate_character_name(&name),
                            on_submitted: move |_| submitted.set(true),
                        }
                    }
                },
                (Some(Err(e)), _) => rsx! {
                    ErrorPage { status: e.status, message: e.message.clone() }
                },
                _ => rsx! {
                    LoadingPage {}
                },
            }
        }
    }
}
