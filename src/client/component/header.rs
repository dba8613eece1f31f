use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaDiscord, Icon};

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

#[component]
pub fn Header() -> Element {
    let auth_context = use_context::<AuthContext>();

    let state = auth_context.read();
    let fetch_completed = state.is_resolved();
    let username = state.user().map(|user| user.username.clone());

    rsx!(div {
        class: "header",
        Link {
            to: Route::Home {},
            class: "header-title",
            {SITE_NAME}
        }
        div {
            class: "header-actions",
            if let Some(username) = username {
                p { class: "header-user", "{username}" }
                a {
                    href: "/logout",
                    class: "btn btn-outline",
                    "Logout"
                }
            } else if fetch_completed {
                a {
                    href: "/login",
                    class: "btn btn-outline btn-icon",
                    Icon {
                        width: 22,
                        height: 22,
                        icon: FaDiscord
                    }
                    "Login"
                }
            }
        }
    })
}
