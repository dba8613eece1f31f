use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresLoggedIn};
use crate::client::route::{Apply, Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[layout(RequiresLoggedIn)]
            #[route("/apply")]
            Apply {},
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
