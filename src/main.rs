#[cfg(feature = "web")]
mod client;
mod model;

#[cfg(feature = "server")]
mod server;

fn main() {
    #[cfg(feature = "server")]
    server::startup::run();

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(client::App);
}
