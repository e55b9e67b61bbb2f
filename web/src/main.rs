use dioxus::prelude::*;

use ui::views::LandingPage;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // `launch` installs the tracing subscriber used by the `ui` crate.
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Title { "Launchpad" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        LandingPage {}
    }
}
