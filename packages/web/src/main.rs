use dioxus::prelude::*;

use ui::SessionProvider;
use views::{ChecklistDetail, Checklists, Login, Register};

mod guards;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Checklists {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/checklist/:id")]
    ChecklistDetail { id: i64 },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SessionProvider {
            Router::<Route> {}
        }
    }
}
