use std::rc::Rc;

use common::insight::CannedInsightGenerator;
use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::insight_handle::InsightHandle;
use crate::routes::Route;
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    // swap this for a real model client; the chat widget only sees the trait
    use_context_provider(|| InsightHandle(Rc::new(CannedInsightGenerator::default())));

    rsx! {
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com" }
        document::Link { rel: "stylesheet", href: "https://fonts.googleapis.com/css2?family=Inter:wght@300..700&family=Lexend:wght@500..700&display=swap" }

        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            Router::<Route> {}
        }
    }
}
