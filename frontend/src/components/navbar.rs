//! Site layout: top navigation bar, routed page, footer and the floating chat widget.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_navigation_icons::{MdClose, MdMenu};
use dioxus_free_icons::Icon;

use common::directory_query::ExpertQuery;

use crate::components::ai_chat::AiChatWidget;
use crate::components::error_boundary::{ComponentErrorBoundary, GlobalErrorBoundary};
use crate::components::footer::Footer;
use crate::routes::Route;


/// Shared layout for every route.
#[component]
pub fn Navbar() -> Element {
    let mut is_menu_open = use_signal(|| false);

    rsx! {
        div {
            id: "x-site-container",
            style: "
                display: flex;
                flex-direction: column;
                min-height: 100vh;
                width: 100%;
            ",

            header {
                id: "x-nav-header",
                style: "
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: rgba(255,255,255,0.85);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid #F3F4F6;
                ",
                div {
                    class: "x-container",
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        justify-content: space-between;
                        height: 72px;
                    ",
                    NavbarLogo {}
                    nav {
                        class: "x-desktop-only",
                        style: "display: flex; flex-direction: row; gap: 32px;",
                        NavbarLinks {}
                    }
                    div {
                        class: "x-desktop-only",
                        style: "display: flex; flex-direction: row; gap: 12px;",
                        NavbarAccountButtons {}
                    }
                    button {
                        class: "x-mobile-only x-icon-button",
                        onclick: move |_| {
                            let open = *is_menu_open.peek();
                            is_menu_open.set(!open);
                        },
                        if is_menu_open() {
                            Icon { icon: MdClose, style: "width: 24px; height: 24px;" }
                        } else {
                            Icon { icon: MdMenu, style: "width: 24px; height: 24px;" }
                        }
                    }
                }
                if is_menu_open() {
                    nav {
                        class: "x-mobile-only x-container",
                        style: "
                            display: flex;
                            flex-direction: column;
                            gap: 16px;
                            padding-bottom: 20px;
                        ",
                        // any link click navigates away, so close the menu
                        onclick: move |_| is_menu_open.set(false),
                        NavbarLinks {}
                        NavbarAccountButtons {}
                    }
                }
            }

            main {
                id: "x-page-container",
                style: "flex-grow: 1;",
                GlobalErrorBoundary {
                    boundary_name: "Page".to_string(),
                    Outlet::<Route> {}
                }
            }

            Footer {}

            ComponentErrorBoundary {
                AiChatWidget {}
            }
        }
    }
}

#[component]
fn NavbarLogo() -> Element {
    rsx! {
        Link {
            to: Route::LandingPage {},
            style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
            div {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 36px;
                    height: 36px;
                    border-radius: 10px;
                    background: #2563EB;
                    color: white;
                    font-family: Lexend, sans-serif;
                    font-weight: 700;
                ",
                "E"
            }
            span {
                style: "font-family: Lexend, sans-serif; font-size: 20px; font-weight: 600; color: #111827;",
                "ExpertiseStation"
            }
        }
    }
}

#[component]
fn NavbarLinks() -> Element {
    let route = use_route::<Route>();
    let on_landing = matches!(route, Route::LandingPage {});
    let on_experts = matches!(route, Route::ExpertsPage { .. });
    rsx! {
        NavLink { to: Route::LandingPage {}, label: "Home", is_active: on_landing }
        NavLink { to: Route::experts_page_from_query(ExpertQuery::default()), label: "Find Experts", is_active: on_experts }
    }
}

#[component]
fn NavLink(to: Route, label: String, is_active: bool) -> Element {
    let color = if is_active { "#2563EB" } else { "#374151" };
    rsx! {
        Link {
            to: to,
            style: "color: {color}; font-size: 15px; font-weight: 500;",
            "{label}"
        }
    }
}

/// Decorative: there is no account system.
#[component]
fn NavbarAccountButtons() -> Element {
    rsx! {
        button { class: "x-button x-button-ghost", "Sign In" }
        button { class: "x-button", "Join Now" }
    }
}
