//! Site footer.

use dioxus::prelude::*;

use common::directory_query::ExpertQuery;

use crate::routes::Route;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            id: "x-footer",
            style: "
                background: #F9FAFB;
                border-top: 1px solid #F3F4F6;
                padding: 56px 0 28px 0;
            ",
            div {
                class: "x-container",
                style: "
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 32px;
                ",
                div {
                    style: "display: flex; flex-direction: column; gap: 12px;",
                    span {
                        style: "font-family: Lexend, sans-serif; font-size: 20px; font-weight: 600;",
                        "ExpertiseStation"
                    }
                    p {
                        style: "color: #4B5563; font-size: 14px; line-height: 1.6;",
                        "Connecting businesses with specialists and AI-powered insights for smarter decisions."
                    }
                }
                FooterColumn {
                    title: "Services",
                    Link { to: Route::experts_page_from_query(ExpertQuery::default()), class: "x-footer-link", "Expert Booking" }
                    Link { to: Route::experts_page_from_query(ExpertQuery::default()), class: "x-footer-link", "Expert Directory" }
                    span { class: "x-footer-link", "AI Business Insights" }
                    span { class: "x-footer-link", "Become an Expert" }
                }
                FooterColumn {
                    title: "Company",
                    span { class: "x-footer-link", "About Us" }
                    span { class: "x-footer-link", "Careers" }
                    span { class: "x-footer-link", "Blog" }
                    span { class: "x-footer-link", "Press" }
                }
                FooterColumn {
                    title: "Contact",
                    span { class: "x-footer-link", "support@expertisestation.com" }
                    span { class: "x-footer-link", "+1 (555) 123-4567" }
                    span { class: "x-footer-link", "123 Innovation Way, San Francisco, CA 94103" }
                }
            }
            div {
                class: "x-container",
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    gap: 12px;
                    margin-top: 40px;
                    padding-top: 20px;
                    border-top: 1px solid #E5E7EB;
                    color: #6B7280;
                    font-size: 13px;
                ",
                span { "© ExpertiseStation. All rights reserved." }
                div {
                    style: "display: flex; flex-direction: row; gap: 20px;",
                    span { "Terms" }
                    span { "Privacy" }
                    span { "Cookies" }
                }
            }
        }
    }
}

#[component]
fn FooterColumn(title: String, children: Element) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 10px;",
            h4 {
                style: "font-size: 15px; font-weight: 600; color: #111827; margin-bottom: 4px;",
                "{title}"
            }
            {children}
        }
    }
}
