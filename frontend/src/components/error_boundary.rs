//! Error boundary components for rendering failures.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("Render failure in boundary {}: {:?}", boundary_name.read(), err);
                rsx! {
                    div {
                        style: "
                            display: flex;
                            flex-direction: column;
                            gap: 16px;
                            max-width: 720px;
                            margin: 120px auto;
                            padding: 24px;
                            border: 1px solid #FCA5A5;
                            border-radius: 16px;
                            background: #FEF2F2;
                        ",
                        h1 {
                            style: "color: #B91C1C; font-size: 36px; font-weight: 600;",
                            "Something went wrong",
                        }
                        p {
                            style: "color: #7F1D1D; font-size: 18px;",
                            "Section: {boundary_name}"
                        }
                        Link {
                            to: Route::LandingPage {},
                            style: "color: #2563EB; font-size: 18px;",
                            "Return to Home Page"
                        }
                        pre {
                            style: "color: #111827; font-size: 13px; text-wrap: auto; max-height: 300px; overflow-y: auto;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            class: "x-button x-button-outline",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            {children}
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 12px;
                padding: 24px;
                border: 1px solid #FCA5A5;
                border-radius: 12px;
                background: white;
            ",
            h3 {
                style: "color: #B91C1C; font-size: 20px; font-weight: 600;",
                "This section failed to load",
            }
            pre {
                style: "color: #7F1D1D; font-size: 12px; text-wrap: auto; max-width: 480px; max-height: 240px; overflow-y: auto;",
                "{error_txt}"
            }
            {children}
        }
    }
}
