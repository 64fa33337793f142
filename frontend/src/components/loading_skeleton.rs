//! Placeholder cards shown while the directory is loading.

use dioxus::prelude::*;

#[component]
pub fn ExpertCardSkeletonGrid(count: usize) -> Element {
    rsx! {
        div {
            class: "x-card-grid",
            for i in 0..count {
                ExpertCardSkeleton { key: "{i}" }
            }
        }
    }
}

#[component]
fn ExpertCardSkeleton() -> Element {
    rsx! {
        div {
            class: "x-pulse",
            style: "
                border: 1px solid #F3F4F6;
                border-radius: 16px;
                overflow: hidden;
                background: white;
            ",
            div { style: "height: 192px; background: #E5E7EB;" }
            div {
                style: "display: flex; flex-direction: column; gap: 12px; padding: 16px;",
                div { class: "x-skeleton-line", style: "width: 66%; height: 20px;" }
                div { class: "x-skeleton-line", style: "width: 50%;" }
                div {
                    style: "display: flex; flex-direction: row; gap: 8px;",
                    div { class: "x-skeleton-line", style: "width: 25%; height: 24px;" }
                    div { class: "x-skeleton-line", style: "width: 25%; height: 24px;" }
                }
                div { class: "x-skeleton-line", style: "width: 75%;" }
                div { class: "x-skeleton-line", style: "width: 100%; height: 40px;" }
            }
        }
    }
}
