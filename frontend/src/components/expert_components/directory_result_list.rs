//! Result header (count and sort) and the expert grid with its empty state.

use dioxus::prelude::*;

use common::directory_const::LOADING_PLACEHOLDER_CARDS;
use common::directory_query::SortKey;

use crate::components::error_boundary::ComponentErrorBoundary;
use crate::components::expert_components::expert_card::ExpertCard;
use crate::components::loading_skeleton::ExpertCardSkeletonGrid;
use crate::pages::experts_page::DirectoryState;

#[component]
pub fn DirectoryResultList() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 24px;",
            DirectoryResultControls {}
            ComponentErrorBoundary {
                DirectoryResultGrid {}
            }
        }
    }
}

#[component]
fn DirectoryResultControls() -> Element {
    let directory_state = use_context::<DirectoryState>();
    let mut query = directory_state.query;
    let hit_count = use_memo(move || directory_state.results.read().len());
    let sort_key = query.read().sort_key;

    rsx! {
        div {
            id: "x-directory-result-controls",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: center;
                justify-content: space-between;
                gap: 16px;
            ",
            p {
                style: "color: #4B5563;",
                "Showing "
                span { style: "font-weight: 600;", "{hit_count}" }
                " experts"
            }
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
                span { style: "font-size: 14px; color: #4B5563;", "Sort by:" }
                select {
                    class: "x-select",
                    value: "{sort_key.as_key()}",
                    onchange: move |event: Event<FormData>| {
                        query.write().sort_key = SortKey::from_key(&event.value());
                    },
                    for key in SortKey::ALL {
                        option {
                            key: "{key.as_key()}",
                            value: "{key.as_key()}",
                            selected: key == sort_key,
                            "{key.label()}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DirectoryResultGrid() -> Element {
    let directory_state = use_context::<DirectoryState>();
    let mut query = directory_state.query;

    if *directory_state.is_loading.read() {
        return rsx! { ExpertCardSkeletonGrid { count: LOADING_PLACEHOLDER_CARDS } };
    }

    let results = directory_state.results.read().clone();
    if results.is_empty() {
        return rsx! {
            div {
                id: "x-directory-empty-state",
                style: "
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 16px;
                    padding: 32px;
                    background: white;
                    border: 1px solid #F3F4F6;
                    border-radius: 16px;
                    text-align: center;
                ",
                p { style: "color: #6B7280;", "No experts match your search criteria." }
                button {
                    class: "x-button x-button-outline",
                    onclick: move |_| query.write().reset(),
                    "Clear Filters"
                }
            }
        };
    }

    rsx! {
        div {
            class: "x-card-grid",
            for expert in results {
                ExpertCard { key: "{expert.id}", expert: expert.clone() }
            }
        }
    }
}
