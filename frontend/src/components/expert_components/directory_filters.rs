//! Sidebar filters for the expert directory.

use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}};

use common::directory_const::{DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN, PRICE_SLIDER_STEP};
use common::expert::Availability;
use common::sample_data::CATEGORIES;

use crate::pages::experts_page::DirectoryState;

#[component]
pub fn DirectoryFilterPanel() -> Element {
    let mut query = use_context::<DirectoryState>().query;
    rsx! {
        div {
            style: "
                position: sticky;
                top: 96px;
                display: flex;
                flex-direction: column;
                gap: 24px;
                padding: 20px;
                background: white;
                border: 1px solid #F3F4F6;
                border-radius: 16px;
                box-shadow: 0 2px 10px rgba(0,0,0,0.05);
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center; justify-content: space-between;",
                h3 { style: "font-family: Lexend, sans-serif; font-size: 18px; font-weight: 600;", "Filters" }
                button {
                    class: "x-button x-button-ghost",
                    onclick: move |_| query.write().reset(),
                    "Clear All"
                }
            }
            FilterSection {
                title: "Categories",
                div {
                    style: "display: flex; flex-direction: column; gap: 4px; max-height: 192px; overflow-y: auto;",
                    for category in CATEGORIES {
                        CategoryCheckbox { key: "{category}", category: category.to_string() }
                    }
                }
            }
            FilterSection {
                title: "Price Range",
                PriceRangeSliders {}
            }
            FilterSection {
                title: "Availability",
                for availability in Availability::FILTERABLE {
                    AvailabilityCheckbox { key: "{availability:?}", availability }
                }
            }
        }
    }
}

#[component]
fn FilterSection(title: String, children: Element) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 12px;",
            h4 { style: "font-size: 15px; font-weight: 500; color: #111827;", "{title}" }
            {children}
        }
    }
}

#[component]
fn CategoryCheckbox(category: ReadSignal<String>) -> Element {
    let mut query = use_context::<DirectoryState>().query;
    let is_checked = use_memo(move || query.read().selected_categories.contains(&*category.read()));
    rsx! {
        FilterCheckbox {
            label: category(),
            is_checked: is_checked(),
            ontoggle: move |_| query.write().toggle_category(&category.read()),
        }
    }
}

#[component]
fn AvailabilityCheckbox(availability: Availability) -> Element {
    let mut query = use_context::<DirectoryState>().query;
    let is_checked = query.read().availability.contains(&availability);
    rsx! {
        FilterCheckbox {
            label: availability.label().to_string(),
            is_checked,
            ontoggle: move |_| query.write().toggle_availability(availability),
        }
    }
}

#[component]
fn FilterCheckbox(label: String, is_checked: bool, ontoggle: Callback<()>) -> Element {
    rsx! {
        div {
            class: "x-filter-list-item",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                cursor: pointer;
                padding: 2px;
            ",
            onclick: move |_| ontoggle(()),
            if is_checked {
                Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; color: #2563EB; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px; color: #9CA3AF; flex-shrink: 0;" }
            }
            span { style: "font-size: 14px; color: #374151;", "{label}" }
        }
    }
}

/// Two range inputs; each one is clamped by the other so the bounds never cross.
#[component]
fn PriceRangeSliders() -> Element {
    let mut query = use_context::<DirectoryState>().query;
    let price_range = query.read().price_range;

    let set_min = move |event: Event<FormData>| match event.value().parse::<f64>() {
        Ok(value) => {
            let mut query = query.write();
            query.price_range.min = value.min(query.price_range.max);
        }
        Err(e) => tracing::warn!("Ignoring price slider value {:?}: {e}", event.value()),
    };
    let set_max = move |event: Event<FormData>| match event.value().parse::<f64>() {
        Ok(value) => {
            let mut query = query.write();
            query.price_range.max = value.max(query.price_range.min);
        }
        Err(e) => tracing::warn!("Ignoring price slider value {:?}: {e}", event.value()),
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px; padding: 0 4px;",
            input {
                r#type: "range",
                class: "x-range",
                "aria-label": "Minimum hourly rate",
                min: "{DEFAULT_PRICE_MIN}",
                max: "{DEFAULT_PRICE_MAX}",
                step: "{PRICE_SLIDER_STEP}",
                value: "{price_range.min}",
                oninput: set_min,
            }
            input {
                r#type: "range",
                class: "x-range",
                "aria-label": "Maximum hourly rate",
                min: "{DEFAULT_PRICE_MIN}",
                max: "{DEFAULT_PRICE_MAX}",
                step: "{PRICE_SLIDER_STEP}",
                value: "{price_range.max}",
                oninput: set_max,
            }
            div {
                style: "display: flex; flex-direction: row; justify-content: space-between; font-size: 14px; color: #6B7280;",
                span { "${price_range.min}" }
                span { "${price_range.max}+" }
            }
        }
    }
}
