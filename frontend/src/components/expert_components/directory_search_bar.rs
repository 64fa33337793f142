use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::pages::experts_page::DirectoryState;

/// Free-text search box; every keystroke re-runs the directory query.
#[component]
pub fn DirectorySearchBar() -> Element {
    let mut query = use_context::<DirectoryState>().query;
    let search_oninput = move |event: Event<FormData>| {
        query.write().search_text = event.value();
    };
    rsx! {
        div {
            id: "x-directory-search-box",
            style: "
                display: flex;
                align-items: center;
                gap: 10px;
                width: 100%;
                max-width: 560px;
                height: 48px;
                padding: 0 14px;
                border: 1px solid #D1D5DB;
                border-radius: 10px;
                background: white;
            ",
            input {
                r#type: "text",
                placeholder: "Search by name, expertise, or role...",
                style: "
                    flex: 1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 16px;
                ",
                value: "{query.read().search_text}",
                oninput: search_oninput,
            }
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #9CA3AF;" }
        }
    }
}
