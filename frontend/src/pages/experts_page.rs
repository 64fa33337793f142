//! Expert directory page: search, filters, sort and the result grid.

use dioxus::{logger::tracing, prelude::*};
use gloo_timers::future::TimeoutFuture;

use common::directory_const::DIRECTORY_LOADING_DELAY_MS;
use common::directory_query::{evaluate, ExpertQuery};
use common::expert::Expert;
use common::sample_data::sample_experts;

use crate::components::expert_components::{
    directory_filters::DirectoryFilterPanel, directory_result_list::DirectoryResultList,
    directory_search_bar::DirectorySearchBar,
};
use crate::data_definitions::url_param::UrlParam;
use crate::routes::Route;


fn title_ellipsis(title: &str) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title.to_string()
    }
}

/// Directory state shared with the search bar, filter panel and result list.
#[derive(Clone, Copy)]
pub struct DirectoryState {
    pub query: Signal<ExpertQuery>,
    pub results: Memo<Vec<Expert>>,
    pub is_loading: ReadSignal<bool>,
}

#[component]
pub fn ExpertsPage(query: UrlParam<ExpertQuery>) -> Element {
    let page_title = if query.0.search_text.trim().is_empty() {
        "ExpertiseStation - Find Experts".to_string()
    } else {
        format!("ExpertiseStation: {}", title_ellipsis(query.0.search_text.trim()))
    };
    rsx! {
        Title { "{page_title}" }
        ExpertsPageRootComponent { url_query: query.0.clone() }
    }
}

#[component]
fn ExpertsPageRootComponent(url_query: ReadSignal<ExpertQuery>) -> Element {
    let records = use_signal(sample_experts);
    let mut query = use_signal(|| url_query.read().clone());

    // navigation does not reset signals: follow the url when it changes (back/forward, links)
    use_effect(move || {
        let new_query = url_query.read().clone();
        if *query.peek() != new_query {
            query.set(new_query);
        }
    });
    // mirror local edits into the url so the filtered view can be shared
    use_effect(move || {
        let current = query.read().clone();
        if current != *url_query.peek() {
            tracing::info!("Directory query changed: {:?}", current);
            navigator().replace(Route::experts_page_from_query(current));
        }
    });

    let results = use_memo(move || evaluate(&records.read(), &query.read()));

    let mut is_loading = use_signal(|| true);
    use_future(move || async move {
        TimeoutFuture::new(DIRECTORY_LOADING_DELAY_MS).await;
        is_loading.set(false);
    });

    use_context_provider(move || DirectoryState {
        query,
        results,
        is_loading: is_loading.into(),
    });

    rsx! {
        div {
            id: "x-experts-page-root-component",
            style: "display: flex; flex-direction: column; width: 100%;",

            section {
                id: "x-experts-hero",
                style: "background: #EFF6FF; padding: 56px 0; margin-bottom: 32px;",
                div {
                    class: "x-container x-fade-in",
                    style: "
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 16px;
                        max-width: 720px;
                        text-align: center;
                    ",
                    h1 {
                        style: "font-family: Lexend, sans-serif; font-size: 38px; font-weight: 700; color: #111827;",
                        "Find the Perfect Expert"
                    }
                    p {
                        style: "font-size: 18px; color: #4B5563; margin-bottom: 16px;",
                        "Connect with specialists who can provide the guidance and solutions you need."
                    }
                    DirectorySearchBar {}
                }
            }

            div {
                class: "x-container x-directory-layout",
                style: "margin-bottom: 64px;",
                aside {
                    id: "x-directory-filters",
                    DirectoryFilterPanel {}
                }
                div {
                    id: "x-directory-results",
                    DirectoryResultList {}
                }
            }
        }
    }
}
