//! Expert profile card used on the landing page and in the directory.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdEvent, MdOpenInNew};
use dioxus_free_icons::icons::md_toggle_icons::MdStar;
use dioxus_free_icons::Icon;

use common::directory_const::VISIBLE_EXPERTISE_TAGS;
use common::expert::Expert;

#[component]
pub fn ExpertCard(expert: ReadSignal<Expert>) -> Element {
    let mut is_hovered = use_signal(|| false);
    let Expert {
        name,
        title,
        image_url,
        rating,
        review_count,
        hourly_rate,
        availability,
        ..
    } = expert.read().clone();
    let (card_shadow, card_scale, image_scale) = if is_hovered() {
        ("0 12px 28px rgba(0,0,0,0.14)", "1.02", "1.05")
    } else {
        ("0 2px 10px rgba(0,0,0,0.05)", "1", "1")
    };

    rsx! {
        div {
            class: "x-expert-card",
            style: "
                display: flex;
                flex-direction: column;
                border: 1px solid #F3F4F6;
                border-radius: 16px;
                overflow: hidden;
                background: white;
                box-shadow: {card_shadow};
                transform: scale({card_scale});
                transition: transform 0.3s, box-shadow 0.3s;
            ",
            onmouseenter: move |_| is_hovered.set(true),
            onmouseleave: move |_| is_hovered.set(false),

            // IMAGE WITH RATING AND RATE BADGES
            div {
                style: "position: relative; height: 192px; overflow: hidden;",
                img {
                    src: "{image_url}",
                    alt: "{name}",
                    style: "
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transform: scale({image_scale});
                        transition: transform 0.5s;
                    ",
                }
                div {
                    style: "
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(0,0,0,0.4), transparent);
                    ",
                }
                div {
                    style: "
                        position: absolute;
                        left: 12px;
                        right: 12px;
                        bottom: 12px;
                        display: flex;
                        flex-direction: row;
                        justify-content: space-between;
                        align-items: center;
                    ",
                    div {
                        class: "x-badge",
                        Icon { icon: MdStar, style: "width: 15px; height: 15px; color: #FACC15;" }
                        span { style: "font-size: 14px; font-weight: 500;", "{rating:.1}" }
                        span { style: "font-size: 12px; color: #6B7280;", "({review_count})" }
                    }
                    div {
                        class: "x-badge",
                        span { style: "font-size: 14px; font-weight: 500;", "${hourly_rate}/hr" }
                    }
                }
            }

            // DETAILS
            div {
                style: "display: flex; flex-direction: column; gap: 12px; padding: 16px;",
                div {
                    h3 {
                        style: "font-family: Lexend, sans-serif; font-size: 20px; font-weight: 600; color: #111827;",
                        "{name}"
                    }
                    p { style: "font-size: 14px; color: #4B5563;", "{title}" }
                }
                ExpertiseChips { expert }
                div {
                    style: "display: flex; flex-direction: row; align-items: center; gap: 8px; color: #6B7280; font-size: 14px;",
                    Icon { icon: MdEvent, style: "width: 16px; height: 16px;" }
                    span { "{availability}" }
                }
                // booking is not wired to anything
                div {
                    style: "display: flex; flex-direction: row; gap: 8px;",
                    button { class: "x-button", style: "flex: 1;", "Book Session" }
                    button {
                        class: "x-button x-button-outline x-icon-button",
                        Icon { icon: MdOpenInNew, style: "width: 16px; height: 16px;" }
                    }
                }
            }
        }
    }
}

#[component]
fn ExpertiseChips(expert: ReadSignal<Expert>) -> Element {
    let expert = expert.read();
    let (shown, hidden) = expert.visible_expertise(VISIBLE_EXPERTISE_TAGS);
    let shown = shown.to_vec();
    rsx! {
        div {
            style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 8px;",
            for (i, skill) in shown.into_iter().enumerate() {
                span {
                    key: "{i}-{skill}",
                    class: "x-chip",
                    "{skill}"
                }
            }
            if hidden > 0 {
                span {
                    class: "x-chip x-chip-muted",
                    "+{hidden} more"
                }
            }
        }
    }
}
