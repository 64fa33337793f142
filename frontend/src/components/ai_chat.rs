//! Floating "Business Insights AI" chat widget.
//!
//! Answers come from the [`InsightHandle`] in context after a short artificial delay.
//! The panel owns its transcript, so closing the page discards the conversation.

use std::rc::Rc;

use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::icons::md_communication_icons::MdChat;
use dioxus_free_icons::icons::md_content_icons::MdSend;
use dioxus_free_icons::icons::md_navigation_icons::{MdChevronRight, MdClose};
use dioxus_free_icons::Icon;
use gloo_timers::future::TimeoutFuture;

use common::directory_const::INSIGHT_RESPONSE_DELAY_MS;
use common::insight::{ChatMessage, ChatRole, ChatTranscript, SUGGESTED_QUESTIONS};

use crate::data_definitions::insight_handle::InsightHandle;

#[derive(Clone, Copy)]
struct ChatState {
    transcript: Signal<ChatTranscript>,
    input: Signal<String>,
    is_waiting: Signal<bool>,
    submit: Callback<()>,
}

#[component]
pub fn AiChatWidget() -> Element {
    let insight = use_context::<InsightHandle>();
    let mut is_open = use_signal(|| false);
    let mut transcript = use_signal(ChatTranscript::new);
    let mut input = use_signal(String::new);
    let mut is_waiting = use_signal(|| false);

    let submit = use_callback(move |_: ()| {
        if *is_waiting.peek() {
            return;
        }
        let question = input.peek().clone();
        if !transcript.write().push_user(&question) {
            return;
        }
        tracing::info!("Chat question submitted ({} chars)", question.len());
        input.set(String::new());
        is_waiting.set(true);
        let insight = insight.clone();
        spawn(async move {
            TimeoutFuture::new(INSIGHT_RESPONSE_DELAY_MS).await;
            let answer = insight.generate_insight(&question);
            transcript.write().push_assistant(answer);
            is_waiting.set(false);
        });
    });
    use_context_provider(|| ChatState { transcript, input, is_waiting, submit });

    if !is_open() {
        return rsx! {
            button {
                id: "x-chat-toggle",
                class: "x-chat-toggle",
                "aria-label": "Open AI chat",
                onclick: move |_| is_open.set(true),
                Icon { icon: MdChat, style: "width: 24px; height: 24px;" }
            }
        };
    }

    rsx! {
        div {
            id: "x-chat-panel",
            class: "x-chat-panel x-scale-in",
            // HEADER
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    justify-content: space-between;
                    padding: 16px;
                    background: #EFF6FF;
                    border-bottom: 1px solid #F3F4F6;
                ",
                div {
                    style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
                    div {
                        style: "
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            width: 32px;
                            height: 32px;
                            border-radius: 9999px;
                            background: #2563EB;
                            color: white;
                        ",
                        Icon { icon: MdChat, style: "width: 16px; height: 16px;" }
                    }
                    h3 { style: "font-family: Lexend, sans-serif; font-weight: 600;", "Business Insights AI" }
                }
                button {
                    class: "x-icon-button",
                    "aria-label": "Close AI chat",
                    onclick: move |_| is_open.set(false),
                    Icon { icon: MdClose, style: "width: 20px; height: 20px;" }
                }
            }
            // BODY
            div {
                style: "height: 384px; overflow-y: auto; padding: 16px; background: #F9FAFB;",
                if transcript.read().is_empty() {
                    SuggestedQuestions {}
                } else {
                    ChatMessageList {}
                }
            }
            ChatInputForm {}
        }
    }
}

#[component]
fn SuggestedQuestions() -> Element {
    let mut input = use_context::<ChatState>().input;
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 12px;
                height: 100%;
                text-align: center;
                padding: 0 16px;
            ",
            Icon { icon: MdChat, style: "width: 48px; height: 48px; color: #3B82F6;" }
            h3 { style: "font-family: Lexend, sans-serif; font-size: 18px; font-weight: 600;", "AI Business Insights" }
            p {
                style: "color: #4B5563; margin-bottom: 12px;",
                "Ask me anything about business strategy, market trends, or operational improvements."
            }
            div {
                style: "display: grid; gap: 8px; width: 100%;",
                for question in SUGGESTED_QUESTIONS {
                    button {
                        key: "{question}",
                        class: "x-suggested-question",
                        onclick: move |_| input.set(question.to_string()),
                        span { "{question}" }
                        Icon { icon: MdChevronRight, style: "width: 16px; height: 16px; color: #9CA3AF;" }
                    }
                }
            }
        }
    }
}

#[component]
fn ChatMessageList() -> Element {
    let chat_state = use_context::<ChatState>();
    let messages = chat_state.transcript.read().messages().to_vec();
    let mut end_marker = use_signal(|| None::<Rc<MountedData>>);

    // keep the newest message in view
    use_effect(move || {
        let _ = chat_state.transcript.read().messages().len();
        let _ = chat_state.is_waiting.read();
        if let Some(marker) = end_marker.read().clone() {
            spawn(async move {
                if let Err(e) = marker.scroll_to(ScrollBehavior::Smooth).await {
                    tracing::warn!("Error scrolling chat to bottom: {e:?}");
                }
            });
        }
    });

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 16px;",
            for (i, message) in messages.into_iter().enumerate() {
                ChatBubble { key: "{i}", message }
            }
            if *chat_state.is_waiting.read() {
                TypingIndicator {}
            }
            div {
                onmounted: move |e: MountedEvent| end_marker.set(Some(e.data())),
            }
        }
    }
}

#[component]
fn ChatBubble(message: ChatMessage) -> Element {
    let is_user = message.role == ChatRole::User;
    let justify = if is_user { "flex-end" } else { "flex-start" };
    let bubble_class = if is_user { "x-chat-bubble x-chat-bubble-user" } else { "x-chat-bubble x-chat-bubble-assistant" };
    let author = if is_user { "You" } else { "AI Assistant" };
    rsx! {
        div {
            style: "display: flex; flex-direction: row; justify-content: {justify};",
            div {
                class: "{bubble_class}",
                span { style: "display: block; font-size: 12px; opacity: 0.75; margin-bottom: 4px;", "{author}" }
                p { style: "font-size: 14px; white-space: pre-wrap;", "{message.content}" }
            }
        }
    }
}

#[component]
fn TypingIndicator() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: row; justify-content: flex-start;",
            div {
                class: "x-chat-bubble x-chat-bubble-assistant",
                style: "display: flex; flex-direction: row; gap: 8px;",
                div { class: "x-typing-dot", style: "animation-delay: 0ms;" }
                div { class: "x-typing-dot", style: "animation-delay: 150ms;" }
                div { class: "x-typing-dot", style: "animation-delay: 300ms;" }
            }
        }
    }
}

#[component]
fn ChatInputForm() -> Element {
    let ChatState { mut input, is_waiting, submit, .. } = use_context::<ChatState>();
    let can_send = use_memo(move || !input.read().trim().is_empty() && !*is_waiting.read());

    rsx! {
        form {
            style: "padding: 12px; border-top: 1px solid #F3F4F6;",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                submit(());
            },
            div {
                style: "position: relative;",
                textarea {
                    class: "x-chat-input",
                    placeholder: "Ask for business insights...",
                    value: "{input}",
                    oninput: move |event: Event<FormData>| input.set(event.value()),
                    onkeydown: move |event: Event<KeyboardData>| {
                        // Shift+Enter keeps the newline
                        if event.key() == Key::Enter && !event.modifiers().contains(Modifiers::SHIFT) {
                            event.prevent_default();
                            submit(());
                        }
                    },
                }
                button {
                    r#type: "submit",
                    class: "x-button x-icon-button",
                    style: "position: absolute; right: 8px; bottom: 8px;",
                    disabled: !can_send(),
                    Icon { icon: MdSend, style: "width: 16px; height: 16px;" }
                }
            }
        }
    }
}
