//! Marketing landing page.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdAssessment, MdBook, MdEvent, MdSearch};
use dioxus_free_icons::icons::md_navigation_icons::MdArrowForward;
use dioxus_free_icons::icons::md_social_icons::MdGroup;
use dioxus_free_icons::{Icon, IconShape};

use common::directory_query::ExpertQuery;
use common::sample_data::featured_experts;

use crate::components::expert_components::expert_card::ExpertCard;
use crate::routes::Route;


/// Landing page
#[component]
pub fn LandingPage() -> Element {
    rsx! {
        Title { "ExpertiseStation - Expert Guidance & AI Insights" }
        div {
            id: "x-landing-container",
            style: "display: flex; flex-direction: column; width: 100%;",
            HeroSection {}
            FeaturedExpertsSection {}
            FeaturesSection {}
            StatsSection {}
            HowItWorksSection {}
            TestimonialsSection {}
            CallToActionSection {}
        }
    }
}

#[component]
fn SectionHeading(eyebrow: Option<String>, title: String, subtitle: String) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 12px;
                max-width: 720px;
                margin: 0 auto 48px auto;
                text-align: center;
            ",
            if let Some(eyebrow) = eyebrow {
                span { class: "x-eyebrow", "{eyebrow}" }
            }
            h2 {
                style: "font-family: Lexend, sans-serif; font-size: 36px; font-weight: 700; color: #111827;",
                "{title}"
            }
            p { style: "font-size: 18px; color: #4B5563;", "{subtitle}" }
        }
    }
}

#[component]
fn HeroSection() -> Element {
    // (size px, top %, left %, animation delay s)
    let spheres = [80, 120, 150, 100, 70]
        .into_iter()
        .enumerate()
        .map(|(i, size)| (size, 8 + i * 13, 6 + (i * 37) % 80, i))
        .collect::<Vec<_>>();
    rsx! {
        section {
            id: "x-hero",
            class: "x-hero",
            for (size, top, left, delay) in spheres {
                div {
                    key: "{delay}",
                    class: "x-expertise-sphere",
                    style: "
                        width: {size}px;
                        height: {size}px;
                        top: {top}%;
                        left: {left}%;
                        animation-delay: {delay}s;
                    ",
                }
            }
            div {
                class: "x-container x-fade-in",
                style: "
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 24px;
                    max-width: 820px;
                    text-align: center;
                ",
                span { class: "x-eyebrow", "Expert Consultations & AI Business Insights" }
                h1 {
                    style: "font-family: Lexend, sans-serif; font-size: 54px; font-weight: 700; line-height: 1.1; color: #111827;",
                    "Expert Guidance for "
                    span { style: "color: #2563EB;", "Every Decision" }
                }
                p {
                    style: "font-size: 20px; color: #4B5563; max-width: 640px;",
                    "Book one-on-one sessions with vetted specialists and get instant AI-powered insights for your business questions."
                }
                HeroSearchInput {}
            }
        }
    }
}

#[component]
fn HeroSearchInput() -> Element {
    let nav = navigator();
    let mut search_q = use_signal(String::new);
    let go_to_directory = move |_: ()| {
        nav.push(Route::experts_page_from_query(ExpertQuery::from_search_text(search_q.read().clone())));
    };
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 10px;
                width: 100%;
                max-width: 560px;
                padding: 8px 8px 8px 16px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 14px;
                box-shadow: 0 8px 24px rgba(0,0,0,0.08);
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #9CA3AF;" }
            input {
                r#type: "text",
                placeholder: "What expertise are you looking for?",
                style: "flex: 1; border: none; outline: none; background: transparent; font-size: 16px;",
                oninput: move |e| search_q.set(e.value()),
                onkeypress: move |e| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        go_to_directory(());
                    }
                },
            }
            button {
                class: "x-button",
                onclick: move |_| go_to_directory(()),
                "Find Experts"
            }
        }
    }
}

#[component]
fn FeaturedExpertsSection() -> Element {
    let experts = featured_experts();
    rsx! {
        section {
            style: "padding: 80px 0; background: white;",
            div {
                class: "x-container",
                SectionHeading {
                    title: "Featured Experts",
                    subtitle: "Connect with our hand-picked specialists for personalized guidance and solutions.",
                }
                div {
                    class: "x-card-grid",
                    for expert in experts {
                        ExpertCard { key: "{expert.id}", expert: expert.clone() }
                    }
                }
                div {
                    style: "display: flex; justify-content: center; margin-top: 48px;",
                    Link {
                        to: Route::experts_page_from_query(ExpertQuery::default()),
                        class: "x-button x-button-outline x-button-lg",
                        "Explore All Experts"
                        Icon { icon: MdArrowForward, style: "width: 16px; height: 16px; margin-left: 8px;" }
                    }
                }
            }
        }
    }
}

#[component]
fn FeaturesSection() -> Element {
    rsx! {
        section {
            style: "padding: 80px 0; background: #F9FAFB;",
            div {
                class: "x-container",
                SectionHeading {
                    eyebrow: "Why Choose ExpertiseStation".to_string(),
                    title: "Expert Guidance & AI Insights in One Platform",
                    subtitle: "Our unique approach combines human expertise with advanced AI to deliver comprehensive solutions.",
                }
                div {
                    class: "x-card-grid",
                    IconCard {
                        icon: MdEvent,
                        title: "Easy Booking",
                        description: "Schedule sessions with experts in just a few clicks, with flexible time slots to fit your schedule.",
                    }
                    IconCard {
                        icon: MdGroup,
                        title: "Vetted Experts",
                        description: "All our specialists undergo a rigorous verification process to ensure top-tier expertise and quality.",
                    }
                    IconCard {
                        icon: MdAssessment,
                        title: "AI Business Insights",
                        description: "Get instant AI-powered analysis and recommendations for your specific business questions.",
                    }
                }
            }
        }
    }
}

#[component]
fn IconCard<I: IconShape + Clone + PartialEq + 'static>(icon: I, title: String, description: String, step: Option<u32>) -> Element {
    rsx! {
        div {
            style: "
                position: relative;
                display: flex;
                flex-direction: column;
                gap: 12px;
                padding: 28px;
                background: white;
                border: 1px solid #F3F4F6;
                border-radius: 16px;
                box-shadow: 0 2px 10px rgba(0,0,0,0.05);
            ",
            if let Some(step) = step {
                span { class: "x-step-number", "{step}" }
            }
            div {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 48px;
                    height: 48px;
                    border-radius: 12px;
                    background: #EFF6FF;
                    color: #2563EB;
                ",
                Icon { icon: icon, style: "width: 24px; height: 24px;" }
            }
            h3 { style: "font-family: Lexend, sans-serif; font-size: 20px; font-weight: 600;", "{title}" }
            p { style: "color: #4B5563; line-height: 1.6;", "{description}" }
        }
    }
}

#[component]
fn StatsSection() -> Element {
    let stats = [
        ("5,000+", "Active Users"),
        ("500+", "Expert Specialists"),
        ("15,000+", "Sessions Completed"),
        ("98%", "Satisfaction Rate"),
    ];
    rsx! {
        section {
            style: "padding: 80px 0; background: #EFF6FF;",
            div {
                class: "x-container",
                SectionHeading {
                    title: "Transforming Business Decisions",
                    subtitle: "Join thousands of professionals making better decisions with our platform.",
                }
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 32px;",
                    for (number, label) in stats {
                        div {
                            key: "{label}",
                            style: "display: flex; flex-direction: column; align-items: center; gap: 6px;",
                            span { style: "font-family: Lexend, sans-serif; font-size: 40px; font-weight: 700; color: #2563EB;", "{number}" }
                            span { style: "color: #4B5563;", "{label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HowItWorksSection() -> Element {
    rsx! {
        section {
            style: "padding: 80px 0; background: white;",
            div {
                class: "x-container",
                SectionHeading {
                    title: "How ExpertiseStation Works",
                    subtitle: "A simple process to connect with experts and get the insights you need.",
                }
                div {
                    class: "x-card-grid",
                    IconCard {
                        step: 1,
                        icon: MdGroup,
                        title: "Find Your Expert",
                        description: "Browse our curated network of specialists or use our smart matching system to find the perfect fit.",
                    }
                    IconCard {
                        step: 2,
                        icon: MdEvent,
                        title: "Book a Session",
                        description: "Schedule a one-on-one consultation at a time that works for you, with flexible duration options.",
                    }
                    IconCard {
                        step: 3,
                        icon: MdBook,
                        title: "Get Insights & Solutions",
                        description: "Receive personalized guidance and actionable advice to address your specific challenges.",
                    }
                }
            }
        }
    }
}

#[component]
fn TestimonialsSection() -> Element {
    let testimonials = [
        (
            "The marketing expertise I accessed through this platform completely transformed our go-to-market strategy. ROI increased by 37% in just three months.",
            "David Wilson",
            "CEO, TechStart Inc.",
        ),
        (
            "The AI business insights tool saved me countless hours of research and analysis. It highlighted market opportunities I hadn't even considered.",
            "Jennifer Lopez",
            "Founder, Bloom Beauty",
        ),
        (
            "I was struggling with financial forecasting until I connected with an expert through ExpertiseStation. Their guidance was exactly what my business needed.",
            "Marcus Johnson",
            "CFO, Urban Innovations",
        ),
    ];
    rsx! {
        section {
            style: "padding: 80px 0; background: #F9FAFB;",
            div {
                class: "x-container",
                SectionHeading {
                    eyebrow: "Success Stories".to_string(),
                    title: "What Our Users Say",
                    subtitle: "Hear from professionals who have transformed their businesses with ExpertiseStation.",
                }
                div {
                    class: "x-card-grid",
                    for (quote, name, role) in testimonials {
                        div {
                            key: "{name}",
                            style: "
                                display: flex;
                                flex-direction: column;
                                gap: 16px;
                                padding: 28px;
                                background: white;
                                border: 1px solid #F3F4F6;
                                border-radius: 16px;
                            ",
                            p { style: "color: #374151; font-style: italic; line-height: 1.6;", "\"{quote}\"" }
                            div {
                                span { style: "display: block; font-weight: 600;", "{name}" }
                                span { style: "font-size: 14px; color: #6B7280;", "{role}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Buttons are decorative: there is no sign-up flow.
#[component]
fn CallToActionSection() -> Element {
    rsx! {
        section {
            style: "padding: 80px 0; background: #2563EB; color: white;",
            div {
                class: "x-container",
                style: "display: flex; flex-direction: column; align-items: center; gap: 16px; max-width: 720px; text-align: center;",
                h2 { style: "font-family: Lexend, sans-serif; font-size: 36px; font-weight: 700;", "Ready to Elevate Your Business?" }
                p {
                    style: "font-size: 18px; color: #DBEAFE; margin-bottom: 16px;",
                    "Join thousands of professionals making smarter decisions with expert guidance and AI insights."
                }
                div {
                    style: "display: flex; flex-direction: row; flex-wrap: wrap; justify-content: center; gap: 16px;",
                    button { class: "x-button x-button-lg x-button-inverse", "Get Started" }
                    button { class: "x-button x-button-lg x-button-outline-inverse", "Learn More" }
                }
            }
        }
    }
}
