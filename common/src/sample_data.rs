//! Fixed expert collection and filter categories.

use crate::directory_const::FEATURED_EXPERT_COUNT;
use crate::expert::Expert;


/// Filter categories, in menu order.
pub const CATEGORIES: [&str; 9] = [
    "Business Strategy",
    "Marketing",
    "Finance",
    "Design",
    "Product Management",
    "Leadership",
    "Technology",
    "Sales",
    "Operations",
];

#[allow(clippy::too_many_arguments)]
fn expert(
    id: &str,
    name: &str,
    title: &str,
    image_url: &str,
    rating: f64,
    review_count: u32,
    hourly_rate: f64,
    expertise: [&str; 4],
    availability: &str,
) -> Expert {
    Expert {
        id: id.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        image_url: image_url.to_string(),
        rating,
        review_count,
        hourly_rate,
        expertise: expertise.iter().map(|s| s.to_string()).collect(),
        availability: availability.to_string(),
    }
}

/// The curated directory, in recommended order.
pub fn sample_experts() -> Vec<Expert> {
    vec![
        expert(
            "1",
            "Sarah Johnson",
            "Marketing Strategist",
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&w=774&q=80",
            4.9,
            124,
            120.0,
            ["Digital Marketing", "Brand Strategy", "Growth Hacking", "Social Media"],
            "Available next week",
        ),
        expert(
            "2",
            "Michael Chen",
            "Financial Advisor",
            "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?auto=format&fit=crop&w=1180&q=80",
            4.8,
            98,
            150.0,
            ["Investment Strategy", "Retirement Planning", "Tax Optimization", "Risk Management"],
            "Available this week",
        ),
        expert(
            "3",
            "Priya Patel",
            "UX/UI Designer",
            "https://images.unsplash.com/photo-1580489944761-15a19d654956?auto=format&fit=crop&w=1161&q=80",
            4.7,
            86,
            95.0,
            ["User Research", "Interaction Design", "Prototyping", "Design Systems"],
            "Limited availability",
        ),
        expert(
            "4",
            "James Wilson",
            "Business Strategy Consultant",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&w=1740&q=80",
            4.9,
            157,
            180.0,
            ["Strategic Planning", "Business Development", "Market Analysis", "Competitive Intelligence"],
            "Available next week",
        ),
        expert(
            "5",
            "Elena Rodriguez",
            "Leadership Coach",
            "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&w=776&q=80",
            4.8,
            112,
            135.0,
            ["Executive Coaching", "Team Building", "Leadership Development", "Communication Skills"],
            "Available this week",
        ),
        expert(
            "6",
            "David Thompson",
            "Product Manager",
            "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?auto=format&fit=crop&w=774&q=80",
            4.6,
            78,
            110.0,
            ["Product Strategy", "Agile Methodology", "User Stories", "Roadmapping"],
            "Limited availability",
        ),
    ]
}

/// Experts highlighted on the landing page.
pub fn featured_experts() -> Vec<Expert> {
    sample_experts().into_iter().take(FEATURED_EXPERT_COUNT).collect()
}
