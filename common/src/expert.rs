//! Expert profile records shown in the directory and on the landing page.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expert {
    pub id: String,
    pub name: String,
    pub title: String,
    pub image_url: String,
    /// 0.0 to 5.0
    pub rating: f64,
    pub review_count: u32,
    /// Currency units per hour.
    pub hourly_rate: f64,
    pub expertise: Vec<String>,
    /// Free-text status, e.g. "Available next week".
    pub availability: String,
}

impl Expert {
    /// Classifies the free-text availability status.
    pub fn availability_window(&self) -> Availability {
        Availability::classify(&self.availability)
    }

    /// First `limit` expertise tags, plus how many were left out.
    pub fn visible_expertise(&self, limit: usize) -> (&[String], usize) {
        let shown = self.expertise.len().min(limit);
        (&self.expertise[..shown], self.expertise.len() - shown)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Availability {
    ThisWeek,
    NextWeek,
    Limited,
    Other,
}

impl Availability {
    /// Windows offered as filter checkboxes.
    pub const FILTERABLE: [Availability; 2] = [Availability::ThisWeek, Availability::NextWeek];

    pub fn classify(status: &str) -> Self {
        let status = status.to_lowercase();
        if status.contains("this week") {
            Availability::ThisWeek
        } else if status.contains("next week") {
            Availability::NextWeek
        } else if status.contains("limited") {
            Availability::Limited
        } else {
            Availability::Other
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Availability::ThisWeek => "This Week",
            Availability::NextWeek => "Next Week",
            Availability::Limited => "Limited",
            Availability::Other => "Other",
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn expert_with(expertise: &[&str], availability: &str) -> Expert {
        Expert {
            id: "x".to_string(),
            name: "Test Expert".to_string(),
            title: "Tester".to_string(),
            image_url: String::new(),
            rating: 4.0,
            review_count: 1,
            hourly_rate: 100.0,
            expertise: expertise.iter().map(|s| s.to_string()).collect(),
            availability: availability.to_string(),
        }
    }

    #[test]
    fn classifies_availability_case_insensitively() {
        assert_eq!(Availability::classify("Available this week"), Availability::ThisWeek);
        assert_eq!(Availability::classify("AVAILABLE NEXT WEEK"), Availability::NextWeek);
        assert_eq!(Availability::classify("Limited availability"), Availability::Limited);
        assert_eq!(Availability::classify("On sabbatical"), Availability::Other);
    }

    #[test]
    fn visible_expertise_counts_hidden_tags() {
        let expert = expert_with(&["A", "B", "C", "D", "E"], "");
        let (shown, hidden) = expert.visible_expertise(3);
        assert_eq!(shown, &["A".to_string(), "B".to_string(), "C".to_string()]);
        assert_eq!(hidden, 2);

        let expert = expert_with(&["A"], "");
        let (shown, hidden) = expert.visible_expertise(3);
        assert_eq!(shown.len(), 1);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn availability_window_reads_status_text() {
        let expert = expert_with(&["A"], "Available this week");
        assert_eq!(expert.availability_window(), Availability::ThisWeek);
    }
}
