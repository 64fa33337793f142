//! Business insight generation for the chat widget.
//!
//! The widget only talks to [`InsightGenerator`]. The shipped implementation,
//! [`CannedInsightGenerator`], answers from a fixed list; a real model client can
//! implement the same trait without the widget changing.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};


pub const SUGGESTED_QUESTIONS: [&str; 4] = [
    "How can I improve my business marketing strategy?",
    "What are the key trends in my industry for 2023?",
    "How can I optimize my cash flow?",
    "What strategies work best for customer retention?",
];

const CANNED_RESPONSES: [&str; 4] = [
    "Based on current market trends, I recommend focusing on digital transformation and sustainability initiatives in your business strategy.",
    "Looking at your industry, the key growth areas involve AI integration and personalized customer experiences. Consider investing in technologies that support these trends.",
    "To optimize your operations, consider implementing automated workflow solutions and data-driven decision making processes.",
    "For your specific question, I'd recommend establishing clear KPIs and regular performance reviews to track progress against your business objectives.",
];

pub trait InsightGenerator {
    fn generate_insight(&self, query: &str) -> String;
}

/// Answers every question from a fixed response list.
///
/// Replies rotate in list order rather than being picked at random, so a given
/// sequence of questions always gets the same answers.
pub struct CannedInsightGenerator {
    responses: Vec<String>,
    cursor: AtomicUsize,
}

impl CannedInsightGenerator {
    /// An empty list falls back to the built-in responses.
    pub fn new(responses: Vec<String>) -> Self {
        let responses = if responses.is_empty() {
            CANNED_RESPONSES.iter().map(|s| s.to_string()).collect()
        } else {
            responses
        };
        Self { responses, cursor: AtomicUsize::new(0) }
    }
}

impl Default for CannedInsightGenerator {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl InsightGenerator for CannedInsightGenerator {
    fn generate_insight(&self, query: &str) -> String {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.responses.len();
        tracing::debug!(query_len = query.len(), index, "canned insight selected");
        self.responses[index].clone()
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Message history of one chat panel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` and records nothing when `content` is blank.
    pub fn push_user(&mut self, content: &str) -> bool {
        if content.trim().is_empty() {
            return false;
        }
        self.messages.push(ChatMessage { role: ChatRole::User, content: content.to_string() });
        true
    }

    pub fn push_assistant(&mut self, content: String) {
        self.messages.push(ChatMessage { role: ChatRole::Assistant, content });
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canned_generator_rotates_through_responses() {
        let generator = CannedInsightGenerator::default();
        let answers = (0..5).map(|_| generator.generate_insight("cash flow?")).collect::<Vec<_>>();
        assert_eq!(answers[0], CANNED_RESPONSES[0]);
        assert_eq!(answers[3], CANNED_RESPONSES[3]);
        assert_eq!(answers[4], CANNED_RESPONSES[0]);
    }

    #[test]
    fn custom_responses_are_used() {
        let generator = CannedInsightGenerator::new(vec!["only answer".to_string()]);
        assert_eq!(generator.generate_insight("a"), "only answer");
        assert_eq!(generator.generate_insight("b"), "only answer");
    }

    #[test]
    fn empty_response_list_uses_builtin_responses() {
        let generator = CannedInsightGenerator::new(Vec::new());
        assert_eq!(generator.generate_insight("q"), CANNED_RESPONSES[0]);
    }

    #[test]
    fn transcript_rejects_blank_user_input() {
        let mut transcript = ChatTranscript::new();
        assert!(!transcript.push_user("   \n"));
        assert!(transcript.is_empty());

        assert!(transcript.push_user("How do I grow?"));
        transcript.push_assistant("Focus.".to_string());
        let roles = transcript.messages().iter().map(|m| m.role).collect::<Vec<_>>();
        assert_eq!(roles, vec![ChatRole::User, ChatRole::Assistant]);
    }

    #[test]
    fn generator_works_behind_a_trait_object() {
        let generator: Box<dyn InsightGenerator> = Box::new(CannedInsightGenerator::default());
        assert!(!generator.generate_insight("trends").is_empty());
    }
}
