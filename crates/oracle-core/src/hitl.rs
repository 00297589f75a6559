//! Human-in-the-loop sentiment classification records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A classified user message and the agent message it replied to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentEvent {
    /// When the user message was classified.
    #[serde(with = "crate::time::warehouse")]
    pub event_timestamp: DateTime<Utc>,
    /// Correlation id of the request that carried the message.
    pub request_id: String,
    /// The user's message.
    pub user_curr_message: String,
    /// The agent message immediately preceding it.
    pub agent_prev_message: String,
    /// Intent labels, possibly empty.
    #[serde(default)]
    pub user_intent: Vec<String>,
    /// Sentiment labels, at least one.
    pub user_sentiment: Vec<String>,
}

impl SentimentEvent {
    /// Whether the event carries the given sentiment label.
    #[must_use]
    pub fn has_sentiment(&self, label: &str) -> bool {
        self.user_sentiment.iter().any(|s| s == label)
    }
}

/// Number of classified messages carrying a sentiment label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCount {
    /// Sentiment label.
    pub sentiment: String,
    /// Number of classified messages.
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_event_without_intent() {
        let event: SentimentEvent = serde_json::from_value(json!({
            "event_timestamp": "2026-01-22 10:00:00.000000 UTC",
            "request_id": "req-1",
            "user_curr_message": "still broken",
            "agent_prev_message": "I fixed the login page.",
            "user_sentiment": ["frustrated"]
        }))
        .unwrap();

        assert!(event.user_intent.is_empty());
        assert!(event.has_sentiment("frustrated"));
        assert!(!event.has_sentiment("satisfied"));
    }
}
