//! Trajectory summarization.
//!
//! [`summarize`] is a pure function over a step slice: one pass, no lookups.
//! All maps keep first-seen insertion order so output is deterministic.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::categories;
use crate::job::{StepOutcome, TrajectoryStep};

/// Key used for steps whose function name is empty.
pub const EMPTY_FUNCTION_KEY: &str = "(empty)";

/// Derived statistics for one trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySummary {
    /// Number of steps.
    pub total_steps: u64,
    /// Steps whose outcome is success.
    pub successful_steps: u64,
    /// Steps whose outcome is failure.
    pub failed_steps: u64,
    /// Steps with no recorded outcome.
    pub unknown_steps: u64,
    /// `successful_steps / total_steps * 100`, two decimals; `0` when empty.
    pub success_rate: f64,
    /// Sum of step durations, saturating at `u64::MAX`. Missing durations count as zero.
    pub total_duration_ms: u64,
    /// `total_duration_ms` rendered as `"{m}m {s}s"`.
    pub total_duration_formatted: String,
    /// Sum of prompt tokens.
    pub total_input_tokens: u64,
    /// Sum of completion tokens.
    pub total_output_tokens: u64,
    /// Occurrences per function name.
    pub function_counts: IndexMap<String, u64>,
    /// Outcome tally per function name.
    pub function_success_rates: IndexMap<String, OutcomeTally>,
    /// Occurrences per agent name.
    pub agent_counts: IndexMap<String, u64>,
    /// Occurrences per tool category.
    pub category_counts: IndexMap<String, u64>,
    /// Timestamp of the first stored step.
    #[serde(
        default,
        with = "crate::time::warehouse::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub started_at: Option<DateTime<Utc>>,
    /// Timestamp of the last stored step.
    #[serde(
        default,
        with = "crate::time::warehouse::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub ended_at: Option<DateTime<Utc>>,
}

/// Success / failure / unknown counts for one function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeTally {
    /// Steps that succeeded.
    pub success: u64,
    /// Steps that failed.
    pub fail: u64,
    /// Steps with no outcome.
    pub unknown: u64,
}

impl OutcomeTally {
    fn record(&mut self, outcome: StepOutcome) {
        match outcome {
            StepOutcome::Succeeded => self.success += 1,
            StepOutcome::Failed => self.fail += 1,
            StepOutcome::Unknown => self.unknown += 1,
        }
    }

    /// Total steps counted.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.success + self.fail + self.unknown
    }
}

/// Summarize a trajectory.
#[must_use]
pub fn summarize(steps: &[TrajectoryStep]) -> TrajectorySummary {
    let mut tally = OutcomeTally::default();
    let mut total_duration_ms = 0u64;
    let mut total_input_tokens = 0u64;
    let mut total_output_tokens = 0u64;
    let mut function_counts: IndexMap<String, u64> = IndexMap::new();
    let mut function_success_rates: IndexMap<String, OutcomeTally> = IndexMap::new();
    let mut agent_counts: IndexMap<String, u64> = IndexMap::new();
    let mut category_counts: IndexMap<String, u64> = IndexMap::new();

    for step in steps {
        let outcome = step.outcome();
        tally.record(outcome);

        total_duration_ms = total_duration_ms.saturating_add(step.duration_ms.unwrap_or(0));
        total_input_tokens = total_input_tokens.saturating_add(step.input_tokens.unwrap_or(0));
        total_output_tokens = total_output_tokens.saturating_add(step.output_tokens.unwrap_or(0));

        let function = function_key(&step.function_name);
        *function_counts.entry(function.to_string()).or_default() += 1;
        function_success_rates
            .entry(function.to_string())
            .or_default()
            .record(outcome);

        *agent_counts.entry(step.agent_name.clone()).or_default() += 1;

        let category = categories::classify(&step.function_name);
        *category_counts.entry(category.to_string()).or_default() += 1;
    }

    TrajectorySummary {
        total_steps: tally.total(),
        successful_steps: tally.success,
        failed_steps: tally.fail,
        unknown_steps: tally.unknown,
        success_rate: success_rate(tally.success, tally.total()),
        total_duration_ms,
        total_duration_formatted: format_duration(total_duration_ms),
        total_input_tokens,
        total_output_tokens,
        function_counts,
        function_success_rates,
        agent_counts,
        category_counts,
        started_at: steps.first().map(|s| s.created_at),
        ended_at: steps.last().map(|s| s.created_at),
    }
}

/// Render milliseconds as whole minutes and seconds, e.g. `"2m 5s"`.
#[must_use]
pub fn format_duration(total_ms: u64) -> String {
    let minutes = total_ms / 60_000;
    let seconds = (total_ms % 60_000) / 1_000;
    format!("{minutes}m {seconds}s")
}

fn function_key(name: &str) -> &str {
    if name.is_empty() {
        EMPTY_FUNCTION_KEY
    } else {
        name
    }
}

#[allow(clippy::cast_precision_loss)]
fn success_rate(successful: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let rate = successful as f64 / total as f64 * 100.0;
    (rate * 100.0).round() / 100.0
}
