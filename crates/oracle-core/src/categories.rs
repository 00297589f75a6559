//! Static tool-category classifier.
//!
//! Every known function name belongs to exactly one category. Names that are
//! not listed, including the empty name, classify as [`OTHER`].

/// Category assigned to any function name not present in [`TOOL_CATEGORIES`].
pub const OTHER: &str = "other";

/// Category name to the functions it contains, in display order.
pub const TOOL_CATEGORIES: &[(&str, &[&str])] = &[
    ("execution", &["execute_bash", "PARALLEL_TOOLS"]),
    (
        "file_ops",
        &[
            "create_file",
            "bulk_file_writer",
            "search_replace",
            "view_file",
            "view_bulk",
        ],
    ),
    ("reasoning", &["think", "initial-llm", "ask_human"]),
    (
        "testing",
        &[
            "testing_agent_v3",
            "test_finish",
            "screenshot_tool",
            "browser_automation",
        ],
    ),
    ("agents", &["vision_expert_agent", "image_selector_tool"]),
    ("exit", &["finish", "exit_cost_credit_limit_reached"]),
];

/// Classify a function name into its category.
#[must_use]
pub fn classify(function_name: &str) -> &'static str {
    TOOL_CATEGORIES
        .iter()
        .find(|(_, tools)| tools.iter().any(|tool| *tool == function_name))
        .map_or(OTHER, |(category, _)| *category)
}

/// Iterate over the category table.
pub fn categories() -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
    TOOL_CATEGORIES.iter().copied()
}
