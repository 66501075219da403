//! Deterministic prompt composition.
//!
//! The prompt is a pure function of the agent's persona, its tool roster,
//! and the user input; identical inputs always produce identical prompts.
//! How a backend acts on the roster (whether and how it invokes a tool) is
//! the backend's business.

use std::fmt::Write;
use std::sync::Arc;

use crate::tools::Tool;

/// Compose the single prompt string sent to the model.
pub(crate) fn compose(
    backstory: &str,
    instructions: &str,
    tools: &[Arc<Tool>],
    user_input: &str,
) -> String {
    let mut sections: Vec<String> = Vec::new();

    if !backstory.trim().is_empty() {
        sections.push(backstory.trim().to_string());
    }
    if !instructions.trim().is_empty() {
        sections.push(instructions.trim().to_string());
    }
    if !tools.is_empty() {
        let mut roster = String::from("You have access to the following tools:");
        for tool in tools {
            let _ = write!(roster, "\n- `{}`: {}", tool.name(), tool.description());
        }
        sections.push(roster);
    }
    sections.push(format!("User input: {user_input}"));

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn roster_tool(name: &str, description: &str) -> Arc<Tool> {
        Arc::new(
            Tool::builder(name)
                .description(description)
                .native(name, |args| Ok(args))
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn contains_every_persona_section_in_order() {
        let prompt = compose("B", "I", &[], "hi");
        assert_eq!(prompt, "B\n\nI\n\nUser input: hi");
    }

    #[test]
    fn identical_inputs_compose_identical_prompts() {
        let tools = vec![roster_tool("search", "Search the web.")];
        let first = compose("B", "I", &tools, "hi");
        let second = compose("B", "I", &tools, "hi");
        assert_eq!(first, second);
    }

    #[test]
    fn tool_roster_lists_names_and_descriptions() {
        let tools = vec![
            roster_tool("search", "Search the web."),
            roster_tool("calc", "Evaluate arithmetic."),
        ];
        let prompt = compose("B", "I", &tools, "hi");
        assert!(prompt.contains("You have access to the following tools:"));
        assert!(prompt.contains("- `search`: Search the web."));
        assert!(prompt.contains("- `calc`: Evaluate arithmetic."));
    }

    #[test]
    fn empty_persona_sections_are_skipped() {
        let prompt = compose("", "  ", &[], "hi");
        assert_eq!(prompt, "User input: hi");
    }
}
