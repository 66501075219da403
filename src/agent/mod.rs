//! Agent invocation: persona + model + tools, one text response per call.
//!
//! An agent holds no conversation state; every [`Agent::invoke`] composes a
//! fresh prompt, resolves its model against the registry it is handed, and
//! returns exactly one text result or one terminal failure.

mod prompt;

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::llm::ModelRegistry;
use crate::tools::Tool;

/// Key every input mapping must contain.
pub const USER_INPUT_KEY: &str = "user_input";

/// Free-form input mapping passed to [`Agent::invoke`]. Keys other than
/// [`USER_INPUT_KEY`] are caller context and do not enter the prompt.
pub type Inputs = Map<String, Value>;

/// A persona bound to a model and a tool set.
///
/// Agents are created through [`Hive::create_agent`](crate::Hive::create_agent)
/// and are immutable afterwards; re-creating under the same name replaces
/// the stored agent wholesale.
#[derive(Debug, Clone)]
pub struct Agent {
    name: String,
    backstory: String,
    instructions: String,
    tools: Vec<Arc<Tool>>,
    model: String,
    max_retries: u32,
    verbose: bool,
}

impl Agent {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        name: impl Into<String>,
        backstory: impl Into<String>,
        instructions: impl Into<String>,
        tools: Vec<Arc<Tool>>,
        model: impl Into<String>,
        max_retries: u32,
        verbose: bool,
    ) -> Self {
        Self {
            name: name.into(),
            backstory: backstory.into(),
            instructions: instructions.into(),
            tools,
            model: model.into(),
            max_retries,
            verbose,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Model id, resolved lazily on every invocation.
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Tools this agent carries, in configured order. Shared by reference:
    /// the same instance may back several agents.
    pub fn tools(&self) -> &[Arc<Tool>] {
        &self.tools
    }

    /// Run one invocation against `inputs`, which must contain
    /// [`USER_INPUT_KEY`].
    ///
    /// The prompt is composed once and reused verbatim on every attempt.
    /// Only inference failures are retried, immediately and sequentially,
    /// up to `max_retries` additional times (so `max_retries = 0` means a
    /// single attempt). Lookup failures propagate at once. When the budget
    /// is exhausted the last cause is wrapped in
    /// [`Error::AgentInvocation`]; no placeholder text is ever returned.
    pub fn invoke(&self, models: &ModelRegistry, inputs: &Inputs) -> Result<String> {
        let user_input = match inputs.get(USER_INPUT_KEY) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => return Err(Error::MissingInput(USER_INPUT_KEY)),
        };

        let prompt = prompt::compose(&self.backstory, &self.instructions, &self.tools, &user_input);
        if self.verbose {
            debug!(agent = %self.name, model = %self.model, prompt = %prompt, "composed prompt");
        }

        let mut attempt = 0u32;
        loop {
            // Saturating: a max_retries of u32::MAX must not overflow the
            // attempt counter.
            attempt = attempt.saturating_add(1);
            match models.infer(&self.model, &prompt) {
                Ok(response) => {
                    if self.verbose {
                        debug!(agent = %self.name, attempt, response = %response, "inference succeeded");
                    }
                    return Ok(response);
                }
                Err(err @ Error::Inference { .. }) => {
                    if attempt > self.max_retries {
                        return Err(Error::AgentInvocation {
                            agent: self.name.clone(),
                            attempts: attempt,
                            source: Box::new(err),
                        });
                    }
                    warn!(agent = %self.name, attempt, error = %err, "inference failed, retrying");
                }
                // Lookup failures are configuration errors, never retried.
                Err(err) => return Err(err),
            }
        }
    }
}
