//! The orchestrator: owns named agents, named tools, and the model
//! registry, and dispatches run requests.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::agent::{Agent, Inputs};
use crate::config::{AgentConfig, HiveConfig};
use crate::error::{BoxError, Error, Result};
use crate::llm::ModelRegistry;
use crate::tools::Tool;

/// Owner of named agents and tools; the single entry point for running an
/// agent. State is in-memory and scoped to this instance.
#[derive(Debug)]
pub struct Hive {
    models: ModelRegistry,
    tools: HashMap<String, Arc<Tool>>,
    agents: HashMap<String, Agent>,
    verbose: bool,
}

impl Hive {
    pub fn new(verbose: bool) -> Self {
        Self::with_models(ModelRegistry::new(), verbose)
    }

    /// Build a hive around an existing model registry, e.g. one prepared by
    /// a test fixture or shared application setup.
    pub fn with_models(models: ModelRegistry, verbose: bool) -> Self {
        Self {
            models,
            tools: HashMap::new(),
            agents: HashMap::new(),
            verbose,
        }
    }

    /// Build a fully wired hive from a declarative config: the supplied
    /// tools are registered first, then every agent the config defines.
    pub fn from_config(
        config: HiveConfig,
        models: ModelRegistry,
        tools: impl IntoIterator<Item = Tool>,
    ) -> Result<Self> {
        let mut hive = Self::with_models(models, config.verbose);
        for tool in tools {
            hive.register_tool(tool);
        }
        for agent in config.agents {
            hive.create_agent(agent)?;
        }
        Ok(hive)
    }

    /// Register a model function under `id` in the owned registry.
    pub fn register_model<F>(&mut self, id: impl Into<String>, f: F)
    where
        F: Fn(&str) -> std::result::Result<String, BoxError> + Send + Sync + 'static,
    {
        self.models.register(id, f);
    }

    pub fn models(&self) -> &ModelRegistry {
        &self.models
    }

    /// Register a tool, replacing any tool already stored under its name.
    pub fn register_tool(&mut self, tool: Tool) {
        if self.verbose {
            debug!(tool = %tool.name(), mode = %tool.mode(), "registered tool");
        }
        self.tools.insert(tool.name().to_string(), Arc::new(tool));
    }

    /// Create an agent from its config, overwriting any agent stored under
    /// the same name.
    ///
    /// Every tool name is resolved before the agent is constructed; an
    /// unknown name aborts the whole creation and stores nothing. The
    /// agent inherits this hive's verbose flag.
    pub fn create_agent(&mut self, config: AgentConfig) -> Result<()> {
        let mut tools = Vec::with_capacity(config.tools.len());
        for name in &config.tools {
            let tool = self
                .tools
                .get(name)
                .cloned()
                .ok_or_else(|| Error::UnknownTool(name.clone()))?;
            tools.push(tool);
        }

        if self.verbose {
            debug!(agent = %config.name, model = %config.model, "created agent");
        }
        let agent = Agent::new(
            config.name.clone(),
            config.backstory,
            config.instructions,
            tools,
            config.model,
            config.max_retries,
            self.verbose,
        );
        self.agents.insert(config.name, agent);
        Ok(())
    }

    /// Run the named agent against `inputs` and return its response
    /// unchanged. Retries live inside the agent; none happen here.
    pub fn run_agent(&self, name: &str, inputs: &Inputs) -> Result<String> {
        let agent = self
            .agents
            .get(name)
            .ok_or_else(|| Error::UnknownAgent(name.to_string()))?;
        if self.verbose {
            debug!(agent = %name, "running agent");
        }
        let response = agent.invoke(&self.models, inputs)?;
        if self.verbose {
            debug!(agent = %name, response = %response, "agent responded");
        }
        Ok(response)
    }

    pub fn agent(&self, name: &str) -> Option<&Agent> {
        self.agents.get(name)
    }

    pub fn tool(&self, name: &str) -> Option<&Arc<Tool>> {
        self.tools.get(name)
    }

    /// Names of every registered agent, sorted for stable output.
    pub fn agent_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.agents.keys().cloned().collect();
        names.sort();
        names
    }

    /// Names of every registered tool, sorted for stable output.
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for Hive {
    fn default() -> Self {
        Self::new(false)
    }
}
