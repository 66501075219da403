//! hive - a minimal orchestration layer for LLM agents.
//!
//! A [`Hive`] owns named agents and tools plus a [`ModelRegistry`] of
//! pluggable text-generation backends. Register a model function, describe
//! an agent, and run it:
//!
//! ```
//! use hive::{AgentConfig, Hive, USER_INPUT_KEY};
//! use serde_json::{Map, Value};
//!
//! let mut hive = Hive::new(false);
//! hive.register_model("echo", |prompt| Ok(prompt.to_string()));
//! hive.create_agent(AgentConfig::new(
//!     "greeter",
//!     "You are a cheerful greeter.",
//!     "Reply with a short greeting.",
//!     "echo",
//! ))
//! .unwrap();
//!
//! let mut inputs = Map::new();
//! inputs.insert(USER_INPUT_KEY.to_string(), Value::String("hello".to_string()));
//! let response = hive.run_agent("greeter", &inputs).unwrap();
//! assert!(response.contains("hello"));
//! ```
//!
//! The call chain is synchronous and blocking end to end; any timeout
//! belongs inside the registered model function. Registries are plain
//! mutable state behind `&mut self`, so concurrent registration is ruled
//! out by the borrow checker rather than by locks.

mod agent;
mod config;
mod error;
mod hive;
mod llm;
mod tools;

pub use agent::{Agent, Inputs, USER_INPUT_KEY};
pub use config::{AgentConfig, HiveConfig, DEFAULT_MAX_RETRIES};
pub use error::{BoxError, Error, Result};
pub use hive::Hive;
pub use llm::{ModelFn, ModelRegistry};
pub use tools::{Tool, ToolAdapter, ToolBuilder, ToolDescription, ToolFn, ToolMode};
