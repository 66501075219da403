//! Error taxonomy for the orchestration layer.
//!
//! Lookup failures (`Unknown*`) are configuration errors and are never
//! retried. `Inference` is the only retryable category; `AgentInvocation`
//! wraps the final cause once an agent's retry budget is exhausted.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed error type accepted from model functions and tool backends.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Model id was never registered. Enumerates what is registered so a
    /// typo is visible in the message itself.
    #[error("unknown model '{}' (registered models: [{}])", .id, .registered.join(", "))]
    UnknownModel { id: String, registered: Vec<String> },

    #[error("unknown tool '{0}'")]
    UnknownTool(String),

    #[error("unknown agent '{0}'")]
    UnknownAgent(String),

    /// A tool must be backed by exactly one of a native function or an
    /// adapter; the builder rejects everything else.
    #[error("tool '{0}' must be backed by exactly one of a native function or an adapter")]
    ToolMisconfigured(String),

    #[error("missing required input key '{0}'")]
    MissingInput(&'static str),

    /// A registered model function failed. Carries the model id and the
    /// original cause.
    #[error("inference failed on model '{model}': {source}")]
    Inference {
        model: String,
        #[source]
        source: BoxError,
    },

    /// An agent ran out of attempts. Wraps the last failure.
    #[error("agent '{agent}' exhausted {attempts} attempts: {source}")]
    AgentInvocation {
        agent: String,
        attempts: u32,
        #[source]
        source: Box<Error>,
    },

    #[error("failed to read config file {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_model_message_lists_registered_ids() {
        let err = Error::UnknownModel {
            id: "gpt".to_string(),
            registered: vec!["echo".to_string(), "shout".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("'gpt'"));
        assert!(message.contains("echo"));
        assert!(message.contains("shout"));
    }

    #[test]
    fn agent_invocation_preserves_the_final_cause() {
        let cause = Error::Inference {
            model: "flaky".to_string(),
            source: "connection reset".into(),
        };
        let err = Error::AgentInvocation {
            agent: "researcher".to_string(),
            attempts: 4,
            source: Box::new(cause),
        };
        let message = err.to_string();
        assert!(message.contains("researcher"));
        assert!(message.contains("4 attempts"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
