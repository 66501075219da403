//! Tool definitions: named callable capabilities an agent may carry.
//!
//! A tool is a pure dispatch shim over exactly one backend: a native Rust
//! function or an externally supplied [`ToolAdapter`]. The builder rejects
//! the neither/both configurations up front, so a constructed `Tool` is
//! always executable. No retry or argument validation happens here.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BoxError, Error, Result};

/// Signature for native tool functions. Arguments arrive as a single JSON
/// value: an object for keyword-style arguments, an array for positional.
pub type ToolFn = dyn Fn(Value) -> std::result::Result<Value, BoxError> + Send + Sync;

/// Adapter over an externally supplied tool object (a tool-calling
/// library's handle, a remote endpoint wrapper, and so on).
pub trait ToolAdapter: Send + Sync {
    /// Execute the underlying tool with the given arguments.
    fn call(&self, args: Value) -> std::result::Result<Value, BoxError>;

    /// Human-readable reference to the underlying callable, reported by
    /// [`Tool::describe`]. Never the callable itself.
    fn reference(&self) -> String {
        "adapter".to_string()
    }
}

/// Which backend a tool dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolMode {
    Native,
    Adapter,
}

impl ToolMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolMode::Native => "native",
            ToolMode::Adapter => "adapter",
        }
    }
}

impl fmt::Display for ToolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone)]
enum Backend {
    Native { func: Arc<ToolFn>, func_name: String },
    Adapter(Arc<dyn ToolAdapter>),
}

/// A named, callable capability.
#[derive(Clone)]
pub struct Tool {
    name: String,
    description: String,
    backend: Backend,
}

/// Serializable snapshot of a tool for inspection and logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescription {
    pub name: String,
    pub description: String,
    pub mode: ToolMode,
    /// Declared name of the native function, or the adapter's
    /// [`ToolAdapter::reference`] string.
    pub callable_ref: String,
}

impl Tool {
    /// Start building a tool with the given name.
    pub fn builder(name: impl Into<String>) -> ToolBuilder {
        ToolBuilder {
            name: name.into(),
            description: String::new(),
            native: None,
            adapter: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn mode(&self) -> ToolMode {
        match &self.backend {
            Backend::Native { .. } => ToolMode::Native,
            Backend::Adapter(_) => ToolMode::Adapter,
        }
    }

    /// Execute the tool. Pure dispatch to the active backend.
    pub fn execute(&self, args: Value) -> std::result::Result<Value, BoxError> {
        match &self.backend {
            Backend::Native { func, .. } => func(args),
            Backend::Adapter(adapter) => adapter.call(args),
        }
    }

    /// Snapshot of the tool's metadata.
    pub fn describe(&self) -> ToolDescription {
        let (mode, callable_ref) = match &self.backend {
            Backend::Native { func_name, .. } => (ToolMode::Native, func_name.clone()),
            Backend::Adapter(adapter) => (ToolMode::Adapter, adapter.reference()),
        };
        ToolDescription {
            name: self.name.clone(),
            description: self.description.clone(),
            mode,
            callable_ref,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tool(name={}, mode={})", self.name, self.mode())
    }
}

impl fmt::Debug for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tool")
            .field("name", &self.name)
            .field("mode", &self.mode())
            .finish()
    }
}

/// Builder enforcing the one-backend invariant at construction time.
pub struct ToolBuilder {
    name: String,
    description: String,
    native: Option<(String, Arc<ToolFn>)>,
    adapter: Option<Arc<dyn ToolAdapter>>,
}

impl ToolBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Back the tool with a native function. `func_name` is the reference
    /// reported by [`Tool::describe`].
    pub fn native<F>(mut self, func_name: impl Into<String>, func: F) -> Self
    where
        F: Fn(Value) -> std::result::Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.native = Some((func_name.into(), Arc::new(func)));
        self
    }

    /// Back the tool with an external adapter.
    pub fn adapter(mut self, adapter: Arc<dyn ToolAdapter>) -> Self {
        self.adapter = Some(adapter);
        self
    }

    /// Exactly one backend must have been supplied; anything else is
    /// [`Error::ToolMisconfigured`].
    pub fn build(self) -> Result<Tool> {
        let backend = match (self.native, self.adapter) {
            (Some((func_name, func)), None) => Backend::Native { func, func_name },
            (None, Some(adapter)) => Backend::Adapter(adapter),
            _ => return Err(Error::ToolMisconfigured(self.name)),
        };
        Ok(Tool {
            name: self.name,
            description: self.description,
            backend,
        })
    }
}
