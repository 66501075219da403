//! Model registry: pluggable text-generation backends.
//!
//! A model is any `Fn(&str) -> Result<String, BoxError>` registered under a
//! unique id; the registry is a plain lookup table with no I/O of its own.
//! Whatever network call or local inference a backend performs lives inside
//! the registered function, including any timeout it wants to enforce.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::{BoxError, Error, Result};

/// Signature every registered model function must satisfy.
pub type ModelFn = dyn Fn(&str) -> std::result::Result<String, BoxError> + Send + Sync;

/// Registry mapping model ids to generation functions.
///
/// Constructed explicitly and owned by a [`Hive`](crate::Hive) or a test
/// fixture; nothing in this crate holds global state.
#[derive(Default, Clone)]
pub struct ModelRegistry {
    models: HashMap<String, Arc<ModelFn>>,
}

impl ModelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model function under `id`, silently replacing any prior
    /// registration (last write wins). The function's behavior is not
    /// validated.
    pub fn register<F>(&mut self, id: impl Into<String>, f: F)
    where
        F: Fn(&str) -> std::result::Result<String, BoxError> + Send + Sync + 'static,
    {
        let id = id.into();
        debug!(model = %id, "registered model");
        self.models.insert(id, Arc::new(f));
    }

    /// Look up the function registered under `id`.
    pub fn resolve(&self, id: &str) -> Result<Arc<ModelFn>> {
        self.models
            .get(id)
            .cloned()
            .ok_or_else(|| Error::UnknownModel {
                id: id.to_string(),
                registered: self.ids(),
            })
    }

    /// Run inference on the model registered under `id`. Any failure raised
    /// by the function is re-surfaced as [`Error::Inference`] carrying the
    /// model id and the original cause.
    pub fn infer(&self, id: &str, prompt: &str) -> Result<String> {
        let f = self.resolve(id)?;
        f(prompt).map_err(|source| Error::Inference {
            model: id.to_string(),
            source,
        })
    }

    /// Ids of every registered model, sorted for stable output.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.models.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.models.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("models", &self.ids())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolve_returns_the_registered_function() {
        let mut registry = ModelRegistry::new();
        registry.register("echo", |prompt| Ok(prompt.to_string()));

        let first = registry.resolve("echo").unwrap();
        let second = registry.resolve("echo").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first("hi").unwrap(), "hi");
    }

    #[test]
    fn reregistration_overwrites_last_write_wins() {
        let mut registry = ModelRegistry::new();
        registry.register("m", |_| Ok("one".to_string()));
        let old = registry.resolve("m").unwrap();

        registry.register("m", |_| Ok("two".to_string()));
        let new = registry.resolve("m").unwrap();

        assert!(!Arc::ptr_eq(&old, &new));
        assert_eq!(registry.infer("m", "ignored").unwrap(), "two");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unknown_model_enumerates_registered_ids() {
        let mut registry = ModelRegistry::new();
        registry.register("echo", |prompt| Ok(prompt.to_string()));
        registry.register("shout", |prompt| Ok(prompt.to_uppercase()));

        let err = registry.resolve("missing").err().unwrap();
        match &err {
            Error::UnknownModel { id, registered } => {
                assert_eq!(id, "missing");
                assert_eq!(registered, &["echo".to_string(), "shout".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
        let message = err.to_string();
        assert!(message.contains("echo"));
        assert!(message.contains("shout"));
    }

    #[test]
    fn infer_wraps_backend_failures_with_the_model_id() {
        let mut registry = ModelRegistry::new();
        registry.register("flaky", |_| Err("connection reset".into()));

        match registry.infer("flaky", "hi").unwrap_err() {
            Error::Inference { model, source } => {
                assert_eq!(model, "flaky");
                assert_eq!(source.to_string(), "connection reset");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_registry_reports_empty() {
        let registry = ModelRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.contains("echo"));
        assert!(registry.ids().is_empty());
    }
}
