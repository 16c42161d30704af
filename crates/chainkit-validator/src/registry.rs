//! Named validators: built-in rules first, then user-registered predicates.

use crate::error::ValidatorError;
use crate::rule::Rule;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

/// A shareable validity check.
pub type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// User-registered validators keyed by exact name.
#[derive(Default, Clone)]
pub struct ValidatorRegistry {
    custom: BTreeMap<String, Predicate>,
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("custom", &self.custom.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a validator. Built-in names always take
    /// precedence on lookup.
    pub fn set<F>(&mut self, name: impl Into<String>, predicate: F) -> &mut Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        tracing::debug!(name = %name, "registered validator");
        self.custom.insert(name, Arc::new(predicate));
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<Predicate> {
        self.custom.remove(name)
    }

    /// Resolve `name` (optionally `name:args` for built-ins) to a predicate.
    pub fn get(&self, name: &str) -> Result<Predicate, ValidatorError> {
        if let Some(rule) = Rule::parse(name)? {
            let predicate: Predicate = Arc::new(move |input: &str| rule.check(input));
            return Ok(predicate);
        }
        self.custom
            .get(name)
            .cloned()
            .ok_or_else(|| ValidatorError::NotFound {
                name: name.to_string(),
            })
    }

    pub fn call(&self, name: &str, input: &str) -> Result<bool, ValidatorError> {
        let predicate = self.get(name)?;
        Ok(predicate(input))
    }

    /// Names of registered validators, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.custom.keys().map(String::as_str)
    }
}

/// The process-wide registry behind the free functions.
pub fn global() -> &'static RwLock<ValidatorRegistry> {
    static REGISTRY: OnceLock<RwLock<ValidatorRegistry>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(ValidatorRegistry::new()))
}

/// Register a validator in the process-wide registry.
pub fn set<F>(name: impl Into<String>, predicate: F)
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    global()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .set(name, predicate);
}

/// Look up a validator in the process-wide registry.
pub fn get(name: &str) -> Result<Predicate, ValidatorError> {
    global()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(name)
}

/// Run a validator from the process-wide registry. The lock is released
/// before the predicate runs.
pub fn call(name: &str, input: &str) -> Result<bool, ValidatorError> {
    let predicate = get(name)?;
    Ok(predicate(input))
}
