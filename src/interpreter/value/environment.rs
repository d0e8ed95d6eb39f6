use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// A flat mapping from names to values.
///
/// There is no parent scope: lookups only see the bindings made in this
/// environment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Environment<'ast> {
    bindings: HashMap<String, Value<'ast>>,
}

impl<'ast> Environment<'ast> {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value<'ast>> {
        self.bindings.get(name).copied()
    }

    /// Binds `name` to `value`, releasing the previous value.
    ///
    /// Binding to `None` removes the name.
    ///
    /// # Example
    /// ```
    /// use castellano::interpreter::value::{core::Value, environment::Environment};
    ///
    /// let mut env = Environment::new();
    /// env.assign("a", Some(Value::Integer(1)));
    /// assert_eq!(env.get("a"), Some(Value::Integer(1)));
    ///
    /// env.assign("a", None);
    /// assert_eq!(env.get("a"), None);
    /// ```
    pub fn assign(&mut self, name: &str, value: Option<Value<'ast>>) {
        match value {
            Some(value) => {
                self.bindings.insert(name.to_string(), value);
            },
            None => {
                self.bindings.remove(name);
            },
        }
    }
}
