//! Session attribute storage and intent input

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Key-value attributes scoped to one conversation session
pub trait SessionStore: Send {
    fn get(&self, key: &str) -> Option<&Value>;

    fn set(&mut self, key: &str, value: Value);
}

/// Attribute map carried in the platform envelope, round-tripped every turn
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionAttributes(Map<String, Value>);

impl SessionAttributes {
    /// Build from an arbitrary JSON value; anything but an object is empty
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl SessionStore for SessionAttributes {
    fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn set(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }
}

/// One turn's intent: its name plus any filled slots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentInput {
    pub name: String,
    pub slots: HashMap<String, String>,
}

impl IntentInput {
    #[cfg(test)]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: HashMap::new(),
        }
    }

    #[cfg(test)]
    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(name.into(), value.into());
        self
    }

    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots.get(name).map(String::as_str)
    }
}
