//! Object instances
//!
//! An instance owns its field storage. Fields are written by constructor
//! bodies and setters at runtime; they are never part of the class's shared
//! instance template, so member enumeration over a class cannot observe
//! them.

use rustc_hash::FxHashMap;

use crate::value::Value;

/// A single object instance: per-instance fields plus the name of the class
/// it was created from
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    class_name: String,
    fields: FxHashMap<String, Value>,
}

impl Instance {
    /// Create an instance with no fields
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            fields: FxHashMap::default(),
        }
    }

    /// Name of the class this instance was created from
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Get a field value by name
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Set a field value, creating the field if absent
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Check if a field exists on this instance
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Get number of fields
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}
