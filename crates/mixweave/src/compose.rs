//! Builder-style class composition
//!
//! [`ClassComposer`] is the type-definition-time form of trait application:
//! it records the base class's own members and constructor together with an
//! ordered list of traits, then applies the traits when the class is built.
//! The result is identical to defining the class first and calling
//! [`apply_trait`](crate::apply::apply_trait) once per trait afterwards.

use mixweave_model::{ClassDef, Instance, Value};

use crate::apply::apply_trait;
use crate::error::TraitResult;

/// Builds a class from its own definitions plus an ordered list of traits
#[derive(Debug)]
pub struct ClassComposer<'a> {
    class: ClassDef,
    traits: Vec<(&'a ClassDef, Vec<String>)>,
}

impl<'a> ClassComposer<'a> {
    /// Start composing a class with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            class: ClassDef::new(name),
            traits: Vec::new(),
        }
    }

    /// Declare the constructor
    pub fn constructor<F>(mut self, required_args: usize, body: F) -> Self
    where
        F: Fn(&mut Instance, &[Value]) + Send + Sync + 'static,
    {
        self.class.set_constructor(required_args, body);
        self
    }

    /// Declare a static method
    pub fn static_method<F>(mut self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut ClassDef, &[Value]) -> Value + Send + Sync + 'static,
    {
        self.class.define_static_method(name, body);
        self
    }

    /// Declare a getter-only static accessor
    pub fn static_getter<G>(mut self, name: impl Into<String>, get: G) -> Self
    where
        G: Fn(&ClassDef) -> Value + Send + Sync + 'static,
    {
        self.class.define_static_getter(name, get);
        self
    }

    /// Declare a static accessor with both getter and setter
    pub fn static_accessor<G, S>(mut self, name: impl Into<String>, get: G, set: S) -> Self
    where
        G: Fn(&ClassDef) -> Value + Send + Sync + 'static,
        S: Fn(&mut ClassDef, Value) + Send + Sync + 'static,
    {
        self.class.define_static_accessor(name, get, set);
        self
    }

    /// Declare a static data member (the backing state traits may rely on)
    pub fn static_data(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.class.define_static_data(name, value);
        self
    }

    /// Declare an instance method
    pub fn method<F>(mut self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut Instance, &[Value]) -> Value + Send + Sync + 'static,
    {
        self.class.define_method(name, body);
        self
    }

    /// Declare a getter-only instance accessor
    pub fn getter<G>(mut self, name: impl Into<String>, get: G) -> Self
    where
        G: Fn(&Instance) -> Value + Send + Sync + 'static,
    {
        self.class.define_getter(name, get);
        self
    }

    /// Declare an instance accessor with both getter and setter
    pub fn accessor<G, S>(mut self, name: impl Into<String>, get: G, set: S) -> Self
    where
        G: Fn(&Instance) -> Value + Send + Sync + 'static,
        S: Fn(&mut Instance, Value) + Send + Sync + 'static,
    {
        self.class.define_accessor(name, get, set);
        self
    }

    /// Declare a template-level data member (a shared default)
    pub fn data(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.class.define_data(name, value);
        self
    }

    /// Record a trait to apply at build time
    pub fn with_trait(mut self, source: &'a ClassDef) -> Self {
        self.traits.push((source, Vec::new()));
        self
    }

    /// Record a trait to apply at build time, with an ignore list
    pub fn with_trait_ignoring<S: AsRef<str>>(
        mut self,
        source: &'a ClassDef,
        ignore: &[S],
    ) -> Self {
        let ignore = ignore.iter().map(|s| s.as_ref().to_string()).collect();
        self.traits.push((source, ignore));
        self
    }

    /// Apply the recorded traits in order and return the composed class,
    /// or the first trait error
    pub fn build(mut self) -> TraitResult<ClassDef> {
        for (source, ignore) in &self.traits {
            apply_trait(source, &mut self.class, ignore)?;
        }
        Ok(self.class)
    }
}
