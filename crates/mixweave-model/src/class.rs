//! Class definitions and member dispatch
//!
//! A [`ClassDef`] is an explicit description of a class: a static member
//! table (receiver: the class itself), an instance-template member table
//! (receiver: an [`Instance`]), and an optional constructor. The constructor
//! is held outside the member tables, so it can never be enumerated or
//! copied as a member.
//!
//! Dispatch resolves the receiver at call time: a static method invoked on a
//! class reads that class's name and static state, and an instance method
//! invoked on an instance reads that instance's fields, regardless of which
//! class the member was originally defined on.

use std::fmt;
use std::sync::Arc;

use crate::error::{ObjectError, ObjectResult};
use crate::instance::Instance;
use crate::member::Member;
use crate::table::MemberTable;
use crate::value::Value;

/// Constructor body: receives the fresh instance and the call arguments
pub type ConstructorFn = Arc<dyn Fn(&mut Instance, &[Value]) + Send + Sync>;

/// Class constructor: required argument count plus the body
#[derive(Clone)]
pub struct Constructor {
    required_args: usize,
    body: ConstructorFn,
}

impl Constructor {
    /// Create a constructor from a closure
    pub fn new<F>(required_args: usize, body: F) -> Self
    where
        F: Fn(&mut Instance, &[Value]) + Send + Sync + 'static,
    {
        Self {
            required_args,
            body: Arc::new(body),
        }
    }

    /// Number of arguments the constructor requires
    pub fn required_args(&self) -> usize {
        self.required_args
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("required_args", &self.required_args)
            .finish_non_exhaustive()
    }
}

/// Explicit class description: name, constructor, static members, and the
/// shared instance template
#[derive(Debug, Clone)]
pub struct ClassDef {
    name: String,
    constructor: Option<Constructor>,
    statics: MemberTable<ClassDef>,
    template: MemberTable<Instance>,
}

impl ClassDef {
    /// Create a new class with no members and no constructor
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constructor: None,
            statics: MemberTable::new(),
            template: MemberTable::new(),
        }
    }

    /// Class name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Static member table
    pub fn statics(&self) -> &MemberTable<ClassDef> {
        &self.statics
    }

    /// Mutable static member table
    pub fn statics_mut(&mut self) -> &mut MemberTable<ClassDef> {
        &mut self.statics
    }

    /// Shared instance-template member table
    pub fn template(&self) -> &MemberTable<Instance> {
        &self.template
    }

    /// Mutable instance-template member table
    pub fn template_mut(&mut self) -> &mut MemberTable<Instance> {
        &mut self.template
    }

    /// Set the constructor
    pub fn set_constructor<F>(&mut self, required_args: usize, body: F)
    where
        F: Fn(&mut Instance, &[Value]) + Send + Sync + 'static,
    {
        self.constructor = Some(Constructor::new(required_args, body));
    }

    /// Check if the class declares a constructor
    pub fn has_constructor(&self) -> bool {
        self.constructor.is_some()
    }

    // ------------------------------------------------------------------
    // Member definition
    // ------------------------------------------------------------------

    /// Define a static method
    pub fn define_static_method<F>(&mut self, name: impl Into<String>, body: F)
    where
        F: Fn(&mut ClassDef, &[Value]) -> Value + Send + Sync + 'static,
    {
        self.statics.define(name, Member::method(body));
    }

    /// Define a getter-only static accessor
    pub fn define_static_getter<G>(&mut self, name: impl Into<String>, get: G)
    where
        G: Fn(&ClassDef) -> Value + Send + Sync + 'static,
    {
        self.statics.define(name, Member::getter(get));
    }

    /// Define a static accessor with both getter and setter
    pub fn define_static_accessor<G, S>(&mut self, name: impl Into<String>, get: G, set: S)
    where
        G: Fn(&ClassDef) -> Value + Send + Sync + 'static,
        S: Fn(&mut ClassDef, Value) + Send + Sync + 'static,
    {
        self.statics.define(name, Member::accessor(get, set));
    }

    /// Define a static data member
    pub fn define_static_data(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.statics.define(name, Member::data(value));
    }

    /// Define an instance method on the shared template
    pub fn define_method<F>(&mut self, name: impl Into<String>, body: F)
    where
        F: Fn(&mut Instance, &[Value]) -> Value + Send + Sync + 'static,
    {
        self.template.define(name, Member::method(body));
    }

    /// Define a getter-only instance accessor on the shared template
    pub fn define_getter<G>(&mut self, name: impl Into<String>, get: G)
    where
        G: Fn(&Instance) -> Value + Send + Sync + 'static,
    {
        self.template.define(name, Member::getter(get));
    }

    /// Define an instance accessor with both getter and setter
    pub fn define_accessor<G, S>(&mut self, name: impl Into<String>, get: G, set: S)
    where
        G: Fn(&Instance) -> Value + Send + Sync + 'static,
        S: Fn(&mut Instance, Value) + Send + Sync + 'static,
    {
        self.template.define(name, Member::accessor(get, set));
    }

    /// Define a template-level data member (a shared default)
    pub fn define_data(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.template.define(name, Member::data(value));
    }

    // ------------------------------------------------------------------
    // Static dispatch
    // ------------------------------------------------------------------

    /// Invoke a static method. The receiver is this class, so the body
    /// observes this class's name and static state.
    pub fn call_static(&mut self, name: &str, args: &[Value]) -> ObjectResult<Value> {
        let body = match self.statics.get(name) {
            Some(Member::Method(body)) => Arc::clone(body),
            Some(other) => {
                return Err(ObjectError::NotCallable {
                    class: self.name.clone(),
                    member: name.to_string(),
                    kind: other.kind(),
                })
            }
            None => {
                return Err(ObjectError::UnknownMember {
                    class: self.name.clone(),
                    member: name.to_string(),
                })
            }
        };
        Ok(body(self, args))
    }

    /// Read a static member: a data value, or the result of its getter
    pub fn get_static(&self, name: &str) -> ObjectResult<Value> {
        match self.statics.get(name) {
            Some(Member::Data(value)) => Ok(value.clone()),
            Some(Member::Accessor { get: Some(get), .. }) => Ok(get(self)),
            Some(Member::Accessor { get: None, .. }) | Some(Member::Method(_)) => {
                Err(ObjectError::NoGetter {
                    class: self.name.clone(),
                    member: name.to_string(),
                })
            }
            None => Err(ObjectError::UnknownMember {
                class: self.name.clone(),
                member: name.to_string(),
            }),
        }
    }

    /// Write a static member: overwrite a data value in place, or invoke
    /// its setter
    pub fn set_static(&mut self, name: &str, value: impl Into<Value>) -> ObjectResult<()> {
        let value = value.into();
        let setter = match self.statics.get_mut(name) {
            Some(Member::Data(slot)) => {
                *slot = value;
                return Ok(());
            }
            Some(Member::Accessor { set: Some(set), .. }) => Arc::clone(set),
            Some(Member::Accessor { set: None, .. }) | Some(Member::Method(_)) => {
                return Err(ObjectError::NoSetter {
                    class: self.name.clone(),
                    member: name.to_string(),
                })
            }
            None => {
                return Err(ObjectError::UnknownMember {
                    class: self.name.clone(),
                    member: name.to_string(),
                })
            }
        };
        setter(self, value);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Instance dispatch
    // ------------------------------------------------------------------

    /// Create an instance, running the constructor if one is declared
    pub fn instantiate(&self, args: &[Value]) -> ObjectResult<Instance> {
        let mut instance = Instance::new(&self.name);
        if let Some(ctor) = &self.constructor {
            if args.len() < ctor.required_args {
                return Err(ObjectError::ConstructorArity {
                    class: self.name.clone(),
                    required: ctor.required_args,
                    got: args.len(),
                });
            }
            (ctor.body)(&mut instance, args);
        }
        Ok(instance)
    }

    /// Invoke an instance method from the shared template. The receiver is
    /// the given instance, so the body observes that instance's fields.
    pub fn call(&self, instance: &mut Instance, name: &str, args: &[Value]) -> ObjectResult<Value> {
        match self.template.get(name) {
            Some(Member::Method(body)) => Ok(body(instance, args)),
            Some(other) => Err(ObjectError::NotCallable {
                class: self.name.clone(),
                member: name.to_string(),
                kind: other.kind(),
            }),
            None => Err(ObjectError::UnknownMember {
                class: self.name.clone(),
                member: name.to_string(),
            }),
        }
    }

    /// Read a property on an instance: an own field shadows the template;
    /// otherwise a template data member acts as a shared default and a
    /// template getter computes from the instance.
    pub fn get_property(&self, instance: &Instance, name: &str) -> ObjectResult<Value> {
        if let Some(value) = instance.field(name) {
            return Ok(value.clone());
        }
        match self.template.get(name) {
            Some(Member::Data(value)) => Ok(value.clone()),
            Some(Member::Accessor { get: Some(get), .. }) => Ok(get(instance)),
            Some(Member::Accessor { get: None, .. }) | Some(Member::Method(_)) => {
                Err(ObjectError::NoGetter {
                    class: self.name.clone(),
                    member: name.to_string(),
                })
            }
            None => Err(ObjectError::UnknownMember {
                class: self.name.clone(),
                member: name.to_string(),
            }),
        }
    }

    /// Write a property on an instance: a template setter intercepts the
    /// write; otherwise the value lands as an own field, shadowing any
    /// template member of the same name.
    pub fn set_property(
        &self,
        instance: &mut Instance,
        name: &str,
        value: impl Into<Value>,
    ) -> ObjectResult<()> {
        let value = value.into();
        match self.template.get(name) {
            Some(Member::Accessor { set: Some(set), .. }) => {
                set(instance, value);
                Ok(())
            }
            Some(Member::Accessor { set: None, .. }) => Err(ObjectError::NoSetter {
                class: self.name.clone(),
                member: name.to_string(),
            }),
            _ => {
                instance.set_field(name, value);
                Ok(())
            }
        }
    }
}
