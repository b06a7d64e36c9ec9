//! mixweave: trait (mixin) application for class models without multiple
//! inheritance
//!
//! A trait here is an ordinary [`ClassDef`] whose members are copied onto a
//! destination class, so the destination behaves as if it had inherited from
//! the trait as well as its own base. The engine provides:
//! - Static and instance-template member copiers ([`copy_statics`],
//!   [`copy_template`])
//! - A single-trait applier in direct and deferred form ([`apply_trait`],
//!   [`trait_applier`])
//! - A batch applier folding a trait sequence over one destination
//!   ([`apply_traits`])
//! - A composition builder for definition-time application ([`ClassComposer`])
//!
//! Traits may only contribute methods and accessors. A trait declaring plain
//! data is rejected with a [`TraitError`]; the destination class has to
//! declare backing state itself. Copied members dispatch against the
//! destination at call time: a copied getter reads the destination's
//! backing state, never the source's.
//!
//! # Example
//!
//! ```
//! use mixweave::{apply_trait, ClassDef, Value};
//!
//! let mut runner = ClassDef::new("Runner");
//! runner.define_method("run", |inst, _| {
//!     let who = inst.field("username").cloned().unwrap_or_default();
//!     Value::str(format!("{} runs", who))
//! });
//!
//! let mut user = ClassDef::new("User");
//! user.set_constructor(1, |inst, args| {
//!     inst.set_field("username", args[0].clone());
//! });
//!
//! apply_trait::<&str>(&runner, &mut user, &[]).unwrap();
//!
//! let mut virk = user.instantiate(&[Value::str("virk")]).unwrap();
//! assert_eq!(user.call(&mut virk, "run", &[]).unwrap(), Value::str("virk runs"));
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod apply;
pub mod compose;
pub mod error;
pub mod ignore;

pub use apply::{apply_trait, apply_traits, copy_statics, copy_template, trait_applier};
pub use compose::ClassComposer;
pub use error::{TraitError, TraitResult};
pub use ignore::{
    IgnoreList, RESERVED_STATIC_NAMES, RESERVED_TEMPLATE_NAMES, STATIC_IGNORE_PREFIX,
};

// Re-export the object model (canonical definitions live in mixweave-model)
pub use mixweave_model::{
    ClassDef, Constructor, Instance, Member, MemberKind, MemberTable, ObjectError, ObjectResult,
    Value,
};
