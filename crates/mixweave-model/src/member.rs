//! Tagged member descriptors
//!
//! A class member is one of three shapes: a method (callable), an accessor
//! (getter and/or setter), or plain data. The descriptor is generic over the
//! receiver type `R`, so the same shape serves both static members (receiver
//! is the class) and instance-template members (receiver is the instance).
//! Callables are stored behind `Arc`, so cloning a descriptor clones a
//! handle, never a body.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// Method body: receives the receiver and the call arguments
pub type MethodFn<R> = Arc<dyn Fn(&mut R, &[Value]) -> Value + Send + Sync>;

/// Accessor read half: computes a value from the receiver
pub type GetterFn<R> = Arc<dyn Fn(&R) -> Value + Send + Sync>;

/// Accessor write half: stores a value on the receiver
pub type SetterFn<R> = Arc<dyn Fn(&mut R, Value) + Send + Sync>;

/// A single member descriptor, generic over the receiver type `R`
pub enum Member<R> {
    /// Callable bound to the member name
    Method(MethodFn<R>),
    /// Getter and/or setter pair; at least one side is present
    Accessor {
        /// Read half, if the member is readable
        get: Option<GetterFn<R>>,
        /// Write half, if the member is writable
        set: Option<SetterFn<R>>,
    },
    /// Plain value bound to the member name
    Data(Value),
}

/// Shape of a member, for dispatch errors and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// Callable member
    Method,
    /// Getter/setter member
    Accessor,
    /// Plain data member
    Data,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberKind::Method => write!(f, "a method"),
            MemberKind::Accessor => write!(f, "an accessor"),
            MemberKind::Data => write!(f, "a data member"),
        }
    }
}

impl<R> Member<R> {
    /// Create a method member from a closure
    pub fn method<F>(body: F) -> Self
    where
        F: Fn(&mut R, &[Value]) -> Value + Send + Sync + 'static,
    {
        Member::Method(Arc::new(body))
    }

    /// Create a getter-only accessor member
    pub fn getter<G>(get: G) -> Self
    where
        G: Fn(&R) -> Value + Send + Sync + 'static,
    {
        Member::Accessor {
            get: Some(Arc::new(get)),
            set: None,
        }
    }

    /// Create a setter-only accessor member
    pub fn setter<S>(set: S) -> Self
    where
        S: Fn(&mut R, Value) + Send + Sync + 'static,
    {
        Member::Accessor {
            get: None,
            set: Some(Arc::new(set)),
        }
    }

    /// Create an accessor member with both halves
    pub fn accessor<G, S>(get: G, set: S) -> Self
    where
        G: Fn(&R) -> Value + Send + Sync + 'static,
        S: Fn(&mut R, Value) + Send + Sync + 'static,
    {
        Member::Accessor {
            get: Some(Arc::new(get)),
            set: Some(Arc::new(set)),
        }
    }

    /// Create a data member
    pub fn data(value: impl Into<Value>) -> Self {
        Member::Data(value.into())
    }

    /// Shape of this member
    pub fn kind(&self) -> MemberKind {
        match self {
            Member::Method(_) => MemberKind::Method,
            Member::Accessor { .. } => MemberKind::Accessor,
            Member::Data(_) => MemberKind::Data,
        }
    }

    /// Check if this member is plain data
    pub fn is_data(&self) -> bool {
        matches!(self, Member::Data(_))
    }
}

// Manual impl: `derive` would demand `R: Clone`, but only the Arc handles
// and the value are cloned.
impl<R> Clone for Member<R> {
    fn clone(&self) -> Self {
        match self {
            Member::Method(f) => Member::Method(Arc::clone(f)),
            Member::Accessor { get, set } => Member::Accessor {
                get: get.clone(),
                set: set.clone(),
            },
            Member::Data(v) => Member::Data(v.clone()),
        }
    }
}

// Closures have no Debug; render the shape instead.
impl<R> fmt::Debug for Member<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::Method(_) => write!(f, "Method(..)"),
            Member::Accessor { get, set } => write!(
                f,
                "Accessor {{ get: {}, set: {} }}",
                get.is_some(),
                set.is_some()
            ),
            Member::Data(v) => write!(f, "Data({:?})", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_kinds() {
        let m: Member<()> = Member::method(|_, _| Value::null());
        assert_eq!(m.kind(), MemberKind::Method);

        let m: Member<()> = Member::getter(|_| Value::int(1));
        assert_eq!(m.kind(), MemberKind::Accessor);

        let m: Member<()> = Member::data(42);
        assert_eq!(m.kind(), MemberKind::Data);
        assert!(m.is_data());
    }

    #[test]
    fn test_member_clone_shares_body() {
        let m: Member<i64> = Member::method(|recv, _| Value::int(*recv));
        let copy = m.clone();

        let mut recv = 7i64;
        if let Member::Method(f) = copy {
            assert_eq!(f(&mut recv, &[]), Value::int(7));
        } else {
            panic!("clone changed the member shape");
        }
    }

    #[test]
    fn test_member_debug_shape() {
        let m: Member<()> = Member::accessor(|_| Value::null(), |_, _| {});
        assert_eq!(format!("{:?}", m), "Accessor { get: true, set: true }");
    }
}
