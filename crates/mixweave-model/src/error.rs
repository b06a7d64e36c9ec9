//! Error types for member dispatch and instantiation

use crate::member::MemberKind;

/// Result type for object-model operations
pub type ObjectResult<T> = Result<T, ObjectError>;

/// Member dispatch and instantiation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ObjectError {
    /// No member with this name exists on the class
    #[error("unknown member `{class}.{member}`")]
    UnknownMember {
        /// Class that was queried
        class: String,
        /// Member name that was looked up
        member: String,
    },

    /// Member exists but is not a method
    #[error("`{class}.{member}` is {kind}, not a method")]
    NotCallable {
        /// Class that was queried
        class: String,
        /// Member name that was called
        member: String,
        /// Actual shape of the member
        kind: MemberKind,
    },

    /// Member cannot be read (method, or accessor without a getter)
    #[error("member `{class}.{member}` is not readable (no getter)")]
    NoGetter {
        /// Class that was queried
        class: String,
        /// Member name that was read
        member: String,
    },

    /// Member cannot be written (accessor without a setter)
    #[error("member `{class}.{member}` is not writable (no setter)")]
    NoSetter {
        /// Class that was queried
        class: String,
        /// Member name that was written
        member: String,
    },

    /// Too few constructor arguments
    #[error("constructor of `{class}` requires {required} arguments, got {got}")]
    ConstructorArity {
        /// Class being instantiated
        class: String,
        /// Number of required arguments
        required: usize,
        /// Number of arguments supplied
        got: usize,
    },
}
