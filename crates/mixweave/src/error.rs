//! Error types for trait application

/// Result type for trait application
pub type TraitResult<T> = Result<T, TraitError>;

/// Trait application errors
///
/// Both variants are fatal to the current application call. Members copied
/// before the failing one stay on the destination; nothing is rolled back.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TraitError {
    /// The trait declares a plain static data member
    #[error(
        "trait `{trait_name}` declares the static data member `{member}`: \
         traits disallow static data members, the destination class must declare them itself"
    )]
    DisallowedStaticDataMember {
        /// Trait being applied
        trait_name: String,
        /// Offending member name
        member: String,
    },

    /// The trait declares a plain data member on its instance template
    #[error(
        "trait `{trait_name}` declares the instance data member `{member}`: \
         traits disallow instance data members, the destination class must declare them itself"
    )]
    DisallowedInstanceDataMember {
        /// Trait being applied
        trait_name: String,
        /// Offending member name
        member: String,
    },
}
