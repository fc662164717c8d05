//! User-visible diagnostics emitted while matching a command line.
//!
//! The `Display` text of each variant is what the host shows the user, so
//! the wording is part of the public contract.

/// A recoverable problem found while matching input against the tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    /// No registered path consumed the input.
    #[error("Command not found or invalid usage: \"{0}\"")]
    NotFound(String),

    /// A required argument node could not parse a value.
    #[error("Missing required argument for \"{0}\"")]
    MissingArgument(String),

    #[error("Input does not match the allowed pattern \"{0}\".")]
    PatternMismatch(String),

    /// The value is outside the allow-list (rendered comma-joined).
    #[error("string is not in the allowed list \"{0}\".")]
    NotInList(String),

    #[error("string is not allowed by allows function")]
    RejectedByPredicate,

    #[error("string is too short. Minimum length is {0}.")]
    TooShort(usize),

    #[error("string is too long. Maximum length is {0}.")]
    TooLong(usize),

    #[error("integer is too small. Minimum is {0}.")]
    BelowMinimum(i64),

    #[error("integer is too large. Maximum is {0}.")]
    AboveMaximum(i64),
}

impl Diagnostic {
    /// Build a [`Diagnostic::NotInList`] from the allowed values.
    pub fn not_in_list<S: AsRef<str>>(allowed: &[S]) -> Self {
        let joined: Vec<&str> = allowed.iter().map(AsRef::as_ref).collect();
        Self::NotInList(joined.join(","))
    }
}
