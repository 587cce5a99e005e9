use alloc::string::String;
use core::fmt;

/// Fixed diagnostic for `unwrap` on `None`.
pub const UNWRAP_NONE_MSG: &str = "called `O::unwrap()` on a `None` value";

/// The two ways reading an `O<T>` can fail.
///
/// Only `unwrap`/`try_unwrap` and `expect`/`try_expect` produce these, and
/// only when the container is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OError {
    /// `unwrap` was called on `None`.
    Unwrap,
    /// `expect` was called on `None`; carries the caller's message.
    Expect(String),
}

impl OError {
    /// The human-readable diagnostic.
    pub fn message(&self) -> &str {
        match self {
            OError::Unwrap => UNWRAP_NONE_MSG,
            OError::Expect(msg) => msg,
        }
    }

    pub fn is_unwrap(&self) -> bool {
        matches!(self, OError::Unwrap)
    }

    pub fn is_expect(&self) -> bool {
        matches!(self, OError::Expect(_))
    }
}

impl fmt::Display for OError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl core::error::Error for OError {}
