use alloc::string::ToString;

use crate::error::OError;

/// An optional value: `Some(T)` holds a value, `None` holds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum O<T> {
    Some(T),
    None,
}

/// Constructs an `O::Some(val)`.
pub fn some<T>(val: T) -> O<T> {
    O::Some(val)
}

/// Constructs an `O::None`.
pub fn none<T>() -> O<T> {
    O::None
}

impl<T> O<T> {
    /// Constructs an `O::Some(val)` variant.
    pub fn some(val: T) -> Self {
        O::Some(val)
    }

    /// Constructs an `O::None` variant.
    pub fn none() -> Self {
        O::None
    }

    /// Returns true if the value is `Some`.
    pub fn is_some(&self) -> bool {
        matches!(self, O::Some(_))
    }

    /// Returns true if the value is `None`.
    pub fn is_none(&self) -> bool {
        matches!(self, O::None)
    }

    /// Returns true if the value is `Some` and `predicate` holds for it.
    ///
    /// The predicate only borrows the value, so the container is unchanged.
    pub fn is_some_and<F: FnOnce(&T) -> bool>(&self, predicate: F) -> bool {
        match self {
            O::Some(val) => predicate(val),
            O::None => false,
        }
    }

    /// Converts from `&O<T>` to `O<&T>`.
    pub fn as_ref(&self) -> O<&T> {
        match self {
            O::Some(val) => O::Some(val),
            O::None => O::None,
        }
    }

    /// Converts from `&mut O<T>` to `O<&mut T>`.
    pub fn as_mut(&mut self) -> O<&mut T> {
        match self {
            O::Some(val) => O::Some(val),
            O::None => O::None,
        }
    }

    /// Returns the value, or `OError::Unwrap` if there is none.
    pub fn try_unwrap(self) -> Result<T, OError> {
        match self {
            O::Some(val) => Ok(val),
            O::None => Err(OError::Unwrap),
        }
    }

    /// Returns the value, or `OError::Expect(msg)` if there is none.
    pub fn try_expect(self, msg: &str) -> Result<T, OError> {
        match self {
            O::Some(val) => Ok(val),
            O::None => Err(OError::Expect(msg.to_string())),
        }
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with a fixed message if the value is `None`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(val) => val,
            Err(err) => fail(err),
        }
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the value is `None`.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self.try_expect(msg) {
            Ok(val) => val,
            Err(err) => fail(err),
        }
    }

    /// Returns the value or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            O::Some(val) => val,
            O::None => default,
        }
    }

    /// Returns the value or computes one from `f`.
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        match self {
            O::Some(val) => val,
            O::None => f(),
        }
    }
}

impl<T: Default> O<T> {
    /// Returns the value or `T::default()`.
    pub fn unwrap_or_default(self) -> T {
        match self {
            O::Some(val) => val,
            O::None => T::default(),
        }
    }
}

#[cold]
#[track_caller]
fn fail(err: OError) -> ! {
    log_failure!("{}", err);
    panic!("{}", err)
}

impl<T> Default for O<T> {
    fn default() -> Self {
        O::None
    }
}

impl<T> From<Option<T>> for O<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(val) => O::Some(val),
            None => O::None,
        }
    }
}

impl<T> From<O<T>> for Option<T> {
    fn from(value: O<T>) -> Self {
        match value {
            O::Some(val) => Some(val),
            O::None => None,
        }
    }
}
