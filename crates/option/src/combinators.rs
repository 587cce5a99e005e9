//! Read and transform operations. None of these mutate an operand: each one
//! consumes its inputs by value and derives a new `O` (or plain value) from
//! them. All of them are total.

use crate::o::O;

impl<T> O<T> {
    /// Maps `O<T>` to `O<U>` by applying `f` to the contained value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> O<U> {
        match self {
            O::Some(val) => O::Some(f(val)),
            O::None => O::None,
        }
    }

    /// Calls `f` with a borrow of the contained value, if any, and returns
    /// `self` unchanged.
    pub fn inspect<F: FnOnce(&T)>(self, f: F) -> Self {
        if let O::Some(val) = &self {
            f(val);
        }
        self
    }

    /// Applies `f` to the contained value, or returns `default`.
    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            O::Some(val) => f(val),
            O::None => default,
        }
    }

    /// Applies `f` to the contained value, or computes a default from `default`.
    pub fn map_or_else<U, D: FnOnce() -> U, F: FnOnce(T) -> U>(self, default: D, f: F) -> U {
        match self {
            O::Some(val) => f(val),
            O::None => default(),
        }
    }

    /// `Some(v)` becomes `Ok(v)`, `None` becomes `Err(err)`.
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            O::Some(val) => Ok(val),
            O::None => Err(err),
        }
    }

    /// `Some(v)` becomes `Ok(v)`, `None` becomes `Err(err())`.
    ///
    /// `err` is only called on `None`.
    pub fn ok_or_else<E, F: FnOnce() -> E>(self, err: F) -> Result<T, E> {
        match self {
            O::Some(val) => Ok(val),
            O::None => Err(err()),
        }
    }

    /// Returns `other` if both are `Some`, otherwise `None`.
    pub fn and<U>(self, other: O<U>) -> O<U> {
        match self {
            O::Some(_) => other,
            O::None => O::None,
        }
    }

    /// Chains a computation that may itself produce `None`.
    pub fn and_then<U, F: FnOnce(T) -> O<U>>(self, f: F) -> O<U> {
        match self {
            O::Some(val) => f(val),
            O::None => O::None,
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        if let O::Some(val) = self {
            if predicate(&val) {
                return O::Some(val);
            }
        }
        O::None
    }

    /// Returns `self` if it is `Some`, otherwise `other`.
    pub fn or(self, other: O<T>) -> O<T> {
        match self {
            O::Some(val) => O::Some(val),
            O::None => other,
        }
    }

    /// Returns `self` if it is `Some`, otherwise the result of `f`.
    pub fn or_else<F: FnOnce() -> O<T>>(self, f: F) -> O<T> {
        match self {
            O::Some(val) => O::Some(val),
            O::None => f(),
        }
    }

    /// Returns whichever side is `Some` when exactly one of them is.
    pub fn xor(self, other: O<T>) -> O<T> {
        match (self, other) {
            (O::Some(val), O::None) | (O::None, O::Some(val)) => O::Some(val),
            _ => O::None,
        }
    }

    /// Pairs the two values when both are present.
    pub fn zip<U>(self, other: O<U>) -> O<(T, U)> {
        match (self, other) {
            (O::Some(a), O::Some(b)) => O::Some((a, b)),
            _ => O::None,
        }
    }

    /// Combines the two values with `f` when both are present.
    pub fn zip_with<U, V, F: FnOnce(T, U) -> V>(self, other: O<U>, f: F) -> O<V> {
        match (self, other) {
            (O::Some(a), O::Some(b)) => O::Some(f(a, b)),
            _ => O::None,
        }
    }
}

impl<T, U> O<(T, U)> {
    /// Splits a present pair into two present values; `None` splits into two
    /// `None`s.
    pub fn unzip(self) -> (O<T>, O<U>) {
        match self {
            O::Some((a, b)) => (O::Some(a), O::Some(b)),
            O::None => (O::None, O::None),
        }
    }
}

impl<T> O<O<T>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> O<T> {
        match self {
            O::Some(inner) => inner,
            O::None => O::None,
        }
    }
}

impl<T: Clone> O<&T> {
    /// Maps `O<&T>` to `O<T>` by cloning the referent.
    pub fn cloned(self) -> O<T> {
        self.map(T::clone)
    }
}

impl<T: Copy> O<&T> {
    /// Maps `O<&T>` to `O<T>` by copying the referent.
    pub fn copied(self) -> O<T> {
        self.map(|val| *val)
    }
}
