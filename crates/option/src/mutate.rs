//! In-place variant transitions.
//!
//! Every operation here either installs a complete new state or leaves the
//! container untouched. Operations that hand back the prior state move it out
//! with `mem::replace`, so the returned snapshot and the container never
//! share storage.

use core::mem;

use crate::o::O;

impl<T> O<T> {
    /// Sets the container to `Some(value)`, dropping any previous value, and
    /// returns the container.
    pub fn insert(&mut self, value: T) -> &mut Self {
        trace_transition!("insert: {} -> Some", self.variant_name());
        *self = O::Some(value);
        self
    }

    /// Inserts `value` if the container is `None`, then returns a mutable
    /// reference to the held value. An existing value is left in place.
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.get_or_insert_with(|| value)
    }

    /// Inserts the result of `f` if the container is `None`, then returns a
    /// mutable reference to the held value. `f` is not called otherwise.
    pub fn get_or_insert_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        if self.is_none() {
            trace_transition!("get_or_insert: None -> Some");
            *self = O::Some(f());
        }
        match self {
            O::Some(val) => val,
            O::None => unreachable!("slot was filled above"),
        }
    }

    /// Moves the value out, leaving `None` behind.
    pub fn take(&mut self) -> O<T> {
        if self.is_some() {
            trace_transition!("take: Some -> None");
        }
        mem::replace(self, O::None)
    }

    /// Takes the value only if `predicate` holds for it.
    ///
    /// When the container is `None` or the predicate fails, the container is
    /// left exactly as it was and `None` is returned.
    pub fn take_if<P: FnOnce(&T) -> bool>(&mut self, predicate: P) -> O<T> {
        if self.is_some_and(predicate) {
            self.take()
        } else {
            O::None
        }
    }

    /// Installs `Some(value)` and returns the prior state.
    pub fn replace(&mut self, value: T) -> O<T> {
        trace_transition!("replace: {} -> Some", self.variant_name());
        mem::replace(self, O::Some(value))
    }

    #[cfg_attr(not(feature = "log"), allow(dead_code))]
    fn variant_name(&self) -> &'static str {
        match self {
            O::Some(_) => "Some",
            O::None => "None",
        }
    }
}
