#![no_std]

//! An optional value container, `O<T>`.
//!
//! `O<T>` is either `O::Some(T)` or `O::None`. It owns whatever it holds:
//! extracting operations (`take`, `take_if`, `replace`) move the value out and
//! leave the container in its new state, and callbacks handed the value for
//! inspection only ever see a shared borrow. Nothing outside the container can
//! mutate its slot through a value it was given.
//!
//! The two conversion points into `Result` are `ok_or` and `ok_or_else`.
//! `unwrap` and `expect` are the only operations that can fail; see [`OError`].

extern crate alloc;

// Tracing of variant transitions. Compiled out without the `log` feature.
#[cfg(feature = "log")]
macro_rules! trace_transition {
    ($($arg:tt)+) => {
        log::trace!(target: "option", $($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace_transition {
    ($($arg:tt)+) => {{}};
}

#[cfg(feature = "log")]
macro_rules! log_failure {
    ($($arg:tt)+) => {
        log::error!(target: "option", $($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! log_failure {
    ($($arg:tt)+) => {{}};
}

pub mod error;
pub use error::OError;

// O module
pub mod o;
pub use o::{none, some, O};

pub mod combinators;
pub mod mutate;
