//! Core traits for the rootline workspace.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Function`]: a fallible scalar function `f64 -> f64`
//! - [`Total`]: adapts an infallible closure into a [`Function`]
//! - [`Observer`]: receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::{Function, Total};
pub use observer::Observer;
