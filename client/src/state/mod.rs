//! Client-side UI state machines.
//!
//! DESIGN
//! ======
//! Each screen keeps its state in a plain struct with synchronous
//! transitions, plus a few async drivers that call a `net` seam and write the
//! outcome back. Drivers write through [`StateCell`]: on a signal that is
//! `try_update`, which does nothing once the owning component is disposed;
//! in tests it is a `RefCell`.

pub mod content;
pub mod login;
pub mod session;

use std::cell::RefCell;

use leptos::prelude::*;

/// Mutable access to a piece of screen state that may outlive its owner.
pub trait StateCell<T> {
    /// Apply `f` to the state. Returns `None` when the owner is gone.
    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T> StateCell<T> for RefCell<T> {
    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
