//! Observable state cells.
//!
//! A [`MutableState`] is the single-writer cell an input source (scroll, pan,
//! tap) writes into; derivations read it through [`State`] once per frame.
//! Every write bumps a version counter and asks the runtime for a frame.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::runtime::RuntimeHandle;

struct StateCell<T> {
    value: RefCell<T>,
    version: Cell<u64>,
    runtime: Option<RuntimeHandle>,
}

impl<T> StateCell<T> {
    fn mark_written(&self) {
        self.version.set(self.version.get().wrapping_add(1));
        if let Some(runtime) = &self.runtime {
            runtime.schedule();
        }
    }
}

pub struct MutableState<T> {
    cell: Rc<StateCell<T>>,
}

impl<T> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: Clone + 'static> MutableState<T> {
    /// Cell that is not attached to any runtime; writes schedule nothing.
    pub fn new(value: T) -> Self {
        Self::build(value, None)
    }

    /// Cell whose writes request a frame from `runtime`.
    pub fn with_runtime(value: T, runtime: RuntimeHandle) -> Self {
        Self::build(value, Some(runtime))
    }

    fn build(value: T, runtime: Option<RuntimeHandle>) -> Self {
        Self {
            cell: Rc::new(StateCell {
                value: RefCell::new(value),
                version: Cell::new(0),
                runtime,
            }),
        }
    }

    pub fn get(&self) -> T {
        self.cell.value.borrow().clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.cell.value.borrow())
    }

    pub fn set_value(&self, value: T) {
        *self.cell.value.borrow_mut() = value;
        self.cell.mark_written();
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.cell.value.borrow_mut());
        self.cell.mark_written();
        result
    }

    /// Number of writes since creation.
    pub fn version(&self) -> u64 {
        self.cell.version.get()
    }

    pub fn as_state(&self) -> State<T> {
        State {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for MutableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableState")
            .field("value", &*self.cell.value.borrow())
            .field("version", &self.cell.version.get())
            .finish()
    }
}

/// Read-only view of a [`MutableState`].
pub struct State<T> {
    cell: Rc<StateCell<T>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: Clone + 'static> State<T> {
    pub fn get(&self) -> T {
        self.cell.value.borrow().clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.cell.value.borrow())
    }

    pub fn version(&self) -> u64 {
        self.cell.version.get()
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("State")
            .field(&*self.cell.value.borrow())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
